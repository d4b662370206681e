//! HTTP employee roster service backed by a document store.
//!
//! This crate exposes the employee resource over HTTP and translates between
//! wire-format requests/responses and persisted documents:
//!
//! - **Employee record** ([`employee`]) - The entity shape on the wire and at rest
//! - **Handler errors** ([`error`]) - Error taxonomy with response status mapping
//! - **Handlers and router** ([`handlers`]) - The four resource operations and their routes
//!
//! The binary target wires a concrete backend, configuration, and logging
//! around the router; the library surface stays backend-agnostic so tests can
//! drive the full router over the in-memory store.

pub mod employee;
pub mod error;
pub mod handlers;

//! In-memory document storage backend for the roster service.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It uses async-aware read-write locks for concurrent access and mirrors the
//! single-document semantics of the MongoDB backend, which makes it the substitute
//! store for tests and local development.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using an async-aware RwLock
//! - **Type-erased storage** - Stores document fields as BSON for flexibility
//! - **Store-assigned identifiers** - Inserts mint a fresh object id per document
//! - **Transient** - All data lives in process memory and is gone on shutdown
//!
//! # Quick Start
//!
//! ```ignore
//! use roster_core::store::DocumentStore;
//! use roster_memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InMemoryStore::new();
//!     let store = DocumentStore::new(backend);
//!     let employees = store.collection::<Employee>();
//!
//!     let id = employees.insert(&employee).await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as roster_memory;

pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};

//! Document store abstraction for the roster service.
//!
//! This crate defines the seam between HTTP handlers and concrete storage
//! backends:
//!
//! - **Document traits** ([`document`]) - Core traits for defining and serializing documents
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing different storage backends
//! - **Collections interface** ([`collection`]) - Typed API for interacting with one document collection
//! - **Document store** ([`store`]) - Main handle for working with typed documents
//! - **Error handling** ([`error`]) - Error and result types shared by all backends
//!
//! # Example
//!
//! ```ignore
//! use roster_core::document::Document;
//! use bson::oid::ObjectId;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Badge {
//!     pub id: Option<String>,
//!     pub label: String,
//! }
//!
//! impl Document for Badge {
//!     fn id(&self) -> Option<ObjectId> {
//!         self.id.as_deref().and_then(|id| ObjectId::parse_str(id).ok())
//!     }
//!
//!     fn with_id(self, id: ObjectId) -> Self {
//!         Self { id: Some(id.to_hex()), ..self }
//!     }
//!
//!     fn collection_name() -> &'static str {
//!         "badges"
//!     }
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as roster_core;

pub mod backend;
pub mod collection;
pub mod document;
pub mod error;
pub mod store;

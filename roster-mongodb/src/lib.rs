//! MongoDB backend implementation for the roster service.
//!
//! This crate provides a MongoDB-based implementation of the `StoreBackend` trait,
//! covering the single-document operations the service performs: an unfiltered
//! collection scan plus insert, get, update, and delete keyed by object id.
//!
//! # Features
//!
//! - **Persistent storage** - Data is persisted to MongoDB Atlas or self-hosted MongoDB
//! - **Store-assigned identifiers** - The driver mints the object id on insert
//! - **Async/await** - Fully asynchronous API built on MongoDB's async driver
//! - **Bounded connect** - The builder verifies connectivity within a configurable timeout
//!
//! # Connection
//!
//! To use this backend, you need a MongoDB connection string. This is provided
//! through the builder pattern; the builder fails fast when the server is
//! unreachable instead of deferring the error to the first request.
//!
//! # Example
//!
//! ```ignore
//! use roster_core::backend::StoreBackendBuilder;
//! use roster_mongodb::MongoDbStore;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbStore::builder("mongodb://localhost:27017", "roster")
//!         .connect_timeout(Duration::from_secs(30))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as roster_mongodb;

pub mod store;

pub use store::{DEFAULT_CONNECT_TIMEOUT, MongoDbStore, MongoDbStoreBuilder};

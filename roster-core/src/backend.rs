//! Storage backend abstraction for the document store.
//!
//! This module defines the core traits that abstract over different storage implementations,
//! allowing the document store to work with various backends (in-memory, MongoDB, etc.).
//!
//! # Overview
//!
//! The [`StoreBackend`] trait provides a unified async interface for the single-document
//! operations the service needs: an unfiltered scan plus insert, get, update, and delete
//! keyed by identifier. Implementations are required to be thread-safe (`Send + Sync`)
//! and support concurrent access from multiple in-flight requests.
//!
//! Documents cross this boundary as (identifier, fields) pairs: the fields value never
//! contains the identifier, and each backend owns the mapping to its native identifier
//! representation.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use roster_core::backend::StoreBackend;
//! use bson::{Bson, doc};
//!
//! // Use a concrete backend implementation
//! let backend = MyBackendImpl::new();
//!
//! // Insert a document; the backend assigns the identifier
//! let fields = Bson::Document(doc! { "name": "Alice", "age": 30.0 });
//! let id = backend.insert_document(fields, "employees").await?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use bson::{Bson, oid::ObjectId};
use std::fmt::Debug;

use crate::error::StoreResult;

/// Abstract interface for document storage backends.
///
/// Implementers of this trait provide concrete storage strategies for documents.
/// The trait is deliberately small: one scan and four identifier-keyed operations,
/// which is the full surface the resource handlers consume.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from multiple
/// async tasks. The exact concurrency model (lock-based, connection pooling) is
/// implementation-specific.
///
/// # Error Handling
///
/// Operations return [`StoreResult<T>`](crate::error::StoreResult). Absent documents
/// are not errors: they surface as `None`, `false`, or a zero count depending on the
/// operation, so callers can decide how to report them.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Returns every document in a collection as (identifier, fields) pairs.
    ///
    /// A collection that does not exist yields an empty vector. No ordering is
    /// guaranteed across calls beyond what the backend produces for an
    /// unfiltered scan.
    ///
    /// # Arguments
    ///
    /// * `collection` - The name of the collection to scan
    async fn scan_documents(&self, collection: &str) -> StoreResult<Vec<(ObjectId, Bson)>>;

    /// Inserts one document and returns the identifier assigned by the store.
    ///
    /// The fields value must not carry an identifier of its own.
    ///
    /// # Arguments
    ///
    /// * `document` - The BSON fields document to insert
    /// * `collection` - The name of the collection to insert into. Created automatically if it doesn't exist.
    async fn insert_document(&self, document: Bson, collection: &str) -> StoreResult<ObjectId>;

    /// Retrieves one document by identifier.
    ///
    /// Returns `Ok(None)` when no document matches, including when the
    /// collection itself does not exist.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the document to retrieve
    /// * `collection` - The name of the collection to query
    async fn get_document(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Bson>>;

    /// Replaces the fields of the document with the given identifier.
    ///
    /// The identifier itself is never modified. Returns `true` when a document
    /// matched and `false` when nothing in the collection carries the
    /// identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the document to update
    /// * `document` - The BSON fields document with replacement content
    /// * `collection` - The name of the collection containing the document
    async fn update_document(
        &self,
        id: ObjectId,
        document: Bson,
        collection: &str,
    ) -> StoreResult<bool>;

    /// Deletes the document with the given identifier.
    ///
    /// Returns the number of documents removed: zero or one.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the document to delete
    /// * `collection` - The name of the collection to delete from
    async fn delete_document(&self, id: ObjectId, collection: &str) -> StoreResult<u64>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op, but backends with external
    /// connections should override this.
    async fn shutdown(self) -> StoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Factory trait for constructing backend instances.
///
/// Builders own everything needed to reach the backing store (connection
/// strings, timeouts) and produce a ready-to-use backend, so that a backend
/// which fails to come up is caught before the service starts handling
/// requests.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> StoreResult<Self::Backend>;
}

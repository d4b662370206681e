//! Main document store interface for interacting with document backends.
//!
//! [`DocumentStore`] is the handle the rest of the service holds: constructed
//! once at startup around a concrete backend, then shared by reference across
//! in-flight requests. It hands out typed collection handles and owns the
//! backend's shutdown.
//!
//! # Example
//!
//! ```ignore
//! use roster_core::store::DocumentStore;
//!
//! let store = DocumentStore::new(backend);
//! let badges = store.collection::<Badge>();
//! ```

use crate::{
    backend::StoreBackend,
    collection::TypedCollection,
    document::Document,
    error::StoreResult,
};

/// A strongly-typed document store bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
///
/// # Example
///
/// ```ignore
/// let store = DocumentStore::new(my_backend);
/// let employees = store.collection::<Employee>();
/// ```
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Gets a typed collection for the specified document type.
    ///
    /// The collection name is determined by the document type's `collection_name()` method.
    pub fn collection<'a, D: Document>(&'a self) -> TypedCollection<'a, B, D> {
        TypedCollection::new(D::collection_name().to_string(), &self.backend)
    }

    /// Shuts down the underlying backend, releasing held resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to release its resources.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.backend.shutdown().await
    }
}

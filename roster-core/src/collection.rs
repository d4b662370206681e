//! Collection types for document store operations.
//!
//! This module provides the typed collection handle used to work with the
//! documents of one entity type. The handle converts between the document's
//! wire shape and the (identifier, fields) pairs the backend traffics in.
//!
//! # Example
//!
//! ```ignore
//! use roster_core::document::Document;
//! use serde::{Serialize, Deserialize};
//! use bson::oid::ObjectId;
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
//!     fn with_id(self, id: ObjectId) -> Self {
//!         Self { id: Some(id.to_hex()), ..self }
//!     }
//!     fn collection_name() -> &'static str { "badges" }
//! }
//!
//! # async fn example(store: &roster_core::store::DocumentStore<impl roster_core::backend::StoreBackend>) -> roster_core::error::StoreResult<()> {
//! let badges = store.collection::<Badge>();
//! let badge = Badge { id: None, label: "visitor".to_string() };
//! let id = badges.insert(&badge).await?;
//! # Ok(()) }
//! ```

use bson::oid::ObjectId;
use std::marker::PhantomData;

use crate::{
    backend::StoreBackend,
    document::{Document, DocumentExt},
    error::StoreResult,
};

/// A type-safe collection handle for a specific document type.
///
/// The handle borrows the backend it operates on; it is constructed per use
/// through [`DocumentStore::collection`](crate::store::DocumentStore::collection)
/// and holds no state of its own beyond the collection name.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the backend reference
/// * `B` - The storage backend type
/// * `D` - The document type stored in this collection
#[derive(Debug)]
pub struct TypedCollection<'a, B: StoreBackend, D: Document> {
    name: String,
    backend: &'a B,
    _marker: PhantomData<D>,
}

impl<'a, B: StoreBackend, D: Document> TypedCollection<'a, B, D> {
    /// Creates a new collection reference (internal use).
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self { name, backend, _marker: PhantomData }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns every document in the collection.
    ///
    /// An absent or empty collection yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the scan or
    /// deserialization fails.
    pub async fn all(&self) -> StoreResult<Vec<D>> {
        Ok(self
            .backend
            .scan_documents(self.name())
            .await?
            .into_iter()
            .map(|(id, fields)| D::from_fields(id, fields))
            .collect::<StoreResult<Vec<D>>>()?)
    }

    /// Inserts a document, returning the identifier assigned by the store.
    ///
    /// Any identifier already present on the document is stripped before the
    /// insert, so the store always assigns a fresh one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if serialization or
    /// insertion fails.
    pub async fn insert(&self, document: &D) -> StoreResult<ObjectId> {
        Ok(self
            .backend
            .insert_document(document.to_fields()?, self.name())
            .await?)
    }

    /// Retrieves the document with the given identifier, or `None` when no
    /// document matches.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if retrieval or
    /// deserialization fails.
    pub async fn get(&self, id: ObjectId) -> StoreResult<Option<D>> {
        Ok(self
            .backend
            .get_document(id, self.name())
            .await?
            .map(|fields| D::from_fields(id, fields))
            .transpose()?)
    }

    /// Replaces the fields of the document with the given identifier, leaving
    /// the identifier untouched.
    ///
    /// Returns `true` when a document matched and `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if serialization or
    /// the update fails.
    pub async fn update(&self, id: ObjectId, document: &D) -> StoreResult<bool> {
        Ok(self
            .backend
            .update_document(id, document.to_fields()?, self.name())
            .await?)
    }

    /// Deletes the document with the given identifier, returning the number
    /// of documents removed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the operation fails.
    pub async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        Ok(self
            .backend
            .delete_document(id, self.name())
            .await?)
    }
}

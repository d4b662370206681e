//! In-memory storage implementation for document stores.
//!
//! This module provides a simple in-memory backend that stores document
//! fields as BSON values in HashMaps with async-safe read-write locks.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;
use bson::{Bson, oid::ObjectId};

use roster_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::StoreResult,
};

type CollectionMap = HashMap<ObjectId, Bson>;
type StoreMap = HashMap<String, CollectionMap>;


/// Thread-safe in-memory document storage backend.
///
/// This struct implements the [`StoreBackend`] trait to provide a fully functional
/// document store that operates entirely in memory using async-aware read-write locks.
/// Document fields are stored as BSON values indexed by their store-assigned object id.
///
/// Absent targets follow the same conventions as the MongoDB backend: a scan of a
/// collection that was never written is empty, a get misses with `None`, an update
/// reports not-matched, and a delete reports zero removed.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, allowing
/// it to be safely shared across async tasks. Multiple clones of the same instance
/// share the same underlying data.
///
/// # Example
///
/// ```ignore
/// use roster_memory::InMemoryStore;
/// use roster_core::backend::StoreBackend;
/// use bson::{Bson, doc};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     // Insert a document; the store assigns the identifier
///     let fields = Bson::Document(doc! { "name": "Alice", "age": 30.0 });
///     let id = store.insert_document(fields, "employees").await?;
///
///     // Retrieve it again
///     let doc = store.get_document(id, "employees").await?;
///     assert!(doc.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// The main storage map: collection_name -> (document_id -> fields)
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    ///
    /// The returned store is ready for use and contains no collections or documents.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    ///
    /// Currently, the builder simply creates a default store, but it keeps the
    /// construction path uniform with backends that need real setup.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}


#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn scan_documents(&self, collection: &str) -> StoreResult<Vec<(ObjectId, Bson)>> {
        let store = self.store.read().await;
        let collection_map = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        Ok(collection_map
            .iter()
            .map(|(id, doc)| (*id, doc.clone()))
            .collect())
    }

    async fn insert_document(&self, document: Bson, collection: &str) -> StoreResult<ObjectId> {
        let mut store = self.store.write().await;
        let collection_map = store
            .entry(collection.to_string())
            .or_default();

        let id = ObjectId::new();
        collection_map.insert(id, document);

        Ok(id)
    }

    async fn get_document(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Bson>> {
        let store = self.store.read().await;

        Ok(store
            .get(collection)
            .and_then(|col| col.get(&id))
            .cloned())
    }

    async fn update_document(
        &self,
        id: ObjectId,
        document: Bson,
        collection: &str,
    ) -> StoreResult<bool> {
        let mut store = self.store.write().await;
        let collection_map = match store.get_mut(collection) {
            Some(col) => col,
            None => return Ok(false),
        };

        if !collection_map.contains_key(&id) {
            return Ok(false);
        }

        collection_map.insert(id, document);

        Ok(true)
    }

    async fn delete_document(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        let mut store = self.store.write().await;
        let collection_map = match store.get_mut(collection) {
            Some(col) => col,
            None => return Ok(0),
        };

        Ok(collection_map.remove(&id).map_or(0, |_| 1))
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
///
/// Currently a no-op builder, but it gives the in-memory backend the same
/// construction path as backends that need real configuration.
#[derive(Default)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(InMemoryStore::new())
    }
}

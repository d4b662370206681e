use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use bson::{Bson, Document, doc, oid::ObjectId};
use mongodb::{Client, Collection as MongoCollection, options::ClientOptions};

use roster_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
};


/// Bound applied to connection establishment when the builder is not given one.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct MongoDbStore {
    client: Client,
    database: String,
}

impl MongoDbStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoDbStoreBuilder {
        MongoDbStoreBuilder::new(dsn, database)
    }

    fn get_collection(&self, collection_name: &str) -> MongoCollection<Document> {
        self.client
            .database(&self.database)
            .collection(collection_name)
    }
}

/// Splits a raw document into its object id and remaining fields.
fn split_document(mut document: Document) -> StoreResult<(ObjectId, Bson)> {
    let id = document
        .remove("_id")
        .and_then(|id| id.as_object_id())
        .ok_or_else(|| StoreError::InvalidDocument("Expected an object id under _id".into()))?;

    Ok((id, Bson::Document(document)))
}

fn as_document(fields: &Bson) -> StoreResult<Document> {
    fields
        .as_document()
        .cloned()
        .ok_or_else(|| StoreError::InvalidDocument("Expected document".into()))
}

#[async_trait]
impl StoreBackend for MongoDbStore {
    async fn scan_documents(&self, collection: &str) -> StoreResult<Vec<(ObjectId, Bson)>> {
        Ok(self
            .get_collection(collection)
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .into_iter()
            .map(split_document)
            .collect::<StoreResult<Vec<(ObjectId, Bson)>>>()?)
    }

    async fn insert_document(&self, document: Bson, collection: &str) -> StoreResult<ObjectId> {
        self.get_collection(collection)
            .insert_one(as_document(&document)?)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend("Store did not assign an object id".into()))
    }

    async fn get_document(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Bson>> {
        Ok(self
            .get_collection(collection)
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .map(|doc| split_document(doc).map(|(_, fields)| fields))
            .transpose()?)
    }

    async fn update_document(
        &self,
        id: ObjectId,
        document: Bson,
        collection: &str,
    ) -> StoreResult<bool> {
        Ok(self
            .get_collection(collection)
            .update_one(
                doc! { "_id": id },
                doc! { "$set": as_document(&document)? },
            )
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .matched_count
            > 0)
    }

    async fn delete_document(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        Ok(self
            .get_collection(collection)
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .deleted_count)
    }

    async fn shutdown(self) -> StoreResult<()> {
        self.client.shutdown().await;

        Ok(())
    }
}

pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
    connect_timeout: Duration,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Bounds connection establishment and server selection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for MongoDbStoreBuilder {
    type Backend = MongoDbStore;

    /// Parses the connection string, applies the connect timeout, and pings the
    /// target database so an unreachable store fails here rather than on the
    /// first request.
    async fn build(self) -> StoreResult<Self::Backend> {
        let mut options = ClientOptions::parse(&self.dsn)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        options.connect_timeout = Some(self.connect_timeout);
        options.server_selection_timeout = Some(self.connect_timeout);

        let client = Client::with_options(options)
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(MongoDbStore::new(client, self.database))
    }
}

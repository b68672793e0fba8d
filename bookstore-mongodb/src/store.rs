use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use bson::Document;
use mongodb::{
    Client, Collection as MongoCollection,
    options::ClientOptions,
};
use tracing::debug;
use bookstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
    query::{Filter, Query, Update, UpdateOutcome},
};

use crate::query::MongoQueryTranslator;


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

    // The driver adds `_id` on insert; stored books never carry one of their own.
    fn restore_document(document: Document) -> Document {
        document
            .into_iter()
            .filter(|(k, _)| k != "_id")
            .collect()
    }

    async fn shutdown(self) -> StoreResult<()> {
        self.client.shutdown().await;

        Ok(())
    }
}

#[async_trait]
impl StoreBackend for MongoDbStore {
    async fn find(&self, query: Query, collection: &str) -> StoreResult<Vec<Document>> {
        let filter = MongoQueryTranslator::filter(query.filter.as_ref());

        debug!(collection, %filter, "find");

        Ok(
            self.get_collection(collection)
                .find(filter)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?
                .try_collect::<Vec<Document>>()
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?
                .into_iter()
                .map(Self::restore_document)
                .collect()
        )
    }

    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<()> {
        debug!(collection, "insert_one");

        self.get_collection(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn update_one(&self, filter: Filter, update: Update, collection: &str) -> StoreResult<UpdateOutcome> {
        let filter = MongoQueryTranslator::filter(Some(&filter));

        debug!(collection, %filter, "update_one");

        let result = self.get_collection(collection)
            .update_one(filter, MongoQueryTranslator::update(&update))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_many(&self, filter: Filter, collection: &str) -> StoreResult<u64> {
        let filter = MongoQueryTranslator::filter(Some(&filter));

        debug!(collection, %filter, "delete_many");

        Ok(
            self.get_collection(collection)
                .delete_many(filter)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?
                .deleted_count
        )
    }

    async fn create_collection(&self, name: &str) -> StoreResult<()> {
        if self.list_collections().await?.iter().any(|existing| existing == name) {
            return Ok(());
        }

        self.client
            .database(&self.database)
            .create_collection(name)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.client
            .database(&self.database)
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn shutdown(self) -> StoreResult<()> {
        self.shutdown().await
    }
}

pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
    connect_timeout: Option<Duration>,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
            connect_timeout: None,
        }
    }

    /// Bounds both connection establishment and server selection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for MongoDbStoreBuilder {
    type Backend = MongoDbStore;

    async fn build(self) -> StoreResult<Self::Backend> {
        let mut options = ClientOptions::parse(&self.dsn)
            .await
            .map_err(|e| StoreError::Initialization(e.to_string()))?;

        if let Some(timeout) = self.connect_timeout {
            options.connect_timeout = Some(timeout);
            options.server_selection_timeout = Some(timeout);
        }

        Ok(MongoDbStore::new(
            Client::with_options(options)
                .map_err(|e| StoreError::Initialization(e.to_string()))?,
            self.database,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn restore_document_strips_driver_id() {
        let restored = MongoDbStore::restore_document(doc! {
            "_id": bson::oid::ObjectId::new(),
            "Isbn": "111",
            "Price": 9.99_f32 as f64,
        });

        assert_eq!(restored, doc! { "Isbn": "111", "Price": 9.99_f32 as f64 });
    }

    #[test]
    fn builder_records_timeout() {
        let builder = MongoDbStore::builder("mongodb://localhost:27017", "bookstore")
            .connect_timeout(Duration::from_secs(20));

        assert_eq!(builder.database, "bookstore");
        assert_eq!(builder.connect_timeout, Some(Duration::from_secs(20)));
    }
}

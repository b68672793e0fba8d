//! In-memory storage implementation.
//!
//! Documents live in insertion-ordered vectors keyed by collection name, behind an
//! async-aware read-write lock.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;
use bson::Document;
use tracing::debug;

use bookstore_core::{
    query::{Filter, Query, Update, UpdateOutcome},
    error::StoreResult,
    backend::{StoreBackend, StoreBackendBuilder},
};

use crate::evaluator;

type StoreMap = HashMap<String, Vec<Document>>;


/// Thread-safe in-memory document storage backend.
///
/// `InMemoryStore` is cloneable and every clone shares the same underlying data, so a
/// test can keep a handle for inspection while the service owns another.
///
/// Queries scan the whole collection; there is no indexing.
///
/// # Example
///
/// ```ignore
/// use bookstore_memory::InMemoryStore;
/// use bookstore_core::{backend::StoreBackend, query::Query};
/// use bson::doc;
///
/// let store = InMemoryStore::new();
/// store.insert_one(doc! { "Isbn": "111" }, "books").await?;
///
/// let docs = store.find(Query::all(), "books").await?;
/// assert_eq!(docs.len(), 1);
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection_name -> documents in insertion order
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}


#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn find(&self, query: Query, collection: &str) -> StoreResult<Vec<Document>> {
        let store = self.store.read().await;
        let documents = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        let found = documents
            .iter()
            .filter(|doc| evaluator::matches(doc, query.filter.as_ref()))
            .cloned()
            .collect::<Vec<_>>();

        debug!(collection, matched = found.len(), "find");

        Ok(found)
    }

    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<()> {
        self.store
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        debug!(collection, "insert_one");

        Ok(())
    }

    async fn update_one(&self, filter: Filter, update: Update, collection: &str) -> StoreResult<UpdateOutcome> {
        let mut store = self.store.write().await;
        let documents = match store.get_mut(collection) {
            Some(col) => col,
            None => return Ok(UpdateOutcome::default()),
        };

        for doc in documents.iter_mut() {
            if !evaluator::matches(doc, Some(&filter)) {
                continue;
            }

            let mut modified = false;

            for (field, value) in update.set.iter() {
                if doc.get(field) != Some(value) {
                    doc.insert(field.clone(), value.clone());
                    modified = true;
                }
            }

            debug!(collection, modified, "update_one");

            return Ok(UpdateOutcome {
                matched: 1,
                modified: modified as u64,
            });
        }

        Ok(UpdateOutcome::default())
    }

    async fn delete_many(&self, filter: Filter, collection: &str) -> StoreResult<u64> {
        let mut store = self.store.write().await;
        let documents = match store.get_mut(collection) {
            Some(col) => col,
            None => return Ok(0),
        };

        let before = documents.len();
        documents.retain(|doc| !evaluator::matches(doc, Some(&filter)));
        let deleted = (before - documents.len()) as u64;

        debug!(collection, deleted, "delete_many");

        Ok(deleted)
    }

    async fn create_collection(&self, name: &str) -> StoreResult<()> {
        self.store
            .write()
            .await
            .entry(name.to_string())
            .or_default();

        Ok(())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        Ok(
            self.store
                .read()
                .await
                .keys()
                .cloned()
                .collect()
        )
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance. Always succeeds.
    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(InMemoryStore::new())
    }
}

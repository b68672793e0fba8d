//! Stub backend shared by the integration tests.
#![allow(dead_code)]

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use bson::{Document, doc};
use mea::mutex::Mutex;

use bookstore::{
    backend::StoreBackend,
    error::{StoreError, StoreResult},
    query::{Filter, Query, Update, UpdateOutcome},
};

/// A store command as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Find(Query),
    InsertOne(Document),
    UpdateOne(Filter, Update),
    DeleteMany(Filter),
}

/// Backend that records every command and answers from canned data.
///
/// Clones share the recorded calls, so a test keeps one handle for inspection while the
/// service owns another.
#[derive(Clone)]
pub struct RecordingStore {
    calls: Arc<Mutex<Vec<Call>>>,
    found: Vec<Document>,
    fail: Option<String>,
    delay: Option<Duration>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            found: Vec::new(),
            fail: None,
            delay: None,
        }
    }

    /// Every `find` answers with `docs`.
    pub fn returning(mut self, docs: Vec<Document>) -> Self {
        self.found = docs;
        self
    }

    /// Every command fails with a backend error carrying `message`.
    pub fn failing(mut self, message: &str) -> Self {
        self.fail = Some(message.to_string());
        self
    }

    /// Every command sleeps for `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: Call) -> StoreResult<()> {
        self.calls.lock().await.push(call);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.fail {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for RecordingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingStore")
            .field("fail", &self.fail)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StoreBackend for RecordingStore {
    async fn find(&self, query: Query, _collection: &str) -> StoreResult<Vec<Document>> {
        self.record(Call::Find(query)).await?;

        Ok(self.found.clone())
    }

    async fn insert_one(&self, document: Document, _collection: &str) -> StoreResult<()> {
        self.record(Call::InsertOne(document)).await
    }

    async fn update_one(
        &self,
        filter: Filter,
        update: Update,
        _collection: &str,
    ) -> StoreResult<UpdateOutcome> {
        self.record(Call::UpdateOne(filter, update)).await?;

        Ok(UpdateOutcome::default())
    }

    async fn delete_many(&self, filter: Filter, _collection: &str) -> StoreResult<u64> {
        self.record(Call::DeleteMany(filter)).await?;

        Ok(0)
    }

    async fn create_collection(&self, _name: &str) -> StoreResult<()> {
        Ok(())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        Ok(Vec::new())
    }
}

pub fn book_doc(isbn: &str, title: &str, author: &str, price: f32) -> Document {
    doc! { "Isbn": isbn, "Title": title, "Author": author, "Price": price as f64 }
}

//! Storage backend abstraction for the document store.
//!
//! The [`StoreBackend`] trait is the single seam between the book service and whatever
//! actually stores documents. Every operation works on raw BSON documents addressed by a
//! field filter, never by a backend-specific identifier.
//!
//! # Examples
//!
//! ```ignore
//! use bookstore_core::{backend::StoreBackend, query::{Filter, Query}};
//! use bson::doc;
//!
//! backend.insert_one(doc! { "Isbn": "111", "Title": "T" }, "books").await?;
//! let found = backend.find(Query::filtered(Filter::eq("Isbn", "111")), "books").await?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use bson::Document;
use std::fmt::Debug;

use crate::{
    error::StoreResult,
    query::{Filter, Query, Update, UpdateOutcome},
};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` and safe to call from many tasks at once.
/// Callers hold no locks of their own around backend calls.
///
/// # Cancellation
///
/// Every method is an async fn. Dropping the returned future abandons the operation;
/// backends must not leave shared state half-written when that happens.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Returns every document in `collection` matching `query`.
    ///
    /// Documents are returned in store-native order. A collection that does not exist
    /// reads as empty.
    async fn find(&self, query: Query, collection: &str) -> StoreResult<Vec<Document>>;

    /// Inserts a single document, creating the collection if needed.
    ///
    /// No uniqueness is enforced: inserting two documents with identical content
    /// stores both.
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<()>;

    /// Applies `update` to the first document matching `filter`.
    ///
    /// Matching nothing is not an error; the returned [`UpdateOutcome`] reports zero
    /// matched documents instead.
    async fn update_one(
        &self,
        filter: Filter,
        update: Update,
        collection: &str,
    ) -> StoreResult<UpdateOutcome>;

    /// Removes every document matching `filter` and returns how many were removed.
    async fn delete_many(&self, filter: Filter, collection: &str) -> StoreResult<u64>;

    /// Creates an empty collection. Creating an existing collection is a no-op.
    async fn create_collection(&self, name: &str) -> StoreResult<()>;

    /// Lists the names of all collections in the store.
    async fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op; backends holding connections override it.
    async fn shutdown(self) -> StoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Factory for backend instances, so connection setup can fail before any request runs.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> StoreResult<Self::Backend>;
}

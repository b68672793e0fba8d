//! Typed access to a single collection.
//!
//! A [`TypedCollection`] pairs a collection name with a borrowed backend and converts
//! between `D` and BSON on the way in and out.
//!
//! ```ignore
//! let books = store.typed_collection::<Book>();
//! books.insert_one(&book).await?;
//! let matching = books.find(Query::filtered(Filter::eq("Isbn", "111"))).await?;
//! ```

use std::marker::PhantomData;

use crate::{
    backend::StoreBackend,
    document::{Document, DocumentExt},
    error::StoreResult,
    query::{Filter, Query, Update, UpdateOutcome},
};

/// A type-safe collection for documents of type `D`.
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
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self {
            name,
            backend,
            _marker: PhantomData,
        }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds and decodes every document matching `query`.
    ///
    /// # Errors
    ///
    /// Fails if the backend fails or a stored document does not decode into `D`.
    pub async fn find(&self, query: Query) -> StoreResult<Vec<D>> {
        self.backend
            .find(query, self.name())
            .await?
            .into_iter()
            .map(D::from_document)
            .collect()
    }

    /// Encodes and inserts a single document.
    pub async fn insert_one(&self, document: &D) -> StoreResult<()> {
        self.backend
            .insert_one(document.to_document()?, self.name())
            .await
    }

    /// Applies `update` to the first document matching `filter`.
    pub async fn update_one(&self, filter: Filter, update: Update) -> StoreResult<UpdateOutcome> {
        self.backend
            .update_one(filter, update, self.name())
            .await
    }

    /// Removes every document matching `filter`.
    pub async fn delete_many(&self, filter: Filter) -> StoreResult<u64> {
        self.backend
            .delete_many(filter, self.name())
            .await
    }
}

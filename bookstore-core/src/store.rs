//! The store a service is built on.
//!
//! [`DocumentStore`] owns one backend and hands out [`TypedCollection`]s that borrow it.
//! Collections are cheap, short-lived views; the store is what gets shared and, at the
//! end, shut down.
//!
//! ```ignore
//! use bookstore_core::store::DocumentStore;
//!
//! let store = DocumentStore::new(backend);
//! let books = store.typed_collection_named::<Book>("books_test");
//! ```

use crate::{
    backend::StoreBackend,
    collection::TypedCollection,
    document::Document,
    error::StoreResult,
};

#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// A collection view named after `D::collection_name()`.
    pub fn typed_collection<D: Document>(&self) -> TypedCollection<'_, B, D> {
        self.typed_collection_named(D::collection_name())
    }

    /// A collection view under an explicit name, for stores that keep the same document
    /// type in more than one collection.
    pub fn typed_collection_named<D: Document>(&self, name: &str) -> TypedCollection<'_, B, D> {
        TypedCollection::new(name.to_string(), &self.backend)
    }

    /// Creates `name` if it does not exist yet.
    pub async fn create_collection(&self, name: &str) -> StoreResult<()> {
        self.backend.create_collection(name).await
    }

    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.backend.list_collections().await
    }

    /// Consumes the store and releases the backend's resources.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.backend.shutdown().await
    }
}

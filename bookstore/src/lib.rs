//! Book record service over a document store.
//!
//! This crate is the entry point of the bookstore. It defines the [`Book`](book::Book)
//! record, the [`BookRecordService`](service::BookRecordService) that validates input and
//! issues one store command per operation, and an HTTP surface in front of it. Storage
//! comes from the `bookstore-core` abstraction and one of its backends.
//!
//! # Features
//!
//! - **Create, list, show, update and delete** books keyed by isbn
//! - **Classified errors** - validation, conversion and internal failures map to 400, 406 and 500
//! - **Request deadline** - every store command runs under a configurable timeout
//! - **Multiple backends** - in-memory for tests and development, MongoDB for deployment
//!
//! # Quick Start
//!
//! ```ignore
//! use bookstore::{prelude::*, memory::InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = DocumentStore::new(InMemoryStore::builder().build().await.unwrap());
//!     let service = BookRecordService::new(store);
//!
//!     service.create("111", "The Title", "The Author", "9.99").await.unwrap();
//!
//!     let book = service.get_one("111").await.unwrap();
//!     assert_eq!(book.price, 9.99);
//!
//!     service.delete("111").await.unwrap();
//!     assert!(service.get_one("111").await.unwrap().is_empty());
//!
//!     service.into_store().shutdown().await.unwrap();
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Process-local storage for development and testing
//! - [`mongodb`] - Persistent MongoDB backend (requires `mongodb` feature)

pub mod book;
pub mod config;
pub mod error;
pub mod http;
pub mod prelude;
pub mod server;
pub mod service;
pub mod telemetry;

pub use bookstore_core::{backend, collection, document, query, store};

// Re-export BSON types for convenience
pub use bson;

/// In-memory storage backend implementations.
pub mod memory {
    pub use bookstore_memory::{InMemoryStore, InMemoryStoreBuilder};
}

/// MongoDB storage backend implementations.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use bookstore_mongodb::{MongoDbStore, MongoDbStoreBuilder};
}

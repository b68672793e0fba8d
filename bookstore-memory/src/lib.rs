//! In-memory document storage backend for the bookstore.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It is used by the test suite and by the server when started with `--backend memory`.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using async-aware RwLock
//! - **Insertion order** - `find` returns documents in the order they were inserted
//! - **Numeric-aware filters** - Int and double field values compare equal when numerically equal
//!
//! # Quick Start
//!
//! ```ignore
//! use bookstore_core::{backend::StoreBackendBuilder, store::DocumentStore};
//! use bookstore_memory::InMemoryStore;
//!
//! let store = DocumentStore::new(InMemoryStore::builder().build().await?);
//! ```

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};

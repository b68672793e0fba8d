//! Storage abstraction underneath the bookstore service.
//!
//! This crate provides:
//!
//! - **Document traits** ([`document`]) - How a Rust type maps onto a stored document
//! - **Store backend abstraction** ([`backend`]) - The trait every storage implementation provides
//! - **Filters and updates** ([`query`]) - Field equality filters, queries and `$set` updates
//! - **Collections** ([`collection`]) - Typed access to one collection
//! - **Document store** ([`store`]) - Owner of a backend, entry point for collections
//! - **Error handling** ([`error`]) - Store error and result types
//!
//! # Example
//!
//! ```ignore
//! use bookstore_core::{document::Document, query::{Filter, Query}, store::DocumentStore};
//!
//! let store = DocumentStore::new(backend);
//! let books = store.typed_collection::<Book>();
//! let found = books.find(Query::filtered(Filter::eq("Isbn", "111"))).await?;
//! ```

pub mod backend;
pub mod collection;
pub mod document;
pub mod error;
pub mod query;
pub mod store;

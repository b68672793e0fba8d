//! Convenient re-exports of commonly used types from the bookstore.
//!
//! ```ignore
//! use bookstore::prelude::*;
//! ```

pub use crate::{
    book::{Book, BookForm},
    error::{BookError, BookResult},
    service::BookRecordService,
};

pub use bookstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Document, DocumentExt},
    error::{StoreError, StoreResult},
    query::{Filter, Query, Update},
    store::DocumentStore,
};

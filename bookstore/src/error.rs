//! Errors returned by [`BookRecordService`](crate::service::BookRecordService).
//!
//! Each variant is a classification; turning it into a transport status is the HTTP
//! layer's job (see [`crate::http`]).

use thiserror::Error;

pub use bookstore_core::error::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum BookError {
    /// A required field was empty. Raised before the store is touched.
    #[error("{0}")]
    Validation(String),
    /// The price was present but not a number. Raised before the store is touched.
    #[error("{0}")]
    Conversion(String),
    /// A store command failed and the operation reports it as an internal error.
    #[error("{0}")]
    Internal(String),
    /// A store fault passed through unclassified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type BookResult<T> = Result<T, BookError>;

impl BookError {
    pub(crate) fn validation(message: &str) -> Self {
        BookError::Validation(message.to_string())
    }

    pub(crate) fn conversion(message: &str) -> Self {
        BookError::Conversion(message.to_string())
    }
}

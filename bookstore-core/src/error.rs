//! Failures reported by storage backends.
//!
//! Every backend operation returns [`StoreResult<T>`]. The variants only say which layer
//! failed; the message carries whatever the backend or driver reported.

use bson::error::Error as BsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A value could not be encoded to, or decoded from, BSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The backend could not be set up, e.g. an unparsable connection string.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// The backend rejected or failed a command (connectivity, timeouts, server faults).
    #[error("Backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

//! Core traits for document representation and serialization.

use bson::{
    Document as BsonDocument,
    de::deserialize_from_document,
    ser::serialize_to_document,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StoreResult;

/// Trait implemented by every type stored through a typed collection.
///
/// The type's serde representation is the persisted document shape, so field renames
/// belong on the struct.
///
/// # Example
///
/// ```ignore
/// use bookstore_core::document::Document;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// #[serde(rename_all = "PascalCase")]
/// pub struct Book {
///     pub isbn: String,
///     pub title: String,
/// }
///
/// impl Document for Book {
///     fn collection_name() -> &'static str {
///         "books"
///     }
/// }
/// ```
pub trait Document: Serialize + DeserializeOwned + Send + Sync + Clone + 'static {
    /// Returns the default name of the collection this document belongs to.
    fn collection_name() -> &'static str;
}

/// Conversion helpers between a [`Document`] and its BSON form.
///
/// Automatically implemented for all types that implement [`Document`].
pub trait DocumentExt: Document {
    /// Serializes this value into a BSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not serialize to a document.
    fn to_document(&self) -> StoreResult<BsonDocument>;

    /// Deserializes a value from a BSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing or has an incompatible type.
    fn from_document(document: BsonDocument) -> StoreResult<Self>;
}

impl<D: Document> DocumentExt for D {
    fn to_document(&self) -> StoreResult<BsonDocument> {
        Ok(serialize_to_document(self)?)
    }

    fn from_document(document: BsonDocument) -> StoreResult<Self> {
        Ok(deserialize_from_document(document)?)
    }
}

//! Translation from filters and updates to MongoDB command documents.

use bson::{Document, doc};

use bookstore_core::query::{Filter, Update};

pub(crate) struct MongoQueryTranslator;

impl MongoQueryTranslator {
    /// Translates an optional filter; `None` becomes the match-all `{}`.
    ///
    /// The value is wrapped in `$eq` so an embedded-document value is compared, not
    /// read as operators.
    pub(crate) fn filter(filter: Option<&Filter>) -> Document {
        match filter {
            Some(Filter { field, value }) => doc! { field.as_str(): { "$eq": value.clone() } },
            None => doc! {},
        }
    }

    /// Translates an update into a `$set` update document.
    pub(crate) fn update(update: &Update) -> Document {
        doc! { "$set": update.set.clone() }
    }
}

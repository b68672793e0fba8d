//! Filters, updates and the queries built from them.
//!
//! A [`Filter`] selects documents by the value of one top-level field; a [`Query`] without
//! one selects the whole collection:
//!
//! ```ignore
//! use bookstore_core::query::{Filter, Query};
//!
//! let by_isbn = Query::filtered(Filter::eq("Isbn", "111"));
//! let everything = Query::all();
//! ```
//!
//! Backends interpret a filter themselves: the in-memory store evaluates it against each
//! document, MongoDB receives it as `{field: {"$eq": value}}`.

use bson::{Bson, Document};

/// Matches documents whose `field` equals `value`.
///
/// A document lacking the field never matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Bson,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Filter {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Selects the documents a find operation returns.
///
/// A query without a filter matches every document in the collection. Results come
/// back in whatever order the backend keeps them; there is no sorting or paging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
}

impl Query {
    /// A query matching every document.
    pub fn all() -> Self {
        Query { filter: None }
    }

    /// A query matching the documents selected by `filter`.
    pub fn filtered(filter: Filter) -> Self {
        Query { filter: Some(filter) }
    }
}

/// Field assignments applied to a matched document.
///
/// Fields present in `set` overwrite (or add) the same-named fields of the stored
/// document; all other fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub set: Document,
}

impl Update {
    pub fn set(fields: Document) -> Self {
        Update { set: fields }
    }
}

/// Outcome of an update command as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Number of documents the filter matched.
    pub matched: u64,
    /// Number of documents actually changed.
    pub modified: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn eq_converts_field_and_value() {
        assert_eq!(
            Filter::eq("Isbn", "111"),
            Filter {
                field: "Isbn".to_string(),
                value: Bson::String("111".to_string()),
            }
        );
        assert_eq!(Filter::eq("Price", 9.99_f32).value, Bson::Double(9.99_f32 as f64));
    }

    #[test]
    fn all_has_no_filter() {
        assert_eq!(Query::all().filter, None);
        assert!(Query::filtered(Filter::eq("Isbn", "1")).filter.is_some());
    }

    #[test]
    fn update_set_keeps_fields() {
        let update = Update::set(doc! { "Title": "T2" });

        assert_eq!(update.set.get_str("Title").unwrap(), "T2");
    }
}

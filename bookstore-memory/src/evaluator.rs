//! Filter evaluation for in-memory documents.

use bson::{Bson, Document};

use bookstore_core::query::Filter;

/// Widens any BSON number to `f64`.
fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

/// Equality the way a document database compares values: `Int32(9)` equals
/// `Double(9.0)`, and the rule applies inside arrays and embedded documents too.
pub(crate) fn bson_eq(stored: &Bson, wanted: &Bson) -> bool {
    if let (Some(a), Some(b)) = (as_number(stored), as_number(wanted)) {
        return a == b;
    }

    match (stored, wanted) {
        (Bson::Array(a), Bson::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| bson_eq(x, y))
        }
        (Bson::Document(a), Bson::Document(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, x)| b.get(key).is_some_and(|y| bson_eq(x, y)))
        }
        _ => stored == wanted,
    }
}

/// Whether `document` is selected by `filter`; no filter selects everything.
///
/// A document without the filtered field is never selected.
pub(crate) fn matches(document: &Document, filter: Option<&Filter>) -> bool {
    match filter {
        Some(filter) => document
            .get(&filter.field)
            .is_some_and(|stored| bson_eq(stored, &filter.value)),
        None => true,
    }
}

//! The Book record and the form payload it is built from.

use serde::{Deserialize, Serialize};

use bookstore_core::document::Document;

/// Field names in the persisted document.
pub(crate) mod fields {
    pub const ISBN: &str = "Isbn";
    pub const TITLE: &str = "Title";
    pub const AUTHOR: &str = "Author";
    pub const PRICE: &str = "Price";
}

/// A book as stored in the `books` collection.
///
/// Serialized as `{Isbn, Title, Author, Price}`. The price is held at 32-bit precision;
/// the store keeps it as a double and it narrows back on decode.
///
/// `Book::default()` is the zero value returned when a lookup finds nothing; check it
/// with [`Book::is_empty`]. A stored document missing a field decodes with that field
/// zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: f32,
}

impl Book {
    /// True for the zero value, i.e. "no such book".
    pub fn is_empty(&self) -> bool {
        *self == Book::default()
    }
}

impl Document for Book {
    fn collection_name() -> &'static str {
        "books"
    }
}

/// Form fields as submitted by a client.
///
/// Absent fields deserialize to empty strings, the same as an absent form value, so
/// "missing" and "empty" are validated identically.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BookForm {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::document::DocumentExt;
    use bson::doc;

    #[test]
    fn serializes_with_capitalized_fields() {
        let book = Book {
            isbn: "111".to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            price: 9.99,
        };

        assert_eq!(
            book.to_document().unwrap(),
            doc! { "Isbn": "111", "Title": "T", "Author": "A", "Price": 9.99_f32 as f64 }
        );
    }

    #[test]
    fn decodes_stored_document() {
        let book = Book::from_document(doc! {
            "Isbn": "111", "Title": "T", "Author": "A", "Price": 9.99_f64,
        })
        .unwrap();

        assert_eq!(book.price, 9.99_f32);
        assert!(!book.is_empty());
    }

    #[test]
    fn missing_fields_decode_as_zero() {
        let book = Book::from_document(doc! { "Isbn": "1", "Title": "T", "Author": "A" }).unwrap();

        assert_eq!(book.isbn, "1");
        assert_eq!(book.price, 0.0);
    }

    #[test]
    fn default_is_empty() {
        assert!(Book::default().is_empty());
    }

    #[test]
    fn form_fields_default_to_empty() {
        let form: BookForm = serde_json::from_str(r#"{"isbn":"111"}"#).unwrap();

        assert_eq!(form.isbn, "111");
        assert_eq!(form.price, "");
    }
}

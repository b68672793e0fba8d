//! CRUD operations over the `books` collection.
//!
//! [`BookRecordService`] takes already-extracted string fields, validates and converts
//! them, and issues exactly one store command per call. It keeps no state of its own
//! besides the injected store, so a single instance can serve concurrent requests.

use bson::Document as BsonDocument;

use bookstore_core::{
    backend::StoreBackend,
    collection::TypedCollection,
    document::Document,
    query::{Filter, Query, Update},
    store::DocumentStore,
};

use crate::{
    book::{Book, fields},
    error::{BookError, BookResult},
};

const CREATE_INCOMPLETE: &str = "Bad request. All fields must be complete.";
const UPDATE_INCOMPLETE: &str = "Bad request. Fields can't be empty.";
const ISBN_REQUIRED: &str = "Bad request. Isbn is required.";
const CREATE_BAD_PRICE: &str = "Not acceptable. Price must be a number.";
const UPDATE_BAD_PRICE: &str = "Not acceptable. Enter number for price.";
const INTERNAL: &str = "Internal server error.";

/// Book record facade over a document store.
///
/// # Example
///
/// ```ignore
/// use bookstore::{memory::InMemoryStore, service::BookRecordService, store::DocumentStore};
///
/// let service = BookRecordService::new(DocumentStore::new(InMemoryStore::new()));
///
/// let book = service.create("111", "T", "A", "9.99").await?;
/// assert_eq!(service.get_one("111").await?, book);
/// ```
#[derive(Debug)]
pub struct BookRecordService<B: StoreBackend> {
    store: DocumentStore<B>,
    collection: String,
}

impl<B: StoreBackend> BookRecordService<B> {
    /// Creates a service over the default `books` collection.
    pub fn new(store: DocumentStore<B>) -> Self {
        Self {
            store,
            collection: Book::collection_name().to_string(),
        }
    }

    /// Uses `name` instead of the default collection.
    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection = name.into();
        self
    }

    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    pub fn store(&self) -> &DocumentStore<B> {
        &self.store
    }

    /// Gives the store back, e.g. to shut it down.
    pub fn into_store(self) -> DocumentStore<B> {
        self.store
    }

    fn books(&self) -> TypedCollection<'_, B, Book> {
        self.store.typed_collection_named::<Book>(&self.collection)
    }

    /// Returns every stored book in store order.
    pub async fn list_all(&self) -> BookResult<Vec<Book>> {
        Ok(self.books().find(Query::all()).await?)
    }

    /// Returns the first book with `isbn`, or the zero value if there is none.
    ///
    /// # Errors
    ///
    /// [`BookError::Validation`] for an empty isbn; [`BookError::Store`] if the lookup fails.
    pub async fn get_one(&self, isbn: &str) -> BookResult<Book> {
        if isbn.is_empty() {
            return Err(BookError::validation(ISBN_REQUIRED));
        }

        Ok(self
            .books()
            .find(Query::filtered(Filter::eq(fields::ISBN, isbn)))
            .await?
            .into_iter()
            .next()
            .unwrap_or_default())
    }

    /// Inserts a new book and returns it as built from the input.
    ///
    /// No check is made for an existing book with the same isbn.
    ///
    /// # Errors
    ///
    /// [`BookError::Validation`] if any field is empty, [`BookError::Conversion`] if the
    /// price is not a number, [`BookError::Internal`] (with the store's message) if the
    /// insert fails.
    pub async fn create(&self, isbn: &str, title: &str, author: &str, price: &str) -> BookResult<Book> {
        let book = build_book(isbn, title, author, price, CREATE_INCOMPLETE, CREATE_BAD_PRICE)?;

        self.books()
            .insert_one(&book)
            .await
            .map_err(|e| BookError::Internal(format!("{INTERNAL} {e}")))?;

        Ok(book)
    }

    /// Sets title, author and price on the first book with `isbn`.
    ///
    /// Returns the book built from the input whether or not anything matched.
    ///
    /// # Errors
    ///
    /// Validation and conversion as for [`create`](Self::create); a failed update
    /// surfaces as [`BookError::Store`].
    pub async fn update(&self, isbn: &str, title: &str, author: &str, price: &str) -> BookResult<Book> {
        let book = build_book(isbn, title, author, price, UPDATE_INCOMPLETE, UPDATE_BAD_PRICE)?;

        self.books()
            .update_one(
                Filter::eq(fields::ISBN, book.isbn.as_str()),
                Update::set(replacement_fields(&book)),
            )
            .await?;

        Ok(book)
    }

    /// Removes every book with `isbn`. Removing nothing is not an error.
    ///
    /// # Errors
    ///
    /// [`BookError::Validation`] for an empty isbn; [`BookError::Internal`] if the delete
    /// fails. The store's message is not included.
    pub async fn delete(&self, isbn: &str) -> BookResult<()> {
        if isbn.is_empty() {
            return Err(BookError::validation(ISBN_REQUIRED));
        }

        self.books()
            .delete_many(Filter::eq(fields::ISBN, isbn))
            .await
            .map_err(|_| BookError::Internal(INTERNAL.to_string()))?;

        Ok(())
    }
}

/// The `$set` part of an update: everything except the isbn it is matched on.
fn replacement_fields(book: &Book) -> BsonDocument {
    let mut set = BsonDocument::new();

    set.insert(fields::TITLE, book.title.as_str());
    set.insert(fields::AUTHOR, book.author.as_str());
    set.insert(fields::PRICE, book.price);

    set
}

fn build_book(
    isbn: &str,
    title: &str,
    author: &str,
    price: &str,
    incomplete: &str,
    bad_price: &str,
) -> BookResult<Book> {
    if isbn.is_empty() || title.is_empty() || author.is_empty() || price.is_empty() {
        return Err(BookError::validation(incomplete));
    }

    Ok(Book {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        price: parse_price(price).ok_or_else(|| BookError::conversion(bad_price))?,
    })
}

/// Parses at 64-bit precision and narrows to `f32`.
///
/// A finite value too large for `f32` is rejected rather than stored as infinity.
fn parse_price(text: &str) -> Option<f32> {
    let wide = text.parse::<f64>().ok()?;
    let narrow = wide as f32;

    if wide.is_finite() && narrow.is_infinite() {
        return None;
    }

    Some(narrow)
}

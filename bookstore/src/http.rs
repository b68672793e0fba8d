//! HTTP surface of the bookstore.
//!
//! Handlers pull the form fields out of the request, hand them to the
//! [`BookRecordService`] and translate the outcome into a response. This is the only
//! place where error kinds become status codes.

use std::{future::Future, sync::Arc, time::Duration};

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
};
use tracing::{error, warn};

use bookstore_core::backend::StoreBackend;

use crate::{
    book::{Book, BookForm},
    error::{BookError, BookResult},
    service::BookRecordService,
};

pub type ServerError = (StatusCode, String);

impl From<BookError> for ServerError {
    fn from(err: BookError) -> Self {
        let status = match err {
            BookError::Validation(_) => StatusCode::BAD_REQUEST,
            BookError::Conversion(_) => StatusCode::NOT_ACCEPTABLE,
            BookError::Internal(_) | BookError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, err.to_string())
    }
}

pub struct AppState<B: StoreBackend> {
    pub service: Arc<BookRecordService<B>>,
    pub request_timeout: Duration,
}

impl<B: StoreBackend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            request_timeout: self.request_timeout,
        }
    }
}

impl<B: StoreBackend> AppState<B> {
    pub fn new(service: Arc<BookRecordService<B>>, request_timeout: Duration) -> Self {
        Self { service, request_timeout }
    }

    /// Runs a service call under the request deadline.
    ///
    /// On expiry the call's future is dropped, which abandons the store command.
    async fn run<T>(&self, operation: &'static str, call: impl Future<Output = BookResult<T>>) -> Result<T, ServerError> {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                let (status, message) = ServerError::from(err);

                if status.is_server_error() {
                    error!(operation, %status, reason = %message, "request failed");
                } else {
                    warn!(operation, %status, reason = %message, "request rejected");
                }

                Err((status, message))
            }
            Err(_) => {
                error!(operation, timeout = ?self.request_timeout, "request deadline exceeded");

                Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal server error. Request timed out.".to_string()))
            }
        }
    }
}

pub fn router<B: StoreBackend + 'static>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/books", get(list_books::<B>))
        .route("/books/show", get(show_book::<B>))
        .route("/books/create/process", post(create_book::<B>))
        .route("/books/update/process", post(update_book::<B>))
        .route("/books/delete/process", get(delete_book::<B>).post(delete_book::<B>))
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/books")
}

async fn list_books<B: StoreBackend>(State(state): State<AppState<B>>) -> Result<Json<Vec<Book>>, ServerError> {
    let books = state.run("list", state.service.list_all()).await?;

    Ok(Json(books))
}

async fn show_book<B: StoreBackend>(
    State(state): State<AppState<B>>,
    Query(form): Query<BookForm>,
) -> Result<Json<Book>, ServerError> {
    let book = state.run("show", state.service.get_one(&form.isbn)).await?;

    if book.is_empty() {
        return Err((StatusCode::NOT_FOUND, "Not found.".to_string()));
    }

    Ok(Json(book))
}

async fn create_book<B: StoreBackend>(
    State(state): State<AppState<B>>,
    Form(form): Form<BookForm>,
) -> Result<(StatusCode, Json<Book>), ServerError> {
    let book = state
        .run("create", state.service.create(&form.isbn, &form.title, &form.author, &form.price))
        .await?;

    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book<B: StoreBackend>(
    State(state): State<AppState<B>>,
    Form(form): Form<BookForm>,
) -> Result<Json<Book>, ServerError> {
    let book = state
        .run("update", state.service.update(&form.isbn, &form.title, &form.author, &form.price))
        .await?;

    Ok(Json(book))
}

// GET reads the query string, POST the form body.
async fn delete_book<B: StoreBackend>(
    State(state): State<AppState<B>>,
    Form(form): Form<BookForm>,
) -> Result<Redirect, ServerError> {
    state.run("delete", state.service.delete(&form.isbn)).await?;

    Ok(Redirect::to("/books"))
}

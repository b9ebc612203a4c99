use super::store::BookStore;
use super::types::{CatalogError, NewBook};
use crate::api::types::{ApiResponse, ErrorResponse, PageParams};

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

/// `GET /api/books` — paginated catalog listing.
pub async fn handle_list_books(
    Query(params): Query<PageParams>,
    Extension(store): Extension<Arc<BookStore>>,
) -> Response {
    match params.to_page_request() {
        Ok(page) => Json(store.find_all(&page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /api/books/{id}` — single book lookup.
pub async fn handle_get_book(
    Path(id): Path<u64>,
    Extension(store): Extension<Arc<BookStore>>,
) -> Response {
    match store.get(id) {
        Some(book) => Json(book).into_response(),
        None => ErrorResponse::not_found(format!("book {} not found", id)).into_response(),
    }
}

/// `POST /api/books` — add a book to the catalog.
pub async fn handle_create_book(
    Extension(store): Extension<Arc<BookStore>>,
    Json(req): Json<NewBook>,
) -> Response {
    match store.insert(req) {
        Ok(book) => {
            tracing::debug!(id = book.id, isbn = %book.isbn, "Created book");
            (StatusCode::CREATED, Json(ApiResponse::created(book))).into_response()
        }
        Err(e @ CatalogError::DuplicateIsbn(_)) => {
            ErrorResponse::conflict(e.to_string()).into_response()
        }
        Err(e) => ErrorResponse::bad_request(e.to_string()).into_response(),
    }
}

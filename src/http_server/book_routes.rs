//! Book HTTP Routes
//!
//! The five CRUD endpoints over the book store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::store::{Book, BookPatch, BookService, JsonFileStore, NewBook, RecordStore};

use super::errors::ApiError;

// ==================
// Shared State
// ==================

/// Book state shared across handlers.
///
/// The mutex serializes whole load-mutate-save cycles, so concurrent
/// requests cannot lose each other's writes.
pub struct BooksState<S: RecordStore> {
    service: Mutex<BookService<S>>,
}

impl<S: RecordStore> BooksState<S> {
    pub fn new(service: BookService<S>) -> Self {
        Self {
            service: Mutex::new(service),
        }
    }
}

impl BooksState<JsonFileStore> {
    /// State backed by a JSON document at the given path.
    pub fn with_data_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(BookService::new(JsonFileStore::new(path)))
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes<S: RecordStore + 'static>(state: Arc<BooksState<S>>) -> Router {
    Router::new()
        .route(
            "/books",
            get(list_books_handler::<S>).post(create_book_handler::<S>),
        )
        .route(
            "/books/:id",
            get(get_book_handler::<S>)
                .put(update_book_handler::<S>)
                .delete(delete_book_handler::<S>),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parse the id path segment.
///
/// Extracted as a string so a non-integer id maps to the structured 400
/// body instead of a framework rejection.
fn parse_book_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}

// ==================
// Handlers
// ==================

async fn list_books_handler<S: RecordStore>(
    State(state): State<Arc<BooksState<S>>>,
) -> Json<Vec<Book>> {
    let service = state.service.lock().await;
    Json(service.list())
}

async fn create_book_handler<S: RecordStore>(
    State(state): State<Arc<BooksState<S>>>,
    Json(new): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let service = state.service.lock().await;
    let created = service.create(new)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_book_handler<S: RecordStore>(
    State(state): State<Arc<BooksState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_book_id(&id)?;
    let service = state.service.lock().await;
    let book = service.get(id)?;
    Ok(Json(book))
}

async fn update_book_handler<S: RecordStore>(
    State(state): State<Arc<BooksState<S>>>,
    Path(id): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_book_id(&id)?;
    let service = state.service.lock().await;
    let updated = service.update(id, &patch)?;
    Ok(Json(updated))
}

async fn delete_book_handler<S: RecordStore>(
    State(state): State<Arc<BooksState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_book_id(&id)?;
    let service = state.service.lock().await;
    service.delete(id)?;
    Ok(Json(MessageResponse {
        message: format!("Book with ID {} deleted.", id),
    }))
}

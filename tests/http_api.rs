//! HTTP API Tests
//!
//! The five /books routes plus /health, exercised at the router level:
//! - Status codes per the route table (200/201/400/404/500)
//! - Structured JSON error bodies ({error, code})
//! - Persistence failures surface as 500 on write paths

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

use bookshelf::http_server::{HttpServer, HttpServerConfig};

// =============================================================================
// Test Utilities
// =============================================================================

fn seeded_router(books: Value) -> (TempDir, Router) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = dir.path().join("books.json");
    fs::write(&data_path, serde_json::to_string_pretty(&books).unwrap()).unwrap();
    let router = HttpServer::new(&data_path, HttpServerConfig::default()).router();
    (dir, router)
}

fn sample_books() -> Value {
    json!([
        {"id": 1, "title": "A", "genre": "Fiction", "description": "first", "rating": "4 stars"},
        {"id": 2, "title": "B", "genre": "History", "description": "second", "rating": "2 stars"}
    ])
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn with_json_body(method: &str, path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_is_ok() {
    let (_dir, router) = seeded_router(json!([]));
    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

// =============================================================================
// GET /books
// =============================================================================

#[tokio::test]
async fn test_list_books_returns_stored_array() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router.oneshot(get("/books")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, sample_books());
}

#[tokio::test]
async fn test_list_books_on_missing_document_is_empty_array() {
    let dir = TempDir::new().unwrap();
    let router = HttpServer::new(
        dir.path().join("books.json"),
        HttpServerConfig::default(),
    )
    .router();

    let response = router.oneshot(get("/books")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

// =============================================================================
// POST /books
// =============================================================================

#[tokio::test]
async fn test_create_book_returns_201_with_assigned_id() {
    let (dir, router) = seeded_router(sample_books());
    let response = router
        .oneshot(with_json_body(
            "POST",
            "/books",
            json!({"title": "C", "genre": "G", "description": "D", "rating": "3"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"id": 3, "title": "C", "genre": "G", "description": "D", "rating": "3"})
    );

    // Persisted at the end of the document.
    let stored: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("books.json")).unwrap())
            .unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 3);
    assert_eq!(stored[2]["id"], 3);
}

#[tokio::test]
async fn test_create_book_defaults_missing_fields_to_empty() {
    let (_dir, router) = seeded_router(json!([]));
    let response = router
        .oneshot(with_json_body("POST", "/books", json!({"title": "Solo"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["genre"], "");
}

#[tokio::test]
async fn test_create_book_persistence_failure_is_500() {
    // No seeded dir: the parent of the data path is a file, so every save
    // fails while reads stay fail-open.
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    let router = HttpServer::new(
        blocker.join("books.json"),
        HttpServerConfig::default(),
    )
    .router();

    let response = router
        .oneshot(with_json_body("POST", "/books", json!({"title": "C"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["code"], 500);
    assert!(body["error"].as_str().unwrap().starts_with("Internal error"));
}

// =============================================================================
// GET /books/{id}
// =============================================================================

#[tokio::test]
async fn test_get_book_by_id() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router.oneshot(get("/books/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["title"], "B");
}

#[tokio::test]
async fn test_get_missing_book_is_404() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router.oneshot(get("/books/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body, json!({"error": "Book not found.", "code": 404}));
}

#[tokio::test]
async fn test_get_with_non_integer_id_is_400() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router.oneshot(get("/books/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body, json!({"error": "Invalid book ID.", "code": 400}));
}

// =============================================================================
// PUT /books/{id}
// =============================================================================

#[tokio::test]
async fn test_update_book_merges_fields() {
    let (dir, router) = seeded_router(sample_books());
    let response = router
        .oneshot(with_json_body("PUT", "/books/1", json!({"title": "A2"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["title"], "A2");
    assert_eq!(body["genre"], "Fiction");
    assert_eq!(body["id"], 1);

    let stored: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("books.json")).unwrap())
            .unwrap();
    assert_eq!(stored[0]["title"], "A2");
    assert_eq!(stored[1]["title"], "B");
}

#[tokio::test]
async fn test_update_cannot_change_id() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router
        .oneshot(with_json_body(
            "PUT",
            "/books/1",
            json!({"id": 42, "title": "A2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["id"], 1);
}

#[tokio::test]
async fn test_update_missing_book_is_404() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router
        .oneshot(with_json_body("PUT", "/books/99", json!({"title": "X"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_invalid_id_is_400() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router
        .oneshot(with_json_body("PUT", "/books/1.5", json!({"title": "X"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// DELETE /books/{id}
// =============================================================================

#[tokio::test]
async fn test_delete_book_returns_message() {
    let (dir, router) = seeded_router(sample_books());
    let response = router.oneshot(delete("/books/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Book with ID 1 deleted."})
    );

    let stored: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("books.json")).unwrap())
            .unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["id"], 2);
}

#[tokio::test]
async fn test_delete_missing_book_is_404_and_keeps_document() {
    let (dir, router) = seeded_router(sample_books());
    let before = fs::read(dir.path().join("books.json")).unwrap();

    let response = router.oneshot(delete("/books/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(fs::read(dir.path().join("books.json")).unwrap(), before);
}

#[tokio::test]
async fn test_delete_with_invalid_id_is_400() {
    let (_dir, router) = seeded_router(sample_books());
    let response = router.oneshot(delete("/books/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], 400);
}

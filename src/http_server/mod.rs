//! # HTTP Server Module
//!
//! Axum-based HTTP API over the book store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - List and create
//! - `/books/{id}` - Get, update, delete

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;

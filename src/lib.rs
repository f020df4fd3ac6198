//! bookshelf - a minimal file-backed book-tracking HTTP service
//!
//! One JSON document on disk, one CRUD service over it, one axum router
//! in front.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;

//! # Observability
//!
//! Structured logging for bookshelf. One log line = one JSON event,
//! written synchronously with deterministic key ordering.

pub mod logger;

pub use logger::{Logger, Severity};

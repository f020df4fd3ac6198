//! # Store Errors

use thiserror::Error;

/// Result type for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence errors.
///
/// These only surface from `save`; reads are fail-open and never error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level errors
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// No record with the given id
    #[error("Book not found: {0}")]
    NotFound(i64),

    /// The backing document could not be written
    #[error("{0}")]
    Persistence(#[from] StoreError),
}

//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}

/// Document store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failure on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

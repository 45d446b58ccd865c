//! Error types for shelf.

use thiserror::Error;

/// Common error type for shelf.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Database error.
    ///
    /// Wraps errors from the storage engine. sqlx errors are converted
    /// automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error from the blob store or the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Upload exceeds the configured byte cap.
    #[error("payload too large: {size} bytes (max {limit})")]
    PayloadTooLarge { size: u64, limit: u64 },

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A metadata insert failed after the blob was written, and the
    /// compensating blob delete failed as well. The stored name is left
    /// on disk as an orphan.
    #[error("metadata insert failed ({cause}); orphan blob {stored_name} could not be removed ({cleanup})")]
    OrphanedBlob {
        stored_name: String,
        cause: String,
        cleanup: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for ShelfError {
    fn from(e: sqlx::Error) -> Self {
        ShelfError::Database(e.to_string())
    }
}

/// Result type alias for shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

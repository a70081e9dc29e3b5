//! Error types for MC Pro.

use thiserror::Error;

/// Errors that can occur in MC Pro operations.
#[derive(Error, Debug)]
pub enum McProError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid month index {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No record with id {id} in '{key}'")]
    RecordNotFound { key: String, id: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MC Pro operations.
pub type McProResult<T> = Result<T, McProError>;

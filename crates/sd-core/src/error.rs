//! Error types for sd-core

use sd_db::DbError;
use thiserror::Error;

/// Core error type for sqlite-diffable
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Database path does not exist
    #[error("[E001] Path doesn't exist: {path}")]
    NotFound { path: String },

    /// E002: Path exists but has the wrong type
    #[error("[E002] {reason}: {path}")]
    InvalidPath { path: String, reason: &'static str },

    /// E003: IO error with file path context
    #[error("[E003] IO error on '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// E004: Nothing to export was requested
    #[error("[E004] {0}")]
    Usage(String),

    /// E005: Database query failed
    #[error("[E005] Query failed: {0}")]
    Query(#[from] DbError),

    /// E006: Table scan returned no result columns
    #[error("[E006] No rows found for table {table}")]
    NoRows { table: String },

    /// E007: JSON serialization error
    #[error("[E007] JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

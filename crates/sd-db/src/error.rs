//! Error types for sd-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    Connection(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    Execution(String),

    /// Mutex poisoned (D003)
    #[error("[D003] Database mutex poisoned: {0}")]
    MutexPoisoned(String),

    /// Row consumer failed while a scan was in progress (D004)
    #[error("[D004] Row sink failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::Execution(err.to_string())
    }
}

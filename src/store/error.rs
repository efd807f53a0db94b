use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Creating the database directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A query expected exactly one row but found none.
    #[error("Record not found")]
    NotFound,

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// A previous holder of the connection panicked.
    #[error("Database lock poisoned")]
    LockPoisoned,

    /// The blocking task running the query panicked or was cancelled.
    #[error("Database task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Convenience alias used throughout the store.
pub type Result<T> = std::result::Result<T, StoreError>;

pub(crate) fn not_found(e: rusqlite::Error) -> StoreError {
    match e {
        rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
        other => StoreError::Sqlite(other),
    }
}

//! Storage Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No window, or localStorage is blocked (private mode, sandboxed iframe)
    #[error("browser storage is unavailable")]
    Unavailable,

    #[error("failed to encode todo list: {0}")]
    Encode(#[from] serde_json::Error),

    /// A JS exception thrown by setItem/removeItem (e.g. quota exceeded)
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

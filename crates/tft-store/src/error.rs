/// Errors from keyed store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the given key exists.
    #[error("record not found: {0}")]
    NotFound(String),

    /// A record with the given key already exists.
    #[error("record already exists: {0}")]
    Conflict(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

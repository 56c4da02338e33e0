use tft_store::StoreError;

/// Errors from change log operations.
#[derive(Debug, thiserror::Error)]
pub enum ChangelogError {
    /// No update with the given identifier exists in the log.
    #[error("update {0} does not exist")]
    NotFound(i64),

    /// Failure in the backing record store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for change log operations.
pub type ChangelogResult<T> = Result<T, ChangelogError>;

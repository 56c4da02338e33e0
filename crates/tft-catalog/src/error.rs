use tft_changelog::{ChangelogError, EntityType};
use tft_store::StoreError;

/// Errors from entity service operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No entity with the given key exists in the collection.
    #[error("{entity} {key} not found")]
    NotFound { entity: EntityType, key: String },

    /// An entity with the given key already exists in the collection.
    #[error("{entity} {key} already exists")]
    Conflict { entity: EntityType, key: String },

    /// Failure in the backing record store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Failure registering the mutation in the change log.
    #[error("changelog error: {0}")]
    Changelog(#[from] ChangelogError),
}

/// Result alias for entity service operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

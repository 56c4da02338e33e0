use tft_types::Keyed;

use crate::error::StoreResult;

/// Keyed record store.
///
/// All implementations must satisfy these invariants:
/// - Keys are unique within a store; `add` on a present key fails with
///   `Conflict`, never overwrites.
/// - `get_all` returns records in insertion order. Callers scan it
///   positionally; reordering breaks them.
/// - `update` replaces the whole record under an existing key; `get`,
///   `update`, and `delete` on an absent key fail with `NotFound`.
/// - Each operation is atomic at record granularity. Concurrent readers
///   never observe a half-written record.
pub trait KeyedStore<T: Keyed + Clone>: Send + Sync {
    /// Check whether a record with the given key exists.
    fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Fetch one record by key.
    fn get(&self, key: &str) -> StoreResult<T>;

    /// Fetch every record, in insertion order.
    fn get_all(&self) -> StoreResult<Vec<T>>;

    /// Insert a new record. Fails with `Conflict` if the key is taken.
    fn add(&self, record: T) -> StoreResult<T>;

    /// Replace the record stored under `key`.
    fn update(&self, key: &str, record: T) -> StoreResult<T>;

    /// Remove the record stored under `key`.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Number of records in the store.
    fn count(&self) -> StoreResult<usize> {
        Ok(self.get_all()?.len())
    }
}

use std::sync::RwLock;

use tft_types::Keyed;

use crate::error::{StoreError, StoreResult};
use crate::traits::KeyedStore;

/// In-memory, insertion-ordered keyed store.
///
/// Records live in a `Vec` behind an `RwLock`; key lookups are linear
/// scans. Collections here are small (a few hundred records at most) and
/// every range query is a full scan anyway, so no secondary index is kept.
/// Records are cloned on read/write.
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Keyed + Clone> InMemoryStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl<T: Keyed + Clone> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone + Send + Sync> KeyedStore<T> for InMemoryStore<T> {
    fn exists(&self, key: &str) -> StoreResult<bool> {
        let records = self.records.read().expect("lock poisoned");
        Ok(records.iter().any(|r| r.key() == key))
    }

    fn get(&self, key: &str) -> StoreResult<T> {
        let records = self.records.read().expect("lock poisoned");
        records
            .iter()
            .find(|r| r.key() == key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn get_all(&self) -> StoreResult<Vec<T>> {
        let records = self.records.read().expect("lock poisoned");
        Ok(records.clone())
    }

    fn add(&self, record: T) -> StoreResult<T> {
        let mut records = self.records.write().expect("lock poisoned");
        if records.iter().any(|r| r.key() == record.key()) {
            return Err(StoreError::Conflict(record.key().to_string()));
        }
        records.push(record.clone());
        Ok(record)
    }

    fn update(&self, key: &str, record: T) -> StoreResult<T> {
        let mut records = self.records.write().expect("lock poisoned");
        let slot = records
            .iter_mut()
            .find(|r| r.key() == key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        *slot = record.clone();
        Ok(record)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut records = self.records.write().expect("lock poisoned");
        let position = records
            .iter()
            .position(|r| r.key() == key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        records.remove(position);
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.len())
    }
}

impl<T: Keyed + Clone> std::fmt::Debug for InMemoryStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Record {
        key: String,
        value: i32,
    }

    impl Keyed for Record {
        fn key(&self) -> &str {
            &self.key
        }
    }

    fn record(key: &str, value: i32) -> Record {
        Record {
            key: key.into(),
            value,
        }
    }

    #[test]
    fn add_and_get() {
        let store = InMemoryStore::new();
        store.add(record("a", 1)).unwrap();
        let fetched = store.get("a").unwrap();
        assert_eq!(fetched.value, 1);
    }

    #[test]
    fn get_missing_is_not_found() {
        let store: InMemoryStore<Record> = InMemoryStore::new();
        let error = store.get("missing").unwrap_err();
        assert!(matches!(error, StoreError::NotFound(key) if key == "missing"));
    }

    #[test]
    fn add_duplicate_is_conflict() {
        let store = InMemoryStore::new();
        store.add(record("a", 1)).unwrap();
        let error = store.add(record("a", 2)).unwrap_err();
        assert!(matches!(error, StoreError::Conflict(key) if key == "a"));
        // Original record untouched
        assert_eq!(store.get("a").unwrap().value, 1);
    }

    #[test]
    fn get_all_preserves_insertion_order() {
        let store = InMemoryStore::new();
        store.add(record("c", 3)).unwrap();
        store.add(record("a", 1)).unwrap();
        store.add(record("b", 2)).unwrap();

        let keys: Vec<_> = store
            .get_all()
            .unwrap()
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn update_replaces_record_in_place() {
        let store = InMemoryStore::new();
        store.add(record("a", 1)).unwrap();
        store.add(record("b", 2)).unwrap();

        store.update("a", record("a", 10)).unwrap();
        assert_eq!(store.get("a").unwrap().value, 10);

        // Position in the scan order is unchanged
        let keys: Vec<_> = store
            .get_all()
            .unwrap()
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn update_missing_is_not_found() {
        let store: InMemoryStore<Record> = InMemoryStore::new();
        let error = store.update("a", record("a", 1)).unwrap_err();
        assert!(matches!(error, StoreError::NotFound(_)));
    }

    #[test]
    fn delete_removes_record() {
        let store = InMemoryStore::new();
        store.add(record("a", 1)).unwrap();
        store.delete("a").unwrap();
        assert!(!store.exists("a").unwrap());
        assert!(matches!(
            store.delete("a").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[test]
    fn exists_and_count() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        store.add(record("a", 1)).unwrap();
        store.add(record("b", 2)).unwrap();
        assert!(store.exists("a").unwrap());
        assert!(!store.exists("z").unwrap());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryStore::new();
        store.add(record("a", 1)).unwrap();
        store.add(record("b", 2)).unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryStore::new());
        store.add(record("shared", 7)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let fetched = store.get("shared").unwrap();
                    assert_eq!(fetched.value, 7);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryStore::new();
        store.add(record("a", 1)).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryStore"));
        assert!(debug.contains("record_count"));
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tft_store::{KeyedStore, StoreError};
use tft_types::Keyed;

use crate::error::{ChangelogError, ChangelogResult};

/// One immutable log record.
///
/// `identifier` is assigned by the update service at append time and is
/// strictly increasing across the log. `key` is its string form, used as
/// the lookup key in the backing store; the two always agree. `lines` is
/// the ordered diff-line sequence; order is significant and preserved on
/// read. A record is never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Position of this record in the log.
    pub identifier: i64,
    /// String form of `identifier`.
    pub key: String,
    /// Ordered diff lines in wire form.
    pub lines: Vec<String>,
}

impl Update {
    /// Build a record, deriving `key` from `identifier`.
    pub fn new(identifier: i64, lines: Vec<String>) -> Self {
        Self {
            identifier,
            key: identifier.to_string(),
            lines,
        }
    }
}

impl Keyed for Update {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Append-only store of [`Update`] records.
///
/// A thin specialization of the generic keyed store: records are addressed
/// by the string form of their identifier, and `get_all` yields them in
/// append order. Identifier assignment happens in the update service, not
/// here.
pub struct UpdateLog {
    store: Arc<dyn KeyedStore<Update>>,
}

impl UpdateLog {
    pub fn new(store: Arc<dyn KeyedStore<Update>>) -> Self {
        Self { store }
    }

    /// Check whether a record with the given identifier exists.
    pub fn exists(&self, identifier: i64) -> ChangelogResult<bool> {
        Ok(self.store.exists(&identifier.to_string())?)
    }

    /// Fetch every record, in append order.
    pub fn get_all(&self) -> ChangelogResult<Vec<Update>> {
        Ok(self.store.get_all()?)
    }

    /// Fetch one record by identifier.
    pub fn get(&self, identifier: i64) -> ChangelogResult<Update> {
        match self.store.get(&identifier.to_string()) {
            Ok(update) => Ok(update),
            Err(StoreError::NotFound(_)) => Err(ChangelogError::NotFound(identifier)),
            Err(e) => Err(e.into()),
        }
    }

    /// The most recently appended record, if any.
    pub fn last(&self) -> ChangelogResult<Option<Update>> {
        Ok(self.get_all()?.pop())
    }

    /// Persist a new record. The caller has already assigned
    /// `identifier`/`key`.
    pub fn append(&self, update: Update) -> ChangelogResult<Update> {
        Ok(self.store.add(update)?)
    }

    /// Remove one record by identifier.
    pub fn delete(&self, identifier: i64) -> ChangelogResult<()> {
        match self.store.delete(&identifier.to_string()) {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound(_)) => Err(ChangelogError::NotFound(identifier)),
            Err(e) => Err(e.into()),
        }
    }
}

use std::sync::{Arc, Mutex};

use tft_store::{InMemoryStore, KeyedStore};
use tracing::debug;

use crate::encoder::{encode_create, encode_delete, encode_update, render_lines};
use crate::error::ChangelogResult;
use crate::log::{Update, UpdateLog};
use crate::schema::Diffable;

/// Identifier returned by [`UpdateService::last_identifier`] when the log
/// holds no records. The first registered change gets identifier `0`.
pub const EMPTY_LOG_IDENTIFIER: i64 = -1;

/// The single authority for identifier assignment and "what changed"
/// queries.
///
/// Identifiers are assigned here and only here; callers never supply them.
/// Under a single writer the log's identifiers form the contiguous
/// sequence `0, 1, 2, ...`; an administrative delete can punch a hole,
/// which catch-up queries skip over silently.
pub struct UpdateService {
    log: UpdateLog,
    // registration is a read-then-append; the guard keeps two concurrent
    // registrations from reading the same tail and double-assigning.
    assign: Mutex<()>,
}

impl UpdateService {
    pub fn new(store: Arc<dyn KeyedStore<Update>>) -> Self {
        Self {
            log: UpdateLog::new(store),
            assign: Mutex::new(()),
        }
    }

    /// Service backed by a fresh in-memory log. For tests and embedding.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Append a new record carrying `lines` and return its freshly
    /// assigned identifier.
    pub fn register_change(&self, lines: Vec<String>) -> ChangelogResult<i64> {
        let _guard = self.assign.lock().expect("lock poisoned");
        let next = match self.log.last()? {
            Some(last) => last.identifier + 1,
            None => 0,
        };
        self.log.append(Update::new(next, lines))?;
        debug!(identifier = next, "registered update");
        Ok(next)
    }

    /// Register an entity creation.
    pub fn register_created<E: Diffable>(&self, entity: &E) -> ChangelogResult<i64> {
        self.register_change(render_lines(&encode_create(entity)))
    }

    /// Register an entity update.
    pub fn register_updated<E: Diffable>(&self, entity: &E) -> ChangelogResult<i64> {
        self.register_change(render_lines(&encode_update(entity)))
    }

    /// Register an entity deletion.
    pub fn register_deleted<E: Diffable>(&self, entity: &E) -> ChangelogResult<i64> {
        self.register_change(render_lines(&encode_delete(entity)))
    }

    /// Identifier of the most recently appended record, or
    /// [`EMPTY_LOG_IDENTIFIER`] if the log is empty.
    pub fn last_identifier(&self) -> ChangelogResult<i64> {
        Ok(self
            .log
            .last()?
            .map(|u| u.identifier)
            .unwrap_or(EMPTY_LOG_IDENTIFIER))
    }

    /// Point lookup by identifier.
    pub fn get_update(&self, identifier: i64) -> ChangelogResult<Update> {
        self.log.get(identifier)
    }

    /// Catch-up query: every record with identifier strictly greater than
    /// `identifier`, in ascending order.
    ///
    /// Scan-based: records missing from the middle of the log (deleted)
    /// are skipped, not errors. Passing `last_identifier()` yields an
    /// empty sequence; passing `-1` yields the whole log.
    pub fn updates_from(&self, identifier: i64) -> ChangelogResult<Vec<Update>> {
        Ok(self
            .log
            .get_all()?
            .into_iter()
            .filter(|u| u.identifier > identifier)
            .collect())
    }

    /// Administrative removal of one record.
    pub fn delete_update(&self, identifier: i64) -> ChangelogResult<()> {
        self.log.delete(identifier)?;
        debug!(identifier, "deleted update");
        Ok(())
    }
}

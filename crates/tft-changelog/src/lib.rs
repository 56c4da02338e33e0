//! Append-only change log for the TFT Friendly backend.
//!
//! Every entity mutation (create/update/delete of champions, items,
//! traits, sets, abilities) is rendered into an ordered sequence of diff
//! lines and appended to a single log under a monotonically increasing
//! identifier. Clients synchronize incrementally by asking for everything
//! after the last identifier they have seen.
//!
//! # Key Types
//!
//! - [`DiffLine`] — one atomic change, with its legacy wire rendering
//! - [`Diffable`] — an entity type's declarative diffable shape
//! - [`Update`] — one immutable log record (identifier + diff lines)
//! - [`UpdateLog`] — the append-only record store
//! - [`UpdateService`] — identifier assignment and catch-up queries

pub mod encoder;
pub mod error;
pub mod line;
pub mod log;
pub mod schema;
pub mod service;

pub use encoder::{encode_create, encode_delete, encode_update, render_lines};
pub use error::{ChangelogError, ChangelogResult};
pub use line::{DiffLine, EntityType, ParseLineError};
pub use schema::Diffable;
pub use log::{Update, UpdateLog};
pub use service::{UpdateService, EMPTY_LOG_IDENTIFIER};

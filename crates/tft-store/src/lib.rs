//! Generic keyed record store.
//!
//! Every collection in the backend (champions, items, traits, sets,
//! abilities, and the update log itself) is a set of records addressed by
//! a stable string key. This crate provides the [`KeyedStore`] contract
//! and an in-memory, insertion-ordered implementation.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use traits::KeyedStore;

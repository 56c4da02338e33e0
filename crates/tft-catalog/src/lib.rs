//! Entity services: keyed CRUD over game-data collections, with every
//! mutation registered in the change log.
//!
//! One generic [`CatalogService`] covers all entity types; the per-type
//! aliases ([`ChampionService`], [`ItemService`], ...) are the public
//! faces the HTTP layer talks to.

pub mod error;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use service::{
    AbilityEffectService, AbilityService, CatalogService, ChampionService, ItemService,
    SetService, TraitService,
};

use std::sync::Arc;

use tft_changelog::{Diffable, UpdateService};
use tft_store::{KeyedStore, StoreError};
use tft_types::{Ability, AbilityEffect, Champion, Item, Set, Trait};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// CRUD façade over one entity collection.
///
/// Every successful mutation is registered in the change log after the
/// store write. If registration fails the store mutation is not rolled
/// back; the error propagates and the log is missing that record. This is
/// the inherited double-write behavior of the sync protocol.
pub struct CatalogService<E: Diffable + Clone + Send + Sync> {
    store: Arc<dyn KeyedStore<E>>,
    changelog: Arc<UpdateService>,
}

pub type ChampionService = CatalogService<Champion>;
pub type AbilityService = CatalogService<Ability>;
pub type AbilityEffectService = CatalogService<AbilityEffect>;
pub type ItemService = CatalogService<Item>;
pub type TraitService = CatalogService<Trait>;
pub type SetService = CatalogService<Set>;

impl<E: Diffable + Clone + Send + Sync> CatalogService<E> {
    pub fn new(store: Arc<dyn KeyedStore<E>>, changelog: Arc<UpdateService>) -> Self {
        Self { store, changelog }
    }

    /// Every entity in the collection, in insertion order.
    pub fn list(&self) -> CatalogResult<Vec<E>> {
        Ok(self.store.get_all()?)
    }

    /// One entity by key.
    pub fn get(&self, key: &str) -> CatalogResult<E> {
        self.store.get(key).map_err(|e| self.tag(key, e))
    }

    /// Insert a new entity and register its creation.
    pub fn add(&self, entity: E) -> CatalogResult<E> {
        let key = entity.key().to_string();
        let added = self.store.add(entity).map_err(|e| self.tag(&key, e))?;
        self.changelog.register_created(&added)?;
        debug!(entity = %E::ENTITY, key = %key, "added entity");
        Ok(added)
    }

    /// Replace the entity stored under `key` and register the update.
    pub fn update(&self, key: &str, entity: E) -> CatalogResult<E> {
        let updated = self
            .store
            .update(key, entity)
            .map_err(|e| self.tag(key, e))?;
        self.changelog.register_updated(&updated)?;
        debug!(entity = %E::ENTITY, key, "updated entity");
        Ok(updated)
    }

    /// Remove the entity stored under `key` and register the deletion.
    pub fn delete(&self, key: &str) -> CatalogResult<()> {
        let entity = self.store.get(key).map_err(|e| self.tag(key, e))?;
        self.store.delete(key).map_err(|e| self.tag(key, e))?;
        self.changelog.register_deleted(&entity)?;
        debug!(entity = %E::ENTITY, key, "deleted entity");
        Ok(())
    }

    fn tag(&self, key: &str, error: StoreError) -> CatalogError {
        match error {
            StoreError::NotFound(_) => CatalogError::NotFound {
                entity: E::ENTITY,
                key: key.to_string(),
            },
            StoreError::Conflict(_) => CatalogError::Conflict {
                entity: E::ENTITY,
                key: key.to_string(),
            },
            other => CatalogError::Store(other),
        }
    }
}

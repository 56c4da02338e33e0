use std::sync::Arc;

use tft_catalog::{
    AbilityEffectService, AbilityService, CatalogService, ChampionService, ItemService,
    SetService, TraitService,
};
use tft_changelog::{Diffable, UpdateService};
use tft_store::InMemoryStore;
use tft_types::{Ability, AbilityEffect, Champion, Item, Set, Trait};

/// Shared application state: one service per collection, all registering
/// into the same update service.
#[derive(Clone)]
pub struct AppState {
    pub updates: Arc<UpdateService>,
    pub champions: Arc<ChampionService>,
    pub abilities: Arc<AbilityService>,
    pub ability_effects: Arc<AbilityEffectService>,
    pub items: Arc<ItemService>,
    pub traits: Arc<TraitService>,
    pub sets: Arc<SetService>,
}

impl AppState {
    /// State backed entirely by in-memory stores.
    pub fn in_memory() -> Self {
        let updates = Arc::new(UpdateService::in_memory());
        Self {
            champions: Arc::new(CatalogService::new(
                Arc::new(InMemoryStore::new()),
                Arc::clone(&updates),
            )),
            abilities: Arc::new(CatalogService::new(
                Arc::new(InMemoryStore::new()),
                Arc::clone(&updates),
            )),
            ability_effects: Arc::new(CatalogService::new(
                Arc::new(InMemoryStore::new()),
                Arc::clone(&updates),
            )),
            items: Arc::new(CatalogService::new(
                Arc::new(InMemoryStore::new()),
                Arc::clone(&updates),
            )),
            traits: Arc::new(CatalogService::new(
                Arc::new(InMemoryStore::new()),
                Arc::clone(&updates),
            )),
            sets: Arc::new(CatalogService::new(
                Arc::new(InMemoryStore::new()),
                Arc::clone(&updates),
            )),
            updates,
        }
    }
}

/// Accessor seam letting one set of generic handlers serve every
/// collection.
pub trait Catalog<E: Diffable + Clone + Send + Sync> {
    fn catalog(&self) -> &CatalogService<E>;
}

impl Catalog<Champion> for AppState {
    fn catalog(&self) -> &CatalogService<Champion> {
        &self.champions
    }
}

impl Catalog<Ability> for AppState {
    fn catalog(&self) -> &CatalogService<Ability> {
        &self.abilities
    }
}

impl Catalog<AbilityEffect> for AppState {
    fn catalog(&self) -> &CatalogService<AbilityEffect> {
        &self.ability_effects
    }
}

impl Catalog<Item> for AppState {
    fn catalog(&self) -> &CatalogService<Item> {
        &self.items
    }
}

impl Catalog<Trait> for AppState {
    fn catalog(&self) -> &CatalogService<Trait> {
        &self.traits
    }
}

impl Catalog<Set> for AppState {
    fn catalog(&self) -> &CatalogService<Set> {
        &self.sets
    }
}

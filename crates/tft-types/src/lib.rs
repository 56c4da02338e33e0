//! Foundation types for the TFT Friendly backend.
//!
//! This crate provides the game-data entity models shared by every other
//! crate in the workspace, plus the [`Keyed`] seam used by the generic
//! record store.
//!
//! # Key Types
//!
//! - [`Champion`] — a playable unit with stats, traits, and an ability
//! - [`Ability`] / [`AbilityEffect`] — champion abilities and their effects
//! - [`Item`] — an equippable item, possibly built from components
//! - [`Trait`] / [`TraitLevel`] — a trait and its activation thresholds
//! - [`Set`] — a game set grouping champions, items, traits, and origins
//! - [`Keyed`] — anything addressable by a stable string key

pub mod ability;
pub mod champion;
pub mod entity;
pub mod item;
pub mod set;
pub mod traits;

pub use ability::{Ability, AbilityEffect};
pub use champion::Champion;
pub use entity::Keyed;
pub use item::Item;
pub use set::Set;
pub use traits::{Trait, TraitLevel};

use serde::{Deserialize, Serialize};

use crate::entity::Keyed;

/// A champion trait (class or origin synergy).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    /// Stable lookup key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Trait category ("class" or "origin").
    #[serde(rename = "type")]
    pub kind: String,
    /// Effect description.
    pub description: String,
    /// Passive effect description, if any.
    pub passive: String,
    /// Activation thresholds, in ascending order.
    pub levels: Vec<TraitLevel>,
}

impl Keyed for Trait {
    fn key(&self) -> &str {
        &self.key
    }
}

/// One activation threshold of a trait.
///
/// Field names keep their historical wire spelling; trait levels are
/// rendered verbatim into diff lines and client caches depend on them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitLevel {
    /// Threshold tier ("bronze", "silver", "gold", ...).
    #[serde(rename = "Type")]
    pub kind: String,
    /// Upper unit count for this tier (inclusive).
    #[serde(rename = "Max")]
    pub max: i32,
    /// Lower unit count for this tier (inclusive).
    #[serde(rename = "Min")]
    pub min: i32,
}

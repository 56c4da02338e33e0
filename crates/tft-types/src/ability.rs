use serde::{Deserialize, Serialize};

use crate::entity::Keyed;

/// A champion ability.
///
/// `effect_keys` references [`AbilityEffect`] records by key; the effects
/// themselves are stored in their own collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Stable lookup key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Active component description.
    pub active: String,
    /// Passive component description.
    pub passive: String,
    /// Keys of the ability's effects.
    pub effect_keys: Vec<String>,
}

impl Keyed for Ability {
    fn key(&self) -> &str {
        &self.key
    }
}

/// A single scaling effect of an ability.
///
/// `values` carries one entry per star level; `is_percentage` marks
/// whether those values are percentages or flat amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffect {
    /// Stable lookup key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Whether the values are percentages.
    pub is_percentage: bool,
    /// Effect value per star level.
    pub values: Vec<i32>,
}

impl Keyed for AbilityEffect {
    fn key(&self) -> &str {
        &self.key
    }
}

use serde::{Deserialize, Serialize};

use crate::entity::Keyed;

/// A playable champion.
///
/// Scalar stats are single values; `health`, `damage`, and `dps` carry one
/// entry per star level. `ability_key` references an [`crate::Ability`] by
/// key rather than embedding it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Stable lookup key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Shop cost.
    pub cost: i32,
    /// Base armor.
    pub armor: i32,
    /// Base magic resist.
    pub magic_resist: i32,
    /// Attack speed (scaled integer).
    pub speed: i32,
    /// Attack range in hexes.
    pub range: i32,
    /// Mana pool size.
    pub mana_max: i32,
    /// Key of the champion's ability.
    pub ability_key: String,
    /// Trait keys.
    pub traits: Vec<String>,
    /// Origin keys.
    pub origins: Vec<String>,
    /// Health per star level.
    pub health: Vec<i32>,
    /// Attack damage per star level.
    pub damage: Vec<i32>,
    /// Damage per second per star level.
    pub dps: Vec<i32>,
}

impl Keyed for Champion {
    fn key(&self) -> &str {
        &self.key
    }
}

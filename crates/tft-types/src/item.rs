use serde::{Deserialize, Serialize};

use crate::entity::Keyed;

/// An equippable item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable lookup key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Numeric in-game item id.
    pub item_id: i32,
    /// Effect description.
    pub description: String,
    /// Whether only one copy may be equipped per unit.
    pub is_unique: bool,
    /// Whether this is the radiant variant.
    pub is_radiant: bool,
    /// Whether this is the shadow variant.
    pub is_shadow: bool,
    /// Numeric ids of the component items this item is built from.
    /// Empty for base components.
    pub components: Vec<i32>,
}

impl Keyed for Item {
    fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let item = Item {
            key: "infinity-edge".into(),
            name: "Infinity Edge".into(),
            item_id: 26,
            description: "Critical strikes deal bonus damage".into(),
            is_unique: false,
            is_radiant: false,
            is_shadow: false,
            components: vec![2, 6],
        };
        let json = serde_json::to_string(&item).unwrap();
        let decoded: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, item);
        assert_eq!(decoded.key(), "infinity-edge");
    }
}

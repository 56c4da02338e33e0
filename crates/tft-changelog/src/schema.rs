use tft_types::{Ability, AbilityEffect, Champion, Item, Keyed, Set, Trait};

use crate::line::EntityType;

/// An entity type's diffable shape.
///
/// Each implementation declares the fixed partition of the type's
/// externally visible attributes into scalar fields and list fields, in
/// the order the encoder must emit them. Adding a field to an entity type
/// means adding it here; there is no reflection — every emitted field is
/// named in one reviewable place.
///
/// Field names and value renderings are wire contract: deployed clients
/// replay them byte-for-byte.
pub trait Diffable: Keyed {
    /// Entity type tag emitted into every diff line.
    const ENTITY: EntityType;

    /// Scalar fields in emission order, each rendered to its wire form.
    fn scalar_fields(&self) -> Vec<(&'static str, String)>;

    /// List fields in emission order, each element rendered to its wire
    /// form, preserving list order.
    fn list_fields(&self) -> Vec<(&'static str, Vec<String>)>;
}

fn strings(values: &[String]) -> Vec<String> {
    values.to_vec()
}

fn numbers(values: &[i32]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Diffable for Champion {
    const ENTITY: EntityType = EntityType::Champion;

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Cost", self.cost.to_string()),
            ("Armor", self.armor.to_string()),
            ("MagicResist", self.magic_resist.to_string()),
            ("Speed", self.speed.to_string()),
            ("Range", self.range.to_string()),
            ("ManaMax", self.mana_max.to_string()),
            ("AbilityKey", self.ability_key.clone()),
        ]
    }

    fn list_fields(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![
            ("Traits", strings(&self.traits)),
            ("Origins", strings(&self.origins)),
            ("Health", numbers(&self.health)),
            ("Damage", numbers(&self.damage)),
            ("Dps", numbers(&self.dps)),
        ]
    }
}

impl Diffable for Ability {
    const ENTITY: EntityType = EntityType::Ability;

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Active", self.active.clone()),
            ("Passive", self.passive.clone()),
        ]
    }

    fn list_fields(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![("EffectKey", strings(&self.effect_keys))]
    }
}

impl Diffable for AbilityEffect {
    const ENTITY: EntityType = EntityType::AbilityEffect;

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("IsPercentage", self.is_percentage.to_string()),
        ]
    }

    fn list_fields(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![("Value", numbers(&self.values))]
    }
}

impl Diffable for Item {
    const ENTITY: EntityType = EntityType::Item;

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("ItemId", self.item_id.to_string()),
            ("Description", self.description.clone()),
            ("IsUnique", self.is_unique.to_string()),
            ("IsRadiant", self.is_radiant.to_string()),
            ("IsShadow", self.is_shadow.to_string()),
        ]
    }

    fn list_fields(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![("Components", numbers(&self.components))]
    }
}

impl Diffable for Trait {
    const ENTITY: EntityType = EntityType::Trait;

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Type", self.kind.clone()),
            ("Description", self.description.clone()),
            ("Passive", self.passive.clone()),
        ]
    }

    fn list_fields(&self) -> Vec<(&'static str, Vec<String>)> {
        // Levels are structured; each element is rendered as compact JSON,
        // matching what clients already parse.
        let levels = self
            .levels
            .iter()
            .map(|level| {
                serde_json::to_string(level).expect("trait level always serializes")
            })
            .collect();
        vec![("Levels", levels)]
    }
}

impl Diffable for Set {
    const ENTITY: EntityType = EntityType::Set;

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("IsCurrentSet", self.is_current_set.to_string()),
            ("StartDate", self.start_date.to_rfc3339()),
            ("EndDate", self.end_date.to_rfc3339()),
        ]
    }

    fn list_fields(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![
            ("ChampionsKey", strings(&self.champions_keys)),
            ("ItemsKey", strings(&self.items_keys)),
            ("OriginsKey", strings(&self.origins_keys)),
            ("TraitsKey", strings(&self.traits_keys)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tft_types::TraitLevel;

    #[test]
    fn champion_shape_is_fixed() {
        let champion = Champion {
            key: "ahri".into(),
            name: "Ahri".into(),
            cost: 4,
            armor: 30,
            magic_resist: 30,
            speed: 75,
            range: 4,
            mana_max: 80,
            ability_key: "orb".into(),
            traits: vec![],
            origins: vec![],
            health: vec![],
            damage: vec![],
            dps: vec![],
        };
        let scalars: Vec<_> = champion
            .scalar_fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            scalars,
            vec![
                "Name",
                "Cost",
                "Armor",
                "MagicResist",
                "Speed",
                "Range",
                "ManaMax",
                "AbilityKey"
            ]
        );
        let lists: Vec<_> = champion
            .list_fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(lists, vec!["Traits", "Origins", "Health", "Damage", "Dps"]);
    }

    #[test]
    fn trait_levels_render_as_json() {
        let t = Trait {
            key: "spellweaver".into(),
            name: "Spellweaver".into(),
            kind: "class".into(),
            description: "desc".into(),
            passive: String::new(),
            levels: vec![TraitLevel {
                kind: "bronze".into(),
                max: 3,
                min: 2,
            }],
        };
        let lists = t.list_fields();
        assert_eq!(lists[0].0, "Levels");
        assert_eq!(lists[0].1, vec![r#"{"Type":"bronze","Max":3,"Min":2}"#]);
    }

    #[test]
    fn booleans_render_lowercase() {
        let effect = AbilityEffect {
            key: "orb-damage".into(),
            name: "Damage".into(),
            is_percentage: true,
            values: vec![10, 20],
        };
        let scalars = effect.scalar_fields();
        assert_eq!(scalars[1], ("IsPercentage", "true".to_string()));
    }
}

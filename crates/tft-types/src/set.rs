use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Keyed;

/// A game set: the rotating pool of champions, items, traits, and origins
/// active between two dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    /// Stable lookup key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Whether this is the set currently in rotation.
    pub is_current_set: bool,
    /// When the set entered rotation.
    pub start_date: DateTime<Utc>,
    /// When the set leaves (or left) rotation.
    pub end_date: DateTime<Utc>,
    /// Keys of the champions in the set.
    pub champions_keys: Vec<String>,
    /// Keys of the items in the set.
    pub items_keys: Vec<String>,
    /// Keys of the origins in the set.
    pub origins_keys: Vec<String>,
    /// Keys of the traits in the set.
    pub traits_keys: Vec<String>,
}

impl Keyed for Set {
    fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serde_roundtrip() {
        let set = Set {
            key: "set5".into(),
            name: "Reckoning".into(),
            is_current_set: true,
            start_date: Utc.with_ymd_and_hms(2021, 4, 28, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2021, 11, 3, 0, 0, 0).unwrap(),
            champions_keys: vec!["ahri".into()],
            items_keys: vec!["infinity-edge".into()],
            origins_keys: vec!["spirit".into()],
            traits_keys: vec!["spellweaver".into()],
        };
        let json = serde_json::to_string(&set).unwrap();
        let decoded: Set = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, set);
    }
}

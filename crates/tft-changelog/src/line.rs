use serde::{Deserialize, Serialize};

/// Entity type tag carried by every diff line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Champion,
    Ability,
    AbilityEffect,
    Item,
    Trait,
    Set,
}

impl EntityType {
    /// Wire spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Champion => "CHAMPION",
            Self::Ability => "ABILITY",
            Self::AbilityEffect => "ABILITYEFFECT",
            Self::Item => "ITEM",
            Self::Trait => "TRAIT",
            Self::Set => "SET",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = ParseLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHAMPION" => Ok(Self::Champion),
            "ABILITY" => Ok(Self::Ability),
            "ABILITYEFFECT" => Ok(Self::AbilityEffect),
            "ITEM" => Ok(Self::Item),
            "TRAIT" => Ok(Self::Trait),
            "SET" => Ok(Self::Set),
            other => Err(ParseLineError::UnknownEntity(other.to_string())),
        }
    }
}

/// One atomic change in an update's line sequence.
///
/// The `Display` impl emits the legacy semicolon-delimited wire format that
/// deployed clients replay, and `FromStr` parses it back:
///
/// ```text
/// CREATE;TYPE;key
/// SET;TYPE;key;Field;value;
/// UPDATE;TYPE;key;Field;value;
/// APPEND;TYPE;key;Field;value
/// REMOVE;TYPE;key;Field
/// DELETE;TYPE;key
/// ```
///
/// `Set` is the initial scalar assignment emitted at creation; `Update` is
/// the reassignment emitted on entity update. Both mean "assign this value
/// to this scalar field".
///
/// Values are embedded unescaped, so a value containing `;` is out of
/// contract: it renders fine but does not survive `FromStr`. Entity keys
/// and field names never contain the delimiter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffLine {
    /// Announces a new entity.
    Create { entity: EntityType, key: String },
    /// Assigns a scalar field at creation time.
    Set {
        entity: EntityType,
        key: String,
        field: String,
        value: String,
    },
    /// Reassigns a scalar field at update time.
    Update {
        entity: EntityType,
        key: String,
        field: String,
        value: String,
    },
    /// Appends one element to a list-valued field.
    Append {
        entity: EntityType,
        key: String,
        field: String,
        value: String,
    },
    /// Clears a list-valued field entirely.
    Remove {
        entity: EntityType,
        key: String,
        field: String,
    },
    /// Announces entity deletion.
    Delete { entity: EntityType, key: String },
}

impl std::fmt::Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { entity, key } => write!(f, "CREATE;{entity};{key}"),
            Self::Set {
                entity,
                key,
                field,
                value,
            } => write!(f, "SET;{entity};{key};{field};{value};"),
            Self::Update {
                entity,
                key,
                field,
                value,
            } => write!(f, "UPDATE;{entity};{key};{field};{value};"),
            Self::Append {
                entity,
                key,
                field,
                value,
            } => write!(f, "APPEND;{entity};{key};{field};{value}"),
            Self::Remove { entity, key, field } => {
                write!(f, "REMOVE;{entity};{key};{field}")
            }
            Self::Delete { entity, key } => write!(f, "DELETE;{entity};{key}"),
        }
    }
}

/// Errors from parsing a wire-format diff line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseLineError {
    /// The line is empty.
    #[error("empty diff line")]
    Empty,

    /// The leading operation tag is not one of the six known ops.
    #[error("unknown diff operation: {0}")]
    UnknownOp(String),

    /// The entity type tag is not recognized.
    #[error("unknown entity type: {0}")]
    UnknownEntity(String),

    /// The line has the wrong number of segments for its operation.
    #[error("malformed {op} line: {line}")]
    BadShape { op: &'static str, line: String },
}

impl std::str::FromStr for DiffLine {
    type Err = ParseLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseLineError::Empty);
        }
        let parts: Vec<&str> = s.split(';').collect();
        let bad = |op: &'static str| ParseLineError::BadShape {
            op,
            line: s.to_string(),
        };
        match parts[0] {
            "CREATE" => {
                if parts.len() != 3 {
                    return Err(bad("CREATE"));
                }
                Ok(Self::Create {
                    entity: parts[1].parse()?,
                    key: parts[2].to_string(),
                })
            }
            "DELETE" => {
                if parts.len() != 3 {
                    return Err(bad("DELETE"));
                }
                Ok(Self::Delete {
                    entity: parts[1].parse()?,
                    key: parts[2].to_string(),
                })
            }
            // SET and UPDATE lines carry a trailing delimiter, so the split
            // yields a final empty segment.
            "SET" => {
                if parts.len() != 6 || !parts[5].is_empty() {
                    return Err(bad("SET"));
                }
                Ok(Self::Set {
                    entity: parts[1].parse()?,
                    key: parts[2].to_string(),
                    field: parts[3].to_string(),
                    value: parts[4].to_string(),
                })
            }
            "UPDATE" => {
                if parts.len() != 6 || !parts[5].is_empty() {
                    return Err(bad("UPDATE"));
                }
                Ok(Self::Update {
                    entity: parts[1].parse()?,
                    key: parts[2].to_string(),
                    field: parts[3].to_string(),
                    value: parts[4].to_string(),
                })
            }
            "APPEND" => {
                if parts.len() != 5 {
                    return Err(bad("APPEND"));
                }
                Ok(Self::Append {
                    entity: parts[1].parse()?,
                    key: parts[2].to_string(),
                    field: parts[3].to_string(),
                    value: parts[4].to_string(),
                })
            }
            "REMOVE" => {
                if parts.len() != 4 {
                    return Err(bad("REMOVE"));
                }
                Ok(Self::Remove {
                    entity: parts[1].parse()?,
                    key: parts[2].to_string(),
                    field: parts[3].to_string(),
                })
            }
            other => Err(ParseLineError::UnknownOp(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_line_rendering() {
        let line = DiffLine::Create {
            entity: EntityType::Champion,
            key: "ahri".into(),
        };
        assert_eq!(line.to_string(), "CREATE;CHAMPION;ahri");
    }

    #[test]
    fn set_line_has_trailing_delimiter() {
        let line = DiffLine::Set {
            entity: EntityType::Champion,
            key: "ahri".into(),
            field: "Cost".into(),
            value: "4".into(),
        };
        assert_eq!(line.to_string(), "SET;CHAMPION;ahri;Cost;4;");
    }

    #[test]
    fn update_line_has_trailing_delimiter() {
        let line = DiffLine::Update {
            entity: EntityType::Item,
            key: "infinity-edge".into(),
            field: "Name".into(),
            value: "Infinity Edge".into(),
        };
        assert_eq!(line.to_string(), "UPDATE;ITEM;infinity-edge;Name;Infinity Edge;");
    }

    #[test]
    fn append_line_has_no_trailing_delimiter() {
        let line = DiffLine::Append {
            entity: EntityType::Champion,
            key: "ahri".into(),
            field: "Traits".into(),
            value: "spellweaver".into(),
        };
        assert_eq!(line.to_string(), "APPEND;CHAMPION;ahri;Traits;spellweaver");
    }

    #[test]
    fn remove_and_delete_lines() {
        let remove = DiffLine::Remove {
            entity: EntityType::Set,
            key: "set5".into(),
            field: "ChampionsKey".into(),
        };
        assert_eq!(remove.to_string(), "REMOVE;SET;set5;ChampionsKey");

        let delete = DiffLine::Delete {
            entity: EntityType::Trait,
            key: "spellweaver".into(),
        };
        assert_eq!(delete.to_string(), "DELETE;TRAIT;spellweaver");
    }

    #[test]
    fn parse_all_shapes() {
        let cases = [
            "CREATE;CHAMPION;ahri",
            "SET;CHAMPION;ahri;Cost;4;",
            "UPDATE;ABILITY;orb;Name;Orb of Deception;",
            "APPEND;SET;set5;ItemsKey;infinity-edge",
            "REMOVE;ABILITYEFFECT;orb-damage;Value",
            "DELETE;ITEM;infinity-edge",
        ];
        for case in cases {
            let parsed: DiffLine = case.parse().unwrap();
            assert_eq!(parsed.to_string(), case);
        }
    }

    #[test]
    fn parse_rejects_unknown_op() {
        let error = "MERGE;CHAMPION;ahri".parse::<DiffLine>().unwrap_err();
        assert_eq!(error, ParseLineError::UnknownOp("MERGE".into()));
    }

    #[test]
    fn parse_rejects_unknown_entity() {
        let error = "CREATE;PLANET;mars".parse::<DiffLine>().unwrap_err();
        assert_eq!(error, ParseLineError::UnknownEntity("PLANET".into()));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        // SET without its trailing delimiter
        let error = "SET;CHAMPION;ahri;Cost;4".parse::<DiffLine>().unwrap_err();
        assert!(matches!(error, ParseLineError::BadShape { op: "SET", .. }));

        let error = "CREATE;CHAMPION".parse::<DiffLine>().unwrap_err();
        assert!(matches!(error, ParseLineError::BadShape { op: "CREATE", .. }));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<DiffLine>().unwrap_err(), ParseLineError::Empty);
    }

    #[test]
    fn entity_type_display_roundtrip() {
        let all = [
            EntityType::Champion,
            EntityType::Ability,
            EntityType::AbilityEffect,
            EntityType::Item,
            EntityType::Trait,
            EntityType::Set,
        ];
        for entity in all {
            let parsed: EntityType = entity.as_str().parse().unwrap();
            assert_eq!(parsed, entity);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Keys, field names, and values free of the delimiter.
        fn segment() -> impl Strategy<Value = String> {
            "[A-Za-z0-9_ .-]{1,20}"
        }

        proptest! {
            #[test]
            fn append_roundtrips(key in segment(), field in segment(), value in segment()) {
                let line = DiffLine::Append {
                    entity: EntityType::Champion,
                    key,
                    field,
                    value,
                };
                let parsed: DiffLine = line.to_string().parse().unwrap();
                prop_assert_eq!(parsed, line);
            }

            #[test]
            fn set_roundtrips(key in segment(), field in segment(), value in segment()) {
                let line = DiffLine::Set {
                    entity: EntityType::Item,
                    key,
                    field,
                    value,
                };
                let parsed: DiffLine = line.to_string().parse().unwrap();
                prop_assert_eq!(parsed, line);
            }
        }
    }
}

//! Diff encoding: translate one entity mutation into its diff-line
//! sequence.
//!
//! The encoders are pure and deterministic: encoding the same entity state
//! twice yields identical sequences. They assume well-formed entities; a
//! malformed entity is a programming error, not a runtime condition.

use crate::line::DiffLine;
use crate::schema::Diffable;

/// Encode an entity creation.
///
/// Emits `CREATE`, then one `SET` per scalar field, then one `APPEND` per
/// element of each list field, in declared field order and list order.
pub fn encode_create<E: Diffable>(entity: &E) -> Vec<DiffLine> {
    let key = entity.key();
    let mut lines = vec![DiffLine::Create {
        entity: E::ENTITY,
        key: key.to_string(),
    }];
    for (field, value) in entity.scalar_fields() {
        lines.push(DiffLine::Set {
            entity: E::ENTITY,
            key: key.to_string(),
            field: field.to_string(),
            value,
        });
    }
    push_appends(&mut lines, entity);
    lines
}

/// Encode an entity update.
///
/// Emits one `UPDATE` per scalar field with its new value, then one
/// `REMOVE` per list field (discarding prior elements), then `APPEND`
/// lines rebuilding every list from its current contents. No `CREATE`
/// line is emitted.
pub fn encode_update<E: Diffable>(entity: &E) -> Vec<DiffLine> {
    let key = entity.key();
    let mut lines = Vec::new();
    for (field, value) in entity.scalar_fields() {
        lines.push(DiffLine::Update {
            entity: E::ENTITY,
            key: key.to_string(),
            field: field.to_string(),
            value,
        });
    }
    for (field, _) in entity.list_fields() {
        lines.push(DiffLine::Remove {
            entity: E::ENTITY,
            key: key.to_string(),
            field: field.to_string(),
        });
    }
    push_appends(&mut lines, entity);
    lines
}

/// Encode an entity deletion: exactly one `DELETE` line.
pub fn encode_delete<E: Diffable>(entity: &E) -> Vec<DiffLine> {
    vec![DiffLine::Delete {
        entity: E::ENTITY,
        key: entity.key().to_string(),
    }]
}

/// Render a line sequence to its wire strings.
pub fn render_lines(lines: &[DiffLine]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

fn push_appends<E: Diffable>(lines: &mut Vec<DiffLine>, entity: &E) {
    let key = entity.key();
    for (field, values) in entity.list_fields() {
        for value in values {
            lines.push(DiffLine::Append {
                entity: E::ENTITY,
                key: key.to_string(),
                field: field.to_string(),
                value,
            });
        }
    }
}

//! Sibling scope fixtures for ordering tests

use lms_ordering::{EntityId, OrderedEntity};

/// Build one sibling at a position
pub fn entity(id: &str, position: u32) -> OrderedEntity {
    OrderedEntity::new(id, position)
}

/// Build a sibling snapshot from `(id, position)` rows
pub fn entities(rows: &[(&str, u32)]) -> Vec<OrderedEntity> {
    rows.iter()
        .map(|(id, position)| OrderedEntity::new(*id, *position))
        .collect()
}

/// Build an id list, e.g. a drag-and-drop result
pub fn ids(ids: &[&str]) -> Vec<EntityId> {
    ids.iter().map(|id| EntityId::from(*id)).collect()
}

/// A committed scope of `n` siblings named `item-0..item-n`, already dense
pub fn dense_scope(n: usize) -> Vec<OrderedEntity> {
    (0..n)
        .map(|index| OrderedEntity::new(format!("item-{index}"), index as u32))
        .collect()
}

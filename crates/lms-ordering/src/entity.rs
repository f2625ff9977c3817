//! Ordered entities and sibling scope identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a course, module, or chapter.
///
/// Ids are minted by the remote store and passed through verbatim; the
/// core never parses or interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A sibling entity with its committed position inside one scope.
///
/// Within a scope, positions are unique and form a dense `0..n-1`
/// sequence after any committed reorder. New siblings are appended at
/// `position == sibling_count`; archiving one triggers compaction of the
/// survivors (see [`crate::reorder::compact_after_removal`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedEntity {
    /// Entity id from the remote store
    pub id: EntityId,
    /// 0-based rank within the sibling scope
    pub position: u32,
}

impl OrderedEntity {
    /// Create an entity at a given position
    pub fn new(id: impl Into<EntityId>, position: u32) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// Identity of the parent scope a position diff applies to.
///
/// Positions are maintained independently per scope. Moving an entity to a
/// different parent is out of this crate's contract and is expressed at the
/// caller's layer as archive-then-recreate, with a fresh position computed
/// in the destination scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SiblingScope {
    /// Top-level courses (no parent)
    Root,
    /// Modules within a course
    Course { course_id: EntityId },
    /// Chapters within a module
    Module {
        course_id: EntityId,
        module_id: EntityId,
    },
}

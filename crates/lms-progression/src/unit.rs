//! Learning unit snapshot types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a learning unit (chapter or lesson)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UnitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One row of the server-authoritative curriculum snapshot.
///
/// Sequence order is the order of the fetched list; no per-row index is
/// stored, so the row's rank and its place in the sequence cannot
/// disagree. Both flags are read-only here — completion is monotonic
/// along the sequence in the linear curriculum model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningUnit {
    /// Unit id from the remote store
    pub id: UnitId,
    /// Whether the learner has completed this unit
    pub is_completed: bool,
    /// Whether the learner is actively on this unit
    pub is_current: bool,
}

impl LearningUnit {
    /// Create a snapshot row
    pub fn new(id: impl Into<UnitId>, is_completed: bool, is_current: bool) -> Self {
        Self {
            id: id.into(),
            is_completed,
            is_current,
        }
    }
}

/// Derived lock flag for one unit, consumed directly by navigation UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLock {
    /// Unit the flag applies to
    pub id: UnitId,
    /// Whether the unit is inaccessible to the learner
    pub locked: bool,
}

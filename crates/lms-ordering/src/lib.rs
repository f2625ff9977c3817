//! Sibling position management for hierarchical course content
//!
//! Courses, modules, and chapters each keep a dense `0..n-1` position
//! sequence within their parent scope. This crate computes the full-scope
//! position diff for a drag-reorder, the position for a newly appended
//! sibling, and the compaction diff after an archive. Everything here is a
//! pure function over a snapshot the caller owns; submitting the diff to
//! the remote store and refreshing the snapshot afterwards is the caller's
//! job.
//!
//! # Example
//!
//! ```
//! use lms_ordering::{EntityId, OrderedEntity, PositionManager, SiblingScope};
//!
//! let siblings = vec![
//!     OrderedEntity::new("mod-a", 0),
//!     OrderedEntity::new("mod-b", 1),
//! ];
//! let new_order = vec![EntityId::from("mod-b"), EntityId::from("mod-a")];
//!
//! let manager = PositionManager::new(SiblingScope::Course {
//!     course_id: EntityId::from("course-1"),
//! });
//! let plan = manager.plan_reorder(&siblings, &new_order).unwrap();
//! assert_eq!(plan.assignments.len(), 2);
//! assert_eq!(plan.assignments[0].position, 0);
//! ```

pub mod entity;
pub mod error;
pub mod reorder;

pub use entity::{EntityId, OrderedEntity, SiblingScope};
pub use error::{Error, ReorderIssue, Result};
pub use reorder::{
    PositionAssignment, PositionManager, ReorderPlan, append_position, compact_after_removal,
    compute_reorder, is_dense,
};

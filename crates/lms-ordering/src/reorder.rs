//! Reorder planning and position compaction
//!
//! The remote store replaces positions for a whole scope in one request
//! rather than patching individual deltas, so every operation here emits
//! assignments for the complete surviving sibling set. Two interleaved
//! partial updates could otherwise leave a scope with gaps or ties.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, OrderedEntity, SiblingScope};
use crate::error::{Error, ReorderIssue, Result};

/// One element of a position diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionAssignment {
    /// Entity receiving the position
    pub id: EntityId,
    /// New 0-based rank within the scope
    pub position: u32,
}

/// A full-scope position update ready for submission.
///
/// Contains an assignment for every surviving sibling, including those
/// whose position did not change, so the caller can submit an idempotent
/// replace of the whole scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderPlan {
    /// Scope the assignments apply to
    pub scope: SiblingScope,
    /// Assignments in the requested order
    pub assignments: Vec<PositionAssignment>,
}

/// Plans position updates for one sibling scope.
///
/// Holds only the scope identity; every computation takes the sibling
/// snapshot as an argument. Callers own the snapshot and must not feed an
/// intermediate optimistic state into a second plan — each plan should be
/// computed against the latest confirmed snapshot.
#[derive(Debug, Clone)]
pub struct PositionManager {
    scope: SiblingScope,
}

impl PositionManager {
    /// Create a manager for one parent scope
    pub fn new(scope: SiblingScope) -> Self {
        Self { scope }
    }

    /// The scope this manager plans for
    pub fn scope(&self) -> &SiblingScope {
        &self.scope
    }

    /// Plan a drag-reorder of the scope's siblings.
    ///
    /// `new_order` is the complete desired order, typically the result of
    /// a drag-and-drop gesture. See [`compute_reorder`] for the contract.
    pub fn plan_reorder(
        &self,
        siblings: &[OrderedEntity],
        new_order: &[EntityId],
    ) -> Result<ReorderPlan> {
        let assignments = compute_reorder(siblings, new_order)?;
        Ok(ReorderPlan {
            scope: self.scope.clone(),
            assignments,
        })
    }

    /// Plan the compaction that follows archiving one sibling.
    ///
    /// See [`compact_after_removal`] for the contract.
    pub fn plan_compaction(
        &self,
        siblings: &[OrderedEntity],
        removed: &EntityId,
    ) -> Result<ReorderPlan> {
        let assignments = compact_after_removal(siblings, removed)?;
        Ok(ReorderPlan {
            scope: self.scope.clone(),
            assignments,
        })
    }
}

/// Compute the full-scope position diff for a reorder.
///
/// `new_order` must be a permutation of exactly the ids in `siblings`;
/// a missing, duplicated, or foreign id fails with
/// [`Error::InvalidReorderSet`]. On success, every id in `new_order` is
/// assigned its 0-based rank, in `new_order`'s order — including entities
/// whose position did not change. No ordering intent is inferred from
/// partial hints; the caller supplies the complete desired order.
///
/// # Examples
///
/// ```
/// use lms_ordering::{EntityId, OrderedEntity, compute_reorder};
///
/// let siblings = vec![
///     OrderedEntity::new("1", 0),
///     OrderedEntity::new("2", 1),
///     OrderedEntity::new("3", 2),
/// ];
/// let new_order: Vec<EntityId> = ["3", "1", "2"].map(EntityId::from).into();
///
/// let diff = compute_reorder(&siblings, &new_order).unwrap();
/// assert_eq!(diff[0].id, EntityId::from("3"));
/// assert_eq!(diff[0].position, 0);
/// ```
pub fn compute_reorder(
    siblings: &[OrderedEntity],
    new_order: &[EntityId],
) -> Result<Vec<PositionAssignment>> {
    let known: HashSet<&EntityId> = siblings.iter().map(|entity| &entity.id).collect();

    let mut seen: HashSet<&EntityId> = HashSet::with_capacity(new_order.len());
    for id in new_order {
        if !known.contains(id) {
            return Err(Error::InvalidReorderSet {
                issue: ReorderIssue::ForeignId(id.clone()),
            });
        }
        if !seen.insert(id) {
            return Err(Error::InvalidReorderSet {
                issue: ReorderIssue::DuplicateId(id.clone()),
            });
        }
    }

    // Every id in new_order is known and unique; equal counts now imply a
    // full permutation.
    if let Some(missing) = siblings.iter().find(|entity| !seen.contains(&entity.id)) {
        return Err(Error::InvalidReorderSet {
            issue: ReorderIssue::MissingId(missing.id.clone()),
        });
    }

    Ok(new_order
        .iter()
        .enumerate()
        .map(|(index, id)| PositionAssignment {
            id: id.clone(),
            position: index as u32,
        })
        .collect())
}

/// Position for a sibling created in this scope: appended last.
pub fn append_position(siblings: &[OrderedEntity]) -> u32 {
    siblings.len() as u32
}

/// Compute the compaction diff after archiving one sibling.
///
/// `siblings` is the pre-removal snapshot. The survivors keep their
/// relative order (ties in a drifted snapshot resolve by input order) and
/// are reassigned the dense range `0..n-1`. Fails with
/// [`Error::UnknownEntity`] if `removed` is not in the snapshot.
pub fn compact_after_removal(
    siblings: &[OrderedEntity],
    removed: &EntityId,
) -> Result<Vec<PositionAssignment>> {
    if !siblings.iter().any(|entity| &entity.id == removed) {
        return Err(Error::UnknownEntity { id: removed.clone() });
    }

    let mut survivors: Vec<&OrderedEntity> = siblings
        .iter()
        .filter(|entity| &entity.id != removed)
        .collect();
    // Stable sort: equal positions keep snapshot order.
    survivors.sort_by_key(|entity| entity.position);

    Ok(survivors
        .iter()
        .enumerate()
        .map(|(index, entity)| PositionAssignment {
            id: entity.id.clone(),
            position: index as u32,
        })
        .collect())
}

/// Whether the scope's positions form the unbroken range `0..n-1`.
///
/// A committed scope is always dense; a non-dense snapshot means the
/// caller is holding stale or partially applied data and should refetch
/// before planning against it.
pub fn is_dense(siblings: &[OrderedEntity]) -> bool {
    let mut positions: Vec<u32> = siblings.iter().map(|entity| entity.position).collect();
    positions.sort_unstable();
    positions
        .iter()
        .enumerate()
        .all(|(index, position)| *position == index as u32)
}

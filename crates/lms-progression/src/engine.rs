//! Progression engine: current index, lock boundary, navigation

use serde::{Deserialize, Serialize};

use crate::unit::{LearningUnit, UnitId, UnitLock};

/// Input corruption detected while resolving the snapshot.
///
/// Never a hard failure — the engine degrades deterministically — but the
/// caller should report it upstream, since it means the progress store has
/// written conflicting rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceAnomaly {
    /// More than one unit was flagged current; the first was kept
    MultipleCurrent { indices: Vec<usize> },
}

/// Derives lock state and legal navigation from one curriculum snapshot.
///
/// The scattered per-row `is_current` booleans are resolved to a single
/// optional index exactly once, at construction; every query afterwards
/// works from that index, so a corrupted multi-current snapshot cannot
/// produce inconsistent answers across calls.
#[derive(Debug, Clone)]
pub struct Progression {
    units: Vec<LearningUnit>,
    current_index: Option<usize>,
    anomaly: Option<SequenceAnomaly>,
}

impl Progression {
    /// Resolve a snapshot into a progression.
    ///
    /// If more than one unit is flagged current the first one in sequence
    /// order wins; the engine warns and records a
    /// [`SequenceAnomaly::MultipleCurrent`] instead of failing, so a
    /// corrupted snapshot still renders.
    pub fn new(units: Vec<LearningUnit>) -> Self {
        let flagged: Vec<usize> = units
            .iter()
            .enumerate()
            .filter(|(_, unit)| unit.is_current)
            .map(|(index, _)| index)
            .collect();

        let anomaly = if flagged.len() > 1 {
            tracing::warn!(
                indices = ?flagged,
                "multiple units flagged current; keeping the first"
            );
            Some(SequenceAnomaly::MultipleCurrent {
                indices: flagged.clone(),
            })
        } else {
            None
        };

        Self {
            current_index: flagged.first().copied(),
            units,
            anomaly,
        }
    }

    /// The snapshot this progression was resolved from
    pub fn units(&self) -> &[LearningUnit] {
        &self.units
    }

    /// Index of the current unit, if the learner has started
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The current unit, if the learner has started
    pub fn current(&self) -> Option<&LearningUnit> {
        self.current_index.map(|index| &self.units[index])
    }

    /// Corruption detected in the snapshot, if any
    pub fn anomaly(&self) -> Option<&SequenceAnomaly> {
        self.anomaly.as_ref()
    }

    /// Derive the per-unit lock flags.
    ///
    /// With a current index `c`, unit `i` is locked iff `i > c` — already
    /// reached units stay open for review. With no current unit (a
    /// curriculum the learner has not started) only the first unit is
    /// open. An empty snapshot yields an empty result.
    pub fn lock_state(&self) -> Vec<UnitLock> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| UnitLock {
                id: unit.id.clone(),
                locked: match self.current_index {
                    Some(current) => index > current,
                    None => index != 0,
                },
            })
            .collect()
    }

    /// Whether a unit is locked for the learner
    pub fn is_locked(&self, id: &UnitId) -> bool {
        self.units
            .iter()
            .position(|unit| &unit.id == id)
            .is_some_and(|index| match self.current_index {
                Some(current) => index > current,
                None => index != 0,
            })
    }

    /// The unit behind the current one, if any.
    ///
    /// Review is unrestricted: availability depends only on the current
    /// index being past the start, never on completion.
    pub fn previous(&self) -> Option<&LearningUnit> {
        let current = self.current_index?;
        let index = current.checked_sub(1)?;
        self.units.get(index)
    }

    /// The unit ahead of the current one, if advancing is legal.
    ///
    /// A learner may not advance past an incomplete current unit, so this
    /// is `Some` only when a next unit exists *and* the current unit is
    /// completed. `None` means "unavailable" — the caller disables the
    /// control — not an error.
    pub fn next(&self) -> Option<&LearningUnit> {
        let current = self.current_index?;
        if !self.units[current].is_completed {
            return None;
        }
        self.units.get(current + 1)
    }
}

/// Derive lock flags without constructing a [`Progression`].
///
/// Convenience for callers that only render locks and never navigate.
pub fn compute_lock_state(units: &[LearningUnit]) -> Vec<UnitLock> {
    Progression::new(units.to_vec()).lock_state()
}

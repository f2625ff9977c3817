//! Unit sequence fixtures for progression tests

use lms_progression::LearningUnit;

/// Build one snapshot row
pub fn unit(id: &str, is_completed: bool, is_current: bool) -> LearningUnit {
    LearningUnit::new(id, is_completed, is_current)
}

/// A curriculum of `n` units the learner has not started:
/// nothing completed, nothing current
pub fn fresh_sequence(n: usize) -> Vec<LearningUnit> {
    (0..n)
        .map(|index| LearningUnit::new(format!("unit-{index}"), false, false))
        .collect()
}

/// A curriculum of `n` units with the learner on index `current`.
///
/// Units before `current` are completed (the linear model is monotonic);
/// `current_completed` controls whether the current unit itself is done.
///
/// # Panics
///
/// Panics if `current >= n`; fixtures fail loudly on bad coordinates.
pub fn sequence_at(n: usize, current: usize, current_completed: bool) -> Vec<LearningUnit> {
    assert!(current < n, "current index {current} out of range for {n} units");
    (0..n)
        .map(|index| {
            LearningUnit::new(
                format!("unit-{index}"),
                index < current || (index == current && current_completed),
                index == current,
            )
        })
        .collect()
}

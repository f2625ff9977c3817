//! End-to-end scenarios combining ordering and progression.
//!
//! These tests play the roles of the surrounding client: the admin console
//! dragging content around and submitting full-scope diffs, and the
//! learner portal rendering locks from each fresh curriculum snapshot.

use lms_ordering::{EntityId, OrderedEntity, PositionManager, SiblingScope, is_dense};
use lms_progression::{LearningUnit, Progression, UnitId};
use lms_test_utils::catalog::{entities, ids};
use lms_test_utils::curriculum::unit;
use pretty_assertions::assert_eq;

/// What the remote store does with a plan: replace the scope's positions.
fn apply_plan(plan: &lms_ordering::ReorderPlan) -> Vec<OrderedEntity> {
    plan.assignments
        .iter()
        .map(|assignment| OrderedEntity::new(assignment.id.clone(), assignment.position))
        .collect()
}

#[test]
fn test_admin_reorders_modules_then_chapters() {
    // Course admin drags module 3 to the top...
    let modules = entities(&[("mod-1", 0), ("mod-2", 1), ("mod-3", 2)]);
    let course_scope = PositionManager::new(SiblingScope::Course {
        course_id: EntityId::from("course-7"),
    });

    let plan = course_scope
        .plan_reorder(&modules, &ids(&["mod-3", "mod-1", "mod-2"]))
        .unwrap();
    let confirmed = apply_plan(&plan);
    assert!(is_dense(&confirmed));
    assert_eq!(confirmed[0].id, EntityId::from("mod-3"));

    // ...then swaps two chapters inside the promoted module. The chapter
    // scope is keyed independently; nothing leaks between scopes.
    let chapters = entities(&[("ch-a", 0), ("ch-b", 1)]);
    let module_scope = PositionManager::new(SiblingScope::Module {
        course_id: EntityId::from("course-7"),
        module_id: EntityId::from("mod-3"),
    });

    let plan = module_scope
        .plan_reorder(&chapters, &ids(&["ch-b", "ch-a"]))
        .unwrap();
    let confirmed = apply_plan(&plan);
    assert!(is_dense(&confirmed));
    assert_eq!(confirmed[0].id, EntityId::from("ch-b"));
}

#[test]
fn test_archive_then_reorder_round_trip() {
    let manager = PositionManager::new(SiblingScope::Root);
    let courses = entities(&[("c-1", 0), ("c-2", 1), ("c-3", 2)]);

    // Archiving c-2 compacts the survivors...
    let plan = manager
        .plan_compaction(&courses, &EntityId::from("c-2"))
        .unwrap();
    let confirmed = apply_plan(&plan);
    assert!(is_dense(&confirmed));

    // ...and the refreshed snapshot reorders cleanly.
    let plan = manager
        .plan_reorder(&confirmed, &ids(&["c-3", "c-1"]))
        .unwrap();
    let confirmed = apply_plan(&plan);
    assert_eq!(confirmed[0].id, EntityId::from("c-3"));
    assert_eq!(confirmed[0].position, 0);
}

#[test]
fn test_stale_drag_result_is_rejected_not_submitted() {
    // The admin's drag result still names an archived module. The plan
    // must fail before anything is submitted; the caller refetches.
    let modules = entities(&[("mod-1", 0), ("mod-2", 1)]);
    let manager = PositionManager::new(SiblingScope::Course {
        course_id: EntityId::from("course-7"),
    });

    let result = manager.plan_reorder(&modules, &ids(&["mod-archived", "mod-1", "mod-2"]));
    assert!(result.is_err());
}

#[test]
fn test_learner_walks_a_chapter() {
    // Fresh curriculum: nothing current yet, only the first lesson open.
    let progression = Progression::new(vec![
        unit("l-1", false, false),
        unit("l-2", false, false),
        unit("l-3", false, false),
    ]);
    let locks = progression.lock_state();
    assert_eq!(
        locks.iter().map(|l| l.locked).collect::<Vec<_>>(),
        vec![false, true, true]
    );

    // The learner opens lesson 1; the next fetch flags it current.
    let progression = Progression::new(vec![
        unit("l-1", false, true),
        unit("l-2", false, false),
        unit("l-3", false, false),
    ]);
    assert!(progression.next().is_none(), "lesson 1 not completed yet");
    assert!(progression.previous().is_none(), "nothing before lesson 1");

    // Completion is submitted externally; the refreshed snapshot unlocks
    // forward navigation.
    let progression = Progression::new(vec![
        unit("l-1", true, true),
        unit("l-2", false, false),
        unit("l-3", false, false),
    ]);
    assert_eq!(
        progression.next().map(|u| u.id.clone()),
        Some(UnitId::from("l-2"))
    );

    // On lesson 2, review of lesson 1 stays open regardless of progress.
    let progression = Progression::new(vec![
        unit("l-1", true, false),
        unit("l-2", false, true),
        unit("l-3", false, false),
    ]);
    assert_eq!(
        progression.previous().map(|u| u.id.clone()),
        Some(UnitId::from("l-1"))
    );
    assert!(progression.next().is_none());
    assert!(progression.lock_state()[2].locked);
}

#[test]
fn test_corrupt_snapshot_still_renders() {
    tracing_subscriber::fmt()
        .with_test_writer()
        .try_init()
        .ok();

    // Upstream wrote two current rows; the learner still gets a page.
    let units: Vec<LearningUnit> = vec![
        unit("l-1", true, true),
        unit("l-2", false, true),
        unit("l-3", false, false),
    ];
    let progression = Progression::new(units);

    assert_eq!(progression.current_index(), Some(0));
    assert!(progression.anomaly().is_some());
    assert_eq!(progression.lock_state().len(), 3);
}

#[test]
fn test_reorder_payload_shape_for_position_endpoint() {
    let manager = PositionManager::new(SiblingScope::Course {
        course_id: EntityId::from("course-7"),
    });
    let modules = entities(&[("mod-1", 0), ("mod-2", 1)]);

    let plan = manager
        .plan_reorder(&modules, &ids(&["mod-2", "mod-1"]))
        .unwrap();
    let body = serde_json::to_string(&plan).unwrap();

    // The whole scope goes up in one idempotent request body.
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["assignments"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["scope"]["kind"], "course");
}

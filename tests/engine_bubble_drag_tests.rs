use chrono::NaiveDate;
use roadmap_rs::api::{GestureInputBehavior, RoadmapEngine, RoadmapEngineConfig};
use roadmap_rs::core::{CanvasPoint, Project, Viewport};
use roadmap_rs::error::RoadmapError;
use roadmap_rs::interaction::GestureMode;
use roadmap_rs::render::NullRenderer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn engine_with_one_project() -> (RoadmapEngine<NullRenderer>, u32) {
    let config =
        RoadmapEngineConfig::new(Viewport::new(1200, 600)).with_seed_default_projects(false);
    let mut engine = RoadmapEngine::new(NullRenderer::default(), config).expect("engine init");
    let id = engine
        .add_project(Project::new(0, "Subject", "IT", 250.0, 325.0, date(2026, 4, 1)))
        .expect("add");
    (engine, id)
}

#[test]
fn drag_preserves_the_grab_offset() {
    let (mut engine, id) = engine_with_one_project();
    let center = engine.bubble_geometry(id).expect("geometry").center;

    // Grab 10 px right of the centre; the offset must survive the move.
    let grab = CanvasPoint::new(center.x + 10.0, center.y);
    engine.begin_bubble_drag(id, grab).expect("begin");
    engine
        .move_bubble_drag(CanvasPoint::new(grab.x + 50.0, grab.y))
        .expect("move");

    let pinned = engine
        .project(id)
        .expect("project")
        .position
        .expect("pinned");
    assert!((pinned.x - (center.x + 50.0)).abs() <= 1e-9);
    assert!((pinned.y - center.y).abs() <= 1e-9);

    engine.complete_bubble_drag().expect("complete");
}

#[test]
fn completing_a_drag_commits_date_and_value_and_unpins() {
    let (mut engine, id) = engine_with_one_project();
    let center = engine.bubble_geometry(id).expect("geometry").center;

    engine.begin_bubble_drag(id, center).expect("begin");
    // Move to the exact pixel of (July 1, value 130): x = 6/12 width, y at 130/650.
    engine
        .move_bubble_drag(CanvasPoint::new(600.0, 480.0))
        .expect("move");
    let commit = engine.complete_bubble_drag().expect("complete");

    assert_eq!(commit.id, id);
    assert_eq!(commit.start_date, date(2026, 7, 1));
    assert_eq!(commit.value, 130.0);

    let project = engine.project(id).expect("project");
    assert_eq!(project.start_date, date(2026, 7, 1));
    assert_eq!(project.value, 130.0);
    assert!(project.position.is_none());
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn cancelling_a_drag_restores_derived_placement() {
    let (mut engine, id) = engine_with_one_project();
    let before = engine.project(id).expect("project").clone();
    let center = engine.bubble_geometry(id).expect("geometry").center;

    engine.begin_bubble_drag(id, center).expect("begin");
    engine
        .move_bubble_drag(CanvasPoint::new(center.x + 300.0, center.y - 100.0))
        .expect("move");
    engine.cancel_bubble_drag().expect("cancel");

    let after = engine.project(id).expect("project");
    assert_eq!(after.start_date, before.start_date);
    assert_eq!(after.value, before.value);
    assert!(after.position.is_none());
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn only_one_gesture_may_own_the_pointer() {
    let (mut engine, id) = engine_with_one_project();
    let center = engine.bubble_geometry(id).expect("geometry").center;

    engine.begin_bubble_drag(id, center).expect("begin");
    let err = engine
        .begin_bubble_drag(id, center)
        .expect_err("second gesture");
    assert!(matches!(err, RoadmapError::InvalidData(_)));

    engine.complete_bubble_drag().expect("complete");
    engine.begin_bubble_drag(id, center).expect("idle again");
    engine.cancel_bubble_drag().expect("cancel");
}

#[test]
fn drag_calls_without_a_session_are_rejected() {
    let (mut engine, _id) = engine_with_one_project();

    assert!(engine.move_bubble_drag(CanvasPoint::new(0.0, 0.0)).is_err());
    assert!(engine.complete_bubble_drag().is_err());
    assert!(engine.cancel_bubble_drag().is_err());
}

#[test]
fn dragging_an_unknown_bubble_is_rejected() {
    let (mut engine, _id) = engine_with_one_project();

    let err = engine
        .begin_bubble_drag(404, CanvasPoint::new(0.0, 0.0))
        .expect_err("unknown id");
    assert!(matches!(err, RoadmapError::UnknownProjectId(404)));
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn behavior_gate_blocks_bubble_drags() {
    let (mut engine, id) = engine_with_one_project();
    engine.set_gesture_input_behavior(GestureInputBehavior {
        allow_bubble_drag: false,
        ..GestureInputBehavior::default()
    });

    let center = engine.bubble_geometry(id).expect("geometry").center;
    assert!(engine.begin_bubble_drag(id, center).is_err());
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);

    // Programmatic mutation stays available.
    engine.set_project_position(id, 10.0, 20.0).expect("pin");
    engine.clear_project_position(id).expect("unpin");
}

#[test]
fn drag_commit_clamps_value_to_the_cap() {
    let (mut engine, id) = engine_with_one_project();
    let center = engine.bubble_geometry(id).expect("geometry").center;

    engine.begin_bubble_drag(id, center).expect("begin");
    // The top edge maps to the axis range; commit caps at value_max.
    engine
        .move_bubble_drag(CanvasPoint::new(center.x, 0.0))
        .expect("move");
    let commit = engine.complete_bubble_drag().expect("complete");
    assert_eq!(commit.value, 500.0);
}

use chrono::NaiveDate;
use roadmap_rs::api::{GestureInputBehavior, RoadmapEngine, RoadmapEngineConfig};
use roadmap_rs::core::{CanvasPoint, Project, Viewport};
use roadmap_rs::error::RoadmapError;
use roadmap_rs::interaction::GestureMode;
use roadmap_rs::render::NullRenderer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// One project whose derived centre lands on exact pixels: Apr 1 on a 1200 px
/// grid is x = 300, value 325 on a 600 px axis is y = 300, and complexity 250
/// maps to an 80 px bubble.
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
fn preview_diameter_tracks_the_pointer_within_scale_bounds() {
    let (mut engine, id) = engine_with_one_project();
    engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .expect("begin");

    // 50 px from the centre previews a 100 px bubble.
    let preview = engine
        .move_bubble_resize(CanvasPoint::new(350.0, 300.0))
        .expect("move");
    assert!((preview - 100.0).abs() <= 1e-9);

    // Pointer inside the minimum radius clamps to the floor.
    let floor = engine
        .move_bubble_resize(CanvasPoint::new(310.0, 300.0))
        .expect("move");
    assert!((floor - 40.0).abs() <= 1e-9);

    // Pointer far outside clamps to the ceiling.
    let ceiling = engine
        .move_bubble_resize(CanvasPoint::new(900.0, 300.0))
        .expect("move");
    assert!((ceiling - 120.0).abs() <= 1e-9);

    engine.cancel_bubble_resize().expect("cancel");
}

#[test]
fn bubble_geometry_previews_the_resize_live() {
    let (mut engine, id) = engine_with_one_project();
    let other = engine
        .add_project(Project::new(0, "Bystander", "IT", 250.0, 100.0, date(2026, 2, 1)))
        .expect("add");

    engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .expect("begin");
    engine
        .move_bubble_resize(CanvasPoint::new(352.0, 300.0))
        .expect("move");

    // The resized bubble previews the cursor-implied diameter.
    let previewed = engine.bubble_geometry(id).expect("geometry");
    assert!((previewed.diameter_px - 104.0).abs() <= 1e-9);

    // Other bubbles keep deriving their size from data.
    let bystander = engine.bubble_geometry(other).expect("geometry");
    assert!((bystander.diameter_px - 80.0).abs() <= 1e-9);

    // The record itself is untouched until completion.
    assert_eq!(engine.project(id).expect("project").complexity, 250.0);

    engine.cancel_bubble_resize().expect("cancel");
}

#[test]
fn completing_a_resize_commits_a_whole_complexity() {
    let (mut engine, id) = engine_with_one_project();
    engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .expect("begin");

    // 52 px from the centre implies a 104 px bubble, which maps to 400.
    engine
        .move_bubble_resize(CanvasPoint::new(352.0, 300.0))
        .expect("move");
    let commit = engine.complete_bubble_resize().expect("complete");

    assert_eq!(commit.id, id);
    assert_eq!(commit.complexity, 400.0);
    assert_eq!(engine.project(id).expect("project").complexity, 400.0);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn commit_rounds_fractional_diameters_to_whole_complexities() {
    let (mut engine, id) = engine_with_one_project();
    engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .expect("begin");

    engine
        .move_bubble_resize(CanvasPoint::new(351.3, 300.0))
        .expect("move");
    let commit = engine.complete_bubble_resize().expect("complete");

    assert_eq!(commit.complexity.fract(), 0.0);
    assert_eq!(commit.complexity, 391.0);
}

#[test]
fn commit_clamps_to_the_complexity_range() {
    let (mut engine, id) = engine_with_one_project();

    engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .expect("begin");
    engine
        .move_bubble_resize(CanvasPoint::new(900.0, 300.0))
        .expect("move");
    let grown = engine.complete_bubble_resize().expect("complete");
    assert_eq!(grown.complexity, 500.0);

    engine
        .begin_bubble_resize(id, CanvasPoint::new(360.0, 300.0))
        .expect("begin");
    engine
        .move_bubble_resize(CanvasPoint::new(301.0, 300.0))
        .expect("move");
    let shrunk = engine.complete_bubble_resize().expect("complete");
    assert_eq!(shrunk.complexity, 0.0);
}

#[test]
fn cancelling_a_resize_leaves_the_record_untouched() {
    let (mut engine, id) = engine_with_one_project();
    engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .expect("begin");
    engine
        .move_bubble_resize(CanvasPoint::new(900.0, 300.0))
        .expect("move");
    engine.cancel_bubble_resize().expect("cancel");

    assert_eq!(engine.project(id).expect("project").complexity, 250.0);
    let geometry = engine.bubble_geometry(id).expect("geometry");
    assert!((geometry.diameter_px - 80.0).abs() <= 1e-9);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn resize_calls_without_a_session_are_rejected() {
    let (mut engine, _id) = engine_with_one_project();

    assert!(engine.move_bubble_resize(CanvasPoint::new(0.0, 0.0)).is_err());
    assert!(engine.complete_bubble_resize().is_err());
    assert!(engine.cancel_bubble_resize().is_err());
}

#[test]
fn resizing_an_unknown_bubble_is_rejected() {
    let (mut engine, _id) = engine_with_one_project();

    let err = engine
        .begin_bubble_resize(77, CanvasPoint::new(0.0, 0.0))
        .expect_err("unknown id");
    assert!(matches!(err, RoadmapError::UnknownProjectId(77)));
}

#[test]
fn gestures_are_exclusive_across_families() {
    let (mut engine, id) = engine_with_one_project();
    engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .expect("begin");

    let err = engine
        .begin_bubble_drag(id, CanvasPoint::new(300.0, 300.0))
        .expect_err("drag while resizing");
    assert!(matches!(err, RoadmapError::InvalidData(_)));
    assert_eq!(engine.gesture_mode(), GestureMode::ResizingBubble(id));

    engine.cancel_bubble_resize().expect("cancel");
}

#[test]
fn behavior_gate_blocks_bubble_resizes() {
    let (mut engine, id) = engine_with_one_project();
    engine.set_gesture_input_behavior(GestureInputBehavior {
        allow_bubble_resize: false,
        ..GestureInputBehavior::default()
    });

    assert!(engine
        .begin_bubble_resize(id, CanvasPoint::new(340.0, 300.0))
        .is_err());
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

use chrono::NaiveDate;
use roadmap_rs::api::{EngineSnapshot, RoadmapEngine, RoadmapEngineConfig};
use roadmap_rs::core::{Project, Viewport};
use roadmap_rs::interaction::GestureMode;
use roadmap_rs::render::NullRenderer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn engine() -> RoadmapEngine<NullRenderer> {
    let config = RoadmapEngineConfig::new(Viewport::new(1200, 600));
    RoadmapEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn snapshot_captures_the_initial_state() {
    let engine = engine();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(1200, 600));
    assert_eq!(snapshot.grid_year, 2026);
    assert_eq!(
        snapshot.timeline_bounds,
        (date(2026, 1, 1), date(2026, 12, 31))
    );
    assert_eq!(snapshot.visible_window, snapshot.timeline_bounds);
    assert_eq!(snapshot.value_bounds, (0.0, 650.0));
    assert_eq!(snapshot.value_window, snapshot.value_bounds);
    assert_eq!(snapshot.gesture_mode, GestureMode::Idle);
    assert_eq!(snapshot.projects.len(), 7);
    assert_eq!(snapshot.service_visibility.len(), 4);
    assert_eq!(snapshot.staged_import_count, 0);
}

#[test]
fn snapshots_of_an_untouched_engine_are_identical() {
    let engine = engine();
    assert_eq!(engine.snapshot(), engine.snapshot());

    let first = engine.snapshot_json_pretty().expect("json");
    let second = engine.snapshot_json_pretty().expect("json");
    assert_eq!(first, second);
}

#[test]
fn snapshot_reflects_mutations() {
    let mut engine = engine();
    engine
        .set_visible_window(date(2026, 4, 1), date(2026, 9, 30))
        .expect("window");
    engine.set_value_window(130.0, 390.0).expect("value window");
    engine.set_service_visible("IT", false).expect("filter");
    let id = engine
        .add_project(Project::new(0, "Added", "IT", 100.0, 200.0, date(2026, 6, 1)))
        .expect("add");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.visible_window, (date(2026, 4, 1), date(2026, 9, 30)));
    assert_eq!(snapshot.value_window, (130.0, 390.0));
    assert_eq!(snapshot.service_visibility.get("IT"), Some(&false));
    assert_eq!(snapshot.projects.len(), 8);
    assert_eq!(snapshot.projects.last().map(|p| p.id), Some(id));
}

#[test]
fn snapshot_counts_staged_rows_without_committing_them() {
    let mut engine = engine();
    let raw = "ID,Project Key,Name,Service,Complexity,Value,Start Date\n\
               5,,Solo,IT,100,100,01/06/2026\n";
    engine.stage_spreadsheet_import(raw).expect("stage");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.staged_import_count, 1);
    assert_eq!(snapshot.projects.len(), 7);
}

#[test]
fn snapshot_json_round_trips() {
    let mut engine = engine();
    engine.set_service_visible("Finance", false).expect("filter");
    engine
        .set_visible_window(date(2026, 3, 1), date(2026, 11, 30))
        .expect("window");

    let json = engine.snapshot_json_pretty().expect("serialize");
    let decoded: EngineSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, engine.snapshot());
}

#[test]
fn snapshot_records_an_active_gesture() {
    let mut engine = engine();
    let id = 1;
    let center = engine.bubble_geometry(id).expect("geometry").center;
    engine.begin_bubble_drag(id, center).expect("begin");

    assert_eq!(engine.snapshot().gesture_mode, GestureMode::DraggingBubble(id));

    engine.cancel_bubble_drag().expect("cancel");
    assert_eq!(engine.snapshot().gesture_mode, GestureMode::Idle);
}

use chrono::NaiveDate;
use roadmap_rs::api::{RoadmapEngine, RoadmapEngineConfig};
use roadmap_rs::core::{Project, Viewport};
use roadmap_rs::error::RoadmapError;
use roadmap_rs::render::NullRenderer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn engine() -> RoadmapEngine<NullRenderer> {
    let config = RoadmapEngineConfig::new(Viewport::new(1200, 600));
    RoadmapEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn visible_ids(engine: &RoadmapEngine<NullRenderer>) -> Vec<u32> {
    engine.visible_projects().iter().map(|p| p.id).collect()
}

#[test]
fn seeding_registers_every_service_in_first_seen_order() {
    let engine = engine();
    let services: Vec<&str> = engine
        .service_visibility()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(services, ["Finance", "Marketing", "IT", "HR"]);
    assert!(services.iter().all(|s| engine.is_service_visible(s)));
}

#[test]
fn hiding_a_service_filters_its_projects() {
    let mut engine = engine();
    // Record 7 starts in the previous year, outside the timeline window.
    assert_eq!(visible_ids(&engine), [1, 2, 3, 4, 5, 6]);

    engine.set_service_visible("IT", false).expect("hide");
    assert!(!engine.is_service_visible("IT"));
    assert_eq!(visible_ids(&engine), [1, 2, 4, 5]);

    engine.set_service_visible("IT", true).expect("show");
    assert_eq!(visible_ids(&engine), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn unknown_services_default_to_visible() {
    let engine = engine();
    assert!(engine.is_service_visible("Logistics"));
}

#[test]
fn toggles_can_be_pre_seeded_before_data_arrives() {
    let mut engine = engine();
    engine.set_service_visible("Logistics", false).expect("pre-seed");

    let id = engine
        .add_project(Project::new(0, "Fleet Tracking", "Logistics", 120.0, 300.0, date(2026, 3, 1)))
        .expect("add");

    // The existing toggle wins over the default-visible sync.
    assert!(!engine.is_service_visible("Logistics"));
    assert!(!visible_ids(&engine).contains(&id));
}

#[test]
fn blank_service_names_are_rejected() {
    let mut engine = engine();
    let err = engine.set_service_visible("   ", false).expect_err("blank");
    assert!(matches!(err, RoadmapError::InvalidData(_)));
}

#[test]
fn toggles_survive_a_full_data_replacement() {
    let mut engine = engine();
    engine.set_service_visible("Finance", false).expect("hide");

    engine
        .replace_projects(vec![
            Project::new(1, "Ledger Rebuild", "Finance", 300.0, 400.0, date(2026, 2, 1)),
            Project::new(2, "Brand Refresh", "Marketing", 150.0, 250.0, date(2026, 5, 1)),
        ])
        .expect("replace");

    assert!(!engine.is_service_visible("Finance"));
    assert_eq!(visible_ids(&engine), [2]);

    // Entries for services no longer present stay registered.
    assert!(engine.service_visibility().contains_key("HR"));
}

#[test]
fn adding_a_new_service_appends_a_visible_entry() {
    let mut engine = engine();
    engine
        .add_project(Project::new(0, "Depot Automation", "Operations", 80.0, 120.0, date(2026, 4, 1)))
        .expect("add");

    assert!(engine.is_service_visible("Operations"));
    let services: Vec<&str> = engine
        .service_visibility()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(services.last(), Some(&"Operations"));
}

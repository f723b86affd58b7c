use chrono::NaiveDate;
use roadmap_rs::core::Project;
use roadmap_rs::error::RoadmapError;
use roadmap_rs::io::{export_json, import_json};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn reject_message(result: Result<Vec<Project>, RoadmapError>) -> String {
    match result {
        Err(RoadmapError::ImportRejected(message)) => message,
        other => panic!("expected ImportRejected, got {other:?}"),
    }
}

#[test]
fn well_formed_payload_imports_in_order() {
    let raw = r#"[
        {"id": 2, "name": "Beta", "service": "IT", "complexity": 300, "value": 150, "startDate": "2026-09-10"},
        {"id": 1, "name": "Alpha", "service": "Finance", "complexity": 450, "value": 480, "startDate": "2026-05-15"}
    ]"#;

    let projects = import_json(raw).expect("import");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, 2);
    assert_eq!(projects[1].id, 1);
    assert_eq!(projects[1].start_date, date(2026, 5, 15));
}

#[test]
fn non_array_payload_is_rejected() {
    let message = reject_message(import_json(r#"{"id": 1}"#));
    assert!(message.contains("array"), "message: {message}");
}

#[test]
fn malformed_json_is_rejected() {
    let message = reject_message(import_json("not json at all"));
    assert!(message.contains("invalid json"), "message: {message}");
}

#[test]
fn missing_id_names_the_offending_index() {
    let raw = r#"[
        {"id": 1, "name": "Ok", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-01-01"},
        {"name": "No id", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-01-01"}
    ]"#;

    let message = reject_message(import_json(raw));
    assert!(message.contains("index 1"), "message: {message}");
    assert!(message.contains("\"id\""), "message: {message}");
}

#[test]
fn wrong_field_types_name_index_and_field() {
    let raw = r#"[{"id": 7, "name": "Broken", "service": "IT", "complexity": "lots", "value": 1, "startDate": "2026-01-01"}]"#;

    let message = reject_message(import_json(raw));
    assert!(message.contains("index 0"), "message: {message}");
    assert!(message.contains("id 7"), "message: {message}");
    assert!(message.contains("\"complexity\""), "message: {message}");
}

#[test]
fn blank_service_is_rejected() {
    let raw = r#"[{"id": 1, "name": "P", "service": "  ", "complexity": 1, "value": 1, "startDate": "2026-01-01"}]"#;

    let message = reject_message(import_json(raw));
    assert!(message.contains("\"service\""), "message: {message}");
}

#[test]
fn unparseable_start_date_is_rejected() {
    let raw = r#"[{"id": 1, "name": "P", "service": "IT", "complexity": 1, "value": 1, "startDate": "tomorrow"}]"#;

    let message = reject_message(import_json(raw));
    assert!(message.contains("\"startDate\""), "message: {message}");
}

#[test]
fn start_date_accepts_iso_slash_and_rfc3339_forms() {
    let raw = r#"[
        {"id": 1, "name": "Iso", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-05-15"},
        {"id": 2, "name": "Slash", "service": "IT", "complexity": 1, "value": 1, "startDate": "15/05/2026"},
        {"id": 3, "name": "Stamp", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-05-15T09:30:00Z"}
    ]"#;

    let projects = import_json(raw).expect("import");
    for project in &projects {
        assert_eq!(project.start_date, date(2026, 5, 15));
    }
}

#[test]
fn duplicate_ids_reject_the_whole_payload() {
    let raw = r#"[
        {"id": 4, "name": "A", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-01-01"},
        {"id": 4, "name": "B", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-01-01"}
    ]"#;

    let message = reject_message(import_json(raw));
    assert!(message.contains("duplicate"), "message: {message}");
    assert!(message.contains('4'), "message: {message}");
}

#[test]
fn project_key_is_optional_and_blank_collapses_to_none() {
    let raw = r#"[
        {"id": 1, "projectKey": "RM-100", "name": "Keyed", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-01-01"},
        {"id": 2, "projectKey": "", "name": "Blank", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-01-01"},
        {"id": 3, "name": "Missing", "service": "IT", "complexity": 1, "value": 1, "startDate": "2026-01-01"}
    ]"#;

    let projects = import_json(raw).expect("import");
    assert_eq!(projects[0].project_key.as_deref(), Some("RM-100"));
    assert_eq!(projects[1].project_key, None);
    assert_eq!(projects[2].project_key, None);
}

#[test]
fn export_import_round_trips_the_records() {
    let original = vec![
        Project::new(1, "ERP Migration", "Finance", 450.0, 480.0, date(2026, 5, 15))
            .with_project_key("RM-1"),
        Project::new(2, "Website Redesign", "Marketing", 200.0, 350.0, date(2026, 7, 1)),
    ];

    let json = export_json(&original).expect("export");
    let recovered = import_json(&json).expect("import");
    assert_eq!(recovered, original);
}

#[test]
fn export_skips_transient_positions() {
    let pinned = Project::new(1, "Pinned", "IT", 100.0, 200.0, date(2026, 6, 1))
        .with_position(400.0, 300.0);

    let json = export_json(&[pinned]).expect("export");
    assert!(!json.contains("position"));

    let recovered = import_json(&json).expect("import");
    assert!(recovered[0].position.is_none());
}

#[test]
fn export_uses_the_camel_case_contract() {
    let project = Project::new(1, "P", "IT", 1.0, 2.0, date(2026, 1, 2)).with_project_key("K-1");
    let json = export_json(&[project]).expect("export");

    assert!(json.contains("\"startDate\""));
    assert!(json.contains("\"projectKey\""));
    assert!(!json.contains("start_date"));
}

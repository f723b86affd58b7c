use chrono::NaiveDate;
use roadmap_rs::core::Project;
use roadmap_rs::error::RoadmapError;
use roadmap_rs::io::{export_csv, import_csv};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn reject_message(result: Result<Vec<Project>, RoadmapError>) -> String {
    match result {
        Err(RoadmapError::ImportRejected(message)) => message,
        other => panic!("expected ImportRejected, got {other:?}"),
    }
}

const HEADER: &str = "ID,Project Key,Name,Service,Complexity,Value,Start Date";

#[test]
fn well_formed_rows_import_in_order() {
    let raw = format!(
        "{HEADER}\n3,RM-3,Audit,IT,300,150,10/09/2026\n1,,Migration,Finance,450,480,2026-05-15\n"
    );

    let projects = import_csv(&raw).expect("import");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, 3);
    assert_eq!(projects[0].project_key.as_deref(), Some("RM-3"));
    assert_eq!(projects[0].start_date, date(2026, 9, 10));
    assert_eq!(projects[1].project_key, None);
    assert_eq!(projects[1].start_date, date(2026, 5, 15));
}

#[test]
fn column_order_does_not_matter() {
    let raw = "Name,ID,Start Date,Service,Value,Complexity\nShuffled,9,01/07/2026,Marketing,350,200\n";

    let projects = import_csv(raw).expect("import");
    assert_eq!(projects[0].id, 9);
    assert_eq!(projects[0].name, "Shuffled");
    assert_eq!(projects[0].start_date, date(2026, 7, 1));
}

#[test]
fn missing_required_columns_are_named() {
    let raw = "ID,Name,Complexity,Value\n1,P,1,1\n";

    let message = reject_message(import_csv(raw));
    assert!(message.contains("missing required columns"), "message: {message}");
    assert!(message.contains("Service"), "message: {message}");
    assert!(message.contains("Start Date"), "message: {message}");
}

#[test]
fn project_key_column_is_optional() {
    let raw = "ID,Name,Service,Complexity,Value,Start Date\n1,P,IT,1,1,2026-01-01\n";

    let projects = import_csv(raw).expect("import");
    assert_eq!(projects[0].project_key, None);
}

#[test]
fn non_numeric_id_names_the_row() {
    let raw = format!("{HEADER}\nabc,,P,IT,1,1,2026-01-01\n");

    let message = reject_message(import_csv(&raw));
    assert!(message.contains("row 1"), "message: {message}");
    assert!(message.contains("\"ID\""), "message: {message}");
}

#[test]
fn blank_name_and_service_are_rejected() {
    let blank_name = format!("{HEADER}\n1,,,IT,1,1,2026-01-01\n");
    let message = reject_message(import_csv(&blank_name));
    assert!(message.contains("\"Name\""), "message: {message}");

    let blank_service = format!("{HEADER}\n1,,P,,1,1,2026-01-01\n");
    let message = reject_message(import_csv(&blank_service));
    assert!(message.contains("\"Service\""), "message: {message}");
}

#[test]
fn non_numeric_complexity_and_value_are_rejected() {
    let raw = format!("{HEADER}\n1,,P,IT,huge,1,2026-01-01\n");
    let message = reject_message(import_csv(&raw));
    assert!(message.contains("\"Complexity\""), "message: {message}");
    assert!(message.contains("id 1"), "message: {message}");

    let raw = format!("{HEADER}\n1,,P,IT,1,NaN,2026-01-01\n");
    let message = reject_message(import_csv(&raw));
    assert!(message.contains("\"Value\""), "message: {message}");
}

#[test]
fn unparseable_date_is_rejected_with_row_context() {
    let raw = format!("{HEADER}\n1,,Ok,IT,1,1,2026-01-01\n2,,Bad,IT,1,1,someday\n");

    let message = reject_message(import_csv(&raw));
    assert!(message.contains("row 2"), "message: {message}");
    assert!(message.contains("\"Start Date\""), "message: {message}");
}

#[test]
fn rfc3339_date_cells_truncate_to_the_date() {
    let raw = format!("{HEADER}\n1,,Stamped,IT,1,1,2026-05-15T00:00:00+02:00\n");

    let projects = import_csv(&raw).expect("import");
    assert_eq!(projects[0].start_date, date(2026, 5, 15));
}

#[test]
fn empty_sheet_is_rejected() {
    let message = reject_message(import_csv(&format!("{HEADER}\n")));
    assert!(message.contains("no data rows"), "message: {message}");
}

#[test]
fn duplicate_ids_reject_the_whole_sheet() {
    let raw = format!("{HEADER}\n5,,A,IT,1,1,2026-01-01\n5,,B,IT,1,1,2026-01-01\n");

    let message = reject_message(import_csv(&raw));
    assert!(message.contains("duplicate"), "message: {message}");
    assert!(message.contains('5'), "message: {message}");
}

#[test]
fn export_writes_slash_dates_and_whole_numbers() {
    let projects = vec![
        Project::new(1, "ERP Migration", "Finance", 450.0, 480.0, date(2026, 5, 15))
            .with_project_key("RM-1"),
    ];

    let sheet = export_csv(&projects).expect("export");
    let mut lines = sheet.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(
        lines.next(),
        Some("1,RM-1,ERP Migration,Finance,450,480,15/05/2026")
    );
}

#[test]
fn export_quotes_cells_containing_commas() {
    let projects = vec![Project::new(
        1,
        "Plan, revise, ship",
        "IT",
        10.0,
        20.0,
        date(2026, 3, 1),
    )];

    let sheet = export_csv(&projects).expect("export");
    assert!(sheet.contains("\"Plan, revise, ship\""));

    let recovered = import_csv(&sheet).expect("import");
    assert_eq!(recovered[0].name, "Plan, revise, ship");
}

#[test]
fn export_import_round_trips_the_records() {
    let original = vec![
        Project::new(1, "Alpha", "Finance", 450.0, 480.0, date(2026, 5, 15)),
        Project::new(2, "Beta", "Marketing", 200.5, 350.0, date(2026, 7, 1))
            .with_project_key("RM-2"),
    ];

    let sheet = export_csv(&original).expect("export");
    let recovered = import_csv(&sheet).expect("import");
    assert_eq!(recovered, original);
}

use chrono::NaiveDate;

use crate::core::project::Project;

/// Builds the default seed roadmap shown before any data is imported.
#[must_use]
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(1, "ERP Migration", "Finance", 450.0, 480.0, date(2026, 5, 15)),
        Project::new(2, "Website Redesign", "Marketing", 200.0, 350.0, date(2026, 7, 1)),
        Project::new(3, "Cloud Security Audit", "IT", 300.0, 150.0, date(2026, 9, 10)),
        Project::new(4, "Recruitment Portal", "HR", 100.0, 250.0, date(2026, 6, 20)),
        Project::new(5, "Q3 Budget Planning", "Finance", 50.0, 400.0, date(2026, 8, 5)),
        Project::new(6, "New Project", "IT", 500.0, 356.0, date(2026, 12, 25)),
        Project::new(7, "New Project", "Marketing", 400.0, 100.0, date(2025, 12, 8)),
    ]
}

/// Calendar year the default grid maps onto.
pub const DEFAULT_GRID_YEAR: i32 = 2026;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

use chrono::{DateTime, NaiveDate};

/// Parses the date formats accepted on import.
///
/// ISO `yyyy-mm-dd` and slash-delimited `dd/mm/yyyy` cover exported files;
/// RFC3339 timestamps (truncated to the date) cover native spreadsheet date
/// cells and legacy JSON exports.
#[must_use]
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }

    None
}

/// Formats a date the way the spreadsheet export writes it.
#[must_use]
pub fn format_spreadsheet_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a numeric cell without a trailing `.0` for whole values.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Ids that occur more than once, in first-occurrence order.
#[must_use]
pub fn duplicate_ids(ids: &[u32]) -> Vec<u32> {
    let mut seen = Vec::new();
    let mut duplicates = Vec::new();

    for &id in ids {
        if seen.contains(&id) {
            if !duplicates.contains(&id) {
                duplicates.push(id);
            }
        } else {
            seen.push(id);
        }
    }

    duplicates
}

/// Shared rejection message for duplicate ids across both import paths.
#[must_use]
pub fn duplicate_ids_message(duplicates: &[u32]) -> String {
    let joined = duplicates
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("duplicate project ids found: {joined}")
}

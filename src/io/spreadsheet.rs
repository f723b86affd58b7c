use crate::core::project::Project;
use crate::error::{RoadmapError, RoadmapResult};
use crate::io::fields::{
    duplicate_ids, duplicate_ids_message, format_number, format_spreadsheet_date,
    parse_flexible_date,
};

pub const COLUMN_ID: &str = "ID";
pub const COLUMN_PROJECT_KEY: &str = "Project Key";
pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_SERVICE: &str = "Service";
pub const COLUMN_COMPLEXITY: &str = "Complexity";
pub const COLUMN_VALUE: &str = "Value";
pub const COLUMN_START_DATE: &str = "Start Date";

/// Columns an import must carry. `Project Key` is optional.
const REQUIRED_COLUMNS: [&str; 6] = [
    COLUMN_ID,
    COLUMN_NAME,
    COLUMN_SERVICE,
    COLUMN_COMPLEXITY,
    COLUMN_VALUE,
    COLUMN_START_DATE,
];

/// Serializes records as spreadsheet rows under the column contract.
///
/// Dates are written `dd/mm/yyyy` and whole numbers without a decimal
/// point, matching what the import path parses back.
pub fn export_csv(projects: &[Project]) -> RoadmapResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            COLUMN_ID,
            COLUMN_PROJECT_KEY,
            COLUMN_NAME,
            COLUMN_SERVICE,
            COLUMN_COMPLEXITY,
            COLUMN_VALUE,
            COLUMN_START_DATE,
        ])
        .map_err(write_error)?;

    for project in projects {
        writer
            .write_record([
                project.id.to_string(),
                project.project_key.clone().unwrap_or_default(),
                project.name.clone(),
                project.service.clone(),
                format_number(project.complexity),
                format_number(project.value),
                format_spreadsheet_date(project.start_date),
            ])
            .map_err(write_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        RoadmapError::InvalidData(format!("failed to flush spreadsheet rows: {e}"))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| RoadmapError::InvalidData(format!("spreadsheet output was not utf-8: {e}")))
}

/// Parses and validates spreadsheet rows into records ready for staging.
///
/// The header row must carry every required column; each data row is
/// validated field by field and the first violation rejects the whole
/// import, naming the offending row and column.
pub fn import_csv(raw: &str) -> RoadmapResult<Vec<Project>> {
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| RoadmapError::ImportRejected(format!("failed to read spreadsheet header: {e}")))?
        .clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| column_index(&headers, column).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(RoadmapError::ImportRejected(format!(
            "missing required columns: {}; the header row must contain these exact names",
            missing.join(", ")
        )));
    }

    let layout = ColumnLayout::resolve(&headers)?;

    let mut projects = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row_number = index + 1;
        let row = row.map_err(|e| {
            RoadmapError::ImportRejected(format!(
                "failed to read spreadsheet row {row_number}: {e}"
            ))
        })?;
        projects.push(decode_row(row_number, &row, &layout)?);
    }

    if projects.is_empty() {
        return Err(RoadmapError::ImportRejected(
            "the spreadsheet contains no data rows".to_owned(),
        ));
    }

    let ids: Vec<u32> = projects.iter().map(|project| project.id).collect();
    let duplicates = duplicate_ids(&ids);
    if !duplicates.is_empty() {
        return Err(RoadmapError::ImportRejected(duplicate_ids_message(
            &duplicates,
        )));
    }

    Ok(projects)
}

struct ColumnLayout {
    id: usize,
    project_key: Option<usize>,
    name: usize,
    service: usize,
    complexity: usize,
    value: usize,
    start_date: usize,
}

impl ColumnLayout {
    fn resolve(headers: &csv::StringRecord) -> RoadmapResult<Self> {
        Ok(Self {
            id: required_column(headers, COLUMN_ID)?,
            project_key: column_index(headers, COLUMN_PROJECT_KEY),
            name: required_column(headers, COLUMN_NAME)?,
            service: required_column(headers, COLUMN_SERVICE)?,
            complexity: required_column(headers, COLUMN_COMPLEXITY)?,
            value: required_column(headers, COLUMN_VALUE)?,
            start_date: required_column(headers, COLUMN_START_DATE)?,
        })
    }
}

fn decode_row(
    row_number: usize,
    row: &csv::StringRecord,
    layout: &ColumnLayout,
) -> RoadmapResult<Project> {
    let cell = |index: usize| row.get(index).unwrap_or("").trim();

    let Ok(id) = cell(layout.id).parse::<u32>() else {
        return reject(row_number, None, "field \"ID\" must be a number");
    };

    let name = cell(layout.name);
    if name.is_empty() {
        return reject(row_number, Some(id), "field \"Name\" is required");
    }

    let service = cell(layout.service);
    if service.is_empty() {
        return reject(row_number, Some(id), "field \"Service\" is required");
    }

    let Some(complexity) = parse_finite(cell(layout.complexity)) else {
        return reject(row_number, Some(id), "field \"Complexity\" must be a number");
    };

    let Some(value) = parse_finite(cell(layout.value)) else {
        return reject(row_number, Some(id), "field \"Value\" must be a number");
    };

    let Some(start_date) = parse_flexible_date(cell(layout.start_date)) else {
        return reject(
            row_number,
            Some(id),
            "field \"Start Date\" is invalid or missing",
        );
    };

    let mut project = Project::new(id, name, service, complexity, value, start_date);
    if let Some(index) = layout.project_key {
        let key = cell(index);
        if !key.is_empty() {
            project = project.with_project_key(key);
        }
    }
    Ok(project)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

fn required_column(headers: &csv::StringRecord, name: &str) -> RoadmapResult<usize> {
    column_index(headers, name).ok_or_else(|| {
        RoadmapError::ImportRejected(format!(
            "missing required columns: {name}; the header row must contain these exact names"
        ))
    })
}

fn reject<T>(row_number: usize, id: Option<u32>, message: &str) -> RoadmapResult<T> {
    let prefixed = match id {
        Some(id) => format!("project at row {row_number} (id {id}): {message}"),
        None => format!("project at row {row_number}: {message}"),
    };
    Err(RoadmapError::ImportRejected(prefixed))
}

fn write_error(error: csv::Error) -> RoadmapError {
    RoadmapError::InvalidData(format!("failed to write spreadsheet row: {error}"))
}

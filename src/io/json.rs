use serde_json::Value;

use crate::core::project::Project;
use crate::error::{RoadmapError, RoadmapResult};
use crate::io::fields::{duplicate_ids, duplicate_ids_message, parse_flexible_date};

/// Serializes records as the pretty-printed JSON array the import accepts.
pub fn export_json(projects: &[Project]) -> RoadmapResult<String> {
    serde_json::to_string_pretty(projects)
        .map_err(|e| RoadmapError::InvalidData(format!("failed to serialize projects json: {e}")))
}

/// Parses and validates a JSON payload into records ready for bulk replace.
///
/// The payload must be an array; each record is structurally validated and
/// the first violation rejects the whole import, naming the offending index
/// and field. Duplicate ids reject after structural validation passes.
pub fn import_json(raw: &str) -> RoadmapResult<Vec<Project>> {
    let payload: Value = serde_json::from_str(raw)
        .map_err(|e| RoadmapError::ImportRejected(format!("invalid json: {e}")))?;

    let Some(records) = payload.as_array() else {
        return Err(RoadmapError::ImportRejected(
            "json payload must be an array of projects".to_owned(),
        ));
    };

    let mut projects = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        projects.push(decode_record(index, record)?);
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

fn decode_record(index: usize, record: &Value) -> RoadmapResult<Project> {
    let Some(object) = record.as_object() else {
        return reject(index, None, "record must be a json object");
    };

    let Some(id) = object
        .get("id")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
    else {
        return reject(index, None, "field \"id\" must be a non-negative integer");
    };

    let Some(name) = object.get("name").and_then(Value::as_str) else {
        return reject(index, Some(id), "field \"name\" must be a string");
    };

    let Some(service) = object.get("service").and_then(Value::as_str) else {
        return reject(index, Some(id), "field \"service\" must be a string");
    };
    if service.trim().is_empty() {
        return reject(index, Some(id), "field \"service\" must not be blank");
    }

    let Some(complexity) = object.get("complexity").and_then(Value::as_f64) else {
        return reject(index, Some(id), "field \"complexity\" must be a number");
    };

    let Some(value) = object.get("value").and_then(Value::as_f64) else {
        return reject(index, Some(id), "field \"value\" must be a number");
    };

    let Some(raw_date) = object.get("startDate") else {
        return reject(index, Some(id), "field \"startDate\" is required");
    };
    let Some(start_date) = raw_date.as_str().and_then(parse_flexible_date) else {
        return reject(index, Some(id), "field \"startDate\" must be a parseable date");
    };

    let project_key = match object.get("projectKey") {
        None | Some(Value::Null) => None,
        Some(Value::String(key)) if key.trim().is_empty() => None,
        Some(Value::String(key)) => Some(key.clone()),
        Some(_) => {
            return reject(index, Some(id), "field \"projectKey\" must be a string");
        }
    };

    let mut project = Project::new(id, name, service, complexity, value, start_date);
    if let Some(key) = project_key {
        project = project.with_project_key(key);
    }
    Ok(project)
}

fn reject<T>(index: usize, id: Option<u32>, message: &str) -> RoadmapResult<T> {
    let prefixed = match id {
        Some(id) => format!("project at index {index} (id {id}): {message}"),
        None => format!("project at index {index}: {message}"),
    };
    Err(RoadmapError::ImportRejected(prefixed))
}

//! Record projection for the `fields` parameter.
//!
//! Turns a [`LibraryRecord`] into the JSON object returned to clients. The
//! object carries exactly the requested keys; attributes the record lacks are
//! emitted as `null`, never omitted and never replaced with a placeholder.

use cdnjs_index::types::LibraryRecord;
use serde::Serialize;
use serde_json::{Map, Value};

/// Projects one record onto the given (already allow-listed) fields.
pub fn project_record(record: &LibraryRecord, fields: &[String], cdn_base: &str) -> Map<String, Value> {
    fields
        .iter()
        .map(|field| (field.clone(), field_value(record, field, cdn_base)))
        .collect()
}

/// Projects records in order.
pub fn project_records(records: &[LibraryRecord], fields: &[String], cdn_base: &str) -> Vec<Value> {
    records
        .iter()
        .map(|record| Value::Object(project_record(record, fields, cdn_base)))
        .collect()
}

fn field_value(record: &LibraryRecord, field: &str, cdn_base: &str) -> Value {
    match field {
        "name" => Value::String(record.name.clone()),
        "latest" => record.latest_url(cdn_base).map_or(Value::Null, Value::String),
        "filename" => to_json(&record.filename),
        "description" => to_json(&record.description),
        "version" => to_json(&record.version),
        "keywords" => to_json(&record.keywords),
        "alternativeNames" => Value::Array(
            record
                .alternative_names
                .iter()
                .cloned()
                .map(Value::String)
                .collect(),
        ),
        "fileType" => to_json(&record.file_type),
        "github" => to_json(&record.github),
        "license" => to_json(&record.license),
        "homepage" => to_json(&record.homepage),
        "repository" => to_json(&record.repository),
        "author" => to_json(&record.author),
        "originalName" => to_json(&record.original_name),
        "sri" => to_json(&record.sri),
        "objectID" => to_json(&record.object_id),
        other => record.extra.get(other).cloned().unwrap_or(Value::Null),
    }
}

fn to_json<T: Serialize>(value: &Option<T>) -> Value {
    value
        .as_ref()
        .and_then(|v| serde_json::to_value(v).ok())
        .unwrap_or(Value::Null)
}

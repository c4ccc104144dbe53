use crate::core::{Record, Storage, UserRecord};
use crate::utils::error::{ReportError, Result};
use serde_json::{Map, Value};

/// Reads `path` and returns the objects of its top-level JSON array.
/// Non-object elements are skipped with a warning.
pub fn load_objects<S: Storage>(storage: &S, path: &str) -> Result<Vec<Map<String, Value>>> {
    tracing::debug!("Reading records from: {}", path);
    let bytes = storage.read_file(path)?;
    let data: Value = serde_json::from_slice(&bytes)?;

    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(ReportError::UnexpectedShape {
                path: path.to_string(),
                found: json_type_name(&other),
            })
        }
    };

    let total = items.len();
    let objects: Vec<Map<String, Value>> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(obj) => Some(obj),
            other => {
                tracing::warn!(
                    "Skipping element {} in {}: expected object, got {}",
                    index,
                    path,
                    json_type_name(&other)
                );
                None
            }
        })
        .collect();

    tracing::debug!("Loaded {} of {} elements from {}", objects.len(), total, path);
    Ok(objects)
}

pub fn load_records<S: Storage>(storage: &S, path: &str) -> Result<Vec<Record>> {
    Ok(load_objects(storage, path)?
        .into_iter()
        .map(Record::from)
        .collect())
}

pub fn load_users<S: Storage>(storage: &S, path: &str) -> Result<Vec<UserRecord>> {
    load_objects(storage, path)?
        .into_iter()
        .map(|obj| serde_json::from_value(Value::Object(obj)).map_err(ReportError::from))
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

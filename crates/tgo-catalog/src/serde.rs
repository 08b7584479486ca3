use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::Serialize;
use serde_json::{Map, Value};
use tgo_core::errors::{EngineError, ErrorInfo};

use crate::dataset::CatalogDataset;

fn serde_error(code: &str, err: impl ToString) -> EngineError {
    EngineError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, EngineError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json.encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json.write", err))?;
    Ok(bytes)
}

/// Serialises a dataset to human-editable JSON.
pub fn dataset_to_json(dataset: &CatalogDataset) -> Result<String, EngineError> {
    serde_json::to_string_pretty(dataset).map_err(|err| serde_error("dataset.serialize", err))
}

/// Restores a dataset from JSON.
pub fn dataset_from_json(json: &str) -> Result<CatalogDataset, EngineError> {
    serde_json::from_str(json).map_err(|err| serde_error("dataset.deserialize", err))
}

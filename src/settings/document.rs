//! Settings documents as ordered JSON maps.
//!
//! Merging is shallow (top-level keys only); comparison for diffing is deep.
//! Numbers compare by numeric value, so `14`, `14.0` and `1.4e1` are the same
//! setting.

use crate::error::StorageError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A settings document: top-level JSON object, insertion ordered.
pub type SettingsMap = Map<String, Value>;

/// Read a settings file. The top-level value must be an object.
pub fn read_settings(path: &Path) -> Result<SettingsMap, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| StorageError::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StorageError::NotAnObject(path.to_path_buf())),
    }
}

/// Write a settings document pretty printed (two-space indent) with a trailing newline.
pub fn write_settings(path: &Path, settings: &SettingsMap) -> Result<(), StorageError> {
    let mut content = serde_json::to_string_pretty(settings)
        .map_err(|e| StorageError::Serialize(e.to_string()))?;
    content.push('\n');
    fs::write(path, content).map_err(|e| StorageError::io(path, e))
}

/// Right-biased shallow merge: every key of `overrides` replaces or extends `base`.
pub fn merge_settings(base: &SettingsMap, overrides: &SettingsMap) -> SettingsMap {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Deep equality of two JSON values. Object key order is irrelevant and a
/// float equals an integer of the same value.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_f64() || y.is_f64() {
                x.as_f64() == y.as_f64()
            } else {
                x == y
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

fn entries_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => values_equal(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Keys of `working` whose value is missing from `baseline` or not deeply equal
/// to it, paired with the working value.
pub fn diff_settings(working: &SettingsMap, baseline: &SettingsMap) -> SettingsMap {
    working
        .iter()
        .filter(|(key, value)| !entries_equal(baseline.get(key.as_str()), Some(*value)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Sorted keys whose value differs between two documents, including keys
/// present on one side only.
pub fn drifted_keys(actual: &SettingsMap, expected: &SettingsMap) -> Vec<String> {
    let mut keys: Vec<String> = actual
        .keys()
        .chain(expected.keys())
        .filter(|key| !entries_equal(actual.get(key.as_str()), expected.get(key.as_str())))
        .cloned()
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

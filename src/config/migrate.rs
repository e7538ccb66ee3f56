use super::{Config, default_bind, default_separator_char};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Fields every configuration file is expected to carry, with the value
/// written when one is missing.
fn expected_fields() -> Vec<(&'static str, Value)> {
    vec![
        (
            "database",
            Value::String(Config::database_file().to_string_lossy().to_string()),
        ),
        ("palette", Value::Null),
        ("bind", Value::String(default_bind())),
        ("require_admin", Value::Bool(false)),
        ("separator_char", Value::String(default_separator_char())),
    ]
}

/// Keys from [`expected_fields`] absent from `map`.
pub fn missing_fields(map: &Mapping) -> Vec<&'static str> {
    expected_fields()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::String(k.to_string())))
        .map(|(k, _)| k)
        .collect()
}

fn read_mapping(path: &Path) -> io::Result<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("Invalid YAML in {:?}: {}", path, e)))?;

    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(io::Error::other(format!(
            "Configuration {:?} is not a YAML mapping",
            path
        ))),
    }
}

/// Report missing fields without touching the file.
pub fn check_config_file(path: &Path) -> io::Result<Vec<&'static str>> {
    let map = read_mapping(path)?;
    let missing = missing_fields(&map);

    if missing.is_empty() {
        success(format!("Configuration {:?} is complete.", path));
    } else {
        info(format!(
            "Configuration {:?} is missing: {}",
            path,
            missing.join(", ")
        ));
    }

    Ok(missing)
}

/// Add every missing field with its default value.
///
/// Returns the keys that were added; existing values and unknown keys are
/// preserved as they are.
pub fn fill_missing_fields(path: &Path) -> io::Result<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, default) in expected_fields() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default);
            added.push(key);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map)).map_err(|e| {
        io::Error::other(format!("Failed to serialize YAML for {:?}: {}", path, e))
    })?;
    fs::write(path, serialized)?;

    success(format!(
        "Configuration migrated, added: {}",
        added.join(", ")
    ));
    Ok(added)
}

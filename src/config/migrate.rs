//! Config upgrades: detect keys missing from an older YAML file and add them
//! with their default value, leaving the user's values untouched.

use super::Config;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Default YAML mapping, used as the reference set of keys.
fn default_mapping() -> io::Result<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| io::Error::other(format!("serialize error: {e}")))?;

    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(io::Error::other("default config is not a mapping")),
    }
}

fn read_mapping(path: &Path) -> io::Result<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(io::Error::other(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(io::Error::other(format!("parse error: {e}"))),
    }
}

/// Names of the keys missing from the config file at `path`.
pub fn missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the keys that were added; the file is rewritten only if needed.
pub fn migrate_missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| io::Error::other(format!("serialize error: {e}")))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}

//! Mod Data Loader
//!
//! Parses mod data JSON, validates each record and builds a registry.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::registry::ModRegistry;
use crate::types::ModInfo;

/// Mod data bundled into the build
pub const EMBEDDED_SOURCE: &str = include_str!("../data/modinfo.json");

/// Largest mod data file accepted from disk
pub const MAX_FILE_SIZE: u64 = 1_000_000;

/// Parse and validate mod data from a JSON string
pub fn load_from_str(json: &str) -> Result<ModRegistry, LoadError> {
    let raw: Value = serde_json::from_str(json)?;

    let Value::Array(entries) = raw else {
        return Err(LoadError::NotAnArray {
            found: json_kind(&raw),
        });
    };

    let mut mods = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let info: ModInfo = serde_json::from_value(entry).map_err(|e| {
            warn!("Rejected mod record {}: {}", index, e);
            LoadError::SchemaViolation {
                index,
                message: e.to_string(),
            }
        })?;

        info.validate().map_err(|message| {
            warn!("Rejected mod record {} ({:?}): {}", index, info.name, message);
            LoadError::SchemaViolation { index, message }
        })?;

        mods.push(info);
    }

    info!("Loaded {} mod records", mods.len());
    Ok(ModRegistry::new(mods))
}

/// Load mod data from a JSON file on disk
pub fn load_from_path(path: &Path) -> Result<ModRegistry, LoadError> {
    let io_err = |source: std::io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(io_err)?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_FILE_SIZE,
        });
    }

    debug!("Reading mod data from {:?}", path);
    let content = fs::read_to_string(path).map_err(io_err)?;
    load_from_str(&content)
}

/// Load the bundled mod data
pub fn load_embedded() -> Result<ModRegistry, LoadError> {
    load_from_str(EMBEDDED_SOURCE)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

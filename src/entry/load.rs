//! Loading voice entries from JSON exports.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::VoiceEntry;

/// Errors that can occur while loading an entry export.
#[derive(Debug, Error)]
pub enum EntryLoadError {
    #[error("Failed to read entries from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of entries or null, found {0}")]
    UnexpectedShape(&'static str),
}

/// Load entries from a JSON file.
///
/// Returns `Ok(None)` when the document is a bare `null`.
pub fn load_entries(path: &Path) -> Result<Option<Vec<VoiceEntry>>, EntryLoadError> {
    let file = File::open(path).map_err(|source| EntryLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loading entries from {:?}", path);
    load_entries_from_reader(BufReader::new(file))
}

pub fn load_entries_from_str(json: &str) -> Result<Option<Vec<VoiceEntry>>, EntryLoadError> {
    entries_from_value(serde_json::from_str(json)?)
}

/// Load entries from any reader producing a JSON document.
///
/// The top level must be an array or `null`. Array elements that are not
/// objects are skipped.
pub fn load_entries_from_reader<R: Read>(
    reader: R,
) -> Result<Option<Vec<VoiceEntry>>, EntryLoadError> {
    entries_from_value(serde_json::from_reader(reader)?)
}

fn entries_from_value(value: Value) -> Result<Option<Vec<VoiceEntry>>, EntryLoadError> {
    let items = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => items,
        other => return Err(EntryLoadError::UnexpectedShape(json_kind(&other))),
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(
                "Skipping entry at index {}: expected an object, found {}",
                index,
                json_kind(&item)
            );
            continue;
        }
        entries.push(serde_json::from_value(item)?);
    }

    debug!("Loaded {} entries", entries.len());
    Ok(Some(entries))
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

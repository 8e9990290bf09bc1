//! Tolerant field deserializers for exported entry dumps.
//!
//! Exports from the journaling app are not always well typed: a tag list can
//! hold `null`s, a score can be a string, a field can be missing entirely.
//! These helpers turn every malformed value into "absent" instead of failing
//! the whole document. All of them must be paired with `#[serde(default)]` so
//! that a missing key also maps to `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps JSON strings, anything else becomes `None`.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Keeps JSON numbers as `f64`, anything else becomes `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// A JSON array becomes a list of slots, one per element; non-string
/// elements become empty slots so positions are preserved.
pub fn tag_list<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// A JSON array becomes one slot per element; non-numeric elements become
/// empty slots so the array length is preserved.
pub fn vector<'de, D>(deserializer: D) -> Result<Option<Vec<Option<f64>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(items.iter().map(Value::as_f64).collect()),
        _ => None,
    })
}

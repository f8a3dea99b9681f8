//! Forgiving field deserializers for upstream JSON.
//!
//! Profiles and postings arrive already fetched from other services. A field
//! with the wrong shape is treated as absent instead of rejecting the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON value. Strings that are non-blank become `Some`, everything
/// else (`null`, numbers, objects, `""`) becomes `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Accepts any JSON value. Arrays keep their non-blank string items; any other
/// shape yields an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Accepts any JSON value. Arrays are kept item-for-item; any other shape
/// yields an empty list.
pub fn value_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

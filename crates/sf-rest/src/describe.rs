//! Describe metadata.
//!
//! Describe payloads are large and vary between API versions, so they are
//! kept as a raw JSON object with a few convenience accessors instead of a
//! fixed struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema metadata returned by describe and describe-global.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SObjectMeta(Map<String, Value>);

impl SObjectMeta {
    /// Get a top-level entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The described object's API name, or `""` (always empty for
    /// describe-global).
    pub fn name(&self) -> &str {
        self.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    /// API names of every entry under `sobjects` (describe-global).
    pub fn sobject_names(&self) -> Vec<&str> {
        self.get("sobjects")
            .and_then(Value::as_array)
            .map(|sobjects| {
                sobjects
                    .iter()
                    .filter_map(|s| s.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Field names declared under `fields` (describe).
    pub fn field_names(&self) -> Vec<&str> {
        self.get("fields")
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|f| f.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The raw describe payload.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the metadata, returning the raw payload.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for SObjectMeta {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

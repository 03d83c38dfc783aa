//! Name-value records for flow inputs and outputs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A name-value mapping of fields.
///
/// Records carry both invocation requests (the caller's raw input) and
/// invocation results (the validated model output). They are transient,
/// owned by the caller, and hold no state between calls.
///
/// # Examples
///
/// ```
/// use muse_core::Record;
/// use serde_json::json;
///
/// let record = Record::from_value(json!({
///     "theme": "loss",
///     "existingPoem": "old text",
/// })).unwrap();
///
/// assert_eq!(record.get_str("theme"), Some("loss"));
/// assert!(record.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a record from a JSON value, returning `None` unless the value
    /// is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Consume the record, returning the underlying JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Look up a string field by name.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Look up an array field by name.
    pub fn get_array(&self, field: &str) -> Option<&Vec<Value>> {
        self.0.get(field).and_then(Value::as_array)
    }

    /// Insert a field, replacing any previous value under the same name.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// True when the field is present and not `null`.
    pub fn contains(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(v) if !v.is_null())
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "<unprintable record>"),
        }
    }
}

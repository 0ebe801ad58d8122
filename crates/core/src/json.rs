//! JSON document values
//!
//! This module defines the document value and the pure helpers every store
//! operation is built from:
//! - JsonValue: Newtype wrapper around serde_json::Value
//! - sanitize: Recursive removal of prototype-pollution keys
//! - try_parse: Best-effort coercion of block text into JSON
//! - format_output: Host-facing rendering of a value
//! - deep_merge: Recursive merge of mappings (source wins)
//!
//! Mappings keep insertion order (serde_json `preserve_order`).

use crate::reply::Reply;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

// =============================================================================
// Forbidden keys
// =============================================================================

/// Keys that must never be read, written or stored
pub const FORBIDDEN_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Check whether a key is one of [`FORBIDDEN_KEYS`]
pub fn is_forbidden_key(key: &str) -> bool {
    FORBIDDEN_KEYS.contains(&key)
}

// =============================================================================
// JsonValue
// =============================================================================

/// JSON document value
///
/// Newtype around serde_json::Value providing:
/// - Direct access to underlying serde_json::Value via Deref/DerefMut
/// - Sanitized parsing of external text
/// - Host-style type names, keys and lengths
///
/// # Examples
///
/// ```
/// use dictplus_core::JsonValue;
///
/// let obj = JsonValue::object();
/// let arr = JsonValue::array();
///
/// assert!(obj.is_object());
/// assert!(arr.is_array());
/// assert_eq!(arr.type_name(), "array");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct JsonValue(Value);

impl JsonValue {
    /// Create a null JSON value
    pub fn null() -> Self {
        JsonValue(Value::Null)
    }

    /// Create an empty JSON object
    pub fn object() -> Self {
        JsonValue(Value::Object(Map::new()))
    }

    /// Create an empty JSON array
    pub fn array() -> Self {
        JsonValue(Value::Array(Vec::new()))
    }

    /// Create from a serde_json::Value
    pub fn from_value(value: Value) -> Self {
        JsonValue(value)
    }

    /// Parse JSON text and sanitize the result
    pub fn parse_sanitized(text: &str) -> Result<Self, serde_json::Error> {
        let mut value: Value = serde_json::from_str(text)?;
        sanitize(&mut value);
        Ok(JsonValue(value))
    }

    /// Get the underlying serde_json::Value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Get a reference to the underlying serde_json::Value
    pub fn as_inner(&self) -> &Value {
        &self.0
    }

    /// Get a mutable reference to the underlying serde_json::Value
    pub fn as_inner_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    /// Serialize to compact JSON string
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    /// True for mappings and sequences
    pub fn is_container(&self) -> bool {
        is_container(&self.0)
    }

    /// Host type name of this value
    pub fn type_name(&self) -> &'static str {
        value_type_name(&self.0)
    }

    /// An empty value of the same container kind (`[]` for sequences, `{}` otherwise)
    pub fn emptied(&self) -> Self {
        if self.0.is_array() {
            JsonValue::array()
        } else {
            JsonValue::object()
        }
    }
}

impl FromStr for JsonValue {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JsonValue::parse_sanitized(s)
    }
}

impl Deref for JsonValue {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for JsonValue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Default is an empty mapping, the shape of a freshly created document
impl Default for JsonValue {
    fn default() -> Self {
        Self::object()
    }
}

impl From<Value> for JsonValue {
    fn from(v: Value) -> Self {
        JsonValue(v)
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        v.0
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        JsonValue(Value::String(v.to_string()))
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        JsonValue(Value::String(v))
    }
}

// =============================================================================
// Value helpers
// =============================================================================

/// True for mappings and sequences
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Host type name for a value
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Own keys of a container; sequence keys are stringified indices
pub fn container_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(obj) => obj.keys().cloned().collect(),
        Value::Array(arr) => (0..arr.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// String length in UTF-16 code units, as the host counts it
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

// =============================================================================
// Sanitize
// =============================================================================

/// Remove forbidden keys at every depth, in place
///
/// Returns the same value for chaining. Input is always freshly parsed JSON,
/// so no cycle detection is needed.
///
/// # Examples
///
/// ```
/// use dictplus_core::json::sanitize;
///
/// let mut v = serde_json::json!({"a": {"__proto__": 1, "b": [{"constructor": 2}]}});
/// sanitize(&mut v);
/// assert_eq!(v, serde_json::json!({"a": {"b": [{}]}}));
/// ```
pub fn sanitize(value: &mut Value) -> &mut Value {
    match value {
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                sanitize(item);
            }
        }
        Value::Object(obj) => {
            obj.retain(|key, _| !is_forbidden_key(key));
            for item in obj.values_mut() {
                sanitize(item);
            }
        }
        _ => {}
    }
    value
}

// =============================================================================
// tryParse / formatOutput
// =============================================================================

/// Coerce block text into a value
///
/// Text that, once trimmed, is bracketed like an object (`{...}`) or array
/// (`[...]`) literal is parsed and sanitized. Anything else, including text
/// that fails to parse, stays the original string.
pub fn try_parse(text: &str) -> Value {
    let trimmed = text.trim();
    let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if bracketed {
        if let Ok(mut parsed) = serde_json::from_str::<Value>(trimmed) {
            sanitize(&mut parsed);
            return parsed;
        }
    }
    Value::String(text.to_string())
}

/// Render a value for a reporter block
///
/// `None` (absent) becomes `"undefined"`, null becomes `"null"`, containers
/// become compact JSON, and scalars pass through as host scalars.
pub fn format_output(value: Option<&Value>) -> Reply {
    match value {
        None => Reply::undefined(),
        Some(Value::Null) => Reply::Text("null".to_string()),
        Some(Value::Bool(b)) => Reply::Bool(*b),
        Some(Value::Number(n)) => Reply::Number(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => Reply::Text(s.clone()),
        Some(container) => Reply::Text(container.to_string()),
    }
}

// =============================================================================
// Deep merge
// =============================================================================

/// Merge `source` into `target`, recursing where both sides hold mappings
///
/// Any other conflict is resolved in favor of the source. Values taken from
/// the source are deep copies, so `target` never shares structure with
/// `source`. Forbidden keys in the source are skipped.
///
/// # Examples
///
/// ```
/// use dictplus_core::json::deep_merge;
///
/// let mut target = serde_json::json!({"a": {"x": 1, "y": 2}, "list": [1]});
/// let source = serde_json::json!({"a": {"y": 3}, "list": [2, 3]});
/// deep_merge(
///     target.as_object_mut().unwrap(),
///     source.as_object().unwrap(),
/// );
/// assert_eq!(target, serde_json::json!({"a": {"x": 1, "y": 3}, "list": [2, 3]}));
/// ```
pub fn deep_merge(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        if is_forbidden_key(key) {
            continue;
        }
        match (target.get_mut(key), value) {
            (Some(Value::Object(target_obj)), Value::Object(source_obj)) => {
                deep_merge(target_obj, source_obj);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

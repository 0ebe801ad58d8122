//! Host-facing reporter values
//!
//! The block host only understands strings, numbers and booleans. Every read
//! operation produces one of these; language-level "undefined" is spelled as
//! the text `"undefined"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel text for absent values
pub const UNDEFINED: &str = "undefined";

/// A value returned to a reporter or boolean block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    /// Text result (JSON text, strings, sentinels)
    Text(String),
    /// Numeric result
    Number(f64),
    /// Boolean result
    Bool(bool),
}

impl Reply {
    /// The `"undefined"` sentinel
    pub fn undefined() -> Self {
        Reply::Text(UNDEFINED.to_string())
    }

    /// Check for the `"undefined"` sentinel
    pub fn is_undefined(&self) -> bool {
        matches!(self, Reply::Text(s) if s == UNDEFINED)
    }

    /// Text payload, if this is a text reply
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload, if this is a number reply
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Reply::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean reply
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Reply::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Format a number the way the host prints it
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        // -0 prints as 0
        format!("{}", n as i128)
    } else {
        n.to_string()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(s) => f.write_str(s),
            Reply::Number(n) => f.write_str(&format_number(*n)),
            Reply::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Reply {
    fn from(v: &str) -> Self {
        Reply::Text(v.to_string())
    }
}

impl From<String> for Reply {
    fn from(v: String) -> Self {
        Reply::Text(v)
    }
}

impl From<f64> for Reply {
    fn from(v: f64) -> Self {
        Reply::Number(v)
    }
}

impl From<usize> for Reply {
    fn from(v: usize) -> Self {
        Reply::Number(v as f64)
    }
}

impl From<bool> for Reply {
    fn from(v: bool) -> Self {
        Reply::Bool(v)
    }
}

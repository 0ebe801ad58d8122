//! Output enum for block execution results.
//!
//! Every command produces exactly one output variant: reporters produce
//! `Text` or `Number`, boolean blocks produce `Bool`, command blocks produce
//! `Unit`. There is no "undefined" output; absent values arrive as the text
//! `"undefined"`.

use dictplus_core::reply::format_number;
use dictplus_core::Reply;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Successful block execution results.
///
/// # Example
///
/// ```text
/// use dictplus_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::new();
/// match executor.execute(Command::Length { dict: "foo".into(), key: "".into() })? {
///     Output::Number(n) => println!("{} keys", n),
///     _ => unreachable!("Length always returns Number"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (command blocks)
    Unit,

    /// Text result (JSON text, strings, sentinels)
    Text(String),

    /// Numeric result
    Number(f64),

    /// Boolean result
    Bool(bool),
}

impl Output {
    /// Text payload, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Output::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Output::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Reply> for Output {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Text(s) => Output::Text(s),
            Reply::Number(n) => Output::Number(n),
            Reply::Bool(b) => Output::Bool(b),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Unit => Ok(()),
            Output::Text(s) => f.write_str(s),
            Output::Number(n) => f.write_str(&format_number(*n)),
            Output::Bool(b) => write!(f, "{}", b),
        }
    }
}

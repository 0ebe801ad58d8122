//! Write outcomes
//!
//! Write operations never fail from the host's point of view: an invalid
//! target leaves the store untouched. Internally every write still reports
//! why it did nothing, so callers can log it and tests can assert on it.

use crate::actions::UnknownMenuItem;
use dictplus_core::{LimitError, ResolveError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a write; `Err` means the store was left unchanged
pub type WriteResult<T = ()> = std::result::Result<T, NoOp>;

/// Why a write left the store unchanged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoOp {
    /// The named document does not exist
    #[error("document '{0}' does not exist")]
    DocumentMissing(String),

    /// The path did not resolve (includes forbidden keys)
    #[error("path did not resolve: {0}")]
    Unresolved(#[from] ResolveError),

    /// A document limit would be exceeded
    #[error(transparent)]
    Limit(#[from] LimitError),

    /// The value is not an object or array literal
    #[error("value is not an object or array")]
    NotAStructure,

    /// The operation does not apply to the value found
    #[error("cannot {action} a {found} value")]
    TypeMismatch {
        /// Operation attempted
        action: &'static str,
        /// Type name of the value found
        found: &'static str,
    },

    /// The operation has no meaning on the document root
    #[error("cannot {0} the document root")]
    RootTarget(&'static str),

    /// A sequence position is not an integer
    #[error("'{0}' is not an integer index")]
    InvalidIndex(String),

    /// A sequence position is past the end
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Sequence length
        len: usize,
    },

    /// The key to delete is not present
    #[error("key '{0}' is not present")]
    KeyMissing(String),

    /// The action text is not a menu item
    #[error(transparent)]
    UnknownAction(#[from] UnknownMenuItem),
}

/// What "load JSON" stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadOutcome {
    /// The data parsed to an object or array and was stored
    Parsed,
    /// The data was not JSON; an error placeholder was stored
    InvalidJson,
    /// The data was JSON but not an object or array; an error placeholder was stored
    InvalidStructure,
}

impl LoadOutcome {
    /// Message stored in the placeholder document, if any
    pub fn placeholder_message(&self) -> Option<&'static str> {
        match self {
            LoadOutcome::Parsed => None,
            LoadOutcome::InvalidJson => Some("Invalid JSON"),
            LoadOutcome::InvalidStructure => Some("Invalid JSON Structure"),
        }
    }
}

/// How "merge" combined two documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeOutcome {
    /// Destination was absent and received a copy of the source
    Cloned,
    /// Both were mappings; the source was deep-merged into the destination
    Merged,
    /// Destination was replaced by a copy of the source
    Replaced,
}

//! Error types for path resolution
//!
//! Resolution failures are never surfaced to the host directly; the engine
//! turns them into sentinels or no-ops. Keeping the reason typed lets tests
//! assert why a path did not resolve.

use crate::limits::LimitError;
use thiserror::Error;

/// Result type alias for path resolution
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Why a path did not resolve to a location
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A navigation segment is `__proto__`, `constructor` or `prototype`
    #[error("forbidden key in path: {0}")]
    ForbiddenKey(String),

    /// Traversal reached a scalar where a container was needed
    #[error("cannot navigate into {found} at segment '{segment}'")]
    NotAContainer {
        /// Segment that was being looked up
        segment: String,
        /// Type name of the value found
        found: &'static str,
    },

    /// An intermediate segment is absent and auto-creation was off
    #[error("missing intermediate key '{0}'")]
    Missing(String),

    /// A sequence was addressed with a segment that is not an index
    #[error("'{0}' is not a sequence index")]
    InvalidIndex(String),

    /// A document limit would be exceeded
    #[error(transparent)]
    Limit(#[from] LimitError),
}

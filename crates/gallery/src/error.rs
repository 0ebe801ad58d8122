//! Gallery errors
//!
//! Only whole-catalog failures are errors. A single broken extension folder
//! is skipped with a warning instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gallery operations
pub type GalleryResult<T> = std::result::Result<T, GalleryError>;

/// Why a catalog could not be loaded
#[derive(Debug, Error)]
pub enum GalleryError {
    /// `extensions.json` is absent
    #[error("catalog index not found: {}", path.display())]
    MissingIndex {
        /// Expected location of the index
        path: PathBuf,
    },

    /// `extensions.json` is not a JSON array of folder names
    #[error("invalid catalog index {}: {reason}", path.display())]
    InvalidIndex {
        /// Location of the index
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Reading the index failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Every listed folder was skipped
    #[error("no valid extensions in catalog")]
    Empty,
}

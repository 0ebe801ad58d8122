//! Document limits
//!
//! | Limit | Value | Constant |
//! |-------|-------|----------|
//! | Max path length | 256 segments | [`MAX_PATH_LENGTH`] |
//! | Max array size | 1M elements | [`MAX_ARRAY_SIZE`] |
//!
//! Parsed JSON nesting is already bounded by serde_json's recursion limit,
//! so no separate depth limit is kept here.

use thiserror::Error;

/// Maximum path length in segments (256 segments)
pub const MAX_PATH_LENGTH: usize = 256;

/// Maximum array size in elements (1 million elements)
///
/// Index writes that would grow a sequence past this are rejected.
pub const MAX_ARRAY_SIZE: usize = 1_000_000;

/// Error type for document limit violations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Path exceeds maximum length
    #[error("path length {length} exceeds maximum of {max} segments")]
    PathTooLong {
        /// Actual path length
        length: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Array would exceed maximum size
    #[error("array size {size} exceeds maximum of {max} elements")]
    ArrayTooLarge {
        /// Requested array size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },
}

/// Check a path segment count against [`MAX_PATH_LENGTH`].
pub fn validate_path_length(length: usize) -> Result<(), LimitError> {
    if length > MAX_PATH_LENGTH {
        Err(LimitError::PathTooLong {
            length,
            max: MAX_PATH_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Check that a sequence may grow to `size` elements.
pub fn validate_array_size(size: usize) -> Result<(), LimitError> {
    if size > MAX_ARRAY_SIZE {
        Err(LimitError::ArrayTooLarge {
            size,
            max: MAX_ARRAY_SIZE,
        })
    } else {
        Ok(())
    }
}

//! Core types for Dictionaries+
//!
//! This crate defines the document model and the pure functions every store
//! operation is built from:
//! - JsonValue: Document value (newtype over serde_json::Value)
//! - DocPath: Parsed dotted path with `\.` escapes
//! - resolve / resolve_mut: Path traversal to a (container, key) location
//! - sanitize, try_parse, format_output, deep_merge: Value helpers
//! - Reply: Host-facing string / number / boolean results
//! - Limits: MAX_PATH_LENGTH, MAX_ARRAY_SIZE

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod json;
pub mod limits;
pub mod number;
pub mod path;
pub mod reply;

pub use error::{ResolveError, ResolveResult};
pub use json::{
    container_keys, deep_merge, format_output, is_container, is_forbidden_key, sanitize,
    try_parse, utf16_len, value_type_name, JsonValue, FORBIDDEN_KEYS,
};
pub use limits::{
    validate_array_size, validate_path_length, LimitError, MAX_ARRAY_SIZE, MAX_PATH_LENGTH,
};
pub use number::{integer_index, number_value, parse_number, to_number};
pub use path::{resolve, resolve_mut, sequence_index, DocPath, Location, LocationMut};
pub use reply::{Reply, UNDEFINED};

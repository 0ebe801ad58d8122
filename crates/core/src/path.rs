//! Dotted paths into documents
//!
//! A path is a string of segments separated by `.`; `\.` puts a literal dot
//! inside a segment. The empty string is the document root.
//!
//! | Path | Segments |
//! |------|----------|
//! | `` | (root) |
//! | `user.name` | `user`, `name` |
//! | `items.0.id` | `items`, `0`, `id` |
//! | `files.report\.txt` | `files`, `report.txt` |
//!
//! Parsing ([`DocPath::parse`]) is independent of traversal ([`resolve`],
//! [`resolve_mut`]). Segments are plain strings; whether one addresses a
//! mapping key or a sequence index depends on the container it is applied
//! to.

use crate::error::{ResolveError, ResolveResult};
use crate::json::{is_container, is_forbidden_key, value_type_name};
use crate::limits::{validate_array_size, validate_path_length};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// DocPath
// =============================================================================

/// A parsed path into a document
///
/// # Examples
///
/// ```
/// use dictplus_core::DocPath;
///
/// let path = DocPath::parse(r"settings.file\.name");
/// assert_eq!(path.segments(), &["settings", "file.name"]);
/// assert_eq!(path.to_string(), r"settings.file\.name");
/// assert!(DocPath::parse("").is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DocPath {
    segments: Vec<String>,
}

impl DocPath {
    /// Create the root path (empty path)
    pub fn root() -> Self {
        DocPath {
            segments: Vec::new(),
        }
    }

    /// Create a path from raw segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        DocPath { segments }
    }

    /// Parse a path string
    ///
    /// Splits on unescaped `.`; `\.` becomes a literal dot. A backslash not
    /// followed by a dot is kept as is. Never fails.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return DocPath::root();
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&'.') => {
                    chars.next();
                    current.push('.');
                }
                '.' => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        segments.push(current);

        DocPath { segments }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root path (empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the last segment (None if root)
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// First forbidden segment anywhere in the path
    pub fn forbidden_segment(&self) -> Option<&str> {
        self.segments
            .iter()
            .map(String::as_str)
            .find(|s| is_forbidden_key(s))
    }

    /// Convert back to the escaped string form
    ///
    /// Parsing the result gives back the same segments, except that a
    /// segment ending in `\` followed by another segment has no escaped
    /// form: the grammar has no escape for a backslash, so `\` before the
    /// separator reads as `\.`.
    pub fn to_path_string(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.replace('.', "\\."))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl FromStr for DocPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DocPath::parse(s))
    }
}

impl From<&str> for DocPath {
    fn from(s: &str) -> Self {
        DocPath::parse(s)
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}

/// Interpret a segment as a sequence index
///
/// Only canonical non-negative integers qualify: `"0"`, `"12"`, but not
/// `"012"`, `"+1"` or `"1.0"`.
pub fn sequence_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

/// Look up a child of a container by segment
pub fn child<'a>(container: &'a Value, segment: &str) -> Option<&'a Value> {
    match container {
        Value::Object(obj) => obj.get(segment),
        Value::Array(arr) => sequence_index(segment).and_then(|i| arr.get(i)),
        _ => None,
    }
}

/// Look up a child of a container by segment, mutably
pub fn child_mut<'a>(container: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match container {
        Value::Object(obj) => obj.get_mut(segment),
        Value::Array(arr) => sequence_index(segment).and_then(move |i| arr.get_mut(i)),
        _ => None,
    }
}

/// The container auto-created ahead of `next_segment`
fn container_for(next_segment: &str) -> Value {
    if sequence_index(next_segment).is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

// =============================================================================
// Locations
// =============================================================================

/// A resolved (container, key) pair for reading
///
/// `key` is `None` for the root path, in which case `container` is the
/// document itself. The key borrows from the [`DocPath`], not the document.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a, 'p> {
    /// Second-to-last value on the path (or the root)
    pub container: &'a Value,
    /// Final segment, `None` for the root path
    pub key: Option<&'p str>,
}

impl<'a, 'p> Location<'a, 'p> {
    /// The value at this location, if present
    pub fn get(&self) -> Option<&'a Value> {
        match self.key {
            None => Some(self.container),
            Some(key) => child(self.container, key),
        }
    }

    /// Whether the final key exists in the container
    pub fn contains(&self) -> bool {
        self.get().is_some()
    }
}

/// A resolved (container, key) pair for writing
#[derive(Debug)]
pub struct LocationMut<'a, 'p> {
    /// Second-to-last value on the path (or the root)
    pub container: &'a mut Value,
    /// Final segment, `None` for the root path
    pub key: Option<&'p str>,
}

impl<'a, 'p> LocationMut<'a, 'p> {
    /// The value at this location, if present
    pub fn get(&self) -> Option<&Value> {
        match self.key {
            None => Some(&*self.container),
            Some(key) => child(&*self.container, key),
        }
    }

    /// The value at this location, mutably, if present
    pub fn get_mut(&mut self) -> Option<&mut Value> {
        match self.key {
            None => Some(&mut *self.container),
            Some(key) => child_mut(&mut *self.container, key),
        }
    }

    /// Whether the final key exists in the container
    pub fn contains(&self) -> bool {
        self.get().is_some()
    }

    /// Assign `value` at the final key, creating the slot
    ///
    /// Sequences are written by index; writing past the end pads with
    /// nulls. A non-index key on a sequence or a forbidden key on a mapping
    /// is rejected without mutation.
    pub fn assign(&mut self, value: Value) -> ResolveResult<()> {
        let key = match self.key {
            None => {
                *self.container = value;
                return Ok(());
            }
            Some(key) => key,
        };

        let found = value_type_name(&*self.container);
        match &mut *self.container {
            Value::Object(obj) => {
                if is_forbidden_key(key) {
                    return Err(ResolveError::ForbiddenKey(key.to_string()));
                }
                obj.insert(key.to_string(), value);
                Ok(())
            }
            Value::Array(arr) => {
                let idx =
                    sequence_index(key).ok_or_else(|| ResolveError::InvalidIndex(key.to_string()))?;
                if idx < arr.len() {
                    arr[idx] = value;
                } else {
                    validate_array_size(idx.saturating_add(1))?;
                    arr.resize(idx, Value::Null);
                    arr.push(value);
                }
                Ok(())
            }
            _ => Err(ResolveError::NotAContainer {
                segment: key.to_string(),
                found,
            }),
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a path for reading
///
/// Walks every segment but the last. Fails on a forbidden navigation
/// segment, on a scalar where a container is needed, or on a missing
/// intermediate value. The final key need not exist.
///
/// # Examples
///
/// ```
/// use dictplus_core::{resolve, DocPath};
/// use serde_json::json;
///
/// let doc = json!({"user": {"tags": ["a", "b"]}});
/// let path = DocPath::parse("user.tags.1");
/// let loc = resolve(&doc, &path).unwrap();
/// assert_eq!(loc.get(), Some(&json!("b")));
///
/// assert!(resolve(&doc, &DocPath::parse("user.missing.x")).is_err());
/// ```
pub fn resolve<'a, 'p>(root: &'a Value, path: &'p DocPath) -> ResolveResult<Location<'a, 'p>> {
    validate_path_length(path.len())?;

    let Some((last, parents)) = path.segments().split_last() else {
        return Ok(Location {
            container: root,
            key: None,
        });
    };

    let mut current = root;
    for segment in parents {
        if is_forbidden_key(segment) {
            return Err(ResolveError::ForbiddenKey(segment.clone()));
        }
        if !is_container(current) {
            return Err(ResolveError::NotAContainer {
                segment: segment.clone(),
                found: value_type_name(current),
            });
        }
        current = child(current, segment).ok_or_else(|| ResolveError::Missing(segment.clone()))?;
    }

    if !is_container(current) {
        return Err(ResolveError::NotAContainer {
            segment: last.clone(),
            found: value_type_name(current),
        });
    }

    Ok(Location {
        container: current,
        key: Some(last.as_str()),
    })
}

/// Resolve a path for writing
///
/// Same walk as [`resolve`]. With `auto_create`, a missing intermediate
/// value becomes an empty sequence when the following segment is an index
/// and an empty mapping otherwise. The final slot is never created here.
///
/// Forbidden segments anywhere in the path, the final one included, are
/// rejected before anything is created.
///
/// # Examples
///
/// ```
/// use dictplus_core::{resolve_mut, DocPath};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let path = DocPath::parse("a.b.c");
/// let loc = resolve_mut(&mut doc, &path, true).unwrap();
/// assert_eq!(loc.key, Some("c"));
/// assert!(!loc.contains());
/// assert_eq!(doc, json!({"a": {"b": {}}}));
/// ```
pub fn resolve_mut<'a, 'p>(
    root: &'a mut Value,
    path: &'p DocPath,
    auto_create: bool,
) -> ResolveResult<LocationMut<'a, 'p>> {
    validate_path_length(path.len())?;

    if let Some(segment) = path.forbidden_segment() {
        return Err(ResolveError::ForbiddenKey(segment.to_string()));
    }

    let segments = path.segments();
    let Some((last, parents)) = segments.split_last() else {
        return Ok(LocationMut {
            container: root,
            key: None,
        });
    };

    let mut current = root;
    for (i, segment) in parents.iter().enumerate() {
        current = step_mut(current, segment, &segments[i + 1], auto_create)?;
    }

    if !is_container(current) {
        return Err(ResolveError::NotAContainer {
            segment: last.clone(),
            found: value_type_name(current),
        });
    }

    Ok(LocationMut {
        container: current,
        key: Some(last.as_str()),
    })
}

/// Descend one level, creating the child when allowed
fn step_mut<'a>(
    current: &'a mut Value,
    segment: &str,
    next_segment: &str,
    auto_create: bool,
) -> ResolveResult<&'a mut Value> {
    let found = value_type_name(current);
    match current {
        Value::Object(obj) => {
            if !obj.contains_key(segment) {
                if !auto_create {
                    return Err(ResolveError::Missing(segment.to_string()));
                }
                obj.insert(segment.to_string(), container_for(next_segment));
            }
            obj.get_mut(segment)
                .ok_or_else(|| ResolveError::Missing(segment.to_string()))
        }
        Value::Array(arr) => {
            let Some(idx) = sequence_index(segment) else {
                return Err(if auto_create {
                    ResolveError::InvalidIndex(segment.to_string())
                } else {
                    ResolveError::Missing(segment.to_string())
                });
            };
            if idx >= arr.len() {
                if !auto_create {
                    return Err(ResolveError::Missing(segment.to_string()));
                }
                validate_array_size(idx.saturating_add(1))?;
                arr.resize(idx, Value::Null);
                arr.push(container_for(next_segment));
            }
            Ok(&mut arr[idx])
        }
        _ => Err(ResolveError::NotAContainer {
            segment: segment.to_string(),
            found,
        }),
    }
}

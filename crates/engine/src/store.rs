//! DocumentStore: named JSON dictionaries
//!
//! ## Design: OWNED STATE
//!
//! DocumentStore owns its documents outright. There is no global map, so
//! any number of stores can coexist (one per executor, one per test).
//! Execution is single-threaded and every operation completes before it
//! returns; writes take `&mut self` and no locking is involved.
//!
//! ## API
//!
//! - **Document operations** (this module): `list`, `stringify`,
//!   `load_json`, `clear`, `delete_document`, `manage`, `clone_document`,
//!   `merge`, `clear_all`
//! - **Reads** ([`crate::read`]): `get`, `keys`, `length`, `type_of`,
//!   `check_prop`
//! - **Key writes** ([`crate::write`]): `set_key`, `change_key`,
//!   `push_key`, `delete_key`, `apply_key_action`
//!
//! Reads always produce a [`Reply`]; writes produce a [`WriteResult`]
//! whose `Err` side names why nothing changed.

use crate::actions::DictAction;
use crate::outcome::{LoadOutcome, MergeOutcome, NoOp, WriteResult};
use dictplus_core::{deep_merge, is_container, sanitize, JsonValue, Reply};
use rustc_hash::FxHashMap;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// In-memory store of named documents
///
/// # Example
///
/// ```
/// use dictplus_engine::DocumentStore;
///
/// let mut store = DocumentStore::new();
/// store.load_json("foo", r#"{"bar": "baz"}"#);
/// assert_eq!(store.get("foo", "bar").to_string(), "baz");
/// assert_eq!(store.stringify("missing").to_string(), "{}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    pub(crate) docs: FxHashMap<String, JsonValue>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when no documents exist
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Whether a document exists
    pub fn contains(&self, name: &str) -> bool {
        self.docs.contains_key(name)
    }

    /// Borrow a document
    pub fn document(&self, name: &str) -> Option<&JsonValue> {
        self.docs.get(name)
    }

    /// Document names, in arbitrary order
    pub fn names(&self) -> Vec<String> {
        self.docs.keys().cloned().collect()
    }

    /// Get a document, creating an empty mapping if absent
    pub fn ensure_document(&mut self, name: &str) -> &mut JsonValue {
        self.docs.entry(name.to_string()).or_default()
    }

    /// Remove every document (host disposal)
    pub fn clear_all(&mut self) {
        debug!(count = self.docs.len(), "clearing all documents");
        self.docs.clear();
    }

    // =========================================================================
    // Document-level reads
    // =========================================================================

    /// JSON array of all document names
    pub fn list(&self) -> Reply {
        Reply::Text(Value::from(self.names()).to_string())
    }

    /// JSON text of a document, `"{}"` if absent
    pub fn stringify(&self, name: &str) -> Reply {
        match self.docs.get(name) {
            Some(doc) => Reply::Text(doc.to_json_string()),
            None => Reply::Text("{}".to_string()),
        }
    }

    // =========================================================================
    // Document-level writes
    // =========================================================================

    /// Parse `data` and store it as `name`
    ///
    /// The parsed value is sanitized. Text that is not JSON, or JSON that is
    /// not an object or array, stores an `{"error": ...}` placeholder
    /// instead.
    pub fn load_json(&mut self, name: &str, data: &str) -> LoadOutcome {
        let (doc, outcome) = match serde_json::from_str::<Value>(data) {
            Ok(mut value) => {
                sanitize(&mut value);
                if is_container(&value) {
                    (value, LoadOutcome::Parsed)
                } else {
                    (Value::Null, LoadOutcome::InvalidStructure)
                }
            }
            Err(e) => {
                debug!(document = name, error = %e, "load JSON parse failed");
                (Value::Null, LoadOutcome::InvalidJson)
            }
        };

        let doc = match outcome.placeholder_message() {
            Some(message) => {
                warn!(document = name, message, "storing placeholder document");
                json!({ "error": message })
            }
            None => doc,
        };

        self.docs.insert(name.to_string(), JsonValue::from_value(doc));
        outcome
    }

    /// Reset an existing document to an empty container of the same kind
    pub fn clear(&mut self, name: &str) -> WriteResult {
        let doc = self
            .docs
            .get_mut(name)
            .ok_or_else(|| NoOp::DocumentMissing(name.to_string()))?;
        *doc = doc.emptied();
        Ok(())
    }

    /// Remove a document
    pub fn delete_document(&mut self, name: &str) -> WriteResult {
        self.docs
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| NoOp::DocumentMissing(name.to_string()))
    }

    /// Apply a document-level action
    ///
    /// `data` is only read by [`DictAction::LoadJson`]. Loading always
    /// writes a document, so it never reports a no-op.
    pub fn manage(&mut self, name: &str, action: DictAction, data: &str) -> WriteResult {
        match action {
            DictAction::LoadJson => {
                self.load_json(name, data);
                Ok(())
            }
            DictAction::Clear => self.clear(name),
            DictAction::Delete => self.delete_document(name),
        }
    }

    /// Apply a document-level action given as menu text
    ///
    /// Unknown actions leave the store untouched.
    pub fn manage_document(&mut self, name: &str, action: &str, data: &str) -> WriteResult {
        let action = action.parse::<DictAction>()?;
        self.manage(name, action, data)
    }

    /// Store a deep copy of `src` as `dest`
    pub fn clone_document(&mut self, src: &str, dest: &str) -> WriteResult {
        let copy = self
            .docs
            .get(src)
            .cloned()
            .ok_or_else(|| NoOp::DocumentMissing(src.to_string()))?;
        debug!(src, dest, "cloning document");
        self.docs.insert(dest.to_string(), copy);
        Ok(())
    }

    /// Merge `src` into `dest`
    ///
    /// - `dest` absent: `dest` becomes a copy of `src`
    /// - both mappings: `src` is deep-merged into `dest`
    /// - otherwise: `dest` is replaced by a copy of `src`
    ///
    /// The destination never shares structure with the source.
    pub fn merge(&mut self, src: &str, dest: &str) -> WriteResult<MergeOutcome> {
        let source = self
            .docs
            .get(src)
            .cloned()
            .ok_or_else(|| NoOp::DocumentMissing(src.to_string()))?;

        if !self.docs.contains_key(dest) {
            debug!(src, dest, "merge into absent document clones source");
            self.docs.insert(dest.to_string(), source);
            return Ok(MergeOutcome::Cloned);
        }
        let target = self.ensure_document(dest);

        if let (Value::Object(target_obj), Value::Object(source_obj)) =
            (target.as_inner_mut(), source.as_inner())
        {
            deep_merge(target_obj, source_obj);
            return Ok(MergeOutcome::Merged);
        }

        *target = source;
        Ok(MergeOutcome::Replaced)
    }
}

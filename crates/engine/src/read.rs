//! Path reads
//!
//! Reads never fail. A missing document, a path that does not resolve and a
//! missing final key all degrade to the sentinel for the operation:
//!
//! | Operation | Sentinel |
//! |-----------|----------|
//! | get | `"undefined"` |
//! | keys | `"[]"` |
//! | length | `0` |
//! | type_of | `"undefined"` |
//! | check_prop | `false` |

use crate::actions::PropCheck;
use crate::store::DocumentStore;
use dictplus_core::{
    container_keys, format_output, resolve, utf16_len, value_type_name, DocPath, Reply,
};
use serde_json::Value;
use tracing::debug;

impl DocumentStore {
    /// Value at `path`, formatted for a reporter
    pub fn get(&self, name: &str, path: &str) -> Reply {
        match self.lookup(name, path) {
            Some(value) => format_output(Some(value)),
            None => Reply::undefined(),
        }
    }

    /// JSON array of the keys of the container at `path`
    ///
    /// Sequence keys are stringified indices.
    pub fn keys(&self, name: &str, path: &str) -> Reply {
        let keys = self
            .lookup(name, path)
            .map(container_keys)
            .unwrap_or_default();
        Reply::Text(Value::from(keys).to_string())
    }

    /// Size of the value at `path`
    ///
    /// Strings count UTF-16 units, sequences count elements, mappings count
    /// keys. Every other value is 0.
    pub fn length(&self, name: &str, path: &str) -> Reply {
        let len = match self.lookup(name, path) {
            Some(Value::String(s)) => utf16_len(s),
            Some(Value::Array(arr)) => arr.len(),
            Some(Value::Object(obj)) => obj.len(),
            _ => 0,
        };
        Reply::from(len)
    }

    /// Type name of the value at `path`, `"undefined"` if absent
    pub fn type_of(&self, name: &str, path: &str) -> Reply {
        match self.lookup(name, path) {
            Some(value) => Reply::from(value_type_name(value)),
            None => Reply::undefined(),
        }
    }

    /// Test the value at `path`
    ///
    /// `check` is menu text; anything that is not a menu item is `false`.
    /// "is defined" tests that the final key is present in its container,
    /// so a key holding null is defined.
    pub fn check_prop(&self, name: &str, path: &str, check: &str) -> Reply {
        let result = match check.parse::<PropCheck>() {
            Ok(check) => self.check(name, path, check),
            Err(e) => {
                debug!(error = %e, "unknown property check");
                false
            }
        };
        Reply::Bool(result)
    }

    /// Typed form of [`check_prop`](Self::check_prop)
    pub fn check(&self, name: &str, path: &str, check: PropCheck) -> bool {
        let Some(doc) = self.docs.get(name) else {
            return false;
        };
        let doc_path = DocPath::parse(path);
        let Ok(location) = resolve(doc.as_inner(), &doc_path) else {
            return false;
        };
        let value = location.get();
        match check {
            PropCheck::IsDefined => value.is_some(),
            PropCheck::IsNull => matches!(value, Some(Value::Null)),
            PropCheck::IsArray => matches!(value, Some(Value::Array(_))),
            PropCheck::IsDictionary => matches!(value, Some(Value::Object(_))),
        }
    }

    /// Resolve `path` in document `name` without creating anything
    fn lookup(&self, name: &str, path: &str) -> Option<&Value> {
        let doc = self.docs.get(name)?;
        let doc_path = DocPath::parse(path);
        match resolve(doc.as_inner(), &doc_path) {
            Ok(location) => location.get(),
            Err(e) => {
                debug!(document = name, path, error = %e, "path did not resolve");
                None
            }
        }
    }
}

//! Key-level writes
//!
//! Every key action first makes sure the named document exists (as an empty
//! mapping), so a rejected write can still leave a new empty document
//! behind. Beyond that, `Err` means the store was left unchanged.
//!
//! "set to", "change by" and "push" create missing intermediates; "delete"
//! never does.

use crate::actions::KeyAction;
use crate::outcome::{NoOp, WriteResult};
use crate::store::DocumentStore;
use dictplus_core::{
    integer_index, is_container, number_value, parse_number, resolve_mut, to_number, try_parse,
    validate_array_size, value_type_name, DocPath,
};
use serde_json::Value;
use tracing::debug;

impl DocumentStore {
    /// Apply a key action given as menu text
    ///
    /// Unknown actions create the document and nothing else.
    pub fn manage_key(&mut self, name: &str, path: &str, action: &str, value: &str) -> WriteResult {
        let result = match action.parse::<KeyAction>() {
            Ok(action) => self.apply_key_action(name, path, action, value),
            Err(e) => {
                self.ensure_document(name);
                Err(NoOp::from(e))
            }
        };
        if let Err(reason) = &result {
            debug!(document = name, path, action, %reason, "key action was a no-op");
        }
        result
    }

    /// Apply a typed key action
    pub fn apply_key_action(
        &mut self,
        name: &str,
        path: &str,
        action: KeyAction,
        value: &str,
    ) -> WriteResult {
        match action {
            KeyAction::Set => self.set_key(name, path, value),
            KeyAction::Change => self.change_key(name, path, value),
            KeyAction::Push => self.push_key(name, path, value),
            KeyAction::Delete => self.delete_key(name, path),
        }
    }

    /// Assign `try_parse(value)` at `path`
    ///
    /// At the root only an object or array literal is accepted; it replaces
    /// the whole document.
    pub fn set_key(&mut self, name: &str, path: &str, value: &str) -> WriteResult {
        let doc = self.ensure_document(name).as_inner_mut();
        let new_value = try_parse(value);
        let doc_path = DocPath::parse(path);

        if doc_path.is_root() {
            if !is_container(&new_value) {
                return Err(NoOp::NotAStructure);
            }
            *doc = new_value;
            return Ok(());
        }

        let mut location = resolve_mut(doc, &doc_path, true)?;
        location.assign(new_value)?;
        Ok(())
    }

    /// Add `delta` to the number at `path`
    ///
    /// Both sides are coerced to numbers with anything non-numeric counting
    /// as 0, so a missing key starts from 0. Objects and arrays are left
    /// alone.
    pub fn change_key(&mut self, name: &str, path: &str, delta: &str) -> WriteResult {
        let doc = self.ensure_document(name).as_inner_mut();
        let doc_path = DocPath::parse(path);
        if doc_path.is_root() {
            return Err(NoOp::RootTarget("change"));
        }

        let mut location = resolve_mut(doc, &doc_path, true)?;
        let current = location.get();
        if let Some(found) = current.filter(|v| is_container(v)) {
            return Err(NoOp::TypeMismatch {
                action: "change",
                found: value_type_name(found),
            });
        }

        let start = zero_if_nan(to_number(current));
        let delta = zero_if_nan(parse_number(delta));
        location.assign(number_value(start + delta))?;
        Ok(())
    }

    /// Append `try_parse(value)` to the sequence at `path`
    ///
    /// A missing key becomes a new sequence and a scalar (null included) is
    /// wrapped into one. Objects are left alone. At the root the document
    /// itself must be a sequence.
    pub fn push_key(&mut self, name: &str, path: &str, value: &str) -> WriteResult {
        let doc = self.ensure_document(name).as_inner_mut();
        let item = try_parse(value);
        let doc_path = DocPath::parse(path);

        if doc_path.is_root() {
            return push_onto(doc, item);
        }

        let mut location = resolve_mut(doc, &doc_path, true)?;
        if !location.contains() {
            location.assign(Value::Array(vec![item]))?;
            return Ok(());
        }

        let key = doc_path.last_segment().unwrap_or_default();
        let target = location
            .get_mut()
            .ok_or_else(|| NoOp::KeyMissing(key.to_string()))?;
        if !is_container(target) {
            let scalar = target.take();
            *target = Value::Array(vec![scalar]);
        }
        push_onto(target, item)
    }

    /// Remove the value at `path`
    ///
    /// The root path removes the whole document. Sequence elements are
    /// removed by integer index, shifting later elements down; mapping keys
    /// are removed keeping the order of the rest.
    pub fn delete_key(&mut self, name: &str, path: &str) -> WriteResult {
        let doc_path = DocPath::parse(path);
        if doc_path.is_root() {
            debug!(document = name, "deleting document through key action");
            self.docs.remove(name);
            return Ok(());
        }

        let doc = self.ensure_document(name).as_inner_mut();
        let location = resolve_mut(doc, &doc_path, false)?;
        let key = location.key.unwrap_or_default();
        match location.container {
            Value::Array(arr) => {
                let index = integer_index(key).ok_or_else(|| NoOp::InvalidIndex(key.to_string()))?;
                if index >= arr.len() {
                    return Err(NoOp::IndexOutOfRange {
                        index,
                        len: arr.len(),
                    });
                }
                arr.remove(index);
                Ok(())
            }
            Value::Object(obj) => obj
                .shift_remove(key)
                .map(|_| ())
                .ok_or_else(|| NoOp::KeyMissing(key.to_string())),
            other => Err(NoOp::TypeMismatch {
                action: "delete from",
                found: value_type_name(other),
            }),
        }
    }
}

fn zero_if_nan(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else {
        n
    }
}

/// Append to a sequence, respecting the size limit
fn push_onto(target: &mut Value, item: Value) -> WriteResult {
    match target {
        Value::Array(arr) => {
            validate_array_size(arr.len() + 1)?;
            arr.push(item);
            Ok(())
        }
        other => Err(NoOp::TypeMismatch {
            action: "push onto",
            found: value_type_name(other),
        }),
    }
}

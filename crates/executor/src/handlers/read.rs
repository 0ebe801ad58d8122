//! Reporter and boolean handlers.

use dictplus_engine::DocumentStore;

use crate::{Output, Result};

/// Handle List command.
pub fn dict_list(store: &DocumentStore) -> Result<Output> {
    Ok(store.list().into())
}

/// Handle Stringify command.
pub fn dict_stringify(store: &DocumentStore, dict: String) -> Result<Output> {
    Ok(store.stringify(&dict).into())
}

/// Handle Get command.
pub fn dict_get(store: &DocumentStore, dict: String, key: String) -> Result<Output> {
    Ok(store.get(&dict, &key).into())
}

/// Handle Keys command.
pub fn dict_keys(store: &DocumentStore, dict: String, key: String) -> Result<Output> {
    Ok(store.keys(&dict, &key).into())
}

/// Handle Length command.
pub fn dict_length(store: &DocumentStore, dict: String, key: String) -> Result<Output> {
    Ok(store.length(&dict, &key).into())
}

/// Handle TypeOf command.
pub fn dict_type(store: &DocumentStore, dict: String, key: String) -> Result<Output> {
    Ok(store.type_of(&dict, &key).into())
}

/// Handle CheckProp command.
pub fn dict_check_prop(
    store: &DocumentStore,
    dict: String,
    key: String,
    check: String,
) -> Result<Output> {
    Ok(store.check_prop(&dict, &key, &check).into())
}

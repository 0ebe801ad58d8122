//! Command-block handlers.
//!
//! The host has no way to observe a failed write, so every handler returns
//! `Output::Unit`. The store's reason for a no-op is logged at debug level.

use dictplus_engine::{DocumentStore, MergeOutcome, WriteResult};
use tracing::debug;

use crate::{Output, Result};

/// Log a no-op and discard the write result
fn unit<T>(opcode: &'static str, dict: &str, result: WriteResult<T>) -> Result<Output> {
    if let Err(reason) = result {
        debug!(opcode, dict, %reason, "block had no effect");
    }
    Ok(Output::Unit)
}

/// Handle ManageKey command.
pub fn dict_manage_key(
    store: &mut DocumentStore,
    dict: String,
    key: String,
    action: String,
    value: String,
) -> Result<Output> {
    let result = store.manage_key(&dict, &key, &action, &value);
    unit("dict_manage_key", &dict, result)
}

/// Handle Manage command.
pub fn dict_manage(
    store: &mut DocumentStore,
    dict: String,
    action: String,
    data: String,
) -> Result<Output> {
    let result = store.manage_document(&dict, &action, &data);
    unit("dict_manage", &dict, result)
}

/// Handle Clone command.
pub fn dict_clone(store: &mut DocumentStore, src: String, dest: String) -> Result<Output> {
    let result = store.clone_document(&src, &dest);
    unit("dict_clone", &src, result)
}

/// Handle Merge command.
pub fn dict_merge(store: &mut DocumentStore, src: String, dest: String) -> Result<Output> {
    let result = store.merge(&src, &dest);
    if let Ok(outcome) = &result {
        let how = match outcome {
            MergeOutcome::Cloned => "cloned",
            MergeOutcome::Merged => "merged",
            MergeOutcome::Replaced => "replaced",
        };
        debug!(src = %src, dest = %dest, how, "merge applied");
    }
    unit("dict_merge", &src, result)
}

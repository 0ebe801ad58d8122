//! Document store for Dictionaries+
//!
//! This crate owns the named documents and every operation on them:
//! - DocumentStore: Owned map of name -> document
//! - Reads: get, keys, length, type_of, check_prop (sentinels, never errors)
//! - Key writes: set / change / push / delete at a dotted path
//! - Document writes: load JSON, clear, delete, clone, merge
//! - NoOp: Why a write left the store unchanged
//!
//! Nothing here knows about opcodes or host argument maps; see the executor
//! crate for that layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
pub mod outcome;
pub mod read;
pub mod store;
pub mod write;

pub use actions::{DictAction, KeyAction, PropCheck, UnknownMenuItem};
pub use outcome::{LoadOutcome, MergeOutcome, NoOp, WriteResult};
pub use store::DocumentStore;

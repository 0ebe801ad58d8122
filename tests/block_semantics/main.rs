//! Block Semantics Tests
//!
//! End-to-end behavior of the Dictionaries+ blocks:
//! - Reporters and their sentinels for missing data
//! - Key actions: set, change, push, delete
//! - Document actions: load, clear, delete, clone, merge
//! - Host invocation through opcodes and flat string arguments

mod common;

mod documents;
mod host_blocks;
mod key_actions;
mod properties;
mod reporters;

//! # Dictionaries+ Executor
//!
//! The block-facing API for Dictionaries+, a store of named JSON
//! dictionaries addressed by dotted paths.
//!
//! This is the only crate a host adapter needs. It provides:
//! - [`Dictionaries`] - Typed methods, one per block
//! - [`Command`]/[`Output`] - Low-level command interface
//! - [`Executor`] - Decodes host invocations and runs them against the store
//! - [`extension_info`] - The block catalog the host draws
//!
//! ## Quick Start
//!
//! ```
//! use dictplus_executor::Dictionaries;
//!
//! let mut dicts = Dictionaries::new();
//! dicts.manage_key("player", "stats.hp", "set to", "10").unwrap();
//! dicts.manage_key("player", "stats.hp", "change by", "-3").unwrap();
//! assert_eq!(dicts.stringify("player").unwrap(), r#"{"stats":{"hp":7}}"#);
//! ```
//!
//! ## Blocks
//!
//! | Opcode | Shape | Command |
//! |--------|-------|---------|
//! | `dict_list` | reporter | `List` |
//! | `dict_stringify` | reporter | `Stringify` |
//! | `dict_get` | reporter | `Get` |
//! | `dict_keys` | reporter | `Keys` |
//! | `dict_length` | reporter | `Length` |
//! | `dict_type` | reporter | `TypeOf` |
//! | `dict_check_prop` | boolean | `CheckProp` |
//! | `dict_manage_key` | command | `ManageKey` |
//! | `dict_manage` | command | `Manage` |
//! | `dict_clone` | command | `Clone` |
//! | `dict_merge` | command | `Merge` |

#![warn(missing_docs)]

mod api;
pub mod blocks;
mod command;
pub mod config;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Dictionaries;
pub use blocks::{extension_info, BlockType, ExtensionInfo};
pub use command::{opcode, Command};
pub use config::{DictionariesConfig, CONFIG_FILE_NAME};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

// Store-level types for callers that bypass the executor
pub use dictplus_engine::{DictAction, DocumentStore, KeyAction, NoOp, PropCheck};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

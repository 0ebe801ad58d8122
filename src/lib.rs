//! Dictionaries+ - named JSON dictionaries for block-based projects
//!
//! Dictionaries+ keeps a set of named JSON documents in memory and exposes
//! path-based reads and writes over them, one operation per block.
//!
//! # Quick Start
//!
//! ```
//! use dictplus::Dictionaries;
//!
//! let mut dicts = Dictionaries::new();
//! dicts.manage_key("inventory", "items", "push", "sword").unwrap();
//! dicts.manage_key("inventory", "items", "push", "shield").unwrap();
//! assert_eq!(dicts.length("inventory", "items").unwrap(), 2.0);
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which decodes host block
//! invocations into [`Command`]s. The [`Dictionaries`] struct provides a
//! typed interface over it. The extension gallery loader lives in
//! [`gallery`].

// Re-export the public API from dictplus-executor
pub use dictplus_executor::*;

/// Extension gallery: manifests, filtering and sorting
pub use dictplus_gallery as gallery;

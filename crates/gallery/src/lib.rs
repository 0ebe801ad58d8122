//! Extension gallery catalog
//!
//! Models the gallery page that lists extensions such as Dictionaries+:
//! - load_catalog: Read `extensions.json` and each folder's manifest
//! - GalleryEntry: Manifest with defaults applied and category normalized
//! - GalleryQuery: Search, category and sort over loaded entries
//! - Favorites: Toggleable set of favorite ids
//!
//! Rendering and browser storage are left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod manifest;
pub mod query;

pub use catalog::{categories, load_catalog, load_entry, normalize_category, INDEX_FILE};
pub use error::{GalleryError, GalleryResult};
pub use favorites::Favorites;
pub use manifest::{ExtensionManifest, GalleryEntry, IconKind};
pub use query::{CategoryFilter, GalleryQuery, SortMode};

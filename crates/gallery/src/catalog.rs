//! Loading a gallery from disk
//!
//! Layout:
//!
//! ```text
//! root/
//!   extensions.json        ["folder-a", "folder-b"]
//!   folder-a/
//!     manifest.json        required
//!     desc.txt             optional, replaces the manifest description
//!     icon.svg             optional, wins over everything
//!     icon.txt             optional icon class, `ph-` added if missing
//!     extension.js
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{GalleryError, GalleryResult};
use crate::manifest::{ExtensionManifest, GalleryEntry, IconKind};

/// Index file listing the extension folders
pub const INDEX_FILE: &str = "extensions.json";
/// Per-folder manifest
pub const MANIFEST_FILE: &str = "manifest.json";

const DEFAULT_AUTHOR: &str = "Unknown";
const DEFAULT_VERSION: &str = "0.0.1";
const DEFAULT_ENTRY: &str = "extension.js";
const DEFAULT_COLOR: &str = "text-turbowarp";
const DEFAULT_ICON: &str = "ph-puzzle-piece";
const DEFAULT_CATEGORY: &str = "utilities";
const ICON_PREFIX: &str = "ph-";

/// Load every listed extension under `root`
///
/// Folders whose manifest is missing or unparseable are skipped with a
/// warning. Entries keep the index order.
///
/// # Errors
///
/// Fails when the index is missing or malformed, or when no listed folder
/// yields an entry.
pub fn load_catalog(root: &Path) -> GalleryResult<Vec<GalleryEntry>> {
    let index_path = root.join(INDEX_FILE);
    if !index_path.exists() {
        return Err(GalleryError::MissingIndex { path: index_path });
    }
    let text = fs::read_to_string(&index_path).map_err(|source| GalleryError::Io {
        path: index_path.clone(),
        source,
    })?;
    let folders: Vec<String> =
        serde_json::from_str(&text).map_err(|e| GalleryError::InvalidIndex {
            path: index_path.clone(),
            reason: e.to_string(),
        })?;

    let entries: Vec<GalleryEntry> = folders
        .iter()
        .filter_map(|folder| load_entry(root, folder))
        .collect();

    if entries.is_empty() {
        return Err(GalleryError::Empty);
    }
    info!(
        listed = folders.len(),
        loaded = entries.len(),
        "gallery catalog loaded"
    );
    Ok(entries)
}

/// Load one extension folder, `None` if it has no usable manifest
pub fn load_entry(root: &Path, folder: &str) -> Option<GalleryEntry> {
    let dir = root.join(folder);
    let manifest_path = dir.join(MANIFEST_FILE);

    let text = match fs::read_to_string(&manifest_path) {
        Ok(text) => text,
        Err(e) => {
            warn!(folder, error = %e, "skipping extension without manifest");
            return None;
        }
    };
    let manifest: ExtensionManifest = match serde_json::from_str(&text) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!(folder, error = %e, "skipping extension with invalid manifest");
            return None;
        }
    };

    let description = read_optional(&dir.join("desc.txt"))
        .or_else(|| manifest.description.clone())
        .unwrap_or_default()
        .trim()
        .to_string();

    let (icon_kind, icon_value) = if dir.join("icon.svg").is_file() {
        (IconKind::Svg, format!("{}/icon.svg", folder))
    } else if let Some(class) = read_optional(&dir.join("icon.txt")) {
        (IconKind::Class, icon_class(&class))
    } else {
        let class = manifest.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string());
        (IconKind::Class, class)
    };

    let name = manifest.name.clone().unwrap_or_else(|| folder.to_string());
    let author = manifest
        .author
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    let entry = manifest.entry.as_deref().unwrap_or(DEFAULT_ENTRY);
    let search_text = format!("{} {} {}", name, description, author).to_lowercase();

    debug!(folder, "loaded extension");
    Some(GalleryEntry {
        id: folder.to_string(),
        url: format!("{}/{}", folder, entry),
        version: manifest
            .version
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        category: normalize_category(manifest.category.as_deref()),
        color: manifest
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        unsandboxed: manifest.unsandboxed,
        is_mod: manifest.marks_mod(),
        is_new: manifest.is_new,
        featured: manifest.featured,
        name,
        description,
        author,
        icon_kind,
        icon_value,
        search_text,
    })
}

fn read_optional(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn icon_class(text: &str) -> String {
    let class = text.trim();
    if class.starts_with(ICON_PREFIX) {
        class.to_string()
    } else {
        format!("{}{}", ICON_PREFIX, class)
    }
}

/// Lowercase a category and join words with `-`
///
/// Absent or empty categories become `utilities`.
pub fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(c) if !c.is_empty() => c
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

/// Distinct categories, sorted
pub fn categories(entries: &[GalleryEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

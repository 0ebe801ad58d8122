//! Extension manifests and normalized gallery entries

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contents of a folder's `manifest.json`
///
/// Every field is optional; [`GalleryEntry`] fills in the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description; `desc.txt` overrides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Free-form category, normalized on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Icon class name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Accent color class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Needs to run unsandboxed
    #[serde(default)]
    pub unsandboxed: bool,
    /// Modification of another extension
    #[serde(default)]
    pub is_mod: bool,
    /// Upstream this is a fork of; any truthy value marks a mod
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork: Option<Value>,
    /// Recently added
    #[serde(default)]
    pub is_new: bool,
    /// Featured on the front page
    #[serde(default)]
    pub featured: bool,
    /// Script file inside the folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl ExtensionManifest {
    /// Whether the manifest marks a modified or forked extension
    pub fn marks_mod(&self) -> bool {
        self.is_mod || self.fork.as_ref().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// How an entry's icon is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Icon font class (`ph-*`)
    Class,
    /// Path to an SVG file
    Svg,
}

/// A normalized catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    /// Folder name, unique in the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Trimmed description
    pub description: String,
    /// Author name
    pub author: String,
    /// Version string
    pub version: String,
    /// Normalized category
    pub category: String,
    /// How `icon_value` is drawn
    pub icon_kind: IconKind,
    /// Icon class or SVG path
    pub icon_value: String,
    /// Accent color class
    pub color: String,
    /// Script path, `folder/entry`
    pub url: String,
    /// Needs to run unsandboxed
    pub unsandboxed: bool,
    /// Modified or forked extension
    pub is_mod: bool,
    /// Recently added
    pub is_new: bool,
    /// Featured on the front page
    pub featured: bool,
    /// Lowercased `name description author`, matched by searches
    pub search_text: String,
}

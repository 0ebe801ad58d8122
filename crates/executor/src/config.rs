//! Extension configuration via `dictplus.toml`
//!
//! On first open of a directory a default `dictplus.toml` is written. To
//! change the extension's identity or colors, edit the file and reopen.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::{Error, Result};

/// Config file name placed in the working directory.
pub const CONFIG_FILE_NAME: &str = "dictplus.toml";

/// Extension configuration loaded from `dictplus.toml`.
///
/// # Example
///
/// ```toml
/// id = "kxdictionariesplus"
/// name = "Dictionaries+"
/// color1 = "#9639cd"
/// color2 = "#8432b5"
/// color3 = "#732b9d"
/// clear_on_dispose = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionariesConfig {
    /// Extension id reported to the host.
    #[serde(default = "default_id")]
    pub id: String,
    /// Display name reported to the host.
    #[serde(default = "default_name")]
    pub name: String,
    /// Primary block color (`#rrggbb`).
    #[serde(default = "default_color1")]
    pub color1: String,
    /// Secondary block color (`#rrggbb`).
    #[serde(default = "default_color2")]
    pub color2: String,
    /// Tertiary block color (`#rrggbb`).
    #[serde(default = "default_color3")]
    pub color3: String,
    /// Drop every document when the host runtime is disposed.
    #[serde(default = "default_clear_on_dispose")]
    pub clear_on_dispose: bool,
}

fn default_id() -> String {
    "kxdictionariesplus".to_string()
}

fn default_name() -> String {
    "Dictionaries+".to_string()
}

fn default_color1() -> String {
    "#9639cd".to_string()
}

fn default_color2() -> String {
    "#8432b5".to_string()
}

fn default_color3() -> String {
    "#732b9d".to_string()
}

fn default_clear_on_dispose() -> bool {
    true
}

impl Default for DictionariesConfig {
    fn default() -> Self {
        Self {
            id: default_id(),
            name: default_name(),
            color1: default_color1(),
            color2: default_color2(),
            color3: default_color3(),
            clear_on_dispose: default_clear_on_dispose(),
        }
    }
}

impl DictionariesConfig {
    /// Check every field that has a format.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for an empty id or a color that is not `#rrggbb`.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Config {
                reason: "id must not be empty".to_string(),
            });
        }
        for (field, color) in [
            ("color1", &self.color1),
            ("color2", &self.color2),
            ("color3", &self.color3),
        ] {
            if !is_hex_color(color) {
                return Err(Error::Config {
                    reason: format!("{} '{}' is not a #rrggbb color", field, color),
                });
            }
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r##"# Dictionaries+ configuration
#
# Extension id and display name reported to the host.
id = "kxdictionariesplus"
name = "Dictionaries+"

# Block colors, as #rrggbb.
color1 = "#9639cd"
color2 = "#8432b5"
color3 = "#732b9d"

# Drop every dictionary when the host runtime is disposed (default: true).
clear_on_dispose = true
"##
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        content.parse().map_err(|e| match e {
            Error::Config { reason } => Error::Config {
                reason: format!("{}: {}", path.display(), reason),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Io {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Internal {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Io {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}

impl FromStr for DictionariesConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: DictionariesConfig = toml::from_str(s).map_err(|e| Error::Config {
            reason: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

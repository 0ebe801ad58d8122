//! High-level typed wrapper for the Executor.
//!
//! The [`Dictionaries`] struct provides one method per block, wrapping the
//! [`Executor`] and [`Command`]/[`Output`] enums. Arguments are the strings
//! the host would pass; results are plain Rust values.
//!
//! # Example
//!
//! ```
//! use dictplus_executor::Dictionaries;
//!
//! let mut dicts = Dictionaries::new();
//! dicts.manage("foo", "load JSON", r#"{"items": [1, 2]}"#).unwrap();
//! dicts.manage_key("foo", "items", "push", "3").unwrap();
//!
//! assert_eq!(dicts.length("foo", "items").unwrap(), 3.0);
//! assert_eq!(dicts.stringify("foo").unwrap(), r#"{"items":[1,2,"3"]}"#);
//! ```

mod read;
mod write;

use std::path::Path;

use crate::blocks::ExtensionInfo;
use crate::config::{DictionariesConfig, CONFIG_FILE_NAME};
use crate::{Error, Executor, Output, Result};

/// Typed wrapper for block invocations.
#[derive(Debug, Default)]
pub struct Dictionaries {
    executor: Executor,
}

impl Dictionaries {
    /// Create with an empty store and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an empty store and the given configuration.
    pub fn with_config(config: DictionariesConfig) -> Self {
        Self {
            executor: Executor::with_config(config),
        }
    }

    /// Create using `dictplus.toml` from the given directory.
    ///
    /// The directory is created if needed, and a default config file is
    /// written if none exists.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the directory or file cannot be written or
    /// read, and `Error::Config` if the file is invalid.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| Error::Io {
            reason: format!("Failed to create directory '{}': {}", dir.display(), e),
        })?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        DictionariesConfig::write_default_if_missing(&config_path)?;
        let config = DictionariesConfig::from_file(&config_path)?;
        Ok(Self::with_config(config))
    }

    /// Extension descriptor for the host palette.
    pub fn info(&self) -> ExtensionInfo {
        self.executor.info()
    }

    /// Host runtime disposal hook.
    pub fn dispose(&mut self) {
        self.executor.dispose();
    }

    /// The wrapped executor.
    pub fn executor(&mut self) -> &mut Executor {
        &mut self.executor
    }
}

fn unexpected(command: &str, output: Output) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}: {:?}", command, output),
    }
}

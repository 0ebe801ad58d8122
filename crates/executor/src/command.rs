//! Command enum defining all Dictionaries+ blocks.
//!
//! Commands are the instruction set of the extension. Each block the host
//! can invoke is one variant, carrying the block's arguments as the strings
//! the host passes.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: Menu values stay text; unknown menu items are resolved
//!   at execution time

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Error, Result};

/// Host opcodes, one per block
pub mod opcode {
    /// `list of dictionaries`
    pub const LIST: &str = "dict_list";
    /// `stringify dictionary [DICT] into JSON`
    pub const STRINGIFY: &str = "dict_stringify";
    /// `key [KEY] from dictionary [DICT]`
    pub const GET: &str = "dict_get";
    /// `keys of path [KEY] in dictionary [DICT]`
    pub const KEYS: &str = "dict_keys";
    /// `length of [KEY] in [DICT]`
    pub const LENGTH: &str = "dict_length";
    /// `type of [KEY] in [DICT]`
    pub const TYPE: &str = "dict_type";
    /// `key [KEY] in [DICT] [CHECK]?`
    pub const CHECK_PROP: &str = "dict_check_prop";
    /// `key [KEY] in [DICT]: [ACTION] [VAL]`
    pub const MANAGE_KEY: &str = "dict_manage_key";
    /// `dictionary [DICT]: [ACTION] [DATA]`
    pub const MANAGE: &str = "dict_manage";
    /// `clone dictionary [SRC] as [DEST]`
    pub const CLONE: &str = "dict_clone";
    /// `merge dictionary [SRC] into [DEST]`
    pub const MERGE: &str = "dict_merge";

    /// Every opcode in block order
    pub const ALL: [&str; 11] = [
        LIST, STRINGIFY, GET, KEYS, LENGTH, TYPE, CHECK_PROP, MANAGE_KEY, MANAGE, CLONE, MERGE,
    ];
}

/// A command is a self-contained, serializable block invocation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Reporter | 6 | List, Stringify, Get, Keys, Length, TypeOf |
/// | Boolean | 1 | CheckProp |
/// | Command | 4 | ManageKey, Manage, Clone, Merge |
///
/// # Example
///
/// ```
/// use dictplus_executor::Command;
///
/// let cmd = Command::Get {
///     dict: "foo".into(),
///     key: "bar".into(),
/// };
/// assert_eq!(cmd.opcode(), "dict_get");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Reporters (6) ====================
    /// JSON array of document names.
    /// Returns: `Output::Text`
    List,

    /// JSON text of a document, `"{}"` if absent.
    /// Returns: `Output::Text`
    Stringify {
        /// Document name
        dict: String,
    },

    /// Value at a path.
    /// Returns: `Output::Text`, `Output::Number` or `Output::Bool`
    Get {
        /// Document name
        dict: String,
        /// Dotted path, empty for the document itself
        key: String,
    },

    /// JSON array of keys at a path.
    /// Returns: `Output::Text`
    Keys {
        /// Document name
        dict: String,
        /// Dotted path, empty for the document itself
        key: String,
    },

    /// Length of the value at a path.
    /// Returns: `Output::Number`
    Length {
        /// Document name
        dict: String,
        /// Dotted path, empty for the document itself
        key: String,
    },

    /// Type name of the value at a path.
    /// Returns: `Output::Text`
    TypeOf {
        /// Document name
        dict: String,
        /// Dotted path, empty for the document itself
        key: String,
    },

    // ==================== Boolean (1) ====================
    /// Property check at a path.
    /// Returns: `Output::Bool`
    CheckProp {
        /// Document name
        dict: String,
        /// Dotted path, empty for the document itself
        key: String,
        /// Check menu text
        check: String,
    },

    // ==================== Commands (4) ====================
    /// Key-level action (`set to`, `change by`, `push`, `delete`).
    /// Returns: `Output::Unit`
    ManageKey {
        /// Document name
        dict: String,
        /// Dotted path, empty for the document itself
        key: String,
        /// Key action menu text
        action: String,
        /// Block text for the value, parsed when it looks like JSON
        value: String,
    },

    /// Document-level action (`load JSON`, `clear`, `delete`).
    /// Returns: `Output::Unit`
    Manage {
        /// Document name
        dict: String,
        /// Document action menu text
        action: String,
        /// JSON text, read by `load JSON` only
        data: String,
    },

    /// Deep copy one document to another name.
    /// Returns: `Output::Unit`
    Clone {
        /// Source document name
        src: String,
        /// Destination document name
        dest: String,
    },

    /// Merge one document into another.
    /// Returns: `Output::Unit`
    Merge {
        /// Source document name
        src: String,
        /// Destination document name
        dest: String,
    },
}

impl Command {
    /// Decode a host invocation
    ///
    /// `args` is the host's flat argument map (`DICT`, `KEY`, `ACTION`,
    /// `VAL`, `DATA`, `CHECK`, `SRC`, `DEST`). Arguments a block does not
    /// use are ignored.
    ///
    /// # Errors
    ///
    /// `UnknownOpcode` for an opcode that is not a block of this extension;
    /// `MissingArgument` when a block argument is absent from `args`.
    pub fn from_block(opcode: &str, args: &HashMap<String, String>) -> Result<Self> {
        let arg = |name: &str| -> Result<String> {
            args.get(name).cloned().ok_or_else(|| Error::MissingArgument {
                opcode: opcode.to_string(),
                name: name.to_string(),
            })
        };

        let cmd = match opcode {
            opcode::LIST => Command::List,
            opcode::STRINGIFY => Command::Stringify { dict: arg("DICT")? },
            opcode::GET => Command::Get {
                dict: arg("DICT")?,
                key: arg("KEY")?,
            },
            opcode::KEYS => Command::Keys {
                dict: arg("DICT")?,
                key: arg("KEY")?,
            },
            opcode::LENGTH => Command::Length {
                dict: arg("DICT")?,
                key: arg("KEY")?,
            },
            opcode::TYPE => Command::TypeOf {
                dict: arg("DICT")?,
                key: arg("KEY")?,
            },
            opcode::CHECK_PROP => Command::CheckProp {
                dict: arg("DICT")?,
                key: arg("KEY")?,
                check: arg("CHECK")?,
            },
            opcode::MANAGE_KEY => Command::ManageKey {
                dict: arg("DICT")?,
                key: arg("KEY")?,
                action: arg("ACTION")?,
                value: arg("VAL")?,
            },
            opcode::MANAGE => Command::Manage {
                dict: arg("DICT")?,
                action: arg("ACTION")?,
                data: arg("DATA")?,
            },
            opcode::CLONE => Command::Clone {
                src: arg("SRC")?,
                dest: arg("DEST")?,
            },
            opcode::MERGE => Command::Merge {
                src: arg("SRC")?,
                dest: arg("DEST")?,
            },
            other => {
                return Err(Error::UnknownOpcode {
                    opcode: other.to_string(),
                })
            }
        };
        Ok(cmd)
    }

    /// Host opcode of the block this command invokes
    pub fn opcode(&self) -> &'static str {
        match self {
            Command::List => opcode::LIST,
            Command::Stringify { .. } => opcode::STRINGIFY,
            Command::Get { .. } => opcode::GET,
            Command::Keys { .. } => opcode::KEYS,
            Command::Length { .. } => opcode::LENGTH,
            Command::TypeOf { .. } => opcode::TYPE,
            Command::CheckProp { .. } => opcode::CHECK_PROP,
            Command::ManageKey { .. } => opcode::MANAGE_KEY,
            Command::Manage { .. } => opcode::MANAGE,
            Command::Clone { .. } => opcode::CLONE,
            Command::Merge { .. } => opcode::MERGE,
        }
    }

    /// Returns the variant name as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "List",
            Command::Stringify { .. } => "Stringify",
            Command::Get { .. } => "Get",
            Command::Keys { .. } => "Keys",
            Command::Length { .. } => "Length",
            Command::TypeOf { .. } => "TypeOf",
            Command::CheckProp { .. } => "CheckProp",
            Command::ManageKey { .. } => "ManageKey",
            Command::Manage { .. } => "Manage",
            Command::Clone { .. } => "Clone",
            Command::Merge { .. } => "Merge",
        }
    }

    /// Returns `true` if this command can change the store.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::ManageKey { .. }
                | Command::Manage { .. }
                | Command::Clone { .. }
                | Command::Merge { .. }
        )
    }
}

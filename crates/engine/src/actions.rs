//! Menu values accepted by the action and check blocks
//!
//! Menus accept reporters, so any text can arrive. Parsing fails for text
//! that is not a menu item; the caller treats that as a no-op (or `false`
//! for checks).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text that is not an item of the expected menu
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {menu} item '{value}'")]
pub struct UnknownMenuItem {
    /// Menu the value was read for
    pub menu: &'static str,
    /// The unrecognised text
    pub value: String,
}

/// Key-level actions (`key_action_menu`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    /// `set to`
    Set,
    /// `change by`
    Change,
    /// `push`
    Push,
    /// `delete`
    Delete,
}

impl KeyAction {
    /// All actions in menu order
    pub const ALL: [KeyAction; 4] = [
        KeyAction::Set,
        KeyAction::Change,
        KeyAction::Push,
        KeyAction::Delete,
    ];

    /// Menu text for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Set => "set to",
            KeyAction::Change => "change by",
            KeyAction::Push => "push",
            KeyAction::Delete => "delete",
        }
    }
}

impl FromStr for KeyAction {
    type Err = UnknownMenuItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownMenuItem {
                menu: "key_action_menu",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document-level actions (`dict_action_menu`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictAction {
    /// `load JSON`
    LoadJson,
    /// `clear`
    Clear,
    /// `delete`
    Delete,
}

impl DictAction {
    /// All actions in menu order
    pub const ALL: [DictAction; 3] = [DictAction::LoadJson, DictAction::Clear, DictAction::Delete];

    /// Menu text for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            DictAction::LoadJson => "load JSON",
            DictAction::Clear => "clear",
            DictAction::Delete => "delete",
        }
    }
}

impl FromStr for DictAction {
    type Err = UnknownMenuItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DictAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownMenuItem {
                menu: "dict_action_menu",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DictAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property checks (`check_menu`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropCheck {
    /// `is defined`
    IsDefined,
    /// `is null`
    IsNull,
    /// `is array`
    IsArray,
    /// `is dictionary (object)`
    IsDictionary,
}

impl PropCheck {
    /// All checks in menu order
    pub const ALL: [PropCheck; 4] = [
        PropCheck::IsDefined,
        PropCheck::IsNull,
        PropCheck::IsArray,
        PropCheck::IsDictionary,
    ];

    /// Menu text for this check
    pub fn as_str(&self) -> &'static str {
        match self {
            PropCheck::IsDefined => "is defined",
            PropCheck::IsNull => "is null",
            PropCheck::IsArray => "is array",
            PropCheck::IsDictionary => "is dictionary (object)",
        }
    }
}

impl FromStr for PropCheck {
    type Err = UnknownMenuItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // short form used in documentation and older projects
        if s == "is dictionary" {
            return Ok(PropCheck::IsDictionary);
        }
        PropCheck::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownMenuItem {
                menu: "check_menu",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PropCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

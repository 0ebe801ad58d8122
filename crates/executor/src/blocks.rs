//! Block catalog reported to the host.
//!
//! [`extension_info`] builds the descriptor the host uses to draw the
//! palette: the extension id, name and colors from configuration, the
//! eleven blocks with their argument defaults, and the three menus. Menu
//! items come from the engine's action types so the palette and the
//! executor cannot disagree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::command::opcode;
use crate::config::DictionariesConfig;
use dictplus_engine::{DictAction, KeyAction, PropCheck};

/// Text the host draws as a palette gap
pub const SEPARATOR: &str = "---";

/// Menu ids
pub mod menu {
    /// Property checks
    pub const CHECK: &str = "check_menu";
    /// Key-level actions
    pub const KEY_ACTION: &str = "key_action_menu";
    /// Document-level actions
    pub const DICT_ACTION: &str = "dict_action_menu";
}

/// Extension descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    /// Extension id
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary block color
    pub color1: String,
    /// Secondary block color
    pub color2: String,
    /// Tertiary block color
    pub color3: String,
    /// Palette entries in display order
    pub blocks: Vec<BlockItem>,
    /// Menus referenced by block arguments
    pub menus: BTreeMap<String, Menu>,
}

impl ExtensionInfo {
    /// The block with the given opcode
    pub fn block(&self, opcode: &str) -> Option<&BlockSpec> {
        self.blocks.iter().find_map(|item| match item {
            BlockItem::Block(spec) if spec.opcode == opcode => Some(spec),
            _ => None,
        })
    }

    /// Blocks only, separators skipped
    pub fn block_specs(&self) -> impl Iterator<Item = &BlockSpec> {
        self.blocks.iter().filter_map(|item| match item {
            BlockItem::Block(spec) => Some(spec),
            BlockItem::Separator(_) => None,
        })
    }
}

/// One palette entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockItem {
    /// A block
    Block(BlockSpec),
    /// A gap, always [`SEPARATOR`]
    Separator(String),
}

/// Block shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Rounded block returning a value
    Reporter,
    /// Hexagonal block returning a boolean
    Boolean,
    /// Stack block with no value
    Command,
}

/// One block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSpec {
    /// Opcode the host invokes
    pub opcode: String,
    /// Block shape
    pub block_type: BlockType,
    /// Label with `[ARG]` placeholders
    pub text: String,
    /// Arguments by name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arguments: BTreeMap<String, ArgumentSpec>,
}

/// One block argument; all arguments are strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentSpec {
    /// Argument type, always `"string"`
    #[serde(rename = "type")]
    pub arg_type: String,
    /// Value shown in a fresh block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Menu id for dropdown arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

impl ArgumentSpec {
    fn text(default_value: &str) -> Self {
        Self {
            arg_type: "string".to_string(),
            default_value: Some(default_value.to_string()),
            menu: None,
        }
    }

    fn menu(menu: &str) -> Self {
        Self {
            arg_type: "string".to_string(),
            default_value: None,
            menu: Some(menu.to_string()),
        }
    }
}

/// A dropdown menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Whether reporters may be dropped into the menu slot
    pub accept_reporters: bool,
    /// Menu items in display order
    pub items: Vec<String>,
}

impl Menu {
    fn of<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accept_reporters: true,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

fn block(
    opcode: &str,
    block_type: BlockType,
    text: &str,
    arguments: &[(&str, ArgumentSpec)],
) -> BlockItem {
    BlockItem::Block(BlockSpec {
        opcode: opcode.to_string(),
        block_type,
        text: text.to_string(),
        arguments: arguments
            .iter()
            .map(|(name, spec)| (name.to_string(), spec.clone()))
            .collect(),
    })
}

fn separator() -> BlockItem {
    BlockItem::Separator(SEPARATOR.to_string())
}

/// Build the extension descriptor for `config`
pub fn extension_info(config: &DictionariesConfig) -> ExtensionInfo {
    use ArgumentSpec as Arg;
    use BlockType::*;

    let key = |default: &str| ("KEY", Arg::text(default));
    let dict = ("DICT", Arg::text("foo"));

    let blocks = vec![
        block(opcode::LIST, Reporter, "list of dictionaries", &[]),
        block(
            opcode::STRINGIFY,
            Reporter,
            "stringify dictionary [DICT] into JSON",
            &[dict.clone()],
        ),
        block(
            opcode::GET,
            Reporter,
            "key [KEY] from dictionary [DICT]",
            &[key("bar"), dict.clone()],
        ),
        block(
            opcode::KEYS,
            Reporter,
            "keys of path [KEY] in dictionary [DICT]",
            &[key("items"), dict.clone()],
        ),
        block(
            opcode::LENGTH,
            Reporter,
            "length of [KEY] in [DICT]",
            &[key("items"), dict.clone()],
        ),
        block(
            opcode::TYPE,
            Reporter,
            "type of [KEY] in [DICT]",
            &[key("bar"), dict.clone()],
        ),
        separator(),
        block(
            opcode::CHECK_PROP,
            Boolean,
            "key [KEY] in [DICT] [CHECK]?",
            &[key("bar"), dict.clone(), ("CHECK", Arg::menu(menu::CHECK))],
        ),
        separator(),
        block(
            opcode::MANAGE_KEY,
            Command,
            "key [KEY] in [DICT]: [ACTION] [VAL]",
            &[
                key("bar"),
                dict.clone(),
                ("ACTION", Arg::menu(menu::KEY_ACTION)),
                ("VAL", Arg::text("baz")),
            ],
        ),
        block(
            opcode::MANAGE,
            Command,
            "dictionary [DICT]: [ACTION] [DATA]",
            &[
                dict,
                ("ACTION", Arg::menu(menu::DICT_ACTION)),
                ("DATA", Arg::text(r#"{"bar": "baz"}"#)),
            ],
        ),
        block(
            opcode::CLONE,
            Command,
            "clone dictionary [SRC] as [DEST]",
            &[("SRC", Arg::text("original")), ("DEST", Arg::text("copy"))],
        ),
        block(
            opcode::MERGE,
            Command,
            "merge dictionary [SRC] into [DEST]",
            &[("SRC", Arg::text("data")), ("DEST", Arg::text("foo"))],
        ),
    ];

    let mut menus = BTreeMap::new();
    menus.insert(
        menu::CHECK.to_string(),
        Menu::of(PropCheck::ALL.iter().map(PropCheck::as_str)),
    );
    menus.insert(
        menu::KEY_ACTION.to_string(),
        Menu::of(KeyAction::ALL.iter().map(KeyAction::as_str)),
    );
    menus.insert(
        menu::DICT_ACTION.to_string(),
        Menu::of(DictAction::ALL.iter().map(DictAction::as_str)),
    );

    ExtensionInfo {
        id: config.id.clone(),
        name: config.name.clone(),
        color1: config.color1.clone(),
        color2: config.color2.clone(),
        color3: config.color3.clone(),
        blocks,
        menus,
    }
}

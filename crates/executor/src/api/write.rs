//! Command blocks.
//!
//! Each returns `Ok(())` whether or not the store changed, as the host
//! would see it.

use super::{unexpected, Dictionaries};
use crate::{Command, Output, Result};

impl Dictionaries {
    /// Key-level action: `set to`, `change by`, `push` or `delete`.
    pub fn manage_key(&mut self, dict: &str, key: &str, action: &str, value: &str) -> Result<()> {
        self.unit(Command::ManageKey {
            dict: dict.into(),
            key: key.into(),
            action: action.into(),
            value: value.into(),
        })
    }

    /// Document-level action: `load JSON`, `clear` or `delete`.
    pub fn manage(&mut self, dict: &str, action: &str, data: &str) -> Result<()> {
        self.unit(Command::Manage {
            dict: dict.into(),
            action: action.into(),
            data: data.into(),
        })
    }

    /// Store a deep copy of `src` as `dest`.
    pub fn clone_dict(&mut self, src: &str, dest: &str) -> Result<()> {
        self.unit(Command::Clone {
            src: src.into(),
            dest: dest.into(),
        })
    }

    /// Merge `src` into `dest`.
    pub fn merge(&mut self, src: &str, dest: &str) -> Result<()> {
        self.unit(Command::Merge {
            src: src.into(),
            dest: dest.into(),
        })
    }

    fn unit(&mut self, cmd: Command) -> Result<()> {
        let name = cmd.name();
        match self.executor.execute(cmd)? {
            Output::Unit => Ok(()),
            other => Err(unexpected(name, other)),
        }
    }
}

//! Reporter and boolean blocks.

use super::{unexpected, Dictionaries};
use crate::{Command, Output, Result};

impl Dictionaries {
    // =========================================================================
    // Reporters (6)
    // =========================================================================

    /// JSON array of document names.
    pub fn list(&mut self) -> Result<String> {
        self.text(Command::List)
    }

    /// JSON text of a document, `"{}"` if absent.
    pub fn stringify(&mut self, dict: &str) -> Result<String> {
        self.text(Command::Stringify { dict: dict.into() })
    }

    /// Value at `key`, as text, number or boolean.
    ///
    /// Absent values are `Output::Text("undefined")`.
    pub fn get(&mut self, dict: &str, key: &str) -> Result<Output> {
        self.executor.execute(Command::Get {
            dict: dict.into(),
            key: key.into(),
        })
    }

    /// JSON array of the keys at `key`.
    pub fn keys(&mut self, dict: &str, key: &str) -> Result<String> {
        self.text(Command::Keys {
            dict: dict.into(),
            key: key.into(),
        })
    }

    /// Length of the value at `key`.
    pub fn length(&mut self, dict: &str, key: &str) -> Result<f64> {
        match self.executor.execute(Command::Length {
            dict: dict.into(),
            key: key.into(),
        })? {
            Output::Number(n) => Ok(n),
            other => Err(unexpected("Length", other)),
        }
    }

    /// Type name of the value at `key`.
    pub fn type_of(&mut self, dict: &str, key: &str) -> Result<String> {
        self.text(Command::TypeOf {
            dict: dict.into(),
            key: key.into(),
        })
    }

    // =========================================================================
    // Boolean (1)
    // =========================================================================

    /// Property check at `key`; `check` is menu text.
    pub fn check_prop(&mut self, dict: &str, key: &str, check: &str) -> Result<bool> {
        match self.executor.execute(Command::CheckProp {
            dict: dict.into(),
            key: key.into(),
            check: check.into(),
        })? {
            Output::Bool(b) => Ok(b),
            other => Err(unexpected("CheckProp", other)),
        }
    }

    fn text(&mut self, cmd: Command) -> Result<String> {
        let name = cmd.name();
        match self.executor.execute(cmd)? {
            Output::Text(s) => Ok(s),
            other => Err(unexpected(name, other)),
        }
    }
}

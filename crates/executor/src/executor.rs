//! The Executor - single entry point to the document store.
//!
//! The Executor owns one [`DocumentStore`] and routes decoded commands to the
//! handlers, converting store results to outputs.

use std::collections::HashMap;

use dictplus_engine::DocumentStore;
use tracing::{debug, info};

use crate::blocks::{extension_info, ExtensionInfo};
use crate::config::DictionariesConfig;
use crate::handlers::{read, write};
use crate::{Command, Output, Result};

/// The command executor - single entry point to the document store.
///
/// The Executor owns its store, so independent executors never see each
/// other's documents. Execution is sequential; every command completes
/// before `execute` returns.
///
/// # Example
///
/// ```
/// use dictplus_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::new();
///
/// executor.execute(Command::ManageKey {
///     dict: "foo".into(),
///     key: "bar".into(),
///     action: "set to".into(),
///     value: "baz".into(),
/// }).unwrap();
///
/// let results = executor.execute_many(vec![
///     Command::Get { dict: "foo".into(), key: "bar".into() },
///     Command::Length { dict: "foo".into(), key: "".into() },
/// ]);
/// assert_eq!(results[0], Ok(Output::Text("baz".into())));
/// assert_eq!(results[1], Ok(Output::Number(1.0)));
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    store: DocumentStore,
    config: DictionariesConfig,
}

impl Executor {
    /// Create an executor with an empty store and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor with an empty store and the given configuration.
    pub fn with_config(config: DictionariesConfig) -> Self {
        Self {
            store: DocumentStore::new(),
            config,
        }
    }

    /// Execute a single command.
    ///
    /// Store operations never fail; the `Result` covers the decoding layer
    /// and keeps the signature uniform with [`execute_block`](Self::execute_block).
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), "executing");
        match cmd {
            // Reporters
            Command::List => read::dict_list(&self.store),
            Command::Stringify { dict } => read::dict_stringify(&self.store, dict),
            Command::Get { dict, key } => read::dict_get(&self.store, dict, key),
            Command::Keys { dict, key } => read::dict_keys(&self.store, dict, key),
            Command::Length { dict, key } => read::dict_length(&self.store, dict, key),
            Command::TypeOf { dict, key } => read::dict_type(&self.store, dict, key),

            // Boolean
            Command::CheckProp { dict, key, check } => {
                read::dict_check_prop(&self.store, dict, key, check)
            }

            // Commands
            Command::ManageKey {
                dict,
                key,
                action,
                value,
            } => write::dict_manage_key(&mut self.store, dict, key, action, value),
            Command::Manage { dict, action, data } => {
                write::dict_manage(&mut self.store, dict, action, data)
            }
            Command::Clone { src, dest } => write::dict_clone(&mut self.store, src, dest),
            Command::Merge { src, dest } => write::dict_merge(&mut self.store, src, dest),
        }
    }

    /// Decode and execute a host invocation.
    ///
    /// # Errors
    ///
    /// Returns the decoding error from [`Command::from_block`].
    pub fn execute_block(&mut self, opcode: &str, args: &HashMap<String, String>) -> Result<Output> {
        let cmd = Command::from_block(opcode, args)?;
        self.execute(cmd)
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Host runtime disposal hook.
    ///
    /// Drops every document unless `clear_on_dispose` is off.
    pub fn dispose(&mut self) {
        if self.config.clear_on_dispose {
            info!(documents = self.store.len(), "runtime disposed, clearing documents");
            self.store.clear_all();
        } else {
            debug!("runtime disposed, keeping documents");
        }
    }

    /// Extension descriptor for the host palette.
    pub fn info(&self) -> ExtensionInfo {
        extension_info(&self.config)
    }

    /// Active configuration.
    pub fn config(&self) -> &DictionariesConfig {
        &self.config
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}

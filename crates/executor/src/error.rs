//! Error types for block execution.
//!
//! Store operations never fail: reads degrade to sentinels and writes
//! silently do nothing. The errors here cover the layer around the store,
//! namely decoding host invocations and loading configuration.

use serde::{Deserialize, Serialize};

/// Block execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Decoding | `UnknownOpcode`, `MissingArgument` | Host sent something unexpected |
/// | Configuration | `Config` | `dictplus.toml` could not be used |
/// | System | `Io`, `Internal` | Infrastructure errors |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Decoding ====================
    /// The opcode is not one of the extension's blocks
    #[error("unknown opcode: {opcode}")]
    UnknownOpcode {
        /// Opcode the host sent
        opcode: String,
    },

    /// A block argument was not supplied
    #[error("missing argument {name} for {opcode}")]
    MissingArgument {
        /// Block being decoded
        opcode: String,
        /// Absent argument name
        name: String,
    },

    // ==================== Configuration ====================
    /// Invalid or unparseable configuration
    #[error("invalid config: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },

    // ==================== System ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io {
        /// What went wrong
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },
}

//! Command handlers organized by block shape.
//!
//! | Module | Commands | Store side |
//! |--------|----------|------------|
//! | `read` | 7 | Reporters and the boolean check; never mutate |
//! | `write` | 4 | Command blocks; no-ops are logged, never returned |

pub mod read;
pub mod write;

//! Interpreter module
//!
//! Line tokenizing, session state and the builtins that act on it.

pub mod builtin_dispatch;
pub mod builtins;
pub mod command_line;
pub mod types;

pub use builtin_dispatch::*;
pub use command_line::*;
pub use types::*;

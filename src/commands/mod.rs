// src/commands/mod.rs
pub mod cal_cmd;
pub mod echo;
pub mod ls;
pub mod registry;
pub mod tac_cmd;
pub mod types;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};

//! Builtin Command Dispatch
//!
//! Handles dispatch of built-in shell commands that mutate session state.

use crate::commands::CommandResult;
use crate::fs::FileSystem;
use crate::interpreter::builtins::handle_cd;
use crate::interpreter::types::InterpreterState;

/// Dispatch a command to the matching builtin handler.
/// Returns None if the command is not a builtin.
pub async fn dispatch_builtin(
    state: &mut InterpreterState,
    fs: &dyn FileSystem,
    command_name: &str,
    args: &[String],
) -> Option<CommandResult> {
    match command_name {
        "cd" => Some(handle_cd(state, fs, args).await),
        _ => None,
    }
}

/// Diagnostic for a verb that is neither a builtin nor a registered command.
pub fn command_not_found(command_name: &str) -> CommandResult {
    CommandResult::with_exit_code(
        String::new(),
        format!("{}: command not found\n", command_name),
        127,
    )
}

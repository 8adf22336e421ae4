//! cd - Change directory builtin
//!
//! Supports:
//! - cd ..     - drop the last `/`-separated segment of the cursor
//! - cd <name> - move to an entry name that exists in the archive
//!
//! Targets are entry names, not paths relative to the cursor: `cd docs/`
//! from `/` looks up the literal name `docs/`.

use crate::commands::CommandResult;
use crate::fs::FileSystem;
use crate::interpreter::types::InterpreterState;

/// Handle the cd builtin command
pub async fn handle_cd(
    state: &mut InterpreterState,
    fs: &dyn FileSystem,
    args: &[String],
) -> CommandResult {
    // A missing argument is looked up as the empty name, which archives
    // practically never contain.
    let target = args.first().map(String::as_str).unwrap_or("");

    if target == ".." {
        state.cwd = parent_of(&state.cwd);
        return CommandResult::ok();
    }

    if !fs.exists(target).await {
        return CommandResult::error(format!("cd: {}: No such file or directory\n", target));
    }

    state.cwd = target.to_string();
    CommandResult::ok()
}

/// The cursor with its last `/`-delimited segment removed.
///
/// Pure string manipulation; an empty remainder becomes `/`.
pub fn parent_of(cwd: &str) -> String {
    let parent = match cwd.rfind('/') {
        Some(pos) => &cwd[..pos],
        None => "",
    };
    if parent.is_empty() {
        "/".to_string()
    } else {
        parent.to_string()
    }
}

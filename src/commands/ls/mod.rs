// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

/// Lists every entry whose name starts with the current directory.
///
/// The match is on the literal cursor string, so with the cursor at `/ab`
/// both `/ab/x` and `/abc/y` are listed. Arguments are ignored.
pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let mut stdout = String::new();
        for path in ctx.fs.list_by_prefix(&ctx.cwd).await {
            stdout.push_str(&path);
            stdout.push('\n');
        }
        CommandResult::success(stdout)
    }
}

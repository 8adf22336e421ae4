// src/commands/echo/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // Tokens arrive whitespace-split, so joining with one space also
        // collapses any run of blanks typed between words.
        let mut output = ctx.args.join(" ");
        output.push('\n');
        CommandResult::success(output)
    }
}

// src/commands/cal_cmd.rs
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command as HostCommand;

use crate::commands::{Command, CommandContext, CommandResult};

/// Delegates to the host's calendar program.
///
/// This is the only command that leaves the archive: the host program is
/// run with no arguments and its output is forwarded unchanged. Arguments
/// given to `cal` itself are ignored.
pub struct CalCommand {
    program: String,
}

impl CalCommand {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for CalCommand {
    fn default() -> Self {
        Self::with_program("cal")
    }
}

#[async_trait]
impl Command for CalCommand {
    fn name(&self) -> &'static str {
        "cal"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        let output = HostCommand::new(&self.program)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                let code = output.status.code().unwrap_or(1);
                if code != 0 {
                    tracing::warn!(program = %self.program, code, "host calendar exited with failure");
                }
                CommandResult::with_exit_code(stdout, stderr, code)
            }
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "host calendar unavailable");
                CommandResult::error(format!("cal: {}\n", e))
            }
        }
    }
}

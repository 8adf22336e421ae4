//! Shell Environment
//!
//! Ties together the archive file system, the command registry and the
//! session state. Both the startup script and the interactive loop feed
//! lines through `Shell::execute`.

use std::io::Write;
use std::sync::Arc;

use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::FileSystem;
use crate::interpreter::{command_not_found, dispatch_builtin, parse_command_line, InterpreterState};

/// Options for creating a Shell.
#[derive(Default)]
pub struct ShellOptions {
    /// Name shown in the prompt (defaults to "localhost")
    pub hostname: Option<String>,
    /// Starting cursor (defaults to "/")
    pub cwd: Option<String>,
    /// Command set (defaults to ls, echo, tac, cal)
    pub registry: Option<CommandRegistry>,
}

/// A shell session over a read-only file system.
pub struct Shell {
    fs: Arc<dyn FileSystem>,
    registry: CommandRegistry,
    state: InterpreterState,
    hostname: String,
}

impl Shell {
    pub fn new(fs: Arc<dyn FileSystem>, options: ShellOptions) -> Self {
        let state = options
            .cwd
            .map(InterpreterState::new)
            .unwrap_or_default();

        Self {
            fs,
            registry: options.registry.unwrap_or_else(create_default_registry),
            state,
            hostname: options.hostname.unwrap_or_else(|| "localhost".to_string()),
        }
    }

    /// Execute one command line.
    ///
    /// Never fails: unknown verbs and missing paths come back as a
    /// diagnostic in `stderr` with a non-zero exit code. Blank lines are
    /// a no-op.
    pub async fn execute(&mut self, line: &str) -> CommandResult {
        let Some(command) = parse_command_line(line) else {
            return CommandResult::ok();
        };
        tracing::debug!(verb = %command.verb, args = command.args.len(), cwd = %self.state.cwd, "dispatch");

        if let Some(result) =
            dispatch_builtin(&mut self.state, self.fs.as_ref(), &command.verb, &command.args).await
        {
            return result;
        }

        match self.registry.get(&command.verb) {
            Some(cmd) => {
                let ctx = CommandContext {
                    args: command.args,
                    cwd: self.state.cwd.clone(),
                    fs: self.fs.clone(),
                };
                cmd.execute(ctx).await
            }
            None => {
                tracing::debug!(verb = %command.verb, "unknown command");
                command_not_found(&command.verb)
            }
        }
    }

    /// Run every line of a script stored in the file system.
    ///
    /// Each line's output is written as soon as it finishes. A failing line
    /// does not stop the ones after it, and `exit` has no special meaning
    /// here. A missing script is reported on `out` and is not an error.
    pub async fn run_script<W: Write + ?Sized>(
        &mut self,
        path: &str,
        out: &mut W,
    ) -> std::io::Result<()> {
        let script = match self.fs.read_to_string(path).await {
            Ok(script) => script,
            Err(_) => {
                tracing::warn!(path, "script not found");
                writeln!(out, "Script {} not found.", path)?;
                return out.flush();
            }
        };

        tracing::info!(path, lines = script.lines().count(), "running script");
        for line in script.lines() {
            let result = self.execute(line).await;
            write_result(out, &result)?;
        }
        out.flush()
    }

    /// Prompt shown before each interactive read
    pub fn prompt(&self) -> String {
        format!("{}:{} $ ", self.hostname, self.state.cwd)
    }

    /// Get current working directory.
    pub fn cwd(&self) -> &str {
        &self.state.cwd
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The file system commands run against. Read-only by construction.
    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }
}

/// Write a command's output followed by its diagnostics to one stream.
pub fn write_result<W: Write + ?Sized>(out: &mut W, result: &CommandResult) -> std::io::Result<()> {
    out.write_all(result.stdout.as_bytes())?;
    out.write_all(result.stderr.as_bytes())
}

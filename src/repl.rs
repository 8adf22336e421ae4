//! Interactive loop
//!
//! Reads one line at a time from a `LineReader`, showing a prompt built
//! from the hostname and the current directory, until the operator types
//! `exit` or input runs out.

use std::collections::VecDeque;
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;
use crate::shell::{write_result, Shell};

/// The line that ends an interactive session.
pub const EXIT_COMMAND: &str = "exit";

/// What a single read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The operator abandoned the current line (Ctrl-C)
    Interrupted,
    /// No more input (Ctrl-D or closed stdin)
    Eof,
}

/// Source of operator input.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;
}

/// Terminal reader backed by rustyline.
///
/// History is kept in memory for the session only.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::warn!("Failed to add history entry: {}", e);
                    }
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reader that replays a fixed list of lines, then reports end of input.
///
/// Prompts are recorded so callers can check what the operator would
/// have seen.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(match self.lines.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => ReadOutcome::Eof,
        })
    }
}

/// Run the interactive loop until `exit` or end of input.
pub async fn run_interactive<R, W>(
    shell: &mut Shell,
    reader: &mut R,
    out: &mut W,
) -> Result<(), ShellError>
where
    R: LineReader + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let prompt = shell.prompt();
        let line = match reader.read_line(&prompt)? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Interrupted => continue,
            ReadOutcome::Eof => {
                tracing::debug!("end of input, leaving interactive loop");
                break;
            }
        };

        if line.trim() == EXIT_COMMAND {
            break;
        }

        let result = shell.execute(&line).await;
        write_result(out, &result)?;
        out.flush()?;
    }
    Ok(())
}

/// Run the startup script, then hand over to the interactive loop.
pub async fn run_session<R, W>(
    shell: &mut Shell,
    startup_script: &str,
    reader: &mut R,
    out: &mut W,
) -> Result<(), ShellError>
where
    R: LineReader + ?Sized,
    W: Write + ?Sized,
{
    shell.run_script(startup_script, out).await?;
    run_interactive(shell, reader, out).await
}

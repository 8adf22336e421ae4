//! Process-level errors
//!
//! Per-command failures never reach this type: they are turned into a
//! diagnostic line by the shell and the session carries on. What remains
//! is a bad archive at startup and failures of the terminal itself.

use thiserror::Error;

use crate::archive::ArchiveError;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

//! zipsh - A shell emulator over an archive-backed file system
//!
//! The contents of a zip (or tar) archive become a read-only virtual file
//! system. A small fixed set of commands reads it, fed first from a
//! startup script stored in the archive and then from an interactive
//! prompt.

pub mod archive;
pub mod commands;
pub mod error;
pub mod fs;
pub mod interpreter;
pub mod repl;
pub mod shell;

pub use error::ShellError;
pub use fs::{ArchiveFs, FileSystem};
pub use repl::{run_interactive, run_session, EditorReader, LineReader, ReadOutcome, ScriptedReader};
pub use shell::{Shell, ShellOptions};

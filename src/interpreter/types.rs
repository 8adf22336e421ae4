//! Interpreter Types
//!
//! Session state shared by the builtins.

/// Mutable state of one shell session.
///
/// Only the `cd` builtin writes to it. The cursor is not checked against
/// the file system after the fact and may name something that does not
/// exist (for example after `cd ..`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterState {
    /// Current directory cursor
    pub cwd: String,
}

impl InterpreterState {
    pub fn new(cwd: impl Into<String>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self::new("/")
    }
}

// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;
use crate::fs::FileSystem;

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }

    /// Success with no output
    pub fn ok() -> Self {
        Self::success(String::new())
    }
}

/// Command execution context
pub struct CommandContext {
    pub args: Vec<String>,
    pub cwd: String,
    pub fs: Arc<dyn FileSystem>,
}

/// Command trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}

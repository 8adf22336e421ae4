//! File System Types
//!
//! Core types and traits for the archive-backed virtual file system.

use async_trait::async_trait;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },
}

impl FsError {
    pub fn not_found(path: &str, operation: &str) -> Self {
        FsError::NotFound {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }
}

/// Read-only view over a set of named entries.
///
/// Paths are compared as literal strings: there is no normalization of
/// `.`, `..`, repeated or trailing slashes, and no distinction between
/// files and directories beyond what the entry name spells out.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Check if a path is exactly one of the entry names
    async fn exists(&self, path: &str) -> bool;

    /// Read the raw bytes stored for an entry
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError>;

    /// Read an entry as text, replacing invalid UTF-8 sequences
    async fn read_to_string(&self, path: &str) -> Result<String, FsError> {
        let bytes = self.read_file(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Every entry name starting with `prefix`, in archive order.
    ///
    /// This is a plain string prefix test, not a path-component one:
    /// `/ab` matches `/abc/file` as well as `/ab/file`.
    async fn list_by_prefix(&self, prefix: &str) -> Vec<String>;

    /// Number of entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! File System Module
//!
//! Provides the virtual file system the shell commands operate on.
//! The only implementation is `ArchiveFs`, built once from an archive
//! and read-only afterwards.

pub mod types;
pub mod archive_fs;

pub use types::*;
pub use archive_fs::ArchiveFs;

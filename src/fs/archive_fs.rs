//! Archive-backed File System Implementation
//!
//! A read-only virtual file system whose entries are exactly the members
//! of an archive, keyed by their stored names.

use std::path::Path;

use async_trait::async_trait;
use indexmap::IndexMap;

use super::types::*;
use crate::archive::{self, ArchiveEntry, ArchiveError};

/// Archive-backed virtual file system.
///
/// Keys are the archive's entry names, unaltered. A name that appears
/// twice keeps its first position and its last content.
#[derive(Debug, Clone, Default)]
pub struct ArchiveFs {
    entries: IndexMap<String, Vec<u8>>,
}

impl ArchiveFs {
    /// Decode an in-memory archive.
    pub fn load(data: &[u8]) -> Result<Self, ArchiveError> {
        let (format, entries) = archive::read_entries(data)?;
        let fs = Self::from_entries(entries);
        tracing::info!(%format, entries = fs.len(), "loaded archive");
        Ok(fs)
    }

    /// Read and decode an archive from the host file system.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ArchiveError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load(&data)
    }

    /// Build directly from entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ArchiveEntry>,
    {
        let mut map = IndexMap::new();
        for entry in entries {
            map.insert(entry.name, entry.content);
        }
        Self { entries: map }
    }

    /// Entry names in archive order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[async_trait]
impl FileSystem for ArchiveFs {
    async fn exists(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::not_found(path, "open"))
    }

    async fn list_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

//! Archive decoding
//!
//! Turns the bytes of an archive file into an ordered list of
//! `(name, content)` entries. Supported containers are zip, plain ustar
//! tar and gzip-compressed tar; the format is picked from magic bytes,
//! never from the file extension.

pub mod tar;
pub mod zip_reader;

use std::fmt;

use thiserror::Error;

/// Archive decoding errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("cannot read archive '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported archive format")]
    UnsupportedFormat,

    #[error("zip: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("tar: {0}")]
    Tar(String),

    #[error("gzip: {0}")]
    Gzip(String),
}

/// A single archive member with its name exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub content: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveFormat::Zip => write!(f, "zip"),
            ArchiveFormat::Tar => write!(f, "tar"),
            ArchiveFormat::TarGz => write!(f, "tar.gz"),
        }
    }
}

/// Identify the container format from its leading bytes.
pub fn detect_format(data: &[u8]) -> Option<ArchiveFormat> {
    if zip_reader::is_zip(data) {
        Some(ArchiveFormat::Zip)
    } else if tar::is_gzip(data) {
        Some(ArchiveFormat::TarGz)
    } else if tar::is_ustar(data) {
        Some(ArchiveFormat::Tar)
    } else {
        None
    }
}

/// Decode every entry of an archive, in archive order.
///
/// Either all entries are returned or an error is; a partially read
/// archive is never handed back.
pub fn read_entries(data: &[u8]) -> Result<(ArchiveFormat, Vec<ArchiveEntry>), ArchiveError> {
    let format = detect_format(data).ok_or(ArchiveError::UnsupportedFormat)?;
    tracing::debug!(%format, bytes = data.len(), "decoding archive");

    let entries = match format {
        ArchiveFormat::Zip => zip_reader::read_zip(data)?,
        ArchiveFormat::Tar => tar::parse_archive(data)?,
        ArchiveFormat::TarGz => {
            let decompressed = tar::decompress_gzip(data)?;
            tar::parse_archive(&decompressed)?
        }
    };

    Ok((format, entries))
}

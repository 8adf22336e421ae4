//! Zip member reader

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use super::{ArchiveEntry, ArchiveError};

/// Check for a zip local file header or an empty-archive end record.
pub fn is_zip(data: &[u8]) -> bool {
    data.starts_with(b"PK\x03\x04") || data.starts_with(b"PK\x05\x06")
}

/// Read every member of a zip archive in central-directory order.
///
/// Names are taken exactly as stored, without the sanitizing that
/// extraction to a real disk would need: nothing here touches the host
/// filesystem.
pub fn read_zip(data: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        let name = file.name().to_string();
        // The declared size is untrusted; grow the buffer from what is read.
        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(ZipError::Io)?;
        if content.len() as u64 != file.size() {
            let reason = "member size does not match its header";
            return Err(ZipError::InvalidArchive(reason.into()).into());
        }
        entries.push(ArchiveEntry { name, content });
    }

    Ok(entries)
}

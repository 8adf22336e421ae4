//! Tar archive reader

use flate2::read::GzDecoder;
use std::io::Read;

use super::{ArchiveEntry, ArchiveError};

const BLOCK_SIZE: usize = 512;

/// Read a null-terminated string from a fixed-size field.
fn read_string(header: &[u8], offset: usize, len: usize) -> String {
    let slice = &header[offset..offset + len];
    let end = slice.iter().position(|&b| b == 0).unwrap_or(len);
    String::from_utf8_lossy(&slice[..end]).to_string()
}

/// Read an octal ASCII value from a fixed-size field.
fn read_octal(header: &[u8], offset: usize, len: usize) -> u64 {
    let s = read_string(header, offset, len);
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0;
    }
    u64::from_str_radix(trimmed, 8).unwrap_or(0)
}

/// Read a numeric header field that may use the GNU base-256 form.
///
/// A set high bit on the first byte marks a big-endian binary value in the
/// remaining bits; anything else must be octal text.
fn read_numeric(header: &[u8], offset: usize, len: usize) -> Result<u64, ArchiveError> {
    let field = &header[offset..offset + len];
    let unsupported = || ArchiveError::Tar("unsupported size encoding".to_string());

    if field[0] & 0x80 != 0 {
        if field[0] & 0x40 != 0 {
            // Negative base-256 values have no meaning for a size.
            return Err(unsupported());
        }
        let mut value: u64 = u64::from(field[0] & 0x3f);
        for &byte in &field[1..] {
            value = value
                .checked_mul(256)
                .map(|v| v | u64::from(byte))
                .ok_or_else(unsupported)?;
        }
        return Ok(value);
    }

    let s = read_string(header, offset, len);
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(trimmed, 8).map_err(|_| unsupported())
}

/// Sum of all header bytes, treating the checksum field (148..156) as spaces.
fn calculate_checksum(header: &[u8; BLOCK_SIZE]) -> u32 {
    let mut sum: u32 = 0;
    for (i, &byte) in header.iter().enumerate() {
        if (148..156).contains(&i) {
            sum += 0x20u32;
        } else {
            sum += byte as u32;
        }
    }
    sum
}

/// Check if a 512-byte block is all zeros (end-of-archive marker).
fn is_zero_block(block: &[u8]) -> bool {
    block.iter().all(|&b| b == 0)
}

fn verify_checksum(header: &[u8; BLOCK_SIZE]) -> bool {
    let stored = read_octal(header, 148, 8) as u32;
    stored == calculate_checksum(header)
}

/// Entry name from the header. The ustar prefix field only exists in the
/// POSIX layout; GNU headers reuse those bytes for other metadata.
fn header_path(header: &[u8; BLOCK_SIZE]) -> String {
    let name = read_string(header, 0, 100);
    if &header[257..263] != b"ustar\0" {
        return name;
    }
    let prefix = read_string(header, 345, 155);
    if prefix.is_empty() {
        name
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Type flags whose size field does not describe a data payload.
fn has_payload(type_flag: u8) -> bool {
    !matches!(type_flag, b'1' | b'2' | b'3' | b'4' | b'5' | b'6')
}

/// Parse a tar archive into entries.
///
/// Directory and link members are kept with empty content. GNU long-name
/// records rename the member that follows them; pax headers are skipped.
pub fn parse_archive(data: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut entries = Vec::new();
    let mut offset = 0;
    let mut zero_blocks = 0;
    let mut long_name: Option<String> = None;

    while offset + BLOCK_SIZE <= data.len() {
        let block = &data[offset..offset + BLOCK_SIZE];

        if is_zero_block(block) {
            zero_blocks += 1;
            offset += BLOCK_SIZE;
            if zero_blocks >= 2 {
                break;
            }
            continue;
        }
        zero_blocks = 0;

        let header: &[u8; BLOCK_SIZE] = block
            .try_into()
            .map_err(|_| ArchiveError::Tar("invalid header block".to_string()))?;

        if !verify_checksum(header) {
            return Err(ArchiveError::Tar(format!(
                "invalid header checksum at offset {}",
                offset
            )));
        }

        let size = usize::try_from(read_numeric(header, 124, 12)?)
            .map_err(|_| ArchiveError::Tar("unexpected end of archive".to_string()))?;
        let type_flag = header[156];

        offset += BLOCK_SIZE;

        let content = if has_payload(type_flag) && size > 0 {
            let end = match offset.checked_add(size) {
                Some(end) if end <= data.len() => end,
                _ => return Err(ArchiveError::Tar("unexpected end of archive".to_string())),
            };
            let content = data[offset..end].to_vec();
            let blocks = (size + BLOCK_SIZE - 1) / BLOCK_SIZE;
            offset += blocks * BLOCK_SIZE;
            content
        } else {
            Vec::new()
        };

        match type_flag {
            b'L' => {
                let end = content.iter().position(|&b| b == 0).unwrap_or(content.len());
                long_name = Some(String::from_utf8_lossy(&content[..end]).to_string());
                continue;
            }
            b'x' | b'g' => continue,
            _ => {}
        }

        let name = long_name.take().unwrap_or_else(|| header_path(header));
        entries.push(ArchiveEntry { name, content });
    }

    Ok(entries)
}

/// Decompress gzip data.
pub fn decompress_gzip(data: &[u8]) -> Result<Vec<u8>, ArchiveError> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| ArchiveError::Gzip(e.to_string()))?;
    Ok(decompressed)
}

/// Check if data is gzip compressed (magic bytes 0x1f 0x8b).
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}

/// Check for the `ustar` magic shared by POSIX and GNU headers.
pub fn is_ustar(data: &[u8]) -> bool {
    data.len() >= BLOCK_SIZE && &data[257..262] == b"ustar"
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn write_string(header: &mut [u8], offset: usize, len: usize, s: &str) {
        let bytes = s.as_bytes();
        let copy_len = bytes.len().min(len);
        header[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
    }

    fn write_octal(header: &mut [u8], offset: usize, len: usize, value: u64) {
        let s = format!("{:0>width$o}", value, width = len - 1);
        header[offset..offset + len - 1].copy_from_slice(s.as_bytes());
        header[offset + len - 1] = 0;
    }

    fn header(name: &str, prefix: &str, size: usize, type_flag: u8) -> [u8; BLOCK_SIZE] {
        let mut header = [0u8; BLOCK_SIZE];
        write_string(&mut header, 0, 100, name);
        write_octal(&mut header, 100, 8, 0o644);
        write_octal(&mut header, 108, 8, 0);
        write_octal(&mut header, 116, 8, 0);
        write_octal(&mut header, 124, 12, size as u64);
        write_octal(&mut header, 136, 12, 0);
        header[148..156].copy_from_slice(b"        ");
        header[156] = type_flag;
        header[257..263].copy_from_slice(b"ustar\0");
        header[263..265].copy_from_slice(b"00");
        write_string(&mut header, 345, 155, prefix);
        let checksum = calculate_checksum(&header);
        let cksum_str = format!("{:06o}\0 ", checksum);
        header[148..156].copy_from_slice(&cksum_str.as_bytes()[..8]);
        header
    }

    fn push_member(archive: &mut Vec<u8>, header: [u8; BLOCK_SIZE], content: &[u8]) {
        archive.extend_from_slice(&header);
        archive.extend_from_slice(content);
        let remainder = content.len() % BLOCK_SIZE;
        if remainder != 0 {
            archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE - remainder));
        }
    }

    /// Names ending in `/` become directory members.
    pub(crate) fn build_archive(members: &[(&str, &str)]) -> Vec<u8> {
        let mut archive = Vec::new();
        for (name, content) in members {
            if name.ends_with('/') {
                push_member(&mut archive, header(name, "", 0, b'5'), &[]);
            } else {
                push_member(&mut archive, header(name, "", content.len(), b'0'), content.as_bytes());
            }
        }
        archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));
        archive
    }

    pub(crate) fn compress_gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_parse_archive_single_file() {
        let archive = build_archive(&[("hello.txt", "Hello, World!")]);
        let entries = parse_archive(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "hello.txt");
        assert_eq!(entries[0].content, b"Hello, World!");
    }

    #[test]
    fn test_directory_keeps_trailing_slash_and_empty_content() {
        let archive = build_archive(&[("project/", ""), ("project/main.rs", "fn main() {}")]);
        let entries = parse_archive(&archive).unwrap();
        assert_eq!(entries[0].name, "project/");
        assert!(entries[0].content.is_empty());
        assert_eq!(entries[1].name, "project/main.rs");
    }

    #[test]
    fn test_order_is_archive_order() {
        let archive = build_archive(&[("z", "1"), ("a", "2"), ("m", "3")]);
        let names: Vec<_> = parse_archive(&archive).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_ustar_prefix_is_joined() {
        let mut archive = Vec::new();
        push_member(&mut archive, header("file.txt", "deep/nested", 4, b'0'), b"data");
        archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));
        let entries = parse_archive(&archive).unwrap();
        assert_eq!(entries[0].name, "deep/nested/file.txt");
    }

    #[test]
    fn test_gnu_long_name_renames_next_member() {
        let long = format!("{}/file.txt", "x".repeat(150));
        let mut archive = Vec::new();
        let mut name_payload = long.as_bytes().to_vec();
        name_payload.push(0);
        push_member(&mut archive, header("././@LongLink", "", name_payload.len(), b'L'), &name_payload);
        push_member(&mut archive, header("truncated", "", 2, b'0'), b"ok");
        archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));

        let entries = parse_archive(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, long);
        assert_eq!(entries[0].content, b"ok");
    }

    #[test]
    fn test_pax_headers_are_skipped() {
        let mut archive = Vec::new();
        push_member(&mut archive, header("PaxHeader", "", 5, b'x'), b"12 x\n");
        push_member(&mut archive, header("real.txt", "", 1, b'0'), b"r");
        archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));
        let entries = parse_archive(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "real.txt");
    }

    #[test]
    fn test_corrupt_checksum_is_rejected() {
        let mut archive = build_archive(&[("check.txt", "checksum test")]);
        archive[0] ^= 0xFF;
        let err = parse_archive(&archive).unwrap_err();
        assert!(err.to_string().contains("checksum"));
    }

    #[test]
    fn test_truncated_content_is_rejected() {
        let content = "a".repeat(2000);
        let archive = build_archive(&[("big.txt", content.as_str())]);
        let err = parse_archive(&archive[..1024]).unwrap_err();
        assert!(err.to_string().contains("unexpected end"));
    }

    /// Overwrite the raw size field and re-sign the header.
    fn with_size_field(mut header: [u8; BLOCK_SIZE], size: &[u8; 12]) -> [u8; BLOCK_SIZE] {
        header[124..136].copy_from_slice(size);
        header[148..156].copy_from_slice(b"        ");
        let checksum = calculate_checksum(&header);
        let cksum_str = format!("{:06o}\0 ", checksum);
        header[148..156].copy_from_slice(&cksum_str.as_bytes()[..8]);
        header
    }

    #[test]
    fn test_base256_size_is_decoded() {
        let mut size = [0u8; 12];
        size[0] = 0x80;
        size[11] = 4;
        let mut archive = Vec::new();
        push_member(&mut archive, with_size_field(header("bin.dat", "", 0, b'0'), &size), b"data");
        archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));

        let entries = parse_archive(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, b"data");
    }

    #[test]
    fn test_huge_base256_size_is_rejected() {
        let mut size = [0xffu8; 12];
        size[0] = 0x80;
        let mut archive = Vec::new();
        push_member(&mut archive, with_size_field(header("big.dat", "", 0, b'0'), &size), b"data");
        archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));

        let err = parse_archive(&archive).unwrap_err();
        assert!(err.to_string().contains("unsupported size encoding"));
    }

    #[test]
    fn test_size_past_end_is_rejected() {
        let mut size = [0u8; 12];
        size[0] = 0x80;
        size[4..12].copy_from_slice(&(u64::MAX - 100).to_be_bytes());
        let mut archive = Vec::new();
        push_member(&mut archive, with_size_field(header("big.dat", "", 0, b'0'), &size), b"data");

        let err = parse_archive(&archive).unwrap_err();
        assert!(err.to_string().contains("unexpected end"));
    }

    #[test]
    fn test_non_octal_size_is_rejected() {
        let mut archive = Vec::new();
        let member = with_size_field(header("odd.txt", "", 0, b'0'), b"12x4\0\0\0\0\0\0\0\0");
        push_member(&mut archive, member, b"");
        archive.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));

        let err = parse_archive(&archive).unwrap_err();
        assert!(err.to_string().contains("unsupported size encoding"));
    }

    #[test]
    fn test_empty_archive() {
        let archive = build_archive(&[]);
        assert!(parse_archive(&archive).unwrap().is_empty());
    }

    #[test]
    fn test_decompress_invalid_data() {
        assert!(decompress_gzip(&[0x1f, 0x8b, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_is_ustar_detection() {
        assert!(is_ustar(&build_archive(&[("a", "1")])));
        assert!(!is_ustar(&[0u8; 100]));
    }
}

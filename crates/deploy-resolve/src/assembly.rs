//! File version metadata of .NET assemblies
//!
//! A PE image keeps its version in a `VS_VERSION_INFO` resource whose
//! fixed part, `VS_FIXEDFILEINFO`, starts with the signature `0xFEEF04BD`
//! followed by the structure version and the file version as two DWORDs
//! (`major << 16 | minor`, `build << 16 | revision`).

use std::fmt;

const FIXED_FILE_INFO_SIGNATURE: u32 = 0xFEEF_04BD;
const FIXED_FILE_INFO_VERSION: u32 = 0x0001_0000;

/// Four-part file version of a binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileVersion {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Read the file version from a PE image.
///
/// Returns `None` if `image` is not a PE file or carries no version resource.
pub fn file_version(image: &[u8]) -> Option<FileVersion> {
    if !image.starts_with(b"MZ") {
        return None;
    }

    let signature = FIXED_FILE_INFO_SIGNATURE.to_le_bytes();
    let mut offset = 0;
    while let Some(found) = find(&image[offset..], &signature) {
        let start = offset + found;
        if read_u32(image, start + 4) == Some(FIXED_FILE_INFO_VERSION) {
            let most = read_u32(image, start + 8)?;
            let least = read_u32(image, start + 12)?;
            return Some(FileVersion {
                major: (most >> 16) as u16,
                minor: (most & 0xFFFF) as u16,
                build: (least >> 16) as u16,
                revision: (least & 0xFFFF) as u16,
            });
        }
        offset = start + 1;
    }
    None
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let slice = bytes.get(at..at.checked_add(4)?)?;
    Some(u32::from_le_bytes(slice.try_into().ok()?))
}

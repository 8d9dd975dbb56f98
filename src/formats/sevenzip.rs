//! Bounded 7z header probe.
//!
//! Reads the start header to locate the end header, then looks for the AES
//! coder id inside it. Password-protected archives carry the AES coder
//! either in the folder definitions (encrypted entries) or in the encoded
//! header itself (encrypted listing).

use crate::error::{LockscanError, Result};
use memchr::memmem;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

const SIGNATURE: [u8; 6] = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];
/// Codec id of 7zAES (bytes as serialized in the coder field).
const AES_CODER_ID: [u8; 4] = [0x06, 0xF1, 0x07, 0x01];

const K_HEADER: u8 = 0x01;
const K_ENCODED_HEADER: u8 = 0x17;

const MAX_HEADER_READ: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SevenZipInfo {
    pub needs_password: bool,
}

/// Inspect the archive end header at `path`.
pub fn probe(path: &Path) -> Result<SevenZipInfo> {
    let mut file = File::open(path)?;

    // Signature header: sig 6, version 2, crc 4, then the start header:
    // next_header_offset u64, next_header_size u64, next_header_crc u32.
    let mut start = [0u8; 32];
    file.read_exact(&mut start)?;
    if start[..6] != SIGNATURE {
        return Err(LockscanError::malformed("7z", "bad signature"));
    }

    let next_offset = u64::from_le_bytes(start[12..20].try_into().unwrap());
    let next_size = u64::from_le_bytes(start[20..28].try_into().unwrap());
    if next_size == 0 {
        // Empty archive.
        return Ok(SevenZipInfo {
            needs_password: false,
        });
    }

    let read_len = next_size.min(MAX_HEADER_READ);
    file.seek(SeekFrom::Start(32 + next_offset))?;
    let mut header = vec![0u8; read_len as usize];
    file.read_exact(&mut header)?;

    match header[0] {
        K_HEADER | K_ENCODED_HEADER => Ok(SevenZipInfo {
            needs_password: memmem::find(&header, &AES_CODER_ID).is_some(),
        }),
        _ => Err(LockscanError::malformed("7z", "unrecognized end header")),
    }
}

//! PST (Outlook personal folders) header probe.
//!
//! Reads the NDB header and extracts the crypt method byte. Permutative and
//! cyclic encodings are openable obfuscation; only the strong-encryption
//! method locks the store behind a secret.

use crate::error::{LockscanError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const MAGIC: [u8; 4] = *b"!BDN";
/// wMagicClient for personal folder files.
const MAGIC_CLIENT: u16 = 0x4D53;

const CRYPT_OFFSET_ANSI: usize = 0x1CD;
const CRYPT_OFFSET_UNICODE: usize = 0x201;
const HEADER_LEN: usize = 0x210;

pub const NDB_CRYPT_NONE: u8 = 0x00;
pub const NDB_CRYPT_PERMUTE: u8 = 0x01;
pub const NDB_CRYPT_CYCLIC: u8 = 0x02;
pub const NDB_CRYPT_EDC: u8 = 0x10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PstInfo {
    pub crypt_method: u8,
}

impl PstInfo {
    /// Whether the store cannot be opened without a secret.
    pub fn needs_password(&self) -> bool {
        self.crypt_method == NDB_CRYPT_EDC
    }
}

/// Inspect the NDB header at `path`.
pub fn probe(path: &Path) -> Result<PstInfo> {
    let mut header = [0u8; HEADER_LEN];
    File::open(path)?.read_exact(&mut header)?;

    if header[..4] != MAGIC {
        return Err(LockscanError::malformed("pst", "bad signature"));
    }
    if u16::from_le_bytes([header[8], header[9]]) != MAGIC_CLIENT {
        return Err(LockscanError::malformed("pst", "not a personal folder file"));
    }

    // wVer: 14/15 are ANSI stores, 23 and up are Unicode layouts.
    let version = u16::from_le_bytes([header[10], header[11]]);
    let crypt_offset = if version >= 23 {
        CRYPT_OFFSET_UNICODE
    } else {
        CRYPT_OFFSET_ANSI
    };

    Ok(PstInfo {
        crypt_method: header[crypt_offset],
    })
}

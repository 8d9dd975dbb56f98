//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

/// Deterministic pseudo-random bytes, close to uniform over 0..=255.
pub fn pseudo_random(len: usize) -> Vec<u8> {
    let mut state = 0x2545f4914f6cdd1du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::File::create(&path).unwrap().write_all(data).unwrap();
    path
}

/// A ZIP archive holding a single stored entry "a" whose general-purpose
/// flag marks it encrypted.
pub fn encrypted_zip_bytes() -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"PK\x03\x04");
    out.extend_from_slice(&20u16.to_le_bytes()); // version needed
    out.extend_from_slice(&1u16.to_le_bytes()); // flags: encrypted
    out.extend_from_slice(&0u16.to_le_bytes()); // method: stored
    out.extend_from_slice(&[0u8; 4]); // mod time/date
    out.extend_from_slice(&[0u8; 12]); // crc, sizes
    out.extend_from_slice(&1u16.to_le_bytes()); // name length
    out.extend_from_slice(&0u16.to_le_bytes()); // extra length
    out.push(b'a');
    let cd_offset = out.len() as u32;
    out.extend_from_slice(b"PK\x01\x02");
    out.extend_from_slice(&20u16.to_le_bytes()); // version made by
    out.extend_from_slice(&20u16.to_le_bytes()); // version needed
    out.extend_from_slice(&1u16.to_le_bytes()); // flags: encrypted
    out.extend_from_slice(&0u16.to_le_bytes()); // method
    out.extend_from_slice(&[0u8; 4]); // mod time/date
    out.extend_from_slice(&[0u8; 12]); // crc, sizes
    out.extend_from_slice(&1u16.to_le_bytes()); // name length
    out.extend_from_slice(&0u16.to_le_bytes()); // extra length
    out.extend_from_slice(&0u16.to_le_bytes()); // comment length
    out.extend_from_slice(&0u16.to_le_bytes()); // disk number
    out.extend_from_slice(&0u16.to_le_bytes()); // internal attrs
    out.extend_from_slice(&0u32.to_le_bytes()); // external attrs
    out.extend_from_slice(&0u32.to_le_bytes()); // local header offset
    out.push(b'a');
    let cd_size = out.len() as u32 - cd_offset;
    out.extend_from_slice(b"PK\x05\x06");
    out.extend_from_slice(&0u16.to_le_bytes()); // disk
    out.extend_from_slice(&0u16.to_le_bytes()); // cd disk
    out.extend_from_slice(&1u16.to_le_bytes()); // entries on disk
    out.extend_from_slice(&1u16.to_le_bytes()); // entries total
    out.extend_from_slice(&cd_size.to_le_bytes());
    out.extend_from_slice(&cd_offset.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // comment length
    out
}

/// A minimal compound file whose directory holds the given stream names.
pub fn minimal_cfb(stream_names: &[&str]) -> Vec<u8> {
    const SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    const END_OF_CHAIN: u32 = 0xFFFF_FFFE;

    let mut header = vec![0u8; 512];
    header[..8].copy_from_slice(&SIGNATURE);
    header[24..26].copy_from_slice(&0x003Eu16.to_le_bytes());
    header[26..28].copy_from_slice(&3u16.to_le_bytes());
    header[28..30].copy_from_slice(&0xFFFEu16.to_le_bytes());
    header[30..32].copy_from_slice(&9u16.to_le_bytes());
    header[32..34].copy_from_slice(&6u16.to_le_bytes());
    header[44..48].copy_from_slice(&1u32.to_le_bytes());
    header[48..52].copy_from_slice(&1u32.to_le_bytes());
    header[56..60].copy_from_slice(&4096u32.to_le_bytes());
    header[60..64].copy_from_slice(&END_OF_CHAIN.to_le_bytes());
    header[68..72].copy_from_slice(&END_OF_CHAIN.to_le_bytes());
    for slot in header[76..512].chunks_exact_mut(4) {
        slot.copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    }
    header[76..80].copy_from_slice(&0u32.to_le_bytes());

    let mut fat = vec![0xFFu8; 512];
    fat[0..4].copy_from_slice(&0xFFFF_FFFDu32.to_le_bytes());
    fat[4..8].copy_from_slice(&END_OF_CHAIN.to_le_bytes());

    let mut directory = vec![0u8; 512];
    let mut names: Vec<(&str, u8)> = vec![("Root Entry", 5)];
    names.extend(stream_names.iter().map(|&n| (n, 2u8)));
    for (i, (name, object_type)) in names.iter().enumerate().take(4) {
        let entry = &mut directory[i * 128..(i + 1) * 128];
        let utf16: Vec<u16> = name.encode_utf16().collect();
        for (j, unit) in utf16.iter().enumerate().take(31) {
            entry[j * 2..j * 2 + 2].copy_from_slice(&unit.to_le_bytes());
        }
        let name_len = ((utf16.len().min(31) + 1) * 2) as u16;
        entry[64..66].copy_from_slice(&name_len.to_le_bytes());
        entry[66] = *object_type;
    }

    let mut out = header;
    out.extend_from_slice(&fat);
    out.extend_from_slice(&directory);
    out
}

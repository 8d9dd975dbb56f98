//! Minimal compound-file (OLE/CFB) directory reader.
//!
//! Reads just enough of a compound file to enumerate its directory entry
//! names: header, DIFAT, FAT, and the directory sector chain. Stream
//! contents are never touched; the encryption markers the detectors look
//! for (`EncryptionInfo`, `EncryptedPackage`, `EncryptedSummary`, ...) are
//! entry names.

use crate::error::{LockscanError, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

const SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Largest sector number that refers to an actual sector; higher values are
/// chain terminators and free-sector markers.
const MAX_REGULAR_SECTOR: u32 = 0xFFFF_FFF9;
const END_OF_CHAIN: u32 = 0xFFFF_FFFE;

const DIRECTORY_ENTRY_SIZE: usize = 128;
const MAX_DIRECTORY_SECTORS: usize = 1024;
const MAX_DIFAT_SECTORS: usize = 64;

/// Parsed directory of a compound file.
#[derive(Debug, Clone)]
pub struct CompoundFile {
    entries: Vec<String>,
}

impl CompoundFile {
    pub fn open(path: &Path) -> Result<CompoundFile> {
        Self::from_reader(File::open(path)?)
    }

    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<CompoundFile> {
        let mut header = [0u8; 512];
        reader.read_exact(&mut header)?;
        if header[..8] != SIGNATURE {
            return Err(LockscanError::malformed("cfb", "bad signature"));
        }

        let sector_shift = u16::from_le_bytes([header[30], header[31]]);
        if !(7..=16).contains(&sector_shift) {
            return Err(LockscanError::malformed("cfb", "implausible sector size"));
        }
        let sector_size = 1usize << sector_shift;

        // FAT sector numbers: 109 DIFAT slots in the header, then the DIFAT
        // sector chain for larger files.
        let mut fat_sectors: Vec<u32> = header[76..512]
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .filter(|&s| s <= MAX_REGULAR_SECTOR)
            .collect();

        let mut difat_sector = read_u32(&header, 68);
        let mut difat_walked = 0;
        while difat_sector <= MAX_REGULAR_SECTOR && difat_walked < MAX_DIFAT_SECTORS {
            let sector = read_sector(&mut reader, difat_sector, sector_size)?;
            for chunk in sector[..sector_size - 4].chunks_exact(4) {
                let s = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                if s <= MAX_REGULAR_SECTOR {
                    fat_sectors.push(s);
                }
            }
            difat_sector = read_u32(&sector, sector_size - 4);
            difat_walked += 1;
        }

        let mut fat: Vec<u32> = Vec::with_capacity(fat_sectors.len() * (sector_size / 4));
        for &fat_sector in &fat_sectors {
            let sector = read_sector(&mut reader, fat_sector, sector_size)?;
            fat.extend(
                sector
                    .chunks_exact(4)
                    .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]])),
            );
        }

        // Walk the directory chain, collecting entry names.
        let mut entries = Vec::new();
        let mut dir_sector = read_u32(&header, 48);
        let mut dir_walked = 0;
        while dir_sector <= MAX_REGULAR_SECTOR && dir_walked < MAX_DIRECTORY_SECTORS {
            let sector = read_sector(&mut reader, dir_sector, sector_size)?;
            for raw in sector.chunks_exact(DIRECTORY_ENTRY_SIZE) {
                if let Some(name) = decode_entry_name(raw) {
                    entries.push(name);
                }
            }
            dir_sector = fat
                .get(dir_sector as usize)
                .copied()
                .unwrap_or(END_OF_CHAIN);
            dir_walked += 1;
        }

        Ok(CompoundFile { entries })
    }

    /// Whether a directory entry with exactly this name exists.
    ///
    /// Names are compared verbatim, including the control-character prefixes
    /// of well-known streams such as `\x01CompObj`.
    pub fn has_stream(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }

    pub fn stream_names(&self) -> &[String] {
        &self.entries
    }
}

fn decode_entry_name(raw: &[u8]) -> Option<String> {
    // Object type at 66: 1 storage, 2 stream, 5 root; 0 marks a free slot.
    if !matches!(raw[66], 1 | 2 | 5) {
        return None;
    }
    // Name length at 64 counts bytes including the UTF-16 terminator.
    let name_len = u16::from_le_bytes([raw[64], raw[65]]) as usize;
    if !(2..=64).contains(&name_len) {
        return None;
    }
    let utf16: Vec<u16> = raw[..name_len - 2]
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    Some(String::from_utf16_lossy(&utf16))
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

fn read_sector<R: Read + Seek>(reader: &mut R, sector: u32, sector_size: usize) -> Result<Vec<u8>> {
    let offset = (u64::from(sector) + 1) * sector_size as u64;
    reader.seek(SeekFrom::Start(offset))?;
    let mut buf = vec![0u8; sector_size];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Build a minimal single-FAT-sector compound file whose directory holds the
/// given stream names (plus a root entry). Shared by the detector tests.
#[cfg(test)]
pub(crate) fn minimal_cfb(stream_names: &[&str]) -> Vec<u8> {
    let mut header = vec![0u8; 512];
    header[..8].copy_from_slice(&SIGNATURE);
    header[24..26].copy_from_slice(&0x003Eu16.to_le_bytes()); // minor version
    header[26..28].copy_from_slice(&3u16.to_le_bytes()); // major version
    header[28..30].copy_from_slice(&0xFFFEu16.to_le_bytes()); // byte order
    header[30..32].copy_from_slice(&9u16.to_le_bytes()); // 512-byte sectors
    header[32..34].copy_from_slice(&6u16.to_le_bytes()); // mini sector shift
    header[44..48].copy_from_slice(&1u32.to_le_bytes()); // one FAT sector
    header[48..52].copy_from_slice(&1u32.to_le_bytes()); // directory at sector 1
    header[56..60].copy_from_slice(&4096u32.to_le_bytes()); // mini stream cutoff
    header[60..64].copy_from_slice(&END_OF_CHAIN.to_le_bytes()); // no mini FAT
    header[68..72].copy_from_slice(&END_OF_CHAIN.to_le_bytes()); // no DIFAT chain
    for slot in header[76..512].chunks_exact_mut(4) {
        slot.copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    }
    header[76..80].copy_from_slice(&0u32.to_le_bytes()); // FAT at sector 0

    // FAT sector: sector 0 is the FAT itself, sector 1 ends the directory chain.
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

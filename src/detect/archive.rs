//! Archive detectors: ZIP, RAR and 7z.

use crate::core::Verdict;
use crate::detect::Capabilities;
use crate::formats::{rar, sevenzip};
use std::path::Path;
use tracing::debug;

/// ZIP: any entry with the header encryption bit set is a positive signal.
pub(crate) fn zip_archive(path: &Path, caps: &Capabilities) -> Verdict {
    if !caps.archive {
        return Verdict::NO_SIGNAL;
    }
    imp::zip_archive(path)
}

/// RAR: container password-required flag.
pub(crate) fn rar_archive(path: &Path) -> Verdict {
    match rar::probe(path) {
        Ok(info) => Verdict::new(info.needs_password, info.needs_password, 1.0),
        Err(err) => {
            debug!(path = %path.display(), %err, "rar probe failed");
            Verdict::NO_SIGNAL
        }
    }
}

/// 7z: same pattern as RAR.
pub(crate) fn seven_zip_archive(path: &Path) -> Verdict {
    match sevenzip::probe(path) {
        Ok(info) => Verdict::new(info.needs_password, info.needs_password, 1.0),
        Err(err) => {
            debug!(path = %path.display(), %err, "7z probe failed");
            Verdict::NO_SIGNAL
        }
    }
}

#[cfg(feature = "parsers-archive")]
mod imp {
    use super::*;
    use crate::detect::fault_signals_encryption;
    use std::fs::File;
    use std::io::Read;
    use zip::ZipArchive;

    pub(super) fn zip_archive(path: &Path) -> Verdict {
        let archive = File::open(path).map_err(|e| e.to_string()).and_then(|f| {
            ZipArchive::new(f).map_err(|e| e.to_string())
        });
        let mut archive = match archive {
            Ok(a) => a,
            Err(err) => {
                debug!(path = %path.display(), err, "zip open failed");
                return Verdict::NO_SIGNAL;
            }
        };

        for index in 0..archive.len() {
            match archive.by_index_raw(index) {
                Ok(entry) if entry.encrypted() => return Verdict::new(true, true, 1.0),
                Ok(_) => {}
                Err(_) => continue,
            }
        }

        // No flagged entries; probe one read to catch archives whose
        // encryption only surfaces when an entry is opened.
        if archive.len() > 0 {
            match archive.by_index(0) {
                Ok(mut entry) => {
                    let mut probe = [0u8; 1];
                    let _ = entry.read(&mut probe);
                }
                Err(err) if fault_signals_encryption(&err.to_string()) => {
                    return Verdict::new(true, true, 1.0);
                }
                Err(_) => {}
            }
        }

        // Archive opens cleanly with no flagged entries.
        Verdict::new(false, false, 1.0)
    }
}

#[cfg(not(feature = "parsers-archive"))]
mod imp {
    use super::*;

    pub(super) fn zip_archive(_path: &Path) -> Verdict {
        Verdict::NO_SIGNAL
    }
}

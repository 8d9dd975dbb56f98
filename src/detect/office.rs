//! Office document detectors: OpenXML packages and legacy compound files.

use crate::core::Verdict;
use crate::detect::Capabilities;
use crate::formats::ole::CompoundFile;
use std::path::Path;
use tracing::debug;

/// OpenXML (.docx/.xlsx/.pptx).
///
/// Encrypted OpenXML documents are wrapped in a compound file carrying
/// `EncryptionInfo`/`EncryptedPackage` streams; unencrypted ones are plain
/// ZIP packages. The package checks cover protection markers that survive
/// in the ZIP form.
pub(crate) fn open_xml(path: &Path, caps: &Capabilities) -> Verdict {
    match CompoundFile::open(path) {
        Ok(cfb) => {
            if cfb.has_stream("EncryptionInfo") || cfb.has_stream("EncryptedPackage") {
                return Verdict::new(true, true, 1.0);
            }
            // A compound file without crypto streams is not a sealed
            // OpenXML package; nothing to conclude from here.
            Verdict::NO_SIGNAL
        }
        Err(_) => {
            if !caps.archive {
                return Verdict::NO_SIGNAL;
            }
            imp::open_xml_package(path)
        }
    }
}

/// Legacy Office (.doc/.xls/.ppt): compound-file stream names.
pub(crate) fn legacy(path: &Path) -> Verdict {
    let cfb = match CompoundFile::open(path) {
        Ok(cfb) => cfb,
        Err(err) => {
            debug!(path = %path.display(), %err, "compound file open failed");
            return Verdict::NO_SIGNAL;
        }
    };

    if cfb.has_stream("EncryptionInfo") || cfb.has_stream("EncryptedPackage") {
        return Verdict::new(true, true, 1.0);
    }
    // Ordinary document streams present but no crypto stream: weak,
    // ambiguous evidence that the file is an ordinary legacy document.
    if cfb.has_stream("\u{1}CompObj") && cfb.has_stream("\u{5}SummaryInformation") {
        return Verdict::new(false, false, 0.5);
    }
    Verdict::NO_SIGNAL
}

#[cfg(feature = "parsers-archive")]
mod imp {
    use super::*;
    use memchr::memmem;
    use std::fs::File;
    use std::io::Read;
    use zip::ZipArchive;

    pub(super) fn open_xml_package(path: &Path) -> Verdict {
        let archive = File::open(path)
            .map_err(|e| e.to_string())
            .and_then(|f| ZipArchive::new(f).map_err(|e| e.to_string()));
        let mut archive = match archive {
            Ok(a) => a,
            Err(err) => {
                debug!(path = %path.display(), err, "openxml package open failed");
                return Verdict::NO_SIGNAL;
            }
        };

        if archive.by_name("EncryptedPackage").is_ok() {
            return Verdict::new(true, true, 1.0);
        }

        if let Ok(mut core) = archive.by_name("docProps/core.xml") {
            let mut xml = Vec::new();
            if core.read_to_end(&mut xml).is_ok()
                && memmem::find(&xml, b"DocumentProtection").is_some()
            {
                return Verdict::new(true, false, 0.9);
            }
        }

        // Plain, well-formed package with no protection markers.
        Verdict::new(false, false, 1.0)
    }
}

#[cfg(not(feature = "parsers-archive"))]
mod imp {
    use super::*;

    pub(super) fn open_xml_package(_path: &Path) -> Verdict {
        Verdict::NO_SIGNAL
    }
}

//! LibreOffice/OpenDocument detector.
//!
//! OpenDocument encryption is declared per-entry in the package manifest;
//! the main content stream is probed as a fallback for packages whose
//! entries are sealed at the ZIP layer instead.

use crate::core::Verdict;
use crate::detect::Capabilities;
use std::path::Path;

pub(crate) fn inspect(path: &Path, caps: &Capabilities) -> Verdict {
    if !caps.archive {
        return Verdict::NO_SIGNAL;
    }
    imp::inspect(path)
}

#[cfg(feature = "parsers-archive")]
mod imp {
    use super::*;
    use crate::detect::fault_signals_encryption;
    use memchr::memmem;
    use std::fs::File;
    use std::io::Read;
    use tracing::debug;
    use zip::ZipArchive;

    pub(super) fn inspect(path: &Path) -> Verdict {
        let archive = File::open(path)
            .map_err(|e| e.to_string())
            .and_then(|f| ZipArchive::new(f).map_err(|e| e.to_string()));
        let mut archive = match archive {
            Ok(a) => a,
            Err(err) => {
                debug!(path = %path.display(), err, "odf package open failed");
                return Verdict::NO_SIGNAL;
            }
        };

        if let Ok(mut manifest) = archive.by_name("META-INF/manifest.xml") {
            let mut xml = Vec::new();
            if manifest.read_to_end(&mut xml).is_ok()
                && memmem::find(&xml, b"manifest:encryption-data").is_some()
            {
                return Verdict::new(true, true, 1.0);
            }
        }

        let verdict = match archive.by_name("content.xml") {
            Ok(mut content) => {
                let mut body = Vec::new();
                match content.read_to_end(&mut body) {
                    Ok(_) => Verdict::new(false, false, 1.0),
                    Err(err) if fault_signals_encryption(&err.to_string()) => {
                        Verdict::new(true, true, 1.0)
                    }
                    Err(_) => Verdict::NO_SIGNAL,
                }
            }
            Err(err) if fault_signals_encryption(&err.to_string()) => {
                Verdict::new(true, true, 1.0)
            }
            // No content stream to probe; the manifest said nothing, so the
            // package is an ordinary readable one.
            Err(_) => Verdict::new(false, false, 1.0),
        };
        verdict
    }
}

#[cfg(not(feature = "parsers-archive"))]
mod imp {
    use super::*;

    pub(super) fn inspect(_path: &Path) -> Verdict {
        Verdict::NO_SIGNAL
    }
}

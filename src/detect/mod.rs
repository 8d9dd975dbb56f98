//! The per-format detector set.
//!
//! Ten format-specific probes behind one contract: inspect the file at a
//! path and return a [`Verdict`]. Detectors are pure with respect to program
//! state, may perform blocking I/O, and never let a fault escape their
//! boundary: internal faults collapse to the no-signal verdict, which is
//! distinct from an affirmative "not protected" finding.
//!
//! Optional collaborators (the archive, PDF and SQLite parsers) are compiled
//! in via cargo features and switched at runtime through [`Capabilities`],
//! so tests can simulate an absent collaborator deterministically.

use crate::core::{FormatTag, Verdict};
use std::path::Path;

mod archive;
mod mail;
mod odf;
mod office;
mod pdf;
mod sqlite;

/// Availability of the optional format-parsing collaborators.
///
/// Defaults reflect the compiled feature set; clearing a flag degrades the
/// corresponding detectors to permanent no-signal.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub archive: bool,
    pub pdf: bool,
    pub sqlite: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities {
            archive: cfg!(feature = "parsers-archive"),
            pdf: cfg!(feature = "parsers-pdf"),
            sqlite: cfg!(feature = "parsers-sqlite"),
        }
    }
}

impl Capabilities {
    /// All collaborators absent; every gated detector yields no signal.
    pub fn none() -> Self {
        Capabilities {
            archive: false,
            pdf: false,
            sqlite: false,
        }
    }
}

/// Tag-keyed dispatch over the closed detector set.
#[derive(Debug, Clone, Default)]
pub struct DetectorSet {
    caps: Capabilities,
}

impl DetectorSet {
    pub fn new(caps: Capabilities) -> Self {
        DetectorSet { caps }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    /// Run the detector for `tag` against `path`.
    ///
    /// Returns `None` for [`FormatTag::Unknown`], which has no detector and
    /// goes straight to entropy analysis.
    pub fn detect(&self, tag: FormatTag, path: &Path) -> Option<Verdict> {
        let verdict = match tag {
            FormatTag::OfficeOpenXml => office::open_xml(path, &self.caps),
            FormatTag::OfficeLegacy => office::legacy(path),
            FormatTag::Pdf => pdf::inspect(path, &self.caps),
            FormatTag::Zip => archive::zip_archive(path, &self.caps),
            FormatTag::Rar => archive::rar_archive(path),
            FormatTag::SevenZip => archive::seven_zip_archive(path),
            FormatTag::Sqlite => sqlite::inspect(path, &self.caps),
            FormatTag::Pst => mail::pst(path),
            FormatTag::Msg => mail::msg(path),
            FormatTag::LibreOffice => odf::inspect(path, &self.caps),
            FormatTag::Unknown => return None,
        };
        Some(verdict)
    }
}

/// Whether a fault message names an encryption/password condition, as
/// opposed to generic I/O or corruption.
pub(crate) fn fault_signals_encryption(message: &str) -> bool {
    let m = message.to_ascii_lowercase();
    m.contains("password") || m.contains("encrypt")
}

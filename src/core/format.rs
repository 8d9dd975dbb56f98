//! Closed classification of files into supported container families.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Container family a file resolves to.
///
/// The set is fixed and enumerable; detector dispatch is keyed on it.
/// `Unknown` files bypass the detector set and go straight to entropy
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatTag {
    OfficeOpenXml,
    OfficeLegacy,
    Pdf,
    Zip,
    Rar,
    SevenZip,
    Sqlite,
    Pst,
    Msg,
    LibreOffice,
    Unknown,
}

static EXTENSION_TABLE: Lazy<HashMap<&'static str, FormatTag>> = Lazy::new(|| {
    use FormatTag::*;
    HashMap::from([
        ("docx", OfficeOpenXml),
        ("xlsx", OfficeOpenXml),
        ("pptx", OfficeOpenXml),
        ("doc", OfficeLegacy),
        ("xls", OfficeLegacy),
        ("ppt", OfficeLegacy),
        ("pdf", Pdf),
        ("zip", Zip),
        ("rar", Rar),
        ("7z", SevenZip),
        ("sqlite", Sqlite),
        ("db", Sqlite),
        ("pst", Pst),
        ("msg", Msg),
        ("ods", LibreOffice),
        ("odt", LibreOffice),
        ("odp", LibreOffice),
    ])
});

impl FormatTag {
    /// Look up a tag from a file extension (without the leading dot).
    /// Case-insensitive.
    pub fn from_extension(ext: &str) -> Option<FormatTag> {
        EXTENSION_TABLE.get(ext.to_ascii_lowercase().as_str()).copied()
    }

    /// Look up a tag from the extension of a path.
    pub fn from_path(path: &Path) -> Option<FormatTag> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Map a media type reported by the content classifier onto the tag set.
    pub fn from_media_type(mime: &str) -> Option<FormatTag> {
        use FormatTag::*;
        let tag = match mime {
            "application/pdf" => Pdf,
            "application/zip" => Zip,
            "application/vnd.rar" | "application/x-rar-compressed" => Rar,
            "application/x-7z-compressed" => SevenZip,
            "application/vnd.sqlite3" | "application/x-sqlite3" => Sqlite,
            "application/vnd.ms-outlook" => Msg,
            "application/msword" => OfficeLegacy,
            "application/vnd.ms-excel" => OfficeLegacy,
            "application/vnd.ms-powerpoint" => OfficeLegacy,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                OfficeOpenXml
            }
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => OfficeOpenXml,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                OfficeOpenXml
            }
            "application/vnd.oasis.opendocument.text" => LibreOffice,
            "application/vnd.oasis.opendocument.spreadsheet" => LibreOffice,
            "application/vnd.oasis.opendocument.presentation" => LibreOffice,
            _ => return None,
        };
        Some(tag)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, FormatTag::Unknown)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatTag::OfficeOpenXml => "office-openxml",
            FormatTag::OfficeLegacy => "office-legacy",
            FormatTag::Pdf => "pdf",
            FormatTag::Zip => "zip",
            FormatTag::Rar => "rar",
            FormatTag::SevenZip => "7z",
            FormatTag::Sqlite => "sqlite",
            FormatTag::Pst => "pst",
            FormatTag::Msg => "msg",
            FormatTag::LibreOffice => "libreoffice",
            FormatTag::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_lookup() {
        assert_eq!(FormatTag::from_extension("docx"), Some(FormatTag::OfficeOpenXml));
        assert_eq!(FormatTag::from_extension("xls"), Some(FormatTag::OfficeLegacy));
        assert_eq!(FormatTag::from_extension("7z"), Some(FormatTag::SevenZip));
        assert_eq!(FormatTag::from_extension("db"), Some(FormatTag::Sqlite));
        assert_eq!(FormatTag::from_extension("exe"), None);
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(FormatTag::from_extension("DOCX"), Some(FormatTag::OfficeOpenXml));
        assert_eq!(
            FormatTag::from_path(&PathBuf::from("report.PDF")),
            Some(FormatTag::Pdf)
        );
    }

    #[test]
    fn test_media_type_lookup() {
        assert_eq!(FormatTag::from_media_type("application/pdf"), Some(FormatTag::Pdf));
        assert_eq!(
            FormatTag::from_media_type("application/vnd.oasis.opendocument.text"),
            Some(FormatTag::LibreOffice)
        );
        assert_eq!(FormatTag::from_media_type("application/octet-stream"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FormatTag::SevenZip.to_string(), "7z");
        assert_eq!(FormatTag::Unknown.to_string(), "unknown");
    }
}

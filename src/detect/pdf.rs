//! PDF detector: encryption dictionary plus a page-access probe.

use crate::core::Verdict;
use crate::detect::Capabilities;
use std::path::Path;

pub(crate) fn inspect(path: &Path, caps: &Capabilities) -> Verdict {
    if !caps.pdf {
        return Verdict::NO_SIGNAL;
    }
    imp::inspect(path)
}

#[cfg(feature = "parsers-pdf")]
mod imp {
    use super::*;
    use crate::detect::fault_signals_encryption;
    use lopdf::Document;
    use tracing::debug;

    pub(super) fn inspect(path: &Path) -> Verdict {
        match Document::load(path) {
            Ok(doc) => {
                if !doc.trailer.has(b"Encrypt") {
                    return Verdict::new(false, false, 1.0);
                }
                // Encryption dictionary present. If the page tree is still
                // traversable the document is decryptable without a secret;
                // a failing page probe means a password is required.
                if doc.get_pages().is_empty() {
                    Verdict::new(true, true, 1.0)
                } else {
                    Verdict::new(false, true, 0.8)
                }
            }
            Err(err) if fault_signals_encryption(&err.to_string()) => {
                Verdict::new(true, true, 1.0)
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "pdf load failed");
                Verdict::NO_SIGNAL
            }
        }
    }
}

#[cfg(not(feature = "parsers-pdf"))]
mod imp {
    use super::*;

    pub(super) fn inspect(_path: &Path) -> Verdict {
        Verdict::NO_SIGNAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_absent_collaborator_yields_no_signal() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"%PDF-1.4\n").unwrap();
        assert_eq!(inspect(tmp.path(), &Capabilities::none()), Verdict::NO_SIGNAL);
    }

    #[cfg(feature = "parsers-pdf")]
    mod with_pdf_parser {
        use super::*;
        use lopdf::{dictionary, Document, Object};

        #[test]
        fn test_garbage_yields_no_signal() {
            let mut tmp = tempfile::NamedTempFile::new().unwrap();
            tmp.write_all(b"not a pdf document at all").unwrap();
            assert_eq!(inspect(tmp.path(), &Capabilities::default()), Verdict::NO_SIGNAL);
        }

        #[test]
        fn test_unencrypted_document_is_clear() {
            let mut doc = Document::with_version("1.5");
            let pages_id = doc.new_object_id();
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
            });
            doc.objects.insert(
                pages_id,
                Object::Dictionary(dictionary! {
                    "Type" => "Pages",
                    "Kids" => vec![page_id.into()],
                    "Count" => 1,
                }),
            );
            let catalog_id = doc.add_object(dictionary! {
                "Type" => "Catalog",
                "Pages" => pages_id,
            });
            doc.trailer.set("Root", catalog_id);

            let tmp = tempfile::NamedTempFile::new().unwrap();
            doc.save(tmp.path()).unwrap();
            assert_eq!(
                inspect(tmp.path(), &Capabilities::default()),
                Verdict::new(false, false, 1.0)
            );
        }
    }
}

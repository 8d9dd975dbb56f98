//! File-to-format resolution.
//!
//! Extension lookup first; unmatched files fall back to the content
//! classifier. Classification failures resolve to `Unknown`, which bypasses
//! the detector set entirely.

use crate::core::FormatTag;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeResolver;

impl TypeResolver {
    pub fn new() -> Self {
        TypeResolver
    }

    pub fn resolve(&self, path: &Path) -> FormatTag {
        if let Some(tag) = FormatTag::from_path(path) {
            return tag;
        }
        self.classify_content(path)
    }

    fn classify_content(&self, path: &Path) -> FormatTag {
        match infer::get_from_path(path) {
            Ok(Some(kind)) => {
                FormatTag::from_media_type(kind.mime_type()).unwrap_or(FormatTag::Unknown)
            }
            Ok(None) => FormatTag::Unknown,
            Err(err) => {
                debug!(path = %path.display(), %err, "content classification failed");
                FormatTag::Unknown
            }
        }
    }
}

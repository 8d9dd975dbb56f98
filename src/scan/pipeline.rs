//! Per-file detection pipeline.
//!
//! Resolve the format, dispatch the matching detector, arbitrate against the
//! entropy fallback, and wrap the outcome with elapsed-time measurement. No
//! fault from a single file ever escapes `analyze_file`.

use crate::core::{DetectionResult, Verdict};
use crate::detect::{Capabilities, DetectorSet};
use crate::entropy::EntropyAnalyzer;
use crate::error::{LockscanError, Result};
use crate::scan::TypeResolver;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct DetectionPipeline {
    resolver: TypeResolver,
    detectors: DetectorSet,
    entropy: EntropyAnalyzer,
}

impl DetectionPipeline {
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::default())
    }

    pub fn with_capabilities(caps: Capabilities) -> Self {
        DetectionPipeline {
            resolver: TypeResolver::new(),
            detectors: DetectorSet::new(caps),
            entropy: EntropyAnalyzer::default(),
        }
    }

    /// Override the entropy sample size.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.entropy = EntropyAnalyzer::new(sample_size);
        self
    }

    /// Analyze one file. Infallible: faults surface as low or zero
    /// confidence, never as errors.
    pub fn analyze_file(&self, path: &Path) -> DetectionResult {
        let started = Instant::now();

        let is_regular_nonempty = std::fs::metadata(path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false);
        if !is_regular_nonempty {
            return DetectionResult::no_signal(path, started.elapsed());
        }

        let tag = self.resolver.resolve(path);
        debug!(path = %path.display(), %tag, "resolved format");

        let mut verdict =
            match catch_unwind(AssertUnwindSafe(|| self.detectors.detect(tag, path))) {
                Ok(Some(verdict)) => verdict,
                Ok(None) => Verdict::NO_SIGNAL,
                Err(_) => {
                    warn!(path = %path.display(), %tag, "detector fault isolated");
                    Verdict::NO_SIGNAL
                }
            };

        // Confidence arbitration: a weak detector verdict defers to the
        // entropy scorer for the encrypted flag and confidence. The
        // password-protected flag is preserved regardless, since entropy analysis
        // never asserts password protection.
        if verdict.confidence < 0.5 {
            let signal = self.entropy.analyze(path);
            if signal.confidence > verdict.confidence {
                verdict = Verdict::new(
                    verdict.password_protected,
                    signal.encrypted,
                    signal.confidence,
                );
            }
        }

        DetectionResult::new(path, verdict, started.elapsed())
    }

    /// Analyze every regular file under `root`, depth-first in discovery
    /// order.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<DetectionResult>> {
        if !root.is_dir() {
            return Err(LockscanError::InvalidTarget(root.to_path_buf()));
        }
        Ok(walk_files(root)
            .map(|file| self.analyze_file(&file))
            .collect())
    }
}

/// Regular files under `root`, in the filesystem's normal traversal order.
pub(crate) fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}

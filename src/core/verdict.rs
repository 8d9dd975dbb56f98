//! Verdict and result types for the detection pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A detector's judgment for one file.
///
/// `password_protected` means a secret is required to open the file;
/// `encrypted` means content is encoded even if openable without a secret.
/// `confidence` expresses certainty of the verdict, not of the file's
/// protection state, and is always within `[0, 1]`.
///
/// A confidence of exactly 0.0 is the no-signal verdict: the detector could
/// not determine anything. Absence of signal never asserts protection, so
/// both flags are false in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub password_protected: bool,
    pub encrypted: bool,
    pub confidence: f64,
}

impl Verdict {
    /// The "could not determine anything" verdict.
    pub const NO_SIGNAL: Verdict = Verdict {
        password_protected: false,
        encrypted: false,
        confidence: 0.0,
    };

    /// Create a verdict, clamping confidence into `[0, 1]`.
    pub fn new(password_protected: bool, encrypted: bool, confidence: f64) -> Self {
        Verdict {
            password_protected,
            encrypted,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn is_no_signal(&self) -> bool {
        self.confidence == 0.0
    }
}

/// The outcome of analyzing one file.
///
/// Created exactly once per pipeline invocation and never mutated; repeat
/// scans of the same file produce new independent results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub file: PathBuf,
    pub password_protected: bool,
    pub encrypted: bool,
    pub confidence: f64,
    pub duration: Duration,
}

impl DetectionResult {
    pub fn new(file: &Path, verdict: Verdict, duration: Duration) -> Self {
        DetectionResult {
            file: file.to_path_buf(),
            password_protected: verdict.password_protected,
            encrypted: verdict.encrypted,
            confidence: verdict.confidence,
            duration,
        }
    }

    /// The no-signal result for files that could not be analyzed at all.
    pub fn no_signal(file: &Path, duration: Duration) -> Self {
        Self::new(file, Verdict::NO_SIGNAL, duration)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict {
            password_protected: self.password_protected,
            encrypted: self.encrypted,
            confidence: self.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(Verdict::new(true, true, 1.4).confidence, 1.0);
        assert_eq!(Verdict::new(false, false, -0.2).confidence, 0.0);
    }

    #[test]
    fn test_no_signal_invariant() {
        let v = Verdict::NO_SIGNAL;
        assert!(!v.password_protected);
        assert!(!v.encrypted);
        assert_eq!(v.confidence, 0.0);
        assert!(v.is_no_signal());
    }

    #[test]
    fn test_result_json_round_trip() {
        let result = DetectionResult::new(
            Path::new("/tmp/archive.zip"),
            Verdict::new(true, true, 1.0),
            Duration::from_millis(3),
        );
        let json = serde_json::to_string(&result).unwrap();
        let back: DetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}

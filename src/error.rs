//! Error types for the lockscan detection pipeline.
//!
//! Most faults in this crate never surface as errors at all: detectors fold
//! them into no-signal verdicts at their own boundary (see `detect`). The
//! variants here cover the remaining cases: usage-level failures and the
//! internal faults of the hand-rolled container readers in `formats`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lockscan operations.
#[derive(Debug, Error)]
pub enum LockscanError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Container parsing errors from the hand-rolled format readers
    #[error("malformed {format} container: {message}")]
    Malformed {
        format: &'static str,
        message: &'static str,
    },

    /// The scan target is neither a file nor a directory (usage error)
    #[error("not a file or directory: {}", .0.display())]
    InvalidTarget(PathBuf),
}

/// Result type alias for lockscan operations
pub type Result<T> = std::result::Result<T, LockscanError>;

impl LockscanError {
    pub(crate) fn malformed(format: &'static str, message: &'static str) -> Self {
        LockscanError::Malformed { format, message }
    }
}

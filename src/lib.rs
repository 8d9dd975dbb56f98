//! Encryption and password-protection triage for file trees.
//!
//! Answers "can this file be opened without a secret?" across document,
//! archive, database and mailbox formats without attempting decryption.
//! Per-format signature probes produce confidence-weighted verdicts; weak
//! verdicts fall back to statistical entropy analysis. A scheduler applies
//! the pipeline across a directory tree either strictly sequentially or
//! concurrently under a bounded blocking-worker budget.
//!
//! The system is stateless across invocations; repeat scans produce new
//! independent results.

/// Core data types: format tags, verdicts, results
pub mod core;
/// The per-format detector set and its capability registry
pub mod detect;
/// Statistical entropy scoring
pub mod entropy;
pub mod error;
/// Hand-parsed container readers (OLE/CFB, RAR, 7z, PST)
pub mod formats;
pub mod logging;
/// Type resolution, per-file pipeline, directory scheduling
pub mod scan;

pub use crate::core::{DetectionResult, FormatTag, Verdict};
pub use crate::detect::{Capabilities, DetectorSet};
pub use crate::entropy::{EntropyAnalyzer, DEFAULT_SAMPLE_SIZE};
pub use crate::error::{LockscanError, Result};
pub use crate::scan::{
    blocking_worker_budget, DetectionPipeline, ExecutionMode, ScanScheduler, TypeResolver,
};

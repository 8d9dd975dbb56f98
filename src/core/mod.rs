//! Core data types for lockscan.
//!
//! The data model is deliberately small: a closed classification of container
//! families (`FormatTag`), a detector verdict (`Verdict`), and the per-file
//! result record (`DetectionResult`).

pub mod format;
pub mod verdict;

pub use format::FormatTag;
pub use verdict::{DetectionResult, Verdict};

//! Statistical encryption scoring over leading-byte samples.
//!
//! This module provides the entropy fallback of the detection pipeline:
//!
//! - Core Shannon entropy and byte-distribution statistics
//! - The additive scoring model that turns a sample into an
//!   (encrypted, confidence) signal
//!
//! The scorer is a heuristic, not a certainty; callers must treat confidence
//! below 0.5 as weak signal only.

pub mod analyzer;
pub mod core;

pub use analyzer::{EntropyAnalyzer, EntropySignal, DEFAULT_SAMPLE_SIZE};
pub use core::{shannon_entropy, ByteDistribution};

//! File-level encryption scoring over a leading-byte sample.

use crate::entropy::core::ByteDistribution;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Default number of leading bytes sampled from a file.
pub const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Extensions that mark content as almost certainly encrypted.
const ENCRYPTED_EXTENSIONS: &[&str] = &["gpg", "enc", "aes", "crypt", "pgp"];

/// Zip-based document containers are inherently high-entropy when
/// unencrypted; their entropy signal is discounted to avoid false positives.
const HIGH_ENTROPY_CONTAINERS: &[&str] = &[
    "docx", "xlsx", "pptx", "ods", "odt", "odp", "odg", "odf", "odm",
];

/// Entropy-based encryption likelihood for one file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropySignal {
    pub encrypted: bool,
    pub confidence: f64,
}

impl EntropySignal {
    const NONE: EntropySignal = EntropySignal {
        encrypted: false,
        confidence: 0.0,
    };
}

/// Statistical scorer over a byte-frequency model of a file's leading bytes.
///
/// This never asserts password protection, only encryption likelihood.
#[derive(Debug, Clone, Copy)]
pub struct EntropyAnalyzer {
    sample_size: usize,
}

impl Default for EntropyAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl EntropyAnalyzer {
    pub fn new(sample_size: usize) -> Self {
        Self {
            sample_size: sample_size.max(1),
        }
    }

    /// Score a file. Unreadable files and empty samples yield no signal.
    pub fn analyze(&self, path: &Path) -> EntropySignal {
        let mut sample = vec![0u8; self.sample_size];
        let n = match File::open(path).and_then(|mut f| read_up_to(&mut f, &mut sample)) {
            Ok(n) => n,
            Err(err) => {
                debug!(path = %path.display(), %err, "entropy sample unreadable");
                return EntropySignal::NONE;
            }
        };
        if n == 0 {
            return EntropySignal::NONE;
        }

        let score = score_sample(&sample[..n], extension_of(path).as_deref());
        EntropySignal {
            encrypted: score > 0.7,
            confidence: score.clamp(0.0, 1.0),
        }
    }
}

/// Additive encryption score for a sample, before clamping.
///
/// The thresholds and weights are fixed points of the model, not tunables.
pub fn score_sample(data: &[u8], extension: Option<&str>) -> f64 {
    let dist = ByteDistribution::from_bytes(data);
    let entropy = dist.entropy();

    let mut score = 0.0;
    if entropy > 7.8 {
        score += 0.7;
    } else if entropy > 7.5 {
        score += 0.5;
    } else if entropy > 7.2 {
        score += 0.3;
    }

    if dist.skewness().abs() < 0.3 {
        score += 0.2;
    }
    if dist.null_byte_ratio() < 0.01 {
        score += 0.1;
    }
    if dist.ascii_ratio() < 0.4 {
        score += 0.1;
    }
    if dist.high_byte_ratio() > 0.3 {
        score += 0.1;
    }

    if let Some(ext) = extension {
        if HIGH_ENTROPY_CONTAINERS.contains(&ext) && entropy > 7.2 {
            score -= 0.2;
        }
        if ENCRYPTED_EXTENSIONS.contains(&ext) {
            score += 0.2;
        }
    }

    score
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn read_up_to(f: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = f.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

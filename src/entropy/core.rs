//! Core entropy and byte-distribution primitives.

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 represents no randomness (e.g., all bytes are the same)
/// - 8.0 represents maximum randomness (uniform distribution)
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut histogram = [0usize; 256];
    for &byte in data {
        histogram[byte as usize] += 1;
    }

    let len = data.len() as f64;
    let mut entropy = 0.0;
    for &count in &histogram {
        if count == 0 {
            continue;
        }
        let p = (count as f64) / len;
        entropy -= p * p.log2();
    }

    entropy
}

/// Frequency histogram of a byte sample with the distribution statistics the
/// encryption scorer consumes.
#[derive(Debug, Clone)]
pub struct ByteDistribution {
    counts: [u32; 256],
    total: usize,
}

impl ByteDistribution {
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u32; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self {
            counts,
            total: data.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Shannon entropy of the sample.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let len = self.total as f64;
        let mut entropy = 0.0;
        for &count in &self.counts {
            if count == 0 {
                continue;
            }
            let p = (count as f64) / len;
            entropy -= p * p.log2();
        }
        entropy
    }

    /// Skewness of the 256-bucket frequency histogram.
    ///
    /// Uniformly distributed samples (encrypted or compressed data) have
    /// near-zero skew; structured data concentrates mass in few buckets and
    /// skews heavily.
    pub fn skewness(&self) -> f64 {
        let mean = self.counts.iter().map(|&c| c as f64).sum::<f64>() / 256.0;
        let variance = self
            .counts
            .iter()
            .map(|&c| {
                let d = c as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / 256.0;
        let sigma = variance.sqrt() + 1e-8;
        self.counts
            .iter()
            .map(|&c| {
                let z = (c as f64 - mean) / sigma;
                z * z * z
            })
            .sum::<f64>()
            / 256.0
    }

    /// Fraction of 0x00 bytes in the sample.
    pub fn null_byte_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts[0] as f64 / self.total as f64
    }

    /// Fraction of printable ASCII bytes (0x20..=0x7E) in the sample.
    pub fn ascii_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let printable: u64 = self.counts[0x20..=0x7E].iter().map(|&c| c as u64).sum();
        printable as f64 / self.total as f64
    }

    /// Fraction of bytes above 0x7F in the sample.
    pub fn high_byte_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let high: u64 = self.counts[0x80..].iter().map(|&c| c as u64).sum();
        high as f64 / self.total as f64
    }
}

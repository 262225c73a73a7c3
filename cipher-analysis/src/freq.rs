//! Letter-frequency model over the fixed alphabet

use crate::alphabet::{self, ALPHABET_LEN};

/// Italian letter frequencies used as the fixed reference language.
/// Letters foreign to the Italian alphabet (J, K, W, X, Y) carry a small
/// positive floor so chi-square scoring never divides by zero.
const ITALIAN_FREQUENCIES: [f64; 26] = [
    0.117, 0.009, 0.045, 0.037, 0.117, 0.011, 0.016, 0.012,
    0.112, 0.001, 0.002, 0.065, 0.025, 0.068, 0.098, 0.030,
    0.005, 0.063, 0.049, 0.056, 0.030, 0.021, 0.001, 0.001,
    0.001, 0.011,
];

/// The reference-language distribution, normalized to sum 1.
pub fn italian_frequencies() -> [f64; 26] {
    let sum: f64 = ITALIAN_FREQUENCIES.iter().sum();
    let mut rel = ITALIAN_FREQUENCIES;
    for v in rel.iter_mut() {
        *v /= sum;
    }
    rel
}

/// Observed letter frequencies of a normalized text: raw counts, relative
/// frequencies and the total symbol count that produced them.
///
/// `rel[i] = counts[i] / total` when `total > 0`; an empty source yields an
/// all-zero relative vector with `total = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyVector {
    pub counts: [u32; 26],
    pub rel: [f64; 26],
    pub total: u32,
}

impl FrequencyVector {
    /// Counts occurrences of each alphabet index and normalizes by length.
    /// No failure mode; every element must be a valid index in `[0, 26)`.
    pub fn from_indices(indices: &[u8]) -> Self {
        let mut counts = [0u32; 26];
        for &i in indices {
            counts[i as usize] += 1;
        }

        let total = indices.len() as u32;
        let mut rel = [0.0f64; 26];
        if total > 0 {
            for i in 0..ALPHABET_LEN {
                rel[i] = counts[i] as f64 / total as f64;
            }
        }

        Self { counts, rel, total }
    }

    /// Normalizes raw text first, then counts.
    pub fn from_text(raw: &str) -> Self {
        Self::from_indices(&alphabet::normalize(raw))
    }
}

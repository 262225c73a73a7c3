//! Modular shift (Caesar) cipher and shift-recovery strategies

use crate::alphabet::ALPHABET_LEN;
use crate::freq::{italian_frequencies, FrequencyVector};

/// Reduces any shift into `[0, 26)`, accepting negative and out-of-range
/// values.
pub fn reduce_shift(k: i64) -> u8 {
    (((k % 26) + 26) % 26) as u8
}

/// Applies `(index + k) mod 26` elementwise.
pub fn encode(indices: &[u8], k: i64) -> Vec<u8> {
    let s = reduce_shift(k);
    indices.iter().map(|&i| (i + s) % 26).collect()
}

/// Decoding is encoding with the inverse rotation.
pub fn decode(indices: &[u8], k: i64) -> Vec<u8> {
    encode(indices, -(k % 26))
}

/// Result of a shift estimation: the winning rotation and its score.
/// The score's meaning depends on the strategy (dot product: higher is
/// better; chi-square: lower is better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftGuess {
    pub shift: u8,
    pub score: f64,
}

/// Strategy for recovering the shift from a ciphertext distribution.
///
/// Estimators never fail: an all-zero vector (empty ciphertext) yields an
/// arbitrary shift whose score reflects the emptiness, so callers must
/// check `total` before trusting the result.
pub trait ShiftEstimator {
    fn estimate(&self, cipher: &FrequencyVector) -> ShiftGuess;
}

/// Maximizes the dot product between the backward-rotated ciphertext
/// distribution and a known plaintext distribution. Decrypting by k is
/// equivalent to reversing the rotation the encryption applied, and a
/// correctly aligned distribution maximizes correlation with the
/// reference shape.
pub struct SimilarityEstimator {
    reference: [f64; 26],
}

impl SimilarityEstimator {
    pub fn new(reference: &FrequencyVector) -> Self {
        Self {
            reference: reference.rel,
        }
    }
}

impl ShiftEstimator for SimilarityEstimator {
    fn estimate(&self, cipher: &FrequencyVector) -> ShiftGuess {
        let mut best = ShiftGuess {
            shift: 0,
            score: f64::NEG_INFINITY,
        };

        for k in 0..ALPHABET_LEN {
            let score = dot(&rotated(&cipher.rel, k), &self.reference);
            // strict comparison: ties go to the smallest k
            if score > best.score {
                best = ShiftGuess {
                    shift: k as u8,
                    score,
                };
            }
        }

        best
    }
}

/// Minimizes the chi-square statistic of the backward-rotated ciphertext
/// distribution against a fixed reference-language table. Fallback
/// strategy when no plaintext distribution is available.
pub struct ChiSquareEstimator {
    expected: [f64; 26],
}

impl ChiSquareEstimator {
    /// Scores against the built-in Italian reference table.
    pub fn new() -> Self {
        Self {
            expected: italian_frequencies(),
        }
    }

    /// Scores against a caller-supplied expected distribution.
    pub fn with_expected(expected: [f64; 26]) -> Self {
        Self { expected }
    }
}

impl Default for ChiSquareEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftEstimator for ChiSquareEstimator {
    fn estimate(&self, cipher: &FrequencyVector) -> ShiftGuess {
        let mut best = ShiftGuess {
            shift: 0,
            score: f64::INFINITY,
        };

        for k in 0..ALPHABET_LEN {
            let score = chi_square(&rotated(&cipher.rel, k), &self.expected);
            if score < best.score {
                best = ShiftGuess {
                    shift: k as u8,
                    score,
                };
            }
        }

        best
    }
}

/// Picks the strategy by reference presence: similarity against a known
/// plaintext distribution when one exists, chi-square against the Italian
/// table otherwise.
pub fn estimate_shift(cipher: &FrequencyVector, reference: Option<&FrequencyVector>) -> ShiftGuess {
    match reference {
        Some(reference) => SimilarityEstimator::new(reference).estimate(cipher),
        None => ChiSquareEstimator::new().estimate(cipher),
    }
}

/// Rotates a distribution backward by k positions:
/// `rotated[i] = rel[(i + k) mod 26]`.
fn rotated(rel: &[f64; 26], k: usize) -> [f64; 26] {
    let mut out = [0.0f64; 26];
    for i in 0..ALPHABET_LEN {
        out[i] = rel[(i + k) % ALPHABET_LEN];
    }
    out
}

fn dot(a: &[f64; 26], b: &[f64; 26]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn chi_square(observed: &[f64; 26], expected: &[f64; 26]) -> f64 {
    observed
        .iter()
        .zip(expected.iter())
        .map(|(o, e)| {
            let e = e.max(1e-12);
            (o - e) * (o - e) / e
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{normalize, to_text};

    const ITALIAN_SAMPLE: &str = "Nel mezzo del cammin di nostra vita mi ritrovai \
        per una selva oscura, ché la diritta via era smarrita. Ahi quanto a dir \
        qual era è cosa dura esta selva selvaggia e aspra e forte che nel \
        pensier rinova la paura!";

    #[test]
    fn shift_reduction_accepts_any_integer() {
        assert_eq!(reduce_shift(0), 0);
        assert_eq!(reduce_shift(3), 3);
        assert_eq!(reduce_shift(26), 0);
        assert_eq!(reduce_shift(27), 1);
        assert_eq!(reduce_shift(-1), 25);
        assert_eq!(reduce_shift(-27), 25);
    }

    #[test]
    fn known_encoding() {
        let plain = normalize("ATTACKATDAWN");
        assert_eq!(to_text(&encode(&plain, 3)), "DWWDFNDWGDZQ");
    }

    #[test]
    fn decode_inverts_encode_for_every_shift() {
        let plain = normalize("Così parlò Zarathustra sul far del mattino");
        for k in -30i64..56 {
            assert_eq!(decode(&encode(&plain, k), k), plain);
        }
    }

    #[test]
    fn encoding_composes_additively() {
        let plain = normalize("COMPOSITIONLAW");
        for k1 in 0i64..26 {
            for k2 in [0i64, 1, 7, 25] {
                assert_eq!(
                    encode(&encode(&plain, k1), k2),
                    encode(&plain, (k1 + k2) % 26)
                );
            }
        }
    }

    #[test]
    fn similarity_recovers_shift_from_own_distribution() {
        let plain = normalize("ATTACKATDAWN");
        let cipher = encode(&plain, 3);
        let reference = FrequencyVector::from_indices(&plain);
        let observed = FrequencyVector::from_indices(&cipher);

        let guess = SimilarityEstimator::new(&reference).estimate(&observed);
        assert_eq!(guess.shift, 3);
    }

    #[test]
    fn similarity_recovers_every_shift() {
        let plain = normalize(ITALIAN_SAMPLE);
        let reference = FrequencyVector::from_indices(&plain);
        for k in 0i64..26 {
            let observed = FrequencyVector::from_indices(&encode(&plain, k));
            let guess = SimilarityEstimator::new(&reference).estimate(&observed);
            assert_eq!(guess.shift as i64, k);
        }
    }

    #[test]
    fn chi_square_recovers_shift_without_reference() {
        let plain = normalize(ITALIAN_SAMPLE);
        for k in [0i64, 3, 11, 19, 25] {
            let observed = FrequencyVector::from_indices(&encode(&plain, k));
            let guess = ChiSquareEstimator::new().estimate(&observed);
            assert_eq!(guess.shift as i64, k);
        }
    }

    #[test]
    fn strategy_selection_follows_reference_presence() {
        let plain = normalize(ITALIAN_SAMPLE);
        let cipher = encode(&plain, 7);
        let observed = FrequencyVector::from_indices(&cipher);
        let reference = FrequencyVector::from_indices(&plain);

        assert_eq!(estimate_shift(&observed, Some(&reference)).shift, 7);
        assert_eq!(estimate_shift(&observed, None).shift, 7);
    }

    #[test]
    fn empty_ciphertext_yields_a_guess_without_panicking() {
        let observed = FrequencyVector::from_indices(&[]);
        let guess = estimate_shift(&observed, None);
        assert!((guess.shift as usize) < ALPHABET_LEN);
    }
}

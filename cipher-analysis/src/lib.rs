//! # Cipher Analysis Library
//!
//! Classical-cipher cryptanalysis over a fixed 26-letter alphabet:
//! letter-frequency modeling, a modular shift (Caesar) cipher with two
//! shift-recovery strategies, and a toy RSA primitive with a
//! known-ciphertext frequency-substitution attack.
//!
//! ## Components
//!
//! - **alphabet** - the fixed A-Z alphabet, index conversions and text
//!   normalization (case folding, diacritic stripping, filtering)
//! - **freq** - frequency vectors and the Italian reference table
//! - **shift** - Caesar encode/decode and the similarity / chi-square
//!   shift estimators
//! - **modmath** - Euclid, Bezout coefficients, modular inverse,
//!   square-and-multiply exponentiation
//! - **rsa** - toy RSA key derivation and per-symbol block en/decryption
//! - **attack** - plaintext recovery by frequency rank matching, without
//!   the private exponent
//!
//! ## Usage
//!
//! ```rust
//! use cipher_analysis::{alphabet, shift, FrequencyVector};
//!
//! let plain = alphabet::normalize("Attack at dawn!");
//! let cipher = shift::encode(&plain, 3);
//!
//! let observed = FrequencyVector::from_indices(&cipher);
//! let reference = FrequencyVector::from_indices(&plain);
//! let guess = shift::estimate_shift(&observed, Some(&reference));
//!
//! assert_eq!(guess.shift, 3);
//! assert_eq!(shift::decode(&cipher, guess.shift as i64), plain);
//! ```
//!
//! Everything here is a small-modulus educational toy: no secure primes,
//! no secure randomness, no padding. Never use it to protect real data.

// Public modules
pub mod alphabet;
pub mod attack;
pub mod error;
pub mod freq;
pub mod modmath;
pub mod rsa;
pub mod shift;

// Re-exports for easy access
pub use error::{AnalysisError, Result};
pub use freq::FrequencyVector;
pub use rsa::RsaKey;
pub use shift::{
    estimate_shift, ChiSquareEstimator, ShiftEstimator, ShiftGuess, SimilarityEstimator,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

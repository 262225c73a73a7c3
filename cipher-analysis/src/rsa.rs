//! Toy RSA engine: key derivation from two small primes and per-symbol
//! block encryption. Textbook RSA over machine words, for classroom use
//! only — no padding, no secure primes, no defense against chosen
//! ciphertexts.

use crate::alphabet::ALPHABET_LEN;
use crate::error::{AnalysisError, Result};
use crate::modmath::{mod_inverse, mod_pow};

/// RSA key material derived from `(p, q, e)`.
///
/// `d` is `None` when `e` is not coprime with phi: such a key still
/// reports `n` and `phi` and can encrypt, but not decrypt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    pub p: u64,
    pub q: u64,
    pub e: u64,
    pub n: u64,
    pub phi: u64,
    pub d: Option<u64>,
}

impl RsaKey {
    /// Derives `n = p*q`, `phi = (p-1)(q-1)` and the private exponent.
    ///
    /// Fails with `InvalidKey` for degenerate parameters (`p == q`,
    /// a prime below 2, `e == 0`, or a modulus overflowing the machine
    /// word). A non-coprime `e` is not an error: it produces a key with
    /// `d = None`.
    pub fn derive(p: u64, q: u64, e: u64) -> Result<Self> {
        if p == q {
            return Err(AnalysisError::InvalidKey("p and q must be distinct".into()));
        }
        if p < 2 || q < 2 {
            return Err(AnalysisError::InvalidKey(
                "p and q must be primes of at least 2".into(),
            ));
        }
        if e == 0 {
            return Err(AnalysisError::InvalidKey("e must be positive".into()));
        }

        let n = p
            .checked_mul(q)
            .ok_or_else(|| AnalysisError::InvalidKey("p * q exceeds the machine word".into()))?;
        let phi = (p - 1) * (q - 1); // phi < n, cannot overflow once n did not

        let d = mod_inverse(e, phi).ok();

        Ok(Self { p, q, e, n, phi, d })
    }

    /// A key can decrypt only when the private exponent exists.
    pub fn is_valid(&self) -> bool {
        self.d.is_some()
    }
}

/// Encrypts each alphabet index independently: `index^e mod n`.
///
/// No block chaining and no padding; the toy indices (0-25) stay far
/// below `n` for any admissible key. Fails with `EmptyInput` when there
/// is nothing to encrypt.
pub fn encrypt(indices: &[u8], key: &RsaKey) -> Result<Vec<u64>> {
    if indices.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    Ok(indices
        .iter()
        .map(|&i| mod_pow(i as u64, key.e, key.n))
        .collect())
}

/// Decrypts each residue independently: `residue^d mod n`.
///
/// Fails with `KeyInvalid` when the key has no private exponent. A
/// residue that decrypts outside the alphabet yields `None` for that
/// position only; the rest of the sequence still decodes.
pub fn decrypt(residues: &[u64], key: &RsaKey) -> Result<Vec<Option<u8>>> {
    let d = key.d.ok_or(AnalysisError::KeyInvalid)?;
    if residues.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    Ok(residues
        .iter()
        .map(|&r| {
            let m = mod_pow(r, d, key.n);
            if (m as usize) < ALPHABET_LEN {
                Some(m as u8)
            } else {
                None
            }
        })
        .collect())
}

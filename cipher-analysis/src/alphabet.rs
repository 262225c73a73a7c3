//! Fixed A-Z alphabet, index conversions and text normalization

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The fixed alphabet; index 0 is 'A', index 25 is 'Z'.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the alphabet index of a symbol, or `None` for anything outside
/// the uppercase A-Z range. The normalizer filters input before indexing,
/// so `None` never surfaces as an error downstream.
pub fn index_of(symbol: char) -> Option<u8> {
    if symbol.is_ascii_uppercase() {
        Some(symbol as u8 - b'A')
    } else {
        None
    }
}

/// Returns the symbol for an index in `[0, 26)`.
pub fn symbol_of(index: u8) -> char {
    debug_assert!((index as usize) < ALPHABET_LEN);
    (b'A' + index) as char
}

/// Maps arbitrary text to a sequence of alphabet indices.
///
/// Decomposes to NFD, drops combining marks (so accented Latin letters
/// collapse to their base letter), folds to uppercase and discards every
/// remaining character outside A-Z. Total and idempotent; empty input
/// yields an empty sequence.
pub fn normalize(raw: &str) -> Vec<u8> {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| c.to_ascii_uppercase())
        .filter_map(index_of)
        .collect()
}

/// Renders a sequence of alphabet indices back to text.
pub fn to_text(indices: &[u8]) -> String {
    indices.iter().map(|&i| symbol_of(i)).collect()
}

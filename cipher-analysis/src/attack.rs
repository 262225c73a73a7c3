//! Known-ciphertext frequency-substitution attack

use std::collections::HashMap;

use crate::freq::FrequencyVector;

/// Guesses a plaintext index for every residue by matching descending
/// frequency rank order: the i-th most frequent residue is assumed to be
/// the i-th most frequent reference letter.
///
/// Alphabet ranks break ties in alphabet order; residue ranks break ties
/// in first-seen order. A residue with no corresponding rank slot maps to
/// `None`, the explicit unknown marker. This is a heuristic, not a
/// correctness guarantee: accuracy depends entirely on how closely the
/// ciphertext's rank order tracks the reference distribution, and no
/// confidence score is computed.
pub fn attack(residues: &[u64], reference: &FrequencyVector) -> Vec<Option<u8>> {
    // Alphabet indices by descending reference count; the stable sort
    // keeps alphabet order between equal counts.
    let mut by_reference: Vec<u8> = (0u8..26).collect();
    by_reference.sort_by(|&a, &b| reference.counts[b as usize].cmp(&reference.counts[a as usize]));

    // Distinct residues with multiplicities, in first-seen order.
    let mut ranked: Vec<(u64, u32)> = Vec::new();
    let mut seen: HashMap<u64, usize> = HashMap::new();
    for &r in residues {
        match seen.get(&r) {
            Some(&slot) => ranked[slot].1 += 1,
            None => {
                seen.insert(r, ranked.len());
                ranked.push((r, 1));
            }
        }
    }
    // stable again: equal multiplicities stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut mapping: HashMap<u64, Option<u8>> = HashMap::new();
    for (rank, &(residue, _)) in ranked.iter().enumerate() {
        mapping.insert(residue, by_reference.get(rank).copied());
    }

    residues
        .iter()
        .map(|r| mapping.get(r).copied().flatten())
        .collect()
}

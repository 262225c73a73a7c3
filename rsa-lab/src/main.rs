use std::collections::HashSet;

use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;

use cipher_analysis::{alphabet, attack, rsa, FrequencyVector, RsaKey};

/// Toy RSA laboratory
///
/// SECURITY NOTE: this is an educational implementation of textbook RSA
/// over tiny primes, encrypting one letter per block. Never use it to
/// protect real data!
#[derive(Parser)]
#[command(
    name = "rsa-lab",
    about = "Toy RSA key derivation, per-letter encryption and a frequency attack",
    long_about = "
Textbook RSA over machine-word primes, one alphabet letter per block.

Text is normalized to A-Z first; each letter index m in [0,26) encrypts
independently as m^e mod n, and ciphertexts are space-separated decimal
residues. Because the encryption is a fixed substitution on 26 values,
the residue frequencies mirror the plaintext letter frequencies, which
the `attack` subcommand exploits to recover text without d.
"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive n, phi and d from two primes and a public exponent
    Keygen {
        /// First prime
        p: u64,
        /// Second prime, distinct from p
        q: u64,
        /// Public exponent
        e: u64,
    },
    /// Suggest a random key from the demo prime set
    PickPrimes,
    /// Encrypt text letter by letter
    Encrypt {
        p: u64,
        q: u64,
        e: u64,
        /// Plaintext; it is normalized to A-Z before encryption
        text: String,
    },
    /// Decrypt residues with the private exponent
    Decrypt {
        p: u64,
        q: u64,
        e: u64,
        /// Space-separated decimal residues
        #[arg(required = true, num_args = 1..)]
        residues: Vec<u64>,
    },
    /// Recover plaintext from residues by frequency rank matching, without d
    Attack {
        /// Text whose letter distribution ranks the guesses
        #[arg(short, long)]
        reference: String,
        /// Space-separated decimal residues
        #[arg(required = true, num_args = 1..)]
        residues: Vec<u64>,
    },
}

/// Small primes offered by the demo key generator.
const SMALL_PRIMES: [u64; 30] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127,
];

/// Public exponents offered by the demo key generator.
const PUBLIC_EXPONENTS: [u64; 7] = [3, 5, 7, 11, 13, 17, 19];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Keygen { p, q, e } => keygen(p, q, e)?,
        Command::PickPrimes => pick_primes()?,
        Command::Encrypt { p, q, e, text } => encrypt(p, q, e, &text)?,
        Command::Decrypt { p, q, e, residues } => decrypt(p, q, e, &residues)?,
        Command::Attack {
            reference,
            residues,
        } => run_attack(&reference, &residues),
    }

    Ok(())
}

/// Derive and print the full key tuple. A non-coprime exponent is
/// reported as "(no inverse)" rather than failing, matching the key's
/// representable invalid state.
fn keygen(p: u64, q: u64, e: u64) -> Result<(), Box<dyn std::error::Error>> {
    let key = RsaKey::derive(p, q, e)?;

    println!("p   = {}", key.p);
    println!("q   = {}", key.q);
    println!("e   = {}", key.e);
    println!("n   = {}", key.n);
    println!("phi = {}", key.phi);
    match key.d {
        Some(d) => println!("d   = {}", d),
        None => println!("d   = (no inverse: e is not coprime with phi)"),
    }

    Ok(())
}

/// Pick two distinct demo primes and a public exponent at random, then
/// derive the key, exactly like the lab's "pick primes" helper.
fn pick_primes() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();

    let p = *SMALL_PRIMES.choose(&mut rng).expect("prime set is not empty");
    let q = loop {
        let q = *SMALL_PRIMES.choose(&mut rng).expect("prime set is not empty");
        if q != p {
            break q;
        }
    };
    let e = *PUBLIC_EXPONENTS
        .choose(&mut rng)
        .expect("exponent set is not empty");

    keygen(p, q, e)
}

fn encrypt(p: u64, q: u64, e: u64, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let key = RsaKey::derive(p, q, e)?;
    let plain = alphabet::normalize(text);
    let residues = rsa::encrypt(&plain, &key)?;

    println!("{}", join_residues(&residues));
    let distinct: HashSet<u64> = residues.iter().copied().collect();
    println!("N = {}, distinct residues = {}", residues.len(), distinct.len());

    Ok(())
}

fn decrypt(p: u64, q: u64, e: u64, residues: &[u64]) -> Result<(), Box<dyn std::error::Error>> {
    let key = RsaKey::derive(p, q, e)?;
    let decoded = rsa::decrypt(residues, &key)?;
    println!("{}", render_symbols(&decoded));

    Ok(())
}

fn run_attack(reference: &str, residues: &[u64]) {
    let reference = FrequencyVector::from_text(reference);
    if reference.total == 0 {
        eprintln!("warning: reference text has no A-Z symbols, ranking degrades to alphabet order");
    }

    let guessed = attack::attack(residues, &reference);
    println!("{}", render_symbols(&guessed));
}

fn join_residues(residues: &[u64]) -> String {
    residues
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render decoded indices as text, '?' for the unknown marker.
fn render_symbols(symbols: &[Option<u8>]) -> String {
    symbols
        .iter()
        .map(|s| s.map(alphabet::symbol_of).unwrap_or('?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residues_join_space_separated() {
        assert_eq!(join_residues(&[47, 0, 12]), "47 0 12");
        assert_eq!(join_residues(&[]), "");
    }

    #[test]
    fn unknown_symbols_render_as_question_marks() {
        let symbols = vec![Some(5), None, Some(0)];
        assert_eq!(render_symbols(&symbols), "F?A");
    }

    #[test]
    fn demo_prime_set_matches_key_preconditions() {
        for &p in SMALL_PRIMES.iter() {
            assert!(p >= 2);
        }
        // every pair of distinct candidates derives a usable modulus
        let key = RsaKey::derive(SMALL_PRIMES[0], SMALL_PRIMES[29], 7).unwrap();
        assert_eq!(key.n, 3 * 127);
    }
}

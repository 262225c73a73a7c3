use clap::{Parser, Subcommand};

use cipher_analysis::{alphabet, shift, AnalysisError, FrequencyVector};

/// Command-line arguments for the Caesar cipher laboratory.
#[derive(Parser)]
#[command(
    name = "caesar",
    about = "Caesar cipher encryption and frequency-based shift recovery"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt text with the given shift
    #[command(allow_negative_numbers = true)]
    Encrypt {
        /// Input text; it is normalized to A-Z before encryption
        text: String,
        /// Shift amount (any integer, reduced modulo 26)
        shift: i64,
    },
    /// Decrypt text with the given shift
    #[command(allow_negative_numbers = true)]
    Decrypt {
        /// Ciphertext; it is normalized to A-Z before decryption
        text: String,
        /// Shift amount used at encryption time
        shift: i64,
    },
    /// Recover the most likely shift from a ciphertext
    Crack {
        /// Ciphertext to analyze
        ciphertext: String,
        /// Known plaintext whose letter distribution guides the estimate;
        /// without it the shift is scored against Italian frequencies
        #[arg(short, long)]
        reference: Option<String>,
    },
    /// Print the letter-frequency table of a text
    Analyze {
        /// Text to analyze
        text: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encrypt { text, shift: k } => {
            let plain = alphabet::normalize(&text);
            println!("{}", alphabet::to_text(&shift::encode(&plain, k)));
        }
        Command::Decrypt { text, shift: k } => {
            let cipher = alphabet::normalize(&text);
            println!("{}", alphabet::to_text(&shift::decode(&cipher, k)));
        }
        Command::Crack {
            ciphertext,
            reference,
        } => crack(&ciphertext, reference.as_deref())?,
        Command::Analyze { text } => analyze(&text),
    }

    Ok(())
}

/// Estimate the shift, report the method used and print the decrypted guess.
fn crack(ciphertext: &str, reference: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let cipher = alphabet::normalize(ciphertext);
    if cipher.is_empty() {
        return Err(AnalysisError::EmptyInput.into());
    }
    let observed = FrequencyVector::from_indices(&cipher);

    // A reference with no alphabet symbols carries no usable distribution.
    let reference_freq = reference
        .map(FrequencyVector::from_text)
        .filter(|f| f.total > 0);
    if reference.is_some() && reference_freq.is_none() {
        eprintln!("warning: reference text has no A-Z symbols, falling back to Italian frequencies");
    }

    let guess = shift::estimate_shift(&observed, reference_freq.as_ref());
    let method = if reference_freq.is_some() {
        "similarity (dot product) vs reference distribution"
    } else {
        "chi-square vs Italian frequencies"
    };

    println!("Estimated shift: {}", guess.shift);
    println!("Method: {} (score {:.4})", method, guess.score);
    println!(
        "Plaintext guess: {}",
        alphabet::to_text(&shift::decode(&cipher, guess.shift as i64))
    );

    Ok(())
}

/// Print the per-letter count and percentage table of the normalized text.
fn analyze(text: &str) {
    let freq = FrequencyVector::from_text(text);

    println!("N = {}", freq.total);
    for i in 0..26u8 {
        println!(
            "{}  {:>6}  {:>6.2}%",
            alphabet::symbol_of(i),
            freq.counts[i as usize],
            freq.rel[i as usize] * 100.0
        );
    }
}

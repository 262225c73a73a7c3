//! Error types for cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no modular inverse (operand and modulus are not coprime)")]
    NoInverse,

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("key invalid: no private exponent, cannot decrypt")]
    KeyInvalid,

    #[error("empty input: at least one symbol is required")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

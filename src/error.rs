// Error taxonomy
// Typed failures surfaced by key generation, ciphering, and key documents

use num_bigint::ParseBigIntError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced by the crate's fallible operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A ciphertext or key component is not a valid decimal integer literal.
    #[error("malformed decimal integer: {0}")]
    Format(#[from] ParseBigIntError),

    /// A key document is not valid JSON.
    #[error("malformed key document: {0}")]
    Document(#[from] serde_json::Error),

    /// A key document does not hold the expected number of elements.
    #[error("key document holds {actual} elements, expected {expected}")]
    DocumentShape { expected: usize, actual: usize },

    /// Modular inverse taken modulo 1.
    #[error("modular inverse is undefined modulo 1")]
    DegenerateModulus,

    /// The operands of a modular inverse share a factor.
    #[error("no modular inverse: operands are not coprime")]
    NoInverse,

    /// Requested key width cannot be split into two usable prime widths.
    #[error("key size of {total_bits} bits is too small")]
    KeySize { total_bits: u32 },

    /// Decrypted bytes are not valid UTF-8 text.
    #[error("decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

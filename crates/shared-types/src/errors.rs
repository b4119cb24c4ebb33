//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors produced while decoding hex-encoded fixed-width values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Input decodes to the wrong number of bytes.
    #[error("Invalid hex length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// Input contains a non-hex character.
    #[error("Invalid hex digit: {0}")]
    InvalidDigit(String),
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        HexError::InvalidDigit(err.to_string())
    }
}

//! # Error Types
//!
//! Errors raised while converting payloads to and from hex.

use thiserror::Error;

/// Errors from the hex payload codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Hex string has an odd number of digits.
    #[error("Invalid hex: odd number of digits ({len})")]
    OddLength { len: usize },

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("Invalid hex: character {c:?} at position {index}")]
    InvalidCharacter { c: char, index: usize },

    /// Bytes decoded from hex are not valid UTF-8.
    #[error("Payload is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}


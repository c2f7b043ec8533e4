//! Hex payload codec.
//!
//! The rollup server moves every payload as a `0x`-prefixed hex string.
//! These helpers convert between that form, raw bytes, UTF-8 text and
//! 256-bit words.

use primitive_types::U256;

use crate::errors::CodecError;

/// Strip an optional `0x`/`0X` prefix.
fn strip_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Decode a hex string (with or without `0x` prefix) into bytes.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    let digits = strip_prefix(input);
    if digits.len() % 2 != 0 {
        return Err(CodecError::OddLength { len: digits.len() });
    }

    hex::decode(digits).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            CodecError::InvalidCharacter { c, index }
        }
        _ => CodecError::OddLength { len: digits.len() },
    })
}

/// Decode a hex string into UTF-8 text.
pub fn hex_to_string(input: &str) -> Result<String, CodecError> {
    let bytes = hex_to_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(e.to_string()))
}

/// Encode UTF-8 text as a `0x`-prefixed lowercase hex string.
pub fn string_to_hex(input: &str) -> String {
    format!("0x{}", hex::encode(input.as_bytes()))
}

/// Encode a value as a 32-byte big-endian word: `0x` followed by exactly 64
/// lowercase hex digits.
pub fn u256_to_word(value: U256) -> String {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    format!("0x{}", hex::encode(word))
}

//! Word serialization: tape bytes ⇄ big-endian `u32` words ⇄ hex text.
//!
//! Each word is rendered as exactly 8 lowercase hex digits and the words are
//! concatenated with no separator. The result is what the virtual machine's
//! input reader consumes.

use super::layout::WORD_SIZE;
use crate::error::PrepareError;

/// Hex digits per rendered word.
pub const HEX_DIGITS_PER_WORD: usize = WORD_SIZE * 2;

/// Split a word-aligned byte buffer into big-endian words.
///
/// A trailing partial word, which a packed buffer never has, is dropped.
pub fn to_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(WORD_SIZE)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Flatten words back into their big-endian bytes.
pub fn from_words(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Render words as one contiguous lowercase hex string.
///
/// Hex-encoding the big-endian bytes gives each word exactly 8 digits.
pub fn render_words(words: &[u32]) -> String {
    hex::encode(from_words(words))
}

/// Parse a hex tape back into words.
///
/// Surrounding whitespace (such as the newline a CLI prints) is ignored.
/// Upper-case digits are accepted.
pub fn parse_words(text: &str) -> Result<Vec<u32>, PrepareError> {
    let text = text.trim();
    if text.len() % HEX_DIGITS_PER_WORD != 0 {
        return Err(PrepareError::InvalidHex {
            detail: format!(
                "length {} is not a multiple of {HEX_DIGITS_PER_WORD}",
                text.len()
            ),
        });
    }
    let bytes = hex::decode(text).map_err(|e| PrepareError::InvalidHex {
        detail: e.to_string(),
    })?;
    Ok(to_words(&bytes))
}

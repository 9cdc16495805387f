//! Byte layout of the input tape.
//!
//! ```text
//! [4 bytes BE]     doc_len
//! [doc_len bytes]  document content
//! [0-3 zero bytes] alignment padding
//! [4 bytes BE]     text_len
//! [text_len bytes] expected-text content
//! [4 bytes BE]     page selector (0xFFFFFFFF = all pages)
//! [0-3 zero bytes] alignment padding
//! ```
//!
//! The virtual machine reads its input one 32-bit word at a time, so the
//! buffer length is a multiple of [`WORD_SIZE`] after the document and
//! again at the end. Nothing here inspects the document bytes.

use super::words;
use crate::config::PageSelection;
use crate::error::{PrepareError, TapeField};
use tracing::debug;

/// Size in bytes of one tape word.
pub const WORD_SIZE: usize = 4;

/// Zero bytes needed to bring `len` up to the next word boundary.
pub fn padding_for(len: usize) -> usize {
    (WORD_SIZE - len % WORD_SIZE) % WORD_SIZE
}

/// Encode `len` as a 4-byte big-endian length prefix.
///
/// Fails with [`PrepareError::LengthOverflow`] instead of truncating when
/// `len` does not fit in a `u32`.
pub fn length_prefix(field: TapeField, len: usize) -> Result<[u8; 4], PrepareError> {
    u32::try_from(len)
        .map(u32::to_be_bytes)
        .map_err(|_| PrepareError::LengthOverflow { field, len })
}

/// A fully packed, word-aligned tape buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    bytes: Vec<u8>,
    document_padding: usize,
    trailing_padding: usize,
}

impl PackedBuffer {
    /// Raw bytes of the tape.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Zero bytes inserted after the document.
    pub fn document_padding(&self) -> usize {
        self.document_padding
    }

    /// Zero bytes inserted after the page selector.
    pub fn trailing_padding(&self) -> usize {
        self.trailing_padding
    }

    /// The tape as big-endian words, in order.
    pub fn words(&self) -> Vec<u32> {
        words::to_words(&self.bytes)
    }

    /// Render the tape as one lowercase hex string, 8 digits per word.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Pack a document, expected text and page selector into a tape buffer.
///
/// Both length prefixes are validated before the buffer is allocated, so a
/// failure never leaves a partially written tape behind.
pub fn pack(
    document: &[u8],
    expected_text: &[u8],
    page: PageSelection,
) -> Result<PackedBuffer, PrepareError> {
    let doc_prefix = length_prefix(TapeField::Document, document.len())?;
    let text_prefix = length_prefix(TapeField::ExpectedText, expected_text.len())?;

    let document_padding = padding_for(WORD_SIZE + document.len());
    let unpadded = WORD_SIZE
        + document.len()
        + document_padding
        + WORD_SIZE
        + expected_text.len()
        + WORD_SIZE;
    let trailing_padding = padding_for(unpadded);

    let mut bytes = Vec::with_capacity(unpadded + trailing_padding);

    bytes.extend_from_slice(&doc_prefix);
    bytes.extend_from_slice(document);
    bytes.resize(bytes.len() + document_padding, 0);

    bytes.extend_from_slice(&text_prefix);
    bytes.extend_from_slice(expected_text);
    bytes.extend_from_slice(&page.to_word().to_be_bytes());
    bytes.resize(bytes.len() + trailing_padding, 0);

    debug_assert_eq!(bytes.len() % WORD_SIZE, 0);
    debug!(
        "Packed tape: document {} (+{} pad), text {}, page {:#010x}, trailing pad {} → {} bytes",
        document.len(),
        document_padding,
        expected_text.len(),
        page.to_word(),
        trailing_padding,
        bytes.len()
    );

    Ok(PackedBuffer {
        bytes,
        document_padding,
        trailing_padding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_computed_not_looped() {
        assert_eq!(padding_for(0), 0);
        assert_eq!(padding_for(1), 3);
        assert_eq!(padding_for(2), 2);
        assert_eq!(padding_for(3), 1);
        assert_eq!(padding_for(4), 0);
        assert_eq!(padding_for(4097), 3);
    }

    #[test]
    fn length_prefix_is_big_endian() {
        let prefix = length_prefix(TapeField::Document, 0x0102_0304).unwrap();
        assert_eq!(prefix, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn length_prefix_accepts_u32_max() {
        let prefix = length_prefix(TapeField::Document, u32::MAX as usize).unwrap();
        assert_eq!(prefix, [0xFF; 4]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn length_prefix_rejects_overflow() {
        let len = u32::MAX as usize + 1;
        let err = length_prefix(TapeField::ExpectedText, len).unwrap_err();
        match err {
            PrepareError::LengthOverflow { field, len: got } => {
                assert_eq!(field, TapeField::ExpectedText);
                assert_eq!(got, len);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_inputs_pack_to_three_words() {
        let packed = pack(b"", b"", PageSelection::Page(0)).unwrap();
        assert_eq!(packed.as_bytes(), &[0u8; 12]);
        assert_eq!(packed.document_padding(), 0);
        assert_eq!(packed.trailing_padding(), 0);
    }

    #[test]
    fn two_byte_document_is_padded() {
        let packed = pack(b"AB", b"", PageSelection::Page(5)).unwrap();
        assert_eq!(
            packed.as_bytes(),
            &[
                0, 0, 0, 2, b'A', b'B', 0, 0, // doc_len, doc, pad
                0, 0, 0, 0, // text_len
                0, 0, 0, 5, // page
            ]
        );
        assert_eq!(packed.document_padding(), 2);
        assert_eq!(packed.trailing_padding(), 0);
    }

    #[test]
    fn aligned_document_gets_no_padding() {
        let packed = pack(b"%PDF", b"", PageSelection::All).unwrap();
        assert_eq!(packed.document_padding(), 0);
        assert_eq!(packed.len(), 4 + 4 + 4 + 4);
    }

    #[test]
    fn odd_text_gets_trailing_padding() {
        let packed = pack(b"", b"abc", PageSelection::All).unwrap();
        // 4 + 0 + 0 + 4 + 3 + 4 = 15 → 1 byte of trailing padding
        assert_eq!(packed.trailing_padding(), 1);
        assert_eq!(packed.len(), 16);
        assert_eq!(&packed.as_bytes()[11..15], &[0xFF; 4]);
        assert_eq!(packed.as_bytes()[15], 0);
    }

    #[test]
    fn hex_matches_word_rendering() {
        let packed = pack(b"%PDF-1.7", "Grüße".as_bytes(), PageSelection::Page(9)).unwrap();
        let hex = packed.to_hex();
        assert_eq!(hex, words::render_words(&packed.words()));
        assert_eq!(&hex[..8], "00000008");
        assert_eq!(&hex[8..16], "25504446");
    }

    #[test]
    fn length_is_always_word_aligned() {
        for doc_len in 0..9 {
            for text_len in 0..9 {
                let doc = vec![0xAAu8; doc_len];
                let text = vec![b'x'; text_len];
                let packed = pack(&doc, &text, PageSelection::All).unwrap();
                assert_eq!(
                    packed.len() % WORD_SIZE,
                    0,
                    "doc {doc_len} text {text_len}"
                );
                assert_eq!(
                    (WORD_SIZE + doc_len + packed.document_padding()) % WORD_SIZE,
                    0
                );
            }
        }
    }
}

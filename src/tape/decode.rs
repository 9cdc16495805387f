//! Tape decoding: recover the document, expected text and page selector.
//!
//! This walks the layout in [`super::layout`] in reverse. It is stricter
//! than the virtual machine's reader: alignment bytes must be zero and no
//! words may follow the final padding, so a tape that decodes cleanly is
//! exactly one that [`super::layout::pack`] could have produced.

use super::layout::{padding_for, WORD_SIZE};
use super::words;
use crate::config::PageSelection;
use crate::error::{PrepareError, TapeField};
use serde::{Deserialize, Serialize};

/// The three inputs carried by a tape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeInput {
    pub document: Vec<u8>,
    pub expected_text: Vec<u8>,
    pub page: PageSelection,
}

/// Decode a hex tape string.
pub fn decode(hex_tape: &str) -> Result<TapeInput, PrepareError> {
    unpack(&words::parse_words(hex_tape)?)
}

/// Decode a tape given as words.
pub fn unpack(tape_words: &[u32]) -> Result<TapeInput, PrepareError> {
    let bytes = words::from_words(tape_words);
    let mut cursor = Cursor::new(&bytes);

    let doc_len = cursor.read_u32(TapeField::Document)? as usize;
    let document = cursor.take(TapeField::Document, doc_len)?.to_vec();
    cursor.skip_padding(TapeField::Document, padding_for(WORD_SIZE + doc_len))?;

    let text_len = cursor.read_u32(TapeField::ExpectedText)? as usize;
    let expected_text = cursor.take(TapeField::ExpectedText, text_len)?.to_vec();
    let page = PageSelection::from_word(cursor.read_u32(TapeField::PageSelector)?);
    let trailing = padding_for(cursor.pos);
    cursor.skip_padding(TapeField::PageSelector, trailing)?;

    let rest = bytes.len() - cursor.pos;
    if rest > 0 {
        return Err(PrepareError::TrailingWords {
            count: rest / WORD_SIZE,
        });
    }

    Ok(TapeInput {
        document,
        expected_text,
        page,
    })
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, field: TapeField, n: usize) -> Result<&'a [u8], PrepareError> {
        if n > self.remaining() {
            return Err(PrepareError::Truncated {
                field,
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u32(&mut self, field: TapeField) -> Result<u32, PrepareError> {
        let b = self.take(field, WORD_SIZE)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn skip_padding(&mut self, field: TapeField, n: usize) -> Result<(), PrepareError> {
        let start = self.pos;
        let pad = self.take(field, n)?;
        if let Some(i) = pad.iter().position(|&b| b != 0) {
            return Err(PrepareError::NonZeroPadding { offset: start + i });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_concrete_page() {
        let input = decode("0000000241420000000000000000000000000005").unwrap();
        assert_eq!(input.document, b"AB");
        assert!(input.expected_text.is_empty());
        assert_eq!(input.page, PageSelection::Page(5));
    }

    #[test]
    fn decodes_all_pages_with_text() {
        // doc "%PDF", text "hi", page all, 2 bytes trailing padding
        let input = decode("0000000425504446000000026869ffffffff0000").unwrap();
        assert_eq!(input.document, b"%PDF");
        assert_eq!(input.expected_text, b"hi");
        assert_eq!(input.page, PageSelection::All);
    }

    #[test]
    fn empty_tape_is_truncated() {
        let err = decode("").unwrap_err();
        assert!(matches!(
            err,
            PrepareError::Truncated {
                field: TapeField::Document,
                ..
            }
        ));
    }

    #[test]
    fn document_longer_than_tape_is_truncated() {
        let err = decode("0000001041420000").unwrap_err();
        match err {
            PrepareError::Truncated {
                field,
                needed,
                available,
            } => {
                assert_eq!(field, TapeField::Document);
                assert_eq!(needed, 16);
                assert_eq!(available, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_page_selector_is_truncated() {
        let err = decode("0000000000000000").unwrap_err();
        assert!(matches!(
            err,
            PrepareError::Truncated {
                field: TapeField::PageSelector,
                ..
            }
        ));
    }

    #[test]
    fn non_zero_padding_is_rejected() {
        let err = decode("0000000241420100000000000000000000000005").unwrap_err();
        assert!(matches!(err, PrepareError::NonZeroPadding { offset: 6 }));
    }

    #[test]
    fn trailing_words_are_rejected() {
        let err = decode("000000000000000000000000deadbeef").unwrap_err();
        assert!(matches!(err, PrepareError::TrailingWords { count: 1 }));
    }
}

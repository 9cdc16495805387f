//! Result types returned by the prepare entry points.

use crate::config::PageSelection;
use crate::tape::decode::TapeInput;
use crate::tape::input::has_pdf_header;
use crate::tape::layout::{PackedBuffer, WORD_SIZE};
use crate::tape::words::HEX_DIGITS_PER_WORD;
use serde::{Deserialize, Serialize};

/// A prepared tape plus a summary of how it was laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedInput {
    /// The tape as one lowercase hex string with no whitespace.
    pub hex: String,
    pub stats: TapeStats,
}

/// Layout statistics for a packed tape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeStats {
    pub document_len: usize,
    pub expected_text_len: usize,
    /// Zero bytes after the document.
    pub document_padding: usize,
    /// Zero bytes after the page selector.
    pub trailing_padding: usize,
    /// The raw page-selector word.
    pub page_word: u32,
    pub total_bytes: usize,
    pub word_count: usize,
    pub hex_len: usize,
    pub has_pdf_header: bool,
}

impl TapeStats {
    pub(crate) fn from_packed(
        document: &[u8],
        expected_text: &[u8],
        page: PageSelection,
        packed: &PackedBuffer,
    ) -> Self {
        let word_count = packed.len() / WORD_SIZE;
        Self {
            document_len: document.len(),
            expected_text_len: expected_text.len(),
            document_padding: packed.document_padding(),
            trailing_padding: packed.trailing_padding(),
            page_word: page.to_word(),
            total_bytes: packed.len(),
            word_count,
            hex_len: word_count * HEX_DIGITS_PER_WORD,
            has_pdf_header: has_pdf_header(document),
        }
    }
}

/// What [`crate::inspect`] found in an existing tape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeSummary {
    pub document_len: usize,
    pub has_pdf_header: bool,
    /// The expected text, with invalid UTF-8 replaced.
    pub expected_text: String,
    pub expected_text_is_utf8: bool,
    pub page: PageSelection,
    pub word_count: usize,
}

impl TapeSummary {
    pub(crate) fn new(input: &TapeInput, word_count: usize) -> Self {
        Self {
            document_len: input.document.len(),
            has_pdf_header: has_pdf_header(&input.document),
            expected_text: String::from_utf8_lossy(&input.expected_text).into_owned(),
            expected_text_is_utf8: std::str::from_utf8(&input.expected_text).is_ok(),
            page: input.page,
            word_count,
        }
    }
}

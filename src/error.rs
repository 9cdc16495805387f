//! Error types for the zkvm-pdf-input library.
//!
//! Every failure is fatal: packing is all-or-nothing, so a [`PrepareError`]
//! always means no hex tape was produced. Variants fall into three groups:
//!
//! * **Layout** — a field does not fit the 4-byte length prefix. Detected
//!   before a single byte of the buffer is written.
//! * **Input / output** — the collaborator layer could not read the
//!   document or write the tape. The encoder itself never retries.
//! * **Decoding** — an existing tape handed to [`crate::inspect`] is not a
//!   well-formed tape.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which length-prefixed field of the tape an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TapeField {
    /// The document length prefix or document bytes.
    Document,
    /// The expected-text length prefix or text bytes.
    ExpectedText,
    /// The trailing 4-byte page selector.
    PageSelector,
}

impl fmt::Display for TapeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TapeField::Document => f.write_str("document"),
            TapeField::ExpectedText => f.write_str("expected text"),
            TapeField::PageSelector => f.write_str("page selector"),
        }
    }
}

/// All errors returned by the zkvm-pdf-input library.
#[derive(Debug, Error)]
pub enum PrepareError {
    // ── Layout errors ─────────────────────────────────────────────────────
    /// A field length does not fit the 4-byte big-endian length prefix.
    #[error(
        "{field} is {len} bytes, which exceeds the 4-byte length prefix (max {max})",
        max = u32::MAX
    )]
    LengthOverflow { field: TapeField, len: usize },

    /// The document is larger than the configured cap.
    #[error("Document is {len} bytes, larger than the configured maximum of {max} bytes")]
    DocumentTooLarge { len: usize, max: usize },

    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Document not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The document could not be read for any other reason.
    #[error("Failed to read document '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output hex file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Decoding errors ───────────────────────────────────────────────────
    /// The tape text is not a sequence of 8-digit hex words.
    #[error("Invalid hex tape: {detail}")]
    InvalidHex { detail: String },

    /// The tape ended before a field was complete.
    #[error("Tape truncated in {field}: need {needed} bytes, {available} remaining")]
    Truncated {
        field: TapeField,
        needed: usize,
        available: usize,
    },

    /// An alignment padding byte is not zero.
    #[error("Non-zero alignment padding at byte offset {offset}")]
    NonZeroPadding { offset: usize },

    /// Words remain after the final alignment padding.
    #[error("{count} unexpected trailing word(s) after the page selector")]
    TrailingWords { count: usize },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_overflow_display() {
        let e = PrepareError::LengthOverflow {
            field: TapeField::ExpectedText,
            len: 4_294_967_296,
        };
        let msg = e.to_string();
        assert!(msg.contains("expected text"), "got: {msg}");
        assert!(msg.contains("4294967296"), "got: {msg}");
        assert!(msg.contains("4294967295"), "got: {msg}");
    }

    #[test]
    fn truncated_display() {
        let e = PrepareError::Truncated {
            field: TapeField::Document,
            needed: 12,
            available: 3,
        };
        let msg = e.to_string();
        assert_eq!(
            msg,
            "Tape truncated in document: need 12 bytes, 3 remaining"
        );
    }

    #[test]
    fn file_not_found_display() {
        let e = PrepareError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert!(e.to_string().contains("/tmp/missing.pdf"));
    }

    #[test]
    fn tape_field_display() {
        assert_eq!(TapeField::Document.to_string(), "document");
        assert_eq!(TapeField::PageSelector.to_string(), "page selector");
    }
}

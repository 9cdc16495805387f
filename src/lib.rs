//! # zkvm-pdf-input
//!
//! Pack a document, an optional expected-text string and a page selector into
//! the word-aligned hex tape read by a RISC-V zkVM PDF verifier.
//!
//! ## Tape Layout
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
//! The buffer is then read as big-endian 32-bit words, each rendered as 8
//! lowercase hex digits, concatenated with no separator.
//!
//! ## Quick Start
//!
//! ```rust
//! use zkvm_pdf_input::{encode, PageSelection};
//!
//! let hex = encode(b"AB", b"", PageSelection::Page(5))?;
//! assert_eq!(hex, "0000000241420000000000000000000000000005");
//! # Ok::<(), zkvm_pdf_input::PrepareError>(())
//! ```
//!
//! Reading the document from disk:
//!
//! ```rust,no_run
//! use zkvm_pdf_input::{prepare, PrepareConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PrepareConfig::builder().expected_text("Invoice #1234").build()?;
//!     let tape = prepare("signed.pdf", &config).await?;
//!     println!("{}", tape.hex);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `prepare-input` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod prepare;
pub mod tape;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PageSelection, PrepareConfig, PrepareConfigBuilder, ALL_PAGES};
pub use error::{PrepareError, TapeField};
pub use output::{PreparedInput, TapeStats, TapeSummary};
pub use prepare::{encode, encode_bytes, inspect, prepare, prepare_sync, prepare_to_file};
pub use tape::decode::{decode, unpack, TapeInput};
pub use tape::layout::{pack, padding_for, PackedBuffer};

//! Tape preparation entry points.
//!
//! [`encode`] is the pure core: bytes in, hex string out, no I/O. The
//! remaining functions wrap it with the file handling a caller usually
//! needs: reading the document from disk, writing the tape atomically, and
//! decoding an existing tape for inspection.

use crate::config::{PageSelection, PrepareConfig};
use crate::error::PrepareError;
use crate::output::{PreparedInput, TapeStats, TapeSummary};
use crate::tape::{decode, input, layout, words};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Encode a document, expected text and page selector as a hex tape.
///
/// The result is one lowercase hex string, 8 digits per big-endian word,
/// with no separators. `page` accepts a [`PageSelection`], a concrete
/// `u32` page index, or `None::<u32>` for all pages.
///
/// # Errors
/// [`PrepareError::LengthOverflow`] when either input is longer than
/// `u32::MAX` bytes. Nothing is produced in that case.
///
/// # Example
/// ```rust
/// let hex = zkvm_pdf_input::encode(b"AB", b"", 5u32).unwrap();
/// assert_eq!(hex, "0000000241420000000000000000000000000005");
/// ```
pub fn encode(
    document: &[u8],
    expected_text: &[u8],
    page: impl Into<PageSelection>,
) -> Result<String, PrepareError> {
    Ok(layout::pack(document, expected_text, page.into())?.to_hex())
}

/// Encode in-memory bytes with the page and expected text from `config`.
pub fn encode_bytes(
    document: &[u8],
    config: &PrepareConfig,
) -> Result<PreparedInput, PrepareError> {
    if let Some(max) = config.max_document_len {
        if document.len() > max {
            return Err(PrepareError::DocumentTooLarge {
                len: document.len(),
                max,
            });
        }
    }

    let expected_text = config.expected_text.as_bytes();
    let packed = layout::pack(document, expected_text, config.page)?;
    let stats = TapeStats::from_packed(document, expected_text, config.page, &packed);
    let hex = packed.to_hex();
    debug_assert_eq!(hex.len(), stats.hex_len);

    Ok(PreparedInput { hex, stats })
}

/// Read a document from disk and encode it as a hex tape.
///
/// # Errors
/// - File not found, permission denied, or any other read failure
/// - Document larger than `config.max_document_len`
/// - A length that does not fit the 4-byte prefix
pub async fn prepare(
    document_path: impl AsRef<Path>,
    config: &PrepareConfig,
) -> Result<PreparedInput, PrepareError> {
    let start = Instant::now();
    let path = document_path.as_ref();
    info!("Preparing tape for {}", path.display());

    let document = input::read_document(path).await?;
    let prepared = encode_bytes(&document, config)?;

    info!(
        "Tape ready: {} words ({} bytes) in {}ms",
        prepared.stats.word_count,
        prepared.stats.total_bytes,
        start.elapsed().as_millis()
    );
    Ok(prepared)
}

/// Synchronous wrapper around [`prepare`].
///
/// Creates a temporary tokio runtime internally.
pub fn prepare_sync(
    document_path: impl AsRef<Path>,
    config: &PrepareConfig,
) -> Result<PreparedInput, PrepareError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| PrepareError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(prepare(document_path, config))
}

/// Prepare a tape and write it directly to a file.
///
/// Uses atomic write (a uniquely named temp file in the destination
/// directory, persisted over the target), so the destination either holds a
/// complete tape or is left untouched. The temp file is removed on failure.
pub async fn prepare_to_file(
    document_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &PrepareConfig,
) -> Result<TapeStats, PrepareError> {
    let prepared = prepare(document_path, config).await?;
    let path = output_path.as_ref();
    let write_err = |e| PrepareError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tokio::fs::create_dir_all(dir).await.map_err(write_err)?;

    let mut contents = prepared.hex;
    if config.trailing_newline {
        contents.push('\n');
    }

    // Dropping `tmp` on any error path deletes it.
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote tape to {}", path.display());
    Ok(prepared.stats)
}

/// Decode an existing hex tape and summarise what it carries.
pub fn inspect(hex_tape: &str) -> Result<TapeSummary, PrepareError> {
    let tape_words = words::parse_words(hex_tape)?;
    let decoded = decode::unpack(&tape_words)?;
    Ok(TapeSummary::new(&decoded, tape_words.len()))
}

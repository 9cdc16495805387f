//! Input resolution: load the document to be packed into memory.
//!
//! The encoder only ever sees an already-materialised byte slice. This stage
//! turns a path into those bytes and maps I/O failures onto
//! [`PrepareError`] variants the CLI can explain. It never retries.
//!
//! The `%PDF` header is checked only to warn: the verifier decides what a
//! valid document is, not this crate.

use crate::error::PrepareError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Magic bytes at the start of every PDF file.
pub const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// True when `bytes` starts with the PDF header.
pub fn has_pdf_header(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Read a local document.
pub async fn read_document(path: impl AsRef<Path>) -> Result<Vec<u8>, PrepareError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| map_read_error(path, e))?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    if !has_pdf_header(&bytes) {
        warn!(
            "{} does not start with %PDF; packing it anyway",
            path.display()
        );
    }
    Ok(bytes)
}

fn map_read_error(path: &Path, e: std::io::Error) -> PrepareError {
    let path: PathBuf = path.to_path_buf();
    match e.kind() {
        std::io::ErrorKind::NotFound => PrepareError::FileNotFound { path },
        std::io::ErrorKind::PermissionDenied => PrepareError::PermissionDenied { path },
        _ => PrepareError::ReadFailed { path, source: e },
    }
}

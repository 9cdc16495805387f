//! Configuration types for building a zkVM input tape.
//!
//! Everything that shapes a tape beyond the raw document bytes lives in
//! [`PrepareConfig`], built via its [`PrepareConfigBuilder`]. The same
//! config can be reused for many documents and shared across threads.

use crate::error::{PrepareError, TapeField};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Page-selector word meaning "check every page".
pub const ALL_PAGES: u32 = 0xFFFF_FFFF;

/// Which page(s) the verifier should search for the expected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSelection {
    /// Every page (default). Encoded as [`ALL_PAGES`].
    #[default]
    All,
    /// A single zero-based page index.
    Page(u32),
}

impl PageSelection {
    /// The 4-byte word written to the tape.
    pub fn to_word(self) -> u32 {
        match self {
            PageSelection::All => ALL_PAGES,
            PageSelection::Page(n) => n,
        }
    }

    /// Interpret a selector word read back from a tape.
    ///
    /// [`ALL_PAGES`] always decodes to [`PageSelection::All`], so
    /// `Page(0xFFFF_FFFF)` does not survive a round trip as written.
    pub fn from_word(word: u32) -> Self {
        if word == ALL_PAGES {
            PageSelection::All
        } else {
            PageSelection::Page(word)
        }
    }

    /// True when this concrete page index is bit-identical to the sentinel.
    pub fn collides_with_sentinel(self) -> bool {
        matches!(self, PageSelection::Page(ALL_PAGES))
    }
}

impl From<u32> for PageSelection {
    fn from(page: u32) -> Self {
        PageSelection::Page(page)
    }
}

impl From<Option<u32>> for PageSelection {
    fn from(page: Option<u32>) -> Self {
        page.map_or(PageSelection::All, PageSelection::Page)
    }
}

/// Configuration for preparing a tape from a document on disk.
///
/// # Example
/// ```rust
/// use zkvm_pdf_input::{PageSelection, PrepareConfig};
///
/// let config = PrepareConfig::builder()
///     .expected_text("Total: 42.00 EUR")
///     .page(PageSelection::Page(0))
///     .build()
///     .unwrap();
/// assert_eq!(config.page.to_word(), 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Page selector written after the expected text. Default: all pages.
    pub page: PageSelection,

    /// Text the verifier should find in the document. Default: empty.
    ///
    /// Written as its UTF-8 bytes.
    pub expected_text: String,

    /// Reject documents larger than this many bytes. Default: no cap.
    ///
    /// The 4-byte prefix is always enforced; this is an additional, smaller
    /// limit matching what a particular verifier build accepts.
    pub max_document_len: Option<usize>,

    /// Append a newline when the CLI prints the tape. Default: false.
    ///
    /// The library never puts whitespace in the hex string itself.
    pub trailing_newline: bool,
}

impl PrepareConfig {
    /// Create a new builder for `PrepareConfig`.
    pub fn builder() -> PrepareConfigBuilder {
        PrepareConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PrepareConfig`].
#[derive(Debug)]
pub struct PrepareConfigBuilder {
    config: PrepareConfig,
}

impl PrepareConfigBuilder {
    pub fn page(mut self, selection: impl Into<PageSelection>) -> Self {
        self.config.page = selection.into();
        self
    }

    pub fn expected_text(mut self, text: impl Into<String>) -> Self {
        self.config.expected_text = text.into();
        self
    }

    pub fn max_document_len(mut self, max: usize) -> Self {
        self.config.max_document_len = Some(max);
        self
    }

    pub fn trailing_newline(mut self, v: bool) -> Self {
        self.config.trailing_newline = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PrepareConfig, PrepareError> {
        let c = &self.config;
        let text_len = c.expected_text.len();
        if u32::try_from(text_len).is_err() {
            return Err(PrepareError::LengthOverflow {
                field: TapeField::ExpectedText,
                len: text_len,
            });
        }
        if c.max_document_len == Some(0) {
            return Err(PrepareError::InvalidConfig(
                "Maximum document length must be ≥ 1".into(),
            ));
        }
        if c.page.collides_with_sentinel() {
            warn!(
                "Page index {:#010x} is indistinguishable from the all-pages selector",
                ALL_PAGES
            );
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_all_pages() {
        let config = PrepareConfig::default();
        assert_eq!(config.page, PageSelection::All);
        assert_eq!(config.page.to_word(), 0xFFFF_FFFF);
        assert!(config.expected_text.is_empty());
    }

    #[test]
    fn selector_conversions() {
        assert_eq!(PageSelection::from(7u32), PageSelection::Page(7));
        assert_eq!(PageSelection::from(None::<u32>), PageSelection::All);
        assert_eq!(PageSelection::from(Some(0u32)), PageSelection::Page(0));
    }

    #[test]
    fn sentinel_word_decodes_to_all() {
        assert_eq!(PageSelection::from_word(ALL_PAGES), PageSelection::All);
        assert_eq!(PageSelection::from_word(3), PageSelection::Page(3));
        assert!(PageSelection::Page(ALL_PAGES).collides_with_sentinel());
        assert!(!PageSelection::All.collides_with_sentinel());
    }

    #[test]
    fn builder_accepts_sentinel_page() {
        let config = PrepareConfig::builder()
            .page(ALL_PAGES)
            .build()
            .expect("sentinel page index is accepted");
        assert_eq!(config.page.to_word(), ALL_PAGES);
    }

    #[test]
    fn builder_rejects_zero_cap() {
        let err = PrepareConfig::builder()
            .max_document_len(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, PrepareError::InvalidConfig(_)));
    }

    #[test]
    fn config_serialises() {
        let config = PrepareConfig::builder()
            .expected_text("hello")
            .page(2u32)
            .build()
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"expected_text\":\"hello\""), "got: {json}");
        assert!(json.contains("\"Page\":2"), "got: {json}");
    }
}

//! Result types for scraping output.
//!
//! This module defines the structured output of a pipeline run: the ordered
//! text blocks, the deduplicated image references, and the record combining
//! them with the page title and requested URL.

use serde::{Deserialize, Serialize};

/// Title used when the document has no non-empty `<title>` element.
pub const TITLE_PLACEHOLDER: &str = "Untitled page";

/// Classification of an extracted text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Heading with its level (1..=6).
    Heading(u8),
    /// Paragraph that passed the noise-length filter.
    Paragraph,
    /// List item, bullet-prefixed at extraction time.
    ListItem,
}

/// A single extracted text block.
///
/// The text is trimmed and non-empty. Paragraph text is additionally longer
/// than the configured noise threshold, and list-item text carries a leading
/// bullet marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// What kind of element the text came from.
    pub kind: BlockKind,
    /// Trimmed element text.
    pub text: String,
}

/// An image reference with a resolved absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute image URL.
    pub src: String,
    /// Alt text, or a placeholder when the element had none.
    pub alt: String,
}

/// Result of scraping a single page.
///
/// Constructed once per successful pipeline run and never mutated
/// afterward. Within `images` no two references share a `src`; the first
/// occurrence determines position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// Page title, or [`TITLE_PLACEHOLDER`] when the document has none.
    pub title: String,

    /// The URL the scrape was requested for.
    pub source_url: String,

    /// Extracted text blocks, in extraction-pass order.
    pub text_blocks: Vec<TextBlock>,

    /// Image references, unique by `src`, in first-seen order.
    pub images: Vec<ImageRef>,
}

impl ScrapeResult {
    /// Combine the pipeline stage outputs into the final record.
    ///
    /// Pure assembly with no failure modes of its own; applies the title
    /// placeholder when the extractor found none.
    #[must_use]
    pub fn assemble(
        title: Option<String>,
        source_url: &str,
        text_blocks: Vec<TextBlock>,
        images: Vec<ImageRef>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            source_url: source_url.to_string(),
            text_blocks,
            images,
        }
    }

    /// All block text joined with a blank-line separator.
    ///
    /// This is the plain-text form a caller copies to the clipboard.
    #[must_use]
    pub fn text_joined(&self) -> String {
        self.text_blocks
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// All image URLs joined with newlines, in result order.
    #[must_use]
    pub fn image_links_joined(&self) -> String {
        self.images
            .iter()
            .map(|image| image.src.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

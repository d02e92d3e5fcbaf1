//! Content extraction passes.
//!
//! The extractor walks a sanitized tree in a fixed stage order: headings,
//! then paragraphs, then list items, then images. Each pass visits its
//! elements in document order, so block interleaving follows pass order
//! rather than true reading order when element types alternate in the
//! source page.

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::result::{BlockKind, TextBlock};

/// Alt text used when an image element has no usable `alt` attribute.
pub const ALT_PLACEHOLDER: &str = "No description";

/// Marker prepended to list-item text.
const BULLET_PREFIX: &str = "\u{2022} ";

/// All heading levels, matched in one document-order scan.
const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// Image source attributes, in resolution order: the direct source first,
/// then the common lazy-load carriers.
const IMAGE_SRC_ATTRS: [&str; 3] = ["src", "data-src", "data-lazy-src"];

/// An image reference before URL normalization and deduplication.
///
/// Produced per encountered `img` element and consumed immediately by the
/// normalization stage.
#[derive(Debug, Clone)]
pub(crate) struct ImageCandidate {
    /// Raw attribute value, possibly relative.
    pub raw_src: String,
    /// Alt text, placeholder-filled when the element had none.
    pub alt: String,
}

/// Raw extractor output, prior to normalization and assembly.
#[derive(Debug)]
pub(crate) struct Extraction {
    pub title: Option<String>,
    pub blocks: Vec<TextBlock>,
    pub images: Vec<ImageCandidate>,
}

/// Run the extraction passes over a sanitized document.
///
/// Pure with respect to the tree: repeated runs over the same document
/// yield identical output.
pub(crate) fn extract_content(doc: &Document, options: &Options) -> Extraction {
    let title = extract_title(doc);

    let mut blocks = Vec::new();
    collect_headings(doc, &mut blocks);
    collect_paragraphs(doc, options.min_paragraph_len, &mut blocks);
    collect_list_items(doc, &mut blocks);

    let images = collect_image_candidates(doc);

    tracing::debug!(
        blocks = blocks.len(),
        image_candidates = images.len(),
        has_title = title.is_some(),
        "extraction passes complete"
    );

    Extraction {
        title,
        blocks,
        images,
    }
}

/// Text of the document's `<title>` element, or `None` when missing or
/// empty.
fn extract_title(doc: &Document) -> Option<String> {
    let title = doc.select("title").text();
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Pass 1: headings of every level, in document order.
fn collect_headings(doc: &Document, blocks: &mut Vec<TextBlock>) {
    for heading in dom::select_each(doc, HEADING_SELECTOR) {
        let Some(level) = heading_level(&heading) else {
            continue;
        };

        let text = dom::text(&heading);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            blocks.push(TextBlock {
                kind: BlockKind::Heading(level),
                text: trimmed.to_string(),
            });
        }
    }
}

/// Pass 2: paragraphs longer than the noise threshold, in document order.
fn collect_paragraphs(doc: &Document, min_len: usize, blocks: &mut Vec<TextBlock>) {
    for paragraph in dom::select_each(doc, "p") {
        let text = dom::text(&paragraph);
        let trimmed = text.trim();
        if trimmed.chars().count() > min_len {
            blocks.push(TextBlock {
                kind: BlockKind::Paragraph,
                text: trimmed.to_string(),
            });
        }
    }
}

/// Pass 3: list items, bullet-prefixed, in document order.
fn collect_list_items(doc: &Document, blocks: &mut Vec<TextBlock>) {
    for item in dom::select_each(doc, "li") {
        let text = dom::text(&item);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            blocks.push(TextBlock {
                kind: BlockKind::ListItem,
                text: format!("{BULLET_PREFIX}{trimmed}"),
            });
        }
    }
}

/// Pass 4: image candidates, in document order.
///
/// The source comes from the first non-empty attribute in
/// [`IMAGE_SRC_ATTRS`]; elements carrying none are skipped.
fn collect_image_candidates(doc: &Document) -> Vec<ImageCandidate> {
    let mut candidates = Vec::new();

    for image in dom::select_each(doc, "img") {
        let Some(raw_src) = image_src(&image) else {
            continue;
        };

        let alt = match dom::attr(&image, "alt") {
            Some(alt) if !alt.is_empty() => alt,
            _ => ALT_PLACEHOLDER.to_string(),
        };

        candidates.push(ImageCandidate { raw_src, alt });
    }

    candidates
}

/// Heading level from the tag name (`h1`..`h6`).
fn heading_level(heading: &Selection) -> Option<u8> {
    let tag = dom::tag_name(heading)?;
    let level: u8 = tag.strip_prefix('h')?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// First non-empty source attribute of an image element.
fn image_src(image: &Selection) -> Option<String> {
    IMAGE_SRC_ATTRS
        .iter()
        .filter_map(|name| dom::attr(image, name))
        .find(|value| !value.is_empty())
}

//! # pagelift
//!
//! Web page scraper - fetches a page by URL and extracts structured
//! content: a title, an ordered sequence of typed text blocks (headings,
//! paragraphs, list items) and a deduplicated list of image references
//! with resolved absolute URLs.
//!
//! The pipeline runs fetch → decode → parse → sanitize → extract →
//! normalize/deduplicate → assemble. The fetch is the only suspension
//! point; everything after it is synchronous and deterministic. Concurrent
//! scrapes share no mutable state - each invocation owns its document tree
//! and result - and dropping the returned future cancels the in-flight
//! fetch before any extraction runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelift::extract_document;
//!
//! let html = r#"<html><head><title>Demo</title></head>
//! <body><h1>Intro</h1><p>This paragraph is long enough.</p>
//! <img src="/pic.png" alt="Pic"></body></html>"#;
//!
//! let result = extract_document(html, "https://example.com/page")?;
//! assert_eq!(result.title, "Demo");
//! assert_eq!(result.images[0].src, "https://example.com/pic.png");
//! # Ok::<(), pagelift::Error>(())
//! ```
//!
//! Fetching is a single HTTP GET, by default routed through a configurable
//! intermediary retrieval endpoint (see [`Options::gateway`]):
//!
//! ```no_run
//! # async fn run() -> pagelift::Result<()> {
//! let result = pagelift::scrape("https://example.com/page").await?;
//! println!("{}: {} blocks", result.title, result.text_blocks.len());
//! # Ok(())
//! # }
//! ```

mod dedupe;
mod error;
mod extract;
mod fetch;
mod options;
mod result;

/// DOM parsing and access helpers.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Pre-extraction tree sanitization.
pub mod sanitize;

/// URL normalization for image references.
pub mod url_norm;

use url::Url;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::ALT_PLACEHOLDER;
pub use options::Options;
pub use result::{BlockKind, ImageRef, ScrapeResult, TextBlock, TITLE_PLACEHOLDER};

/// Scrape a page by URL using default options.
///
/// Fails fast with [`Error::MissingInput`] on an empty URL and
/// [`Error::InvalidUrl`] on one that cannot be parsed, before any network
/// activity. One fetch attempt per call; retries are a caller concern.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> pagelift::Result<()> {
/// let result = pagelift::scrape("https://example.com/page").await?;
/// for image in &result.images {
///     println!("{}", image.src);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn scrape(url: &str) -> Result<ScrapeResult> {
    scrape_with_options(url, &Options::default()).await
}

/// Scrape a page by URL with custom options.
pub async fn scrape_with_options(url: &str, options: &Options) -> Result<ScrapeResult> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::MissingInput);
    }

    // Resolving the origin up front both validates the input and provides
    // the base for image URL resolution after the fetch.
    let origin = url_norm::page_origin(url)?;

    let html = fetch::fetch_page(url, options).await?;
    Ok(run_extraction(&html, url, &origin, options))
}

/// Extract structured content from already-fetched HTML.
///
/// Runs the synchronous part of the pipeline (parse → sanitize → extract →
/// normalize → deduplicate → assemble) with no network access. The page
/// URL provides the origin for image resolution.
///
/// # Example
///
/// ```rust
/// use pagelift::{extract_document, BlockKind};
///
/// let html = "<body><ul><li>Item A</li></ul></body>";
/// let result = extract_document(html, "https://example.com/")?;
/// assert_eq!(result.text_blocks[0].kind, BlockKind::ListItem);
/// assert_eq!(result.text_blocks[0].text, "\u{2022} Item A");
/// # Ok::<(), pagelift::Error>(())
/// ```
pub fn extract_document(html: &str, page_url: &str) -> Result<ScrapeResult> {
    extract_document_with_options(html, page_url, &Options::default())
}

/// Extract structured content from already-fetched HTML with custom
/// options.
pub fn extract_document_with_options(
    html: &str,
    page_url: &str,
    options: &Options,
) -> Result<ScrapeResult> {
    let page_url = page_url.trim();
    if page_url.is_empty() {
        return Err(Error::MissingInput);
    }

    let origin = url_norm::page_origin(page_url)?;
    Ok(run_extraction(html, page_url, &origin, options))
}

/// Extract structured content from raw HTML bytes.
///
/// Detects the declared charset and transcodes to UTF-8 before parsing;
/// invalid sequences are replaced, never surfaced as errors.
pub fn extract_document_bytes(html: &[u8], page_url: &str) -> Result<ScrapeResult> {
    let html = encoding::transcode_to_utf8(html);
    extract_document(&html, page_url)
}

/// The synchronous stages: parse, sanitize, extract, normalize,
/// deduplicate, assemble.
fn run_extraction(html: &str, page_url: &str, origin: &Url, options: &Options) -> ScrapeResult {
    let doc = dom::parse(html);
    sanitize::strip_noise(&doc);

    let extraction = extract::extract_content(&doc, options);

    let candidates = extraction.images.len();
    let resolved: Vec<ImageRef> = extraction
        .images
        .into_iter()
        .filter_map(|candidate| {
            url_norm::resolve_src(&candidate.raw_src, origin).map(|src| ImageRef {
                src,
                alt: candidate.alt,
            })
        })
        .collect();
    let images = dedupe::dedupe_by_src(resolved);

    tracing::debug!(
        candidates,
        images = images.len(),
        "image candidates normalized and deduplicated"
    );

    ScrapeResult::assemble(extraction.title, page_url, extraction.blocks, images)
}

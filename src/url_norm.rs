//! URL normalization for image references.
//!
//! Image sources come out of the tree as raw attribute values: absolute
//! URLs, root-relative paths, bare filenames. Everything is resolved
//! against the **origin** of the page URL (scheme + host + port, not the
//! full path), matching how the page itself would resolve them from the
//! site root.

use url::Url;

use crate::error::{Error, Result};

/// Check whether a string is already an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    match Url::parse(s) {
        Ok(url) => url.host().is_some(),
        Err(_) => false,
    }
}

/// Reduce a page URL to its origin.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the page URL is not an absolute
/// http(s) URL, since no origin can be derived for relative resolution.
pub fn page_origin(page_url: &str) -> Result<Url> {
    let page_url = page_url.trim();

    if !is_absolute_url(page_url) {
        return Err(Error::InvalidUrl(page_url.to_string()));
    }

    let parsed = Url::parse(page_url).map_err(|_| Error::InvalidUrl(page_url.to_string()))?;
    let origin = parsed.origin().ascii_serialization();

    Url::parse(&origin).map_err(|_| Error::InvalidUrl(page_url.to_string()))
}

/// Resolve a raw image source to an absolute URL.
///
/// Absolute http(s) sources pass through unchanged; anything else is
/// joined against the page origin. A source that still fails to resolve
/// is dropped (`None`), never a hard error.
#[must_use]
pub fn resolve_src(raw: &str, origin: &Url) -> Option<String> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    if is_absolute_url(raw) {
        return Some(raw.to_string());
    }

    origin.join(raw).ok().map(Into::into)
}

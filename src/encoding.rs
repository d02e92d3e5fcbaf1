//! Character encoding detection and transcoding.
//!
//! Directly fetched pages arrive as raw bytes in whatever charset the site
//! serves. This module sniffs the declared charset from the document head
//! and converts to UTF-8 before parsing, replacing invalid sequences with
//! the Unicode replacement character rather than failing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Matches `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Matches the charset inside `<meta http-equiv="Content-Type" ...>`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("valid regex")
});

/// Detect the character encoding declared in the document head.
///
/// Checks `<meta charset>` first, then the legacy `http-equiv` form, and
/// defaults to UTF-8 when neither names a known encoding. Only the first
/// kilobyte is examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&META_CHARSET_RE, &HTTP_EQUIV_CHARSET_RE] {
        if let Some(label) = pattern
            .captures(&head_str)
            .and_then(|captures| captures.get(1))
        {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with the Unicode replacement character,
/// never surfaced as an error.
///
/// # Examples
///
/// ```
/// use pagelift::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

//! Pre-extraction tree sanitization.
//!
//! Script and style elements carry executable code and CSS text that would
//! otherwise leak into extracted content. They are removed, subtrees
//! included, before any text is read.

use crate::dom::{self, Document};

/// Tags removed wholesale before extraction.
const NOISE_TAGS: &str = "script, style";

/// Strip every script and style element from the document, in place.
///
/// Runs once, unconditionally, before extraction.
pub fn strip_noise(doc: &Document) {
    let noise = doc.select(NOISE_TAGS);
    let count = noise.length();
    if count > 0 {
        tracing::debug!(count, "removing script/style elements");
        dom::remove(&noise);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_and_subtree() {
        let doc = dom::parse("<body><script>alert(1)</script><p>Hello world example</p></body>");
        strip_noise(&doc);
        assert!(!doc.select("script").exists());
        assert!(!doc.select("body").text().contains("alert"));
        assert!(doc.select("p").exists());
    }

    #[test]
    fn removes_style_text() {
        let doc = dom::parse("<body><style>p { color: red; }</style><p>Visible text here</p></body>");
        strip_noise(&doc);
        assert!(!doc.select("style").exists());
        assert!(!doc.select("body").text().contains("color"));
    }

    #[test]
    fn leaves_content_untouched_when_clean() {
        let doc = dom::parse("<body><h1>Title</h1><p>Text</p></body>");
        strip_noise(&doc);
        assert!(doc.select("h1").exists());
        assert!(doc.select("p").exists());
    }
}

//! DOM parsing and access helpers.
//!
//! Thin adapter over the `dom_query` crate exposing the handful of tree
//! operations the pipeline uses. Parsing is lenient html5ever parsing:
//! malformed input never fails, it produces whatever tree is recoverable.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a document tree.
///
/// Unclosed tags, missing `<html>`/`<body>` wrappers and stray markup are
/// recovered rather than rejected.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// All elements matching a CSS selector, as per-element handles in
/// document order.
#[must_use]
pub fn select_each<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Text content of an element and its descendants.
///
/// Returns `StrTendril` for zero-copy passing; convert with `.to_string()`
/// only when owned storage is needed.
#[inline]
#[must_use]
pub fn text(sel: &Selection) -> StrTendril {
    sel.text()
}

/// An attribute value, if present.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|value| value.to_string())
}

/// Tag name of the first node in the selection, lowercase.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|tag| tag.to_string())
}

/// Remove every matched element and its subtree from the document.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

//! Image reference deduplication.

use std::collections::HashSet;

use crate::result::ImageRef;

/// Collapse image references to one per distinct `src`.
///
/// The first occurrence wins and keeps its position; later duplicates are
/// discarded.
#[must_use]
pub fn dedupe_by_src(refs: Vec<ImageRef>) -> Vec<ImageRef> {
    let mut seen: HashSet<String> = HashSet::with_capacity(refs.len());

    refs.into_iter()
        .filter(|image| seen.insert(image.src.clone()))
        .collect()
}

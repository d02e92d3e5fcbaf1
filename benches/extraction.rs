//! Performance benchmarks for pagelift.
//!
//! Run with: `cargo bench`
//!
//! Covers the synchronous extraction path (parse → sanitize → extract →
//! normalize → deduplicate) on a small synthetic page; the network fetch
//! is excluded.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagelift::extract_document;

const PAGE_URL: &str = "https://example.com/articles/sample";

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <style>body { font-family: serif; }</style>
</head>
<body>
    <script>window.tracker = { loaded: true };</script>
    <h1>Sample Article Title</h1>
    <h2>A Subheading</h2>
    <p>This is the first paragraph of the article. It contains some meaningful
    content that the extractor should keep.</p>
    <p>Here is a second paragraph with more content. Script and style text
    must never appear among the extracted blocks.</p>
    <p>ok</p>
    <ul>
        <li>First list item</li>
        <li>Second list item</li>
    </ul>
    <img src="/images/hero.jpg" alt="Hero image">
    <img src="/images/hero.jpg" alt="Duplicate hero">
    <img data-src="/images/lazy.jpg">
    <footer>
        <p>Copyright 2024, long enough to be extracted as a paragraph.</p>
    </footer>
</body>
</html>
"#;

fn bench_extract_document(c: &mut Criterion) {
    c.bench_function("extract_document", |b| {
        b.iter(|| extract_document(black_box(SAMPLE_HTML), black_box(PAGE_URL)));
    });
}

fn bench_extract_document_large(c: &mut Criterion) {
    // Repeat the body to approximate a content-heavy page
    let body = SAMPLE_HTML.repeat(50);
    c.bench_function("extract_document_large", |b| {
        b.iter(|| extract_document(black_box(&body), black_box(PAGE_URL)));
    });
}

criterion_group!(benches, bench_extract_document, bench_extract_document_large);
criterion_main!(benches);

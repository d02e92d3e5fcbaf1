use pagelift::{extract_document, extract_document_bytes, ALT_PLACEHOLDER};

fn is_absolute(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

#[test]
fn every_image_src_is_absolute() {
    let html = r#"<body>
        <img src="https://cdn.example.net/hosted.jpg">
        <img src="/root-relative.png">
        <img src="bare-filename.gif">
        <img src="//cdn.example.net/protocol-relative.webp">
    </body>"#;

    let result = extract_document(html, "https://example.com/articles/post")
        .unwrap_or_else(|err| panic!("{err:?}"));

    assert_eq!(result.images.len(), 4);
    for image in &result.images {
        assert!(is_absolute(&image.src), "not absolute: {}", image.src);
    }
}

#[test]
fn relative_sources_resolve_against_origin_not_page_path() {
    let html = r#"<body><img src="pic.png"><img src="/logo.svg"></body>"#;

    let result = extract_document(html, "https://example.com/deep/nested/page")
        .unwrap_or_else(|err| panic!("{err:?}"));

    let srcs: Vec<_> = result.images.iter().map(|i| i.src.as_str()).collect();
    assert_eq!(
        srcs,
        ["https://example.com/pic.png", "https://example.com/logo.svg"]
    );
}

#[test]
fn duplicates_collapse_to_first_occurrence_order() {
    let html = r#"<body>
        <img src="/a.png" alt="first a">
        <img src="/b.png">
        <img src="/a.png" alt="second a">
        <img src="https://example.com/b.png">
        <img src="/c.png">
    </body>"#;

    let result = extract_document(html, "https://example.com/")
        .unwrap_or_else(|err| panic!("{err:?}"));

    let srcs: Vec<_> = result.images.iter().map(|i| i.src.as_str()).collect();
    assert_eq!(
        srcs,
        [
            "https://example.com/a.png",
            "https://example.com/b.png",
            "https://example.com/c.png",
        ]
    );
    // The first occurrence determines alt text as well as position
    assert_eq!(result.images[0].alt, "first a");
}

#[test]
fn lazy_load_attributes_feed_candidates() {
    let html = r#"<body>
        <img data-src="/lazy.png" alt="lazy">
        <img data-lazy-src="/lazier.png" alt="lazier">
        <img src="/eager.png" data-src="/ignored.png" alt="eager">
    </body>"#;

    let result = extract_document(html, "https://example.com/")
        .unwrap_or_else(|err| panic!("{err:?}"));

    let srcs: Vec<_> = result.images.iter().map(|i| i.src.as_str()).collect();
    assert_eq!(
        srcs,
        [
            "https://example.com/lazy.png",
            "https://example.com/lazier.png",
            "https://example.com/eager.png",
        ]
    );
}

#[test]
fn sourceless_and_unresolvable_images_are_dropped() {
    let html = r#"<body>
        <img alt="no source at all">
        <img src="">
        <img src="http://[not-a-host/broken.png">
        <img src="/kept.png">
    </body>"#;

    let result = extract_document(html, "https://example.com/")
        .unwrap_or_else(|err| panic!("{err:?}"));

    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].src, "https://example.com/kept.png");
}

#[test]
fn missing_alt_defaults_to_placeholder() {
    let html = r#"<body><img src="/a.png"><img src="/b.png" alt="described"></body>"#;

    let result = extract_document(html, "https://example.com/")
        .unwrap_or_else(|err| panic!("{err:?}"));

    assert_eq!(result.images[0].alt, ALT_PLACEHOLDER);
    assert_eq!(result.images[1].alt, "described");
}

#[test]
fn bytes_input_is_transcoded_before_extraction() {
    // ISO-8859-1 alt text (é = 0xE9) with a declared charset
    let html: Vec<u8> = [
        &b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head>"[..],
        &b"<body><img src=\"/menu.png\" alt=\"Caf\xE9\"></body></html>"[..],
    ]
    .concat();

    let result = extract_document_bytes(&html, "https://example.com/")
        .unwrap_or_else(|err| panic!("{err:?}"));

    assert_eq!(result.title, "Caf\u{e9}");
    assert_eq!(result.images[0].alt, "Caf\u{e9}");
}

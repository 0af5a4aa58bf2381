//! Title extraction through the public API.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_readability::{extract, extract_with_options, Options};

fn page(title: &str, body: &str) -> String {
    format!("<html><head><title>{title}</title></head><body>{body}</body></html>")
}

fn some_body() -> String {
    "<p>Body text that gives the extractor something to work with here.</p>".repeat(4)
}

#[test]
fn test_separator_title_drops_site_name() {
    let html = page("Breaking News | Example Site", &some_body());
    let result = extract(&html).expect("extraction should succeed");

    assert_eq!(result.title, "Breaking News");
}

#[test]
fn test_breadcrumb_title_keeps_the_headline() {
    let html = page("Example » A Headline With Enough Words", &some_body());
    let result = extract(&html).expect("extraction should succeed");

    assert_eq!(result.title, "A Headline With Enough Words");
}

#[test]
fn test_plain_title_passes_through() {
    let html = page("An Ordinary Headline Without Separators", &some_body());
    let result = extract(&html).expect("extraction should succeed");

    assert_eq!(result.title, "An Ordinary Headline Without Separators");
}

#[test]
fn test_tiny_title_takes_lone_h1() {
    let html = page(
        "Home",
        &format!("<h1>The Actual Headline Of The Article</h1>{}", some_body()),
    );
    let result = extract(&html).expect("extraction should succeed");

    assert_eq!(result.title, "The Actual Headline Of The Article");
}

#[test]
fn test_title_is_capped_at_200_chars() {
    let long_title = "Word ".repeat(100);
    let html = page(long_title.trim(), &some_body());
    let result = extract(&html).expect("extraction should succeed");

    assert!(result.title.chars().count() <= 200);
}

#[test]
fn test_h1_inside_content_is_stripped_but_title_is_kept() {
    let body = format!(
        "<article><h1>Duplicated Headline</h1>{}</article>",
        "<p>Article prose with commas, structure, and reasonable length to it.</p>".repeat(10)
    );
    let html = page("Duplicated Headline - Example Site", &body);
    let options = Options {
        char_threshold: 100,
        ..Options::default()
    };

    let result = extract_with_options(&html, &options).expect("extraction should succeed");

    assert_eq!(result.title, "Duplicated Headline");
    assert!(!result.content.contains("<h1"));
}

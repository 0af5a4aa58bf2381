//! Robustness tests
//!
//! Malformed markup, unusual encodings, and configuration overrides must
//! degrade gracefully rather than panic or error.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use regex::Regex;
use rs_readability::{extract, extract_bytes, extract_with_options, Options};

#[test]
fn test_unclosed_tags_are_tolerated() {
    let html = "<html><body><div><p>First paragraph never closes \
                <p>Second paragraph, also fine, keeps the parser honest. \
                <div><span>stray</body>";

    let result = extract(html).expect("parser should recover");
    assert!(result.text_content.contains("First paragraph"));
}

#[test]
fn test_deeply_nested_markup() {
    let mut html = String::from("<html><body>");
    for _ in 0..60 {
        html.push_str("<div>");
    }
    html.push_str("<p>Needle text with commas, depth, and enough length to score.</p>");
    for _ in 0..60 {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");

    let result = extract(&html).expect("deep nesting should not break extraction");
    assert!(result.text_content.contains("Needle text"));
}

#[test]
fn test_latin1_bytes_round_trip() {
    let mut html: Vec<u8> = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>".to_vec();
    html.extend_from_slice(b"R\xE9sum\xE9 content: accents survive decoding, with room to spare. ");
    html.extend_from_slice("padding ".repeat(10).as_bytes());
    html.extend_from_slice(b"</p></body></html>");

    let result = extract_bytes(&html).expect("decoding should succeed");
    assert!(result.text_content.contains("R\u{e9}sum\u{e9}"));
}

#[test]
fn test_custom_unlikely_pattern_applies() {
    let article = "<p>Real article text with commas, length, and sentences to score well.</p>"
        .repeat(8);
    let html = format!(
        r#"<html><body><div class="daohang"><p>{}</p></div>
        <div class="zhengwen">{article}</div></body></html>"#,
        "boilerplate link farm text ".repeat(4)
    );

    let options = Options {
        char_threshold: 100,
        unlikely_candidates: Some(Regex::new("daohang|cebianlan").expect("valid test regex")),
        maybe_candidate: Some(Regex::new("zhengwen").expect("valid test regex")),
        ..Options::default()
    };

    let result = extract_with_options(&html, &options).expect("extraction should succeed");

    assert!(result.text_content.contains("Real article text"));
    assert!(!result.text_content.contains("boilerplate link farm"));
}

#[test]
fn test_whitespace_heavy_document_is_normalized() {
    let html = "<html><body><article><p>Spread    out\n\n\ttext,   with messy   whitespace, \
                still reads as one clean paragraph in the output.</p></article></body></html>";

    let result = extract(html).expect("extraction should succeed");

    assert!(!result.text_content.contains("  "));
    assert!(result.text_content.contains("Spread out text,"));
}

#[test]
fn test_attribute_free_markup() {
    let html = format!(
        "<html><body><div>{}</div></body></html>",
        "<p>Paragraphs without any class or id still extract on structure alone, \
         commas and all.</p>"
            .repeat(8)
    );

    let result = extract(&html).expect("extraction should succeed");
    assert!(result.length > 500);
}

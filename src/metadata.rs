//! Document-level metadata: byline, site name, and text direction.

use crate::dom::{Document, Selection};
use crate::patterns::NORMALIZE_WHITESPACE;

/// Selectors tried in order when looking for an author byline.
const BYLINE_SELECTORS: [&str; 5] = [
    r#"[rel="author"]"#,
    ".author",
    ".byline",
    r#"meta[property="article:author"]"#,
    r#"meta[name="author"]"#,
];

/// Author byline, from the first matching byline selector. Meta tags
/// contribute their `content` attribute, other elements their text.
#[must_use]
pub fn extract_byline(doc: &Document) -> Option<String> {
    for selector in BYLINE_SELECTORS {
        let sel = doc.select(selector);
        if !sel.exists() {
            continue;
        }
        let text = sel.text().trim().to_string();
        let text = if text.is_empty() {
            sel.attr("content")
                .map(|c| c.trim().to_string())
                .unwrap_or_default()
        } else {
            text
        };
        if !text.is_empty() {
            return Some(NORMALIZE_WHITESPACE.replace_all(&text, " ").into_owned());
        }
    }
    None
}

/// Site name from the `og:site_name` meta property.
#[must_use]
pub fn extract_site_name(doc: &Document) -> Option<String> {
    meta_content(doc, "og:site_name")
}

/// Text direction (`ltr`/`rtl`) from the nearest `dir` attribute on `<html>`
/// or `<body>`.
#[must_use]
pub fn extract_dir(doc: &Document) -> Option<String> {
    dir_attr(&doc.select("html")).or_else(|| dir_attr(&doc.select("body")))
}

fn dir_attr(sel: &Selection) -> Option<String> {
    sel.attr("dir").and_then(|d| {
        let d = d.trim().to_string();
        (!d.is_empty()).then_some(d)
    })
}

fn meta_content(doc: &Document, name: &str) -> Option<String> {
    let sel = doc.select(&format!(
        r#"meta[name="{name}"], meta[property="{name}"]"#
    ));
    sel.attr("content").and_then(|c| {
        let c = c.trim().to_string();
        (!c.is_empty()).then_some(c)
    })
}

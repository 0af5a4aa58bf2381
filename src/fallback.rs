//! Non-heuristic fallback extraction.
//!
//! When the scoring pipeline finds nothing, a fixed list of selectors common
//! to article layouts is tried in order, and failing that the whole body is
//! taken. The chosen subtree is then stripped of obvious chrome. This path
//! always yields a region, so extraction can degrade instead of failing.

use crate::dom::{self, Document, Selection};

/// Selectors tried in order, most specific first.
const CONTENT_SELECTORS: [&str; 10] = [
    "article",
    r#"[role="main"]"#,
    "main",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".content",
    "#content",
    ".post",
    ".article",
];

/// Chrome removed from the chosen subtree.
const UNWANTED_SELECTOR: &str = "script, style, noscript, iframe, nav, header, footer, aside, \
     .sidebar, .navigation, .menu, .comments, .advertisement, .ad, .social-share, \
     [role=\"navigation\"], [role=\"banner\"]";

/// Minimum text length for a selector hit to be accepted.
const MIN_SELECTOR_TEXT: usize = 200;

/// Extract a content region without scoring.
///
/// Returns a fresh document holding the cleaned subtree, or `None` when the
/// source has no `<body>` at all.
#[must_use]
pub fn extract_fallback(doc: &Document) -> Option<Document> {
    let html = select_content_html(doc)?;

    let region = Document::from(format!("<html><body>{html}</body></html>"));
    region.select(UNWANTED_SELECTOR).remove();
    Some(region)
}

/// Inner HTML of the chosen content root. The root's own tag never appears
/// in the output, so a chrome-looking class on it cannot strip the region
/// away from under itself.
fn select_content_html(doc: &Document) -> Option<String> {
    for selector in CONTENT_SELECTORS {
        let sel = doc.select(selector);
        let Some(node) = sel.nodes().first() else {
            continue;
        };
        if dom::inner_text_len(node) > MIN_SELECTOR_TEXT {
            return Some(Selection::from(*node).inner_html().to_string());
        }
    }

    let body_nodes = doc.select("body").nodes().to_vec();
    body_nodes
        .first()
        .map(|body| Selection::from(*body).inner_html().to_string())
}

//! Top-level extraction entry points.
//!
//! Ties the pieces together: parse, strip scripts, pull the title and
//! metadata, run the scoring pipeline with its strict/relaxed retry, and
//! degrade to selector-based fallback extraction when scoring finds
//! nothing. The caller's input string is never mutated; all work happens on
//! parsed documents owned here.

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::extractor;
use crate::fallback;
use crate::metadata;
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::title;

/// Elements removed before any heuristic runs.
const SCRIPT_SELECTOR: &str = "script, style, noscript";

/// Character cap applied to the returned title.
const MAX_TITLE_CHARS: usize = 200;

/// Run the whole extraction flow over one HTML string.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractionResult> {
    let doc = Document::from(html);
    ensure_not_empty(html, &doc)?;

    doc.select(SCRIPT_SELECTOR).remove();

    let title: String = title::extract_title(&doc)
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect();
    let byline = metadata::extract_byline(&doc);
    let dir = metadata::extract_dir(&doc);
    let site_name = metadata::extract_site_name(&doc).or_else(|| hostname_of(options));

    let region = extractor::grab_article(&doc, options)
        .or_else(|| fallback::extract_fallback(&doc))
        .ok_or(Error::NoContent)?;

    let (content, text_content) = serialize_region(&region).ok_or(Error::NoContent)?;

    let mut result = ExtractionResult::from_content(title, content, text_content);
    result.byline = byline;
    result.dir = dir;
    result.site_name = site_name;
    Ok(result)
}

fn ensure_not_empty(html: &str, doc: &Document) -> Result<()> {
    if html.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let body = doc.select("body");
    let Some(body_node) = body.nodes().first() else {
        return Err(Error::EmptyDocument);
    };

    if dom::first_element_child(body_node).is_none() && body.text().trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    Ok(())
}

/// Serialized HTML and plain text of an extracted region document.
fn serialize_region(region: &Document) -> Option<(String, String)> {
    let body_nodes = region.select("body").nodes().to_vec();
    let body = body_nodes.first()?;

    let content = dom::Selection::from(*body).inner_html().trim().to_string();
    let text_content = dom::inner_text(body);
    Some((content, text_content))
}

fn hostname_of(options: &Options) -> Option<String> {
    let raw = options.url.as_deref()?;
    let parsed = url::Url::parse(raw).ok()?;
    parsed.host_str().map(str::to_string)
}

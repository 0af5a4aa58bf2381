//! Top-candidate selection and content-region assembly.
//!
//! Applies the one-time link-density discount, keeps a small descending list
//! of the best candidates, then builds the output region from the winner and
//! any of its siblings that clear the inclusion heuristics.

use crate::dom::{self, Document, NodeId, NodeRef, Selection};
use crate::extractor::state::ScoreState;
use crate::options::Options;
use crate::patterns::SENTENCE_END;
use crate::weights::link_density;

/// Fraction of the top score used both as the sibling threshold base and as
/// the same-class bonus.
const SIBLING_SCORE_FRACTION: f64 = 0.2;

/// Floor for the sibling inclusion threshold.
const SIBLING_THRESHOLD_FLOOR: f64 = 10.0;

/// Sibling paragraphs longer than this qualify on link density alone.
const SIBLING_LONG_TEXT: usize = 80;

/// Link-density ceiling for long sibling paragraphs.
const SIBLING_MAX_LINK_DENSITY: f64 = 0.25;

/// Container markup wrapped around the assembled region.
const REGION_ID: &str = "readability-page-1";

/// Assemble the content region around the best-scoring candidate.
///
/// Always produces a region: when no candidate exists, or the winner is the
/// body itself, the whole body content becomes the region. The returned
/// document holds only the region container and is safe to mutate further.
pub fn assemble_region(
    doc: &Document,
    root: &NodeRef,
    state: &mut ScoreState,
    options: &Options,
) -> Document {
    let top_ids = select_top_candidates(doc, state, options.n_top_candidates);

    let top = top_ids.first().and_then(|id| doc.tree.get(id));
    let top = match top {
        Some(node) if !dom::is_tag(&node, "body") => node,
        // No usable candidate: the region is the entire root content.
        _ => return wrap_region(&Selection::from(*root).inner_html()),
    };

    let top_score = state.get(top.id).unwrap_or(0.0);
    let threshold = (top_score * SIBLING_SCORE_FRACTION).max(SIBLING_THRESHOLD_FLOOR);
    let top_class = Selection::from(top)
        .attr("class")
        .map(|c| c.to_string())
        .unwrap_or_default();

    let siblings = match top.parent() {
        Some(parent) => dom::element_children(&parent),
        None => vec![top],
    };

    let mut parts = String::new();
    for sibling in siblings {
        if sibling.id != top.id
            && !include_sibling(&sibling, state, top_score, threshold, &top_class)
        {
            continue;
        }

        if !matches!(dom::tag_name(&sibling).as_deref(), Some("div" | "p")) {
            dom::rename(&sibling, "div");
        }
        parts.push_str(&dom::outer_html(&sibling));
    }

    wrap_region(&parts)
}

/// Discount every candidate by its link density, then keep the best few via
/// linear insertion, highest first.
fn select_top_candidates(doc: &Document, state: &mut ScoreState, n_top: usize) -> Vec<NodeId> {
    let mut top_ids: Vec<NodeId> = Vec::with_capacity(n_top + 1);

    let candidate_ids = state.candidates().to_vec();
    for id in candidate_ids {
        let Some(node) = doc.tree.get(&id) else {
            continue;
        };
        let score = state.get(id).unwrap_or(0.0) * (1.0 - link_density(&node));
        state.set(id, score);

        match top_ids
            .iter()
            .position(|&t| state.get(t).unwrap_or(0.0) < score)
        {
            Some(pos) => top_ids.insert(pos, id),
            None if top_ids.len() < n_top => top_ids.push(id),
            None => {}
        }
        top_ids.truncate(n_top);
    }

    top_ids
}

/// Sibling inclusion policy: clear the score threshold (with a same-class
/// bonus), or qualify as a prose-looking paragraph.
fn include_sibling(
    sibling: &NodeRef,
    state: &ScoreState,
    top_score: f64,
    threshold: f64,
    top_class: &str,
) -> bool {
    let mut bonus = 0.0;
    if !top_class.is_empty() {
        let sibling_class = Selection::from(*sibling).attr("class").unwrap_or_default();
        if &*sibling_class == top_class {
            bonus = top_score * SIBLING_SCORE_FRACTION;
        }
    }

    if state.get(sibling.id).unwrap_or(0.0) + bonus >= threshold {
        return true;
    }

    if !dom::is_tag(sibling, "p") {
        return false;
    }

    let text = dom::inner_text(sibling);
    let text_len = text.chars().count();
    let density = link_density(sibling);

    if text_len > SIBLING_LONG_TEXT && density < SIBLING_MAX_LINK_DENSITY {
        return true;
    }

    text_len > 0 && text_len < SIBLING_LONG_TEXT && density == 0.0 && SENTENCE_END.is_match(&text)
}

/// Parse the serialized region parts into a fresh single-container document.
fn wrap_region(inner: &str) -> Document {
    Document::from(format!(
        r#"<html><body><div id="{REGION_ID}" class="page">{inner}</div></body></html>"#
    ))
}

/// Normalized plain text of an assembled region.
#[must_use]
pub fn region_text(region: &Document) -> String {
    let nodes = region.select("body").nodes().to_vec();
    match nodes.first() {
        Some(body) => dom::inner_text(body),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;
    use crate::extractor::{collect, score};

    fn run_through_assembly(html: &str) -> Document {
        let doc = parse(html);
        let opts = Options::default();
        let body = doc.select("body").nodes()[0];
        let to_score = collect::collect_candidates(&body, &opts, true);
        let mut state = ScoreState::new();
        score::score_elements(&to_score, &mut state);
        assemble_region(&doc, &body, &mut state, &opts)
    }

    #[test]
    fn picks_the_text_heavy_container() {
        let article: String = (0..5)
            .map(|i| format!("<p>Paragraph {i}: {}</p>", "text, and more text. ".repeat(10)))
            .collect();
        let html = format!(
            r#"<body><div class="navbar"><a href="/a">A</a> <a href="/b">B</a></div>
            <div class="story">{article}</div></body>"#
        );

        let region = run_through_assembly(&html);
        let text = region_text(&region);

        assert!(text.contains("Paragraph 0"));
        assert!(text.contains("Paragraph 4"));
        assert!(!text.contains("navbar"));
    }

    #[test]
    fn empty_candidate_list_falls_back_to_whole_root() {
        let region = run_through_assembly("<body><p>tiny</p></body>");
        assert!(region_text(&region).contains("tiny"));
    }

    #[test]
    fn region_wrapper_is_present() {
        let region = run_through_assembly("<body><p>tiny</p></body>");
        assert!(region.select(&format!("#{REGION_ID}")).exists());
    }

    #[test]
    fn prose_sibling_paragraph_is_included() {
        let body_text = "word, ".repeat(40);
        let html = format!(
            r#"<body><div><div class="story"><p>{body_text}</p><p>{body_text}</p></div>
            <p>A standalone closing thought that runs well past eighty characters so the
            length gate is satisfied here.</p></div></body>"#
        );

        let region = run_through_assembly(&html);
        let text = region_text(&region);

        assert!(text.contains("standalone closing thought"));
    }

    #[test]
    fn short_sentence_sibling_needs_terminator() {
        let body_text = "word, ".repeat(40);
        let html = format!(
            r#"<body><div><div class="story"><p>{body_text}</p><p>{body_text}</p></div>
            <p>Short but a real sentence.</p><p>no terminator fragment</p></div></body>"#
        );

        let region = run_through_assembly(&html);
        let text = region_text(&region);

        assert!(text.contains("Short but a real sentence."));
        assert!(!text.contains("no terminator fragment"));
    }

    #[test]
    fn included_non_paragraph_siblings_are_retagged_to_div() {
        let body_text = "word, ".repeat(60);
        let html = format!(
            r#"<body><div><section class="story"><p>{body_text}</p></section>
            <section class="story"><p>{body_text}</p></section></div></body>"#
        );

        let region = run_through_assembly(&html);

        assert!(region.select("section").is_empty());
        assert!(region.select("div.story").exists());
    }
}

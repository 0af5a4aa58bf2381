//! Ancestor-propagating scorer.
//!
//! Each collected element contributes a local prose score that is propagated,
//! with decay, to up to five ancestor elements. Ancestors are lazily
//! initialized from their tag semantics and class/id weight the first time
//! they are touched, and registered as candidates.

use crate::dom::{self, NodeRef};
use crate::extractor::state::ScoreState;
use crate::weights::class_id_weight;

/// Minimum inner-text length for an element to contribute any score.
const MIN_TEXT_LENGTH: usize = 25;

/// How many ancestor levels receive propagated score.
const MAX_PROPAGATION_DEPTH: usize = 5;

/// Score all collected elements, accumulating candidate scores in `state`.
pub fn score_elements(elements: &[NodeRef], state: &mut ScoreState) {
    for element in elements {
        let text = dom::inner_text(element);
        let text_len = text.chars().count();
        if text_len < MIN_TEXT_LENGTH {
            continue;
        }

        let ancestors = dom::ancestor_elements(element, MAX_PROPAGATION_DEPTH);
        if ancestors.is_empty() {
            continue;
        }

        let local_score = local_score(&text, text_len);

        for (level, ancestor) in ancestors.iter().enumerate() {
            if !state.is_initialized(ancestor.id) {
                let base = tag_score(ancestor) + class_id_weight(ancestor);
                state.initialize(ancestor.id, base);
            }
            state.add(ancestor.id, local_score / divisor(level));
        }
    }
}

/// Local prose score: 1 base point, 1 per comma-separated segment, and up to
/// 3 more for every full 100 characters of text.
fn local_score(text: &str, text_len: usize) -> f64 {
    let segments = text.split(',').count();
    let length_bonus = (text_len / 100).min(3);
    1.0 + segments as f64 + length_bonus as f64
}

/// Decay divisor per ancestor level: full credit to the parent, half to the
/// grandparent, then level*3 beyond.
fn divisor(level: usize) -> f64 {
    match level {
        0 => 1.0,
        1 => 2.0,
        l => (l * 3) as f64,
    }
}

/// Base score from tag semantics.
fn tag_score(node: &NodeRef) -> f64 {
    match dom::tag_name(node).as_deref() {
        Some("div") => 5.0,
        Some("pre" | "td" | "blockquote") => 3.0,
        Some("address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form") => -3.0,
        Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th") => -5.0,
        _ => 0.0,
    }
}

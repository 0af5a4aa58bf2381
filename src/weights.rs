//! Class/id weighting and link density.
//!
//! Two signals used throughout scoring and cleaning: a fixed bonus/penalty
//! derived from an element's `class` and `id` attributes, and the fraction of
//! an element's text that sits inside hyperlinks.

use crate::dom::{self, NodeRef, Selection};
use crate::patterns::{HASH_URL, NEGATIVE_CLASS, POSITIVE_CLASS};

/// Weight contributed by a content-indicative class or id keyword.
const CLASS_WEIGHT: f64 = 25.0;

/// Discount applied to links that only target an in-page fragment.
const HASH_LINK_COEFFICIENT: f64 = 0.3;

/// Score adjustment derived from an element's `class` and `id` attributes.
///
/// Class and id are assessed independently, each adding +25 when it matches a
/// content-indicative keyword and -25 when it matches a boilerplate keyword,
/// so the result ranges over -50..=50.
#[must_use]
pub fn class_id_weight(node: &NodeRef) -> f64 {
    let sel = Selection::from(*node);
    let mut weight = 0.0;

    if let Some(class) = sel.attr("class") {
        if NEGATIVE_CLASS.is_match(&class) {
            weight -= CLASS_WEIGHT;
        }
        if POSITIVE_CLASS.is_match(&class) {
            weight += CLASS_WEIGHT;
        }
    }

    if let Some(id) = sel.attr("id") {
        if NEGATIVE_CLASS.is_match(&id) {
            weight -= CLASS_WEIGHT;
        }
        if POSITIVE_CLASS.is_match(&id) {
            weight += CLASS_WEIGHT;
        }
    }

    weight
}

/// Fraction of a node's text that sits inside `<a>` descendants, in 0.0..=1.0.
///
/// Links whose `href` is a bare `#fragment` count at 0.3 of their length, so
/// tables of contents are not penalized like external link farms. A node with
/// no text yields 0.0.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let text_len = dom::inner_text_len(node) as f64;
    if text_len == 0.0 {
        return 0.0;
    }

    let mut link_len = 0.0;
    let links = Selection::from(*node).select("a");
    for link in links.nodes() {
        let coefficient = match Selection::from(*link).attr("href") {
            Some(href) if HASH_URL.is_match(&href) => HASH_LINK_COEFFICIENT,
            _ => 1.0,
        };
        link_len += dom::inner_text_len(link) as f64 * coefficient;
    }

    link_len / text_len
}

//! Candidate collection pass.
//!
//! One forward traversal over the extraction root that prunes boilerplate
//! containers, normalizes text-bearing `<div>` elements into paragraphs, and
//! gathers the paragraph-like elements the scorer will work from.

use crate::dom::{self, NodeRef};
use crate::options::Options;
use crate::weights::link_density;

/// Tags that make a `<div>` a structural container rather than a text block.
const BLOCK_DESCENDANT_SELECTOR: &str = "blockquote, dl, div, img, ol, p, pre, table, ul";

/// Depth bound when checking for protective `<table>`/`<code>` ancestors.
const PROTECTED_ANCESTOR_DEPTH: usize = 3;

/// Link-density ceiling for unwrapping a div around a lone paragraph.
const UNWRAP_MAX_LINK_DENSITY: f64 = 0.25;

/// Walk the tree from `root`, prune and normalize in place, and return the
/// elements to score.
///
/// When `strip_unlikely` is set, elements whose class/id matches the unlikely
/// pattern are removed outright unless a countervailing pattern, a protective
/// ancestor, or their own tag saves them. Retry passes run with the flag off.
pub fn collect_candidates<'a>(
    root: &NodeRef<'a>,
    options: &Options,
    strip_unlikely: bool,
) -> Vec<NodeRef<'a>> {
    let mut to_score = Vec::new();
    let mut current = Some(*root);

    while let Some(node) = current {
        let Some(tag) = dom::tag_name(&node) else {
            current = dom::next_element(&node, false);
            continue;
        };

        if strip_unlikely && is_unlikely(&node, &tag, options) {
            current = dom::remove_and_next(&node);
            continue;
        }

        let node = if tag == "div" {
            normalize_div(&node)
        } else {
            node
        };

        if matches!(dom::tag_name(&node).as_deref(), Some("p" | "td" | "pre")) {
            to_score.push(node);
        }

        current = dom::next_element(&node, false);
    }

    to_score
}

fn is_unlikely(node: &NodeRef, tag: &str, options: &Options) -> bool {
    if tag == "body" || tag == "a" {
        return false;
    }

    let match_string = dom::match_string(node);
    if !options.unlikely_pattern().is_match(&match_string)
        || options.maybe_pattern().is_match(&match_string)
    {
        return false;
    }

    !dom::has_ancestor_tag(node, "table", PROTECTED_ANCESTOR_DEPTH)
        && !dom::has_ancestor_tag(node, "code", PROTECTED_ANCESTOR_DEPTH)
}

/// Rewrite a `<div>` toward paragraph semantics and return the node that now
/// occupies its place in the traversal.
///
/// A div wrapping exactly one low-link-density `<p>` with no direct text is
/// replaced by that paragraph. A div with no block-level descendants is
/// retagged to `<p>` in place.
fn normalize_div<'a>(div: &NodeRef<'a>) -> NodeRef<'a> {
    let children = dom::element_children(div);

    if children.len() == 1
        && dom::is_tag(&children[0], "p")
        && !dom::has_direct_text(div)
        && link_density(&children[0]) < UNWRAP_MAX_LINK_DENSITY
    {
        let paragraph = children[0];
        dom::replace_with(div, &paragraph);
        return paragraph;
    }

    if !dom::Selection::from(*div)
        .select(BLOCK_DESCENDANT_SELECTOR)
        .exists()
    {
        dom::rename(div, "p");
    }

    *div
}

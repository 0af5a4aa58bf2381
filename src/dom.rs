//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: attribute access, text
//! aggregation, and the pre-order traversal primitives the extraction passes
//! are built on. Keeping these in one place gives the rest of the crate a
//! consistent DOM API and keeps `dom_query` specifics out of the algorithm
//! modules.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for zero-copy text hand-off
pub use tendril::StrTendril;

use crate::patterns::NORMALIZE_WHITESPACE;

// === Attribute Operations ===

/// Combined `class id` string used by the candidate filter patterns.
#[must_use]
pub fn match_string(node: &NodeRef) -> String {
    let sel = Selection::from(*node);
    let class = sel.attr("class").unwrap_or_default();
    let id = sel.attr("id").unwrap_or_default();
    format!("{class} {id}")
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether a node is an element with the given (lowercase) tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.node_name()
        .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

// === Text Content ===

/// Trimmed, whitespace-normalized inner text of a node.
///
/// Runs of two or more whitespace characters collapse to a single space,
/// matching how every length/density heuristic in this crate measures text.
#[must_use]
pub fn inner_text(node: &NodeRef) -> String {
    let raw = node.text();
    NORMALIZE_WHITESPACE
        .replace_all(raw.trim(), " ")
        .into_owned()
}

/// Character count of a node's normalized inner text.
#[must_use]
pub fn inner_text_len(node: &NodeRef) -> usize {
    inner_text(node).chars().count()
}

/// True when the node has a non-whitespace text node as a direct child
/// (ignoring text inside child elements).
#[must_use]
pub fn has_direct_text(node: &NodeRef) -> bool {
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_text() && !c.text().trim().is_empty() {
            return true;
        }
        child = c.next_sibling();
    }
    false
}

// === Tree Navigation ===

/// Direct element children of a node, in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_element() {
            out.push(c);
        }
        child = c.next_sibling();
    }
    out
}

/// First element child, skipping text and comment nodes.
#[must_use]
pub fn first_element_child<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_element() {
            return Some(c);
        }
        child = c.next_sibling();
    }
    None
}

/// Pre-order successor among element nodes.
///
/// Descends into the first element child unless `skip_children`; otherwise
/// advances to the next element sibling, or walks up to the nearest ancestor
/// that has one. Returns `None` at the end of the traversal.
#[must_use]
pub fn next_element<'a>(node: &NodeRef<'a>, skip_children: bool) -> Option<NodeRef<'a>> {
    if !skip_children {
        if let Some(child) = first_element_child(node) {
            return Some(child);
        }
    }

    if let Some(sibling) = node.next_element_sibling() {
        return Some(sibling);
    }

    let mut current = node.parent();
    while let Some(parent) = current {
        if let Some(sibling) = parent.next_element_sibling() {
            return Some(sibling);
        }
        current = parent.parent();
    }
    None
}

/// Detach `node` and return the element traversal should visit next, as if
/// the node had been skipped without ever being entered.
///
/// Used for pruning during the candidate-collection pass so iteration never
/// has to restart.
#[must_use]
pub fn remove_and_next<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let next = next_element(node, true);
    Selection::from(*node).remove();
    next
}

/// Up to `max_depth` ancestor elements of a node, nearest first.
#[must_use]
pub fn ancestor_elements<'a>(node: &NodeRef<'a>, max_depth: usize) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut current = node.parent();
    while let Some(parent) = current {
        if !parent.is_element() {
            break;
        }
        out.push(parent);
        if out.len() == max_depth {
            break;
        }
        current = parent.parent();
    }
    out
}

/// True iff an ancestor up to and including depth `max_depth` has the given
/// tag name. The immediate parent sits at depth 0, so `max_depth` levels of
/// implied wrapper elements (like the `tbody` the parser inserts into
/// tables) still leave the tag reachable.
#[must_use]
pub fn has_ancestor_tag(node: &NodeRef, tag: &str, max_depth: usize) -> bool {
    let mut depth = 0;
    let mut current = node.parent();
    while let Some(parent) = current {
        if depth > max_depth {
            return false;
        }
        if is_tag(&parent, tag) {
            return true;
        }
        depth += 1;
        current = parent.parent();
    }
    false
}

// === Tree Manipulation ===

/// Rename an element in place, preserving children and attributes.
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Replace an element with another element from the same tree (the
/// replacement is detached from its old position first).
#[inline]
pub fn replace_with(old: &NodeRef, new: &NodeRef) {
    let new_sel = Selection::from(*new);
    Selection::from(*old).replace_with_selection(&new_sel);
}

/// Outer HTML of a single node.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}

/// Clone a document. Mutations to the clone never touch the original.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

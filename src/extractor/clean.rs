//! Conditional cleaning of the assembled region.
//!
//! Removes low-value subtrees (negative class weight, link-heavy, or nearly
//! empty), strips structurally disallowed tags, and drops presentation
//! classes the caller did not ask to keep.

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::weights::{class_id_weight, link_density};

/// Tag groups subject to conditional removal, evaluated in this order.
const CONDITIONAL_TAGS: [&str; 3] = ["table", "ul", "div"];

/// Tags always removed from the final region. `h1` goes too since the title
/// is extracted separately.
const DISALLOWED_TAGS: &str = "iframe, input, textarea, select, button, h1";

/// Subtrees with less text than this are considered empty shells.
const MIN_SUBTREE_TEXT: usize = 25;

/// Link-density ceiling for kept subtrees.
const MAX_SUBTREE_LINK_DENSITY: f64 = 0.5;

/// Clean the assembled region in place.
pub fn clean_region(region: &Document, options: &Options) {
    for tag in CONDITIONAL_TAGS {
        clean_conditionally(region, tag);
    }

    region.select(DISALLOWED_TAGS).remove();

    clean_classes(region, options);
}

/// Remove `tag` descendants that look like boilerplate: negative class/id
/// weight, mostly links, or too little text to matter. Children are
/// evaluated before their parents so nested removals settle bottom-up.
fn clean_conditionally(region: &Document, tag: &str) {
    let nodes = region
        .select(&format!("div.page {tag}"))
        .nodes()
        .to_vec();

    for node in nodes.iter().rev() {
        if class_id_weight(node) < 0.0 {
            Selection::from(*node).remove();
            continue;
        }

        if link_density(node) > MAX_SUBTREE_LINK_DENSITY
            || dom::inner_text_len(node) < MIN_SUBTREE_TEXT
        {
            Selection::from(*node).remove();
        }
    }
}

/// Strip `class` attributes inside the region, keeping only tokens named in
/// `classes_to_preserve`. The region wrapper itself is left alone.
fn clean_classes(region: &Document, options: &Options) {
    let nodes = region.select("div.page *").nodes().to_vec();

    for node in nodes {
        let sel = Selection::from(node);
        let Some(class) = sel.attr("class") else {
            continue;
        };

        let kept: Vec<&str> = class
            .split_whitespace()
            .filter(|token| options.classes_to_preserve.iter().any(|p| p == token))
            .collect();

        if kept.is_empty() {
            sel.remove_attr("class");
        } else {
            sel.set_attr("class", &kept.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn region_doc(inner: &str) -> Document {
        parse(&format!(
            r#"<html><body><div id="readability-page-1" class="page">{inner}</div></body></html>"#
        ))
    }

    #[test]
    fn negative_weight_subtree_is_removed() {
        let long_text = "plenty of perfectly ordinary article text here".repeat(3);
        let region = region_doc(&format!(
            r#"<div><p>{long_text}</p><div class="share">{long_text}</div></div>"#
        ));

        clean_region(&region, &Options::default());

        assert!(region.select(".share").is_empty());
        assert!(region.select("p").exists());
    }

    #[test]
    fn link_heavy_list_is_removed() {
        let region = region_doc(concat!(
            "<div><p>Real article text, long enough to stay around after cleaning.</p>",
            r#"<ul><li><a href="/a">one link</a></li><li><a href="/b">two link</a></li></ul></div>"#,
        ));

        clean_region(&region, &Options::default());

        assert!(region.select("ul").is_empty());
        assert!(region.select("p").exists());
    }

    #[test]
    fn nearly_empty_table_is_removed() {
        let region = region_doc(
            "<div><p>Real article text, long enough to stay around after cleaning.</p>\
             <table><tr><td>x</td></tr></table></div>",
        );

        clean_region(&region, &Options::default());

        assert!(region.select("table").is_empty());
    }

    #[test]
    fn text_heavy_table_survives() {
        let cell = "A table cell with a full sentence of meaningful content in it.";
        let region = region_doc(&format!(
            "<div><p>Real article text, long enough to stay around after cleaning.</p>\
             <table><tr><td>{cell}</td><td>{cell}</td></tr></table></div>"
        ));

        clean_region(&region, &Options::default());

        assert!(region.select("table").exists());
    }

    #[test]
    fn disallowed_tags_are_stripped() {
        let region = region_doc(
            "<div><h1>Leftover heading</h1><p>Body text that should remain in place.</p>\
             <iframe src=\"/embed\"></iframe><input type=\"text\"><button>Go</button></div>",
        );

        clean_region(&region, &Options::default());

        assert!(region.select("h1").is_empty());
        assert!(region.select("iframe").is_empty());
        assert!(region.select("input").is_empty());
        assert!(region.select("button").is_empty());
        assert!(region.select("p").exists());
    }

    #[test]
    fn classes_are_stripped_unless_preserved() {
        let region = region_doc(
            r#"<div class="story"><p class="lede">Text that is long enough to survive the
            conditional cleaning pass without being discarded.</p>
            <pre class="highlight lang-rust">let x = 1;</pre></div>"#,
        );

        let options = Options {
            classes_to_preserve: vec!["highlight".to_string()],
            ..Options::default()
        };
        clean_region(&region, &options);

        assert!(region.select("p").exists());
        assert!(region.select("p").attr("class").is_none());
        assert_eq!(
            region.select("pre").attr("class").as_deref(),
            Some("highlight")
        );
    }
}

//! Article title extraction.
//!
//! Works from the document `<title>` text and the page's headings. Site
//! names joined by separators (`Headline | Site`), pointless `Site: page`
//! prefixes, and over- or under-long titles are all reduced toward the
//! actual headline, with a final word-count sanity check that falls back to
//! the untouched original rather than return a fragment.

use crate::dom::{self, Document};
use crate::patterns::{
    NORMALIZE_WHITESPACE, TITLE_CUT_FINAL_PART, TITLE_CUT_FIRST_PART, TITLE_SEPARATOR,
    TITLE_SEPARATOR_RUN, WHITESPACE_RUN,
};

/// Titles longer than this are assumed to carry boilerplate.
const MAX_TITLE_LENGTH: usize = 150;

/// Titles shorter than this are assumed to be a site name, not a headline.
const MIN_TITLE_LENGTH: usize = 15;

/// Minimum word count a separator cut must leave behind.
const MIN_CUT_WORDS: usize = 3;

/// Word count at or below which a derived title is suspect.
const SUSPECT_WORD_COUNT: usize = 4;

/// Extract the most likely article title from a document.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    let original: String = doc.select("title").text().trim().to_string();
    let mut title = original.clone();
    let mut cut_at_separator = false;

    if TITLE_SEPARATOR.is_match(&title) {
        cut_at_separator = true;
        title = TITLE_CUT_FINAL_PART.replace(&original, "$1").into_owned();

        if word_count(&title) < MIN_CUT_WORDS {
            title = TITLE_CUT_FIRST_PART.replace(&original, "$1").into_owned();
        }
    } else if title.contains(": ") {
        if !heading_matches(doc, title.trim()) {
            title = text_after_colon(&original);
        }
    } else if title.chars().count() > MAX_TITLE_LENGTH || title.chars().count() < MIN_TITLE_LENGTH
    {
        let h1s = doc.select("h1");
        if h1s.length() == 1 {
            title = h1s.text().to_string();
        }
    }

    let title = NORMALIZE_WHITESPACE.replace_all(title.trim(), " ").into_owned();

    // A title reduced to a handful of words is only trusted when cutting a
    // standalone separator token is what shortened it.
    if word_count(&title) <= SUSPECT_WORD_COUNT && !separator_cut_explains(&original, cut_at_separator) {
        return original;
    }

    title
}

/// Counts words the way the rest of the heuristics do, including the empty
/// fragments a leading or trailing space produces. An empty string counts 1.
fn word_count(s: &str) -> usize {
    WHITESPACE_RUN.split(s).count()
}

/// True when a `H1`/`H2` heading's text equals the full trimmed title,
/// meaning the colon is part of the real headline.
fn heading_matches(doc: &Document, trimmed_title: &str) -> bool {
    doc.select("h1, h2")
        .nodes()
        .iter()
        .any(|h| dom::inner_text(h) == trimmed_title)
}

/// Prefer the text after the last colon; fall back to after the first when
/// that is too short, unless the prefix is long enough to be the headline.
fn text_after_colon(original: &str) -> String {
    let Some(last) = original.rfind(':') else {
        return original.to_string();
    };

    let first = match original.find(':') {
        Some(i) => i,
        None => return original.to_string(),
    };

    let candidate = &original[last + 1..];
    if word_count(candidate) < MIN_CUT_WORDS {
        return original[first + 1..].to_string();
    }

    if word_count(&original[..first]) > 5 {
        original.to_string()
    } else {
        candidate.to_string()
    }
}

/// A short derived title is acceptable when removing the separators from the
/// original drops its word count by exactly one, which is what cutting one
/// standalone separator token looks like.
fn separator_cut_explains(original: &str, cut_at_separator: bool) -> bool {
    if !cut_at_separator {
        return false;
    }
    let stripped = TITLE_SEPARATOR_RUN.replace_all(original, "");
    word_count(original) == word_count(stripped.trim()) + 1
}

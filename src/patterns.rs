//! Compiled regex patterns for content and title heuristics.
//!
//! All patterns are compiled once at startup using `LazyLock`. The candidate
//! keyword sets are English-centric and tuned for Western news/blog markup;
//! both can be overridden per extraction through [`crate::Options`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Candidate Filtering Patterns
// =============================================================================

/// Matches class/id strings of elements that are almost certainly chrome or
/// boilerplate rather than article content.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)-ad-|ai2html|banner|breadcrumbs|combx|comment|community|cover-wrap|disqus|extra|footer|gdpr|header|legends|menu|related|remark|replies|rss|shoutbox|sidebar|skyscraper|social|sponsor|supplemental|ad-break|agegate|pagination|pager|popup|yom-hierarchical-nav|yom-remote",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Countervailing pattern: class/id strings that rescue an otherwise unlikely
/// candidate (e.g. `sidebar-article-content`).
pub static MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)and|article|body|column|content|main|shadow").expect("MAYBE_CANDIDATE regex")
});

/// Class/id keywords that raise an element's weight.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story")
        .expect("POSITIVE_CLASS regex")
});

/// Class/id keywords that lower an element's weight.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)hidden|^hid$| hid$| hid |^hid |banner|combx|comment|com-|contact|foot|footer|footnote|gdpr|masthead|media|meta|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE_CLASS regex")
});

// =============================================================================
// Text Patterns
// =============================================================================

/// Matches runs of two or more whitespace characters for normalization.
pub static NORMALIZE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("NORMALIZE_WHITESPACE regex"));

/// Matches hrefs that are pure in-page fragments (`#section`).
pub static HASH_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#.+").expect("HASH_URL regex"));

/// Matches a sentence-ending period followed by a space or end of text.
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.( |$)").expect("SENTENCE_END regex"));

/// Splits text into words for the title word-count heuristics.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

// =============================================================================
// Title Patterns
// =============================================================================

/// A title separator surrounded by spaces: `|`, `-`, `\`, `/`, `>`, `»`.
pub static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [\|\-\\/>»] ").expect("TITLE_SEPARATOR regex"));

/// Everything up to the final separator (capture 1 keeps the leading part).
pub static TITLE_CUT_FINAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(.*)[\|\-\\/>»] .*").expect("TITLE_CUT_FINAL_PART regex"));

/// Everything after the first separator (capture 1 keeps the trailing part).
pub static TITLE_CUT_FIRST_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^\|\-\\/>»]*[\|\-\\/>»](.*)").expect("TITLE_CUT_FIRST_PART regex")
});

/// Any run of separator characters, used by the 4-word revert rule.
pub static TITLE_SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\|\-\\/>»]+").expect("TITLE_SEPARATOR_RUN regex"));

//! Result type for extraction output.
//!
//! This module defines the structured output from readability extraction:
//! the assembled content region plus the document metadata picked up along
//! the way. The result is immutable once constructed.

use serde::Serialize;

/// Result of readability extraction from an HTML document.
///
/// `content` preserves HTML structure; `text_content` is the flattened text
/// of the same region. `length` counts `text_content` characters and
/// `excerpt` holds its first 200 characters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionResult {
    /// Extracted article title.
    pub title: String,

    /// Main content as serialized HTML.
    pub content: String,

    /// Main content as plain text.
    pub text_content: String,

    /// Character count of `text_content`.
    pub length: usize,

    /// First 200 characters of `text_content`.
    pub excerpt: String,

    /// Author/byline, if the document declares one.
    pub byline: Option<String>,

    /// Text direction (`ltr`/`rtl`) from the `html` or `body` element.
    pub dir: Option<String>,

    /// Site name from metadata, or the source URL's hostname.
    pub site_name: Option<String>,
}

impl ExtractionResult {
    /// Build a result from an assembled content region and its plain text,
    /// deriving `length` and `excerpt`.
    #[must_use]
    pub(crate) fn from_content(title: String, content: String, text_content: String) -> Self {
        let length = text_content.chars().count();
        let excerpt = text_content.chars().take(200).collect();
        Self {
            title,
            content,
            text_content,
            length,
            excerpt,
            byline: None,
            dir: None,
            site_name: None,
        }
    }
}

//! # rs-readability
//!
//! Heuristic readability extraction: pulls the primary article content out
//! of arbitrary, noisy HTML with no manual markup hints, separating body
//! text from navigation, ads, comments, and boilerplate using DOM structure
//! and textual density alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::extract;
//!
//! let html = r#"<html><head><title>My Article | Some Site</title></head>
//! <body><article><p>Main content here, and plenty of it.</p></article></body></html>"#;
//!
//! let result = extract(html)?;
//! println!("Title: {}", result.title);
//! println!("Text: {}", result.text_content);
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## How it works
//!
//! A strict pass prunes containers whose class/id marks them as boilerplate,
//! scores paragraph-like elements by text length and structure, propagates
//! those scores up the ancestor chain, and assembles a content region around
//! the best-scoring candidate plus any qualifying siblings. When the region
//! comes up short of `Options::char_threshold`, the pass reruns relaxed, and
//! a selector-based fallback guarantees extraction degrades instead of
//! failing.

mod error;
mod extract;
mod fallback;
mod options;
mod patterns;
mod result;
mod title;

/// DOM operations adapter and pre-order traversal primitives.
pub mod dom;

/// Charset detection and decoding for raw HTML bytes.
pub mod encoding;

/// The scoring pipeline: collection, scoring, assembly, cleaning, retry.
pub mod extractor;

/// Document-level metadata (byline, site name, text direction).
pub mod metadata;

/// Class/id weighting and link-density heuristics.
pub mod weights;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractionResult;

/// Extracts the main article content from an HTML document using default
/// options.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let html = "<html><body><article><p>Content, at last.</p></article></body></html>";
/// let result = extract(html)?;
/// println!("{}", result.text_content);
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractionResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article content with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let html = "<html><body><article><p>Content, at last.</p></article></body></html>";
/// let options = Options {
///     char_threshold: 100,
///     classes_to_preserve: vec!["highlight".into()],
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractionResult> {
    extract::extract_content(html, options)
}

/// Extracts from raw HTML bytes, detecting the character encoding from meta
/// tags and decoding to UTF-8 first.
///
/// Undecodable byte sequences become U+FFFD replacement characters rather
/// than errors.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
///     <body><article><p>Caf\xE9 content, decoded correctly.</p></article></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.text_content.contains("Caf\u{e9}"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<ExtractionResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Byte-level variant of [`extract_with_options`].
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractionResult> {
    let html_str = encoding::decode_html(html);
    extract::extract_content(&html_str, options)
}

//! Configuration options for readability extraction.
//!
//! The `Options` struct controls extraction behavior. Most callers only ever
//! touch `char_threshold`; the pattern overrides exist because the default
//! candidate keyword sets are tuned for English class/id naming and sites
//! using other conventions need their own.

use regex::Regex;

/// Configuration options for readability extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     char_threshold: 100,
///     classes_to_preserve: vec!["highlight".into(), "code".into()],
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum plain-text length (characters) an assembled region must reach
    /// for an attempt to count as successful.
    ///
    /// Default: `500`
    pub char_threshold: usize,

    /// How many top-scoring candidates to keep while selecting the content
    /// region.
    ///
    /// Default: `5`
    pub n_top_candidates: usize,

    /// Class names kept on elements in the extracted content. All other
    /// class attributes are stripped from the output region.
    ///
    /// Default: empty
    pub classes_to_preserve: Vec<String>,

    /// Source URL of the document. When provided, the hostname is used as a
    /// `site_name` fallback when the document declares none.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Override for the unlikely-candidate class/id pattern.
    ///
    /// The built-in set is a fixed English keyword list; pages using
    /// non-Latin class naming conventions can supply their own.
    ///
    /// Default: `None` (use [`crate::patterns::UNLIKELY_CANDIDATES`])
    pub unlikely_candidates: Option<Regex>,

    /// Override for the countervailing maybe-a-candidate pattern.
    ///
    /// Default: `None` (use [`crate::patterns::MAYBE_CANDIDATE`])
    pub maybe_candidate: Option<Regex>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            char_threshold: 500,
            n_top_candidates: 5,
            classes_to_preserve: Vec::new(),
            url: None,
            unlikely_candidates: None,
            maybe_candidate: None,
        }
    }
}

impl Options {
    /// The active unlikely-candidate pattern (override or built-in).
    #[must_use]
    pub fn unlikely_pattern(&self) -> &Regex {
        self.unlikely_candidates
            .as_ref()
            .unwrap_or(&*crate::patterns::UNLIKELY_CANDIDATES)
    }

    /// The active maybe-a-candidate pattern (override or built-in).
    #[must_use]
    pub fn maybe_pattern(&self) -> &Regex {
        self.maybe_candidate
            .as_ref()
            .unwrap_or(&*crate::patterns::MAYBE_CANDIDATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.char_threshold, 500);
        assert_eq!(opts.n_top_candidates, 5);
        assert!(opts.classes_to_preserve.is_empty());
        assert!(opts.url.is_none());
        assert!(opts.unlikely_candidates.is_none());
        assert!(opts.maybe_candidate.is_none());
    }

    #[test]
    fn pattern_accessors_fall_back_to_builtins() {
        let opts = Options::default();
        assert!(opts.unlikely_pattern().is_match("sidebar"));
        assert!(opts.maybe_pattern().is_match("article"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn pattern_overrides_take_precedence() {
        let opts = Options {
            unlikely_candidates: Some(Regex::new("导航|侧边栏").unwrap()),
            ..Options::default()
        };

        assert!(opts.unlikely_pattern().is_match("导航"));
        assert!(!opts.unlikely_pattern().is_match("sidebar"));
    }
}

//! Error types for rs-readability.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document has no body, or the body contains no text at all.
    #[error("Document is empty")]
    EmptyDocument,

    /// No extractable content was found in the document.
    #[error("No extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

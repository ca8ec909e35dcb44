//! Error types for the planpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for planpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a plan document.
///
/// Every failure aborts the whole render; there is no partial output and no
/// retry. Requests fail in isolation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The required markdown content is absent or empty.
    #[error("Markdown content is required")]
    MissingInput,

    /// The risk profile failed boundary validation.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A chat message failed boundary validation.
    #[error("Invalid chat message: {0}")]
    InvalidMessage(String),

    /// The upstream text-generation service returned a non-success or
    /// malformed payload.
    #[error("Upstream generation error: {0}")]
    Upstream(String),

    /// Error while composing or serializing the document.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Text could not be encoded for the output document.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

//! Error types for pagefit.

use std::io;
use thiserror::Error;

/// Result type alias for pagefit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons page geometry could not be produced.
///
/// The contract entry point [`crate::extract_first_page_size`] collapses all of
/// these into [`crate::ExtractionResult::NotFound`]; the diagnostic APIs return
/// them so tooling can explain what went wrong.
#[derive(Error, Debug)]
pub enum Error {
    /// The document is missing or could not be read.
    #[error("File unavailable: {0}")]
    Io(#[from] io::Error),

    /// The probe window was empty.
    #[error("Document is empty")]
    Empty,

    /// No page-box declaration inside the probe window.
    #[error("No /MediaBox declaration within the first {0} bytes")]
    GeometryNotFound(usize),

    /// The page box exists but one of its sides is under one unit.
    #[error("Degenerate page box: {width} x {height}")]
    DegenerateBox {
        /// Absolute width of the box
        width: f64,
        /// Absolute height of the box
        height: f64,
    },

    /// Numeric text inside a matching declaration did not parse.
    #[error("Malformed number: {0}")]
    ParseMalformed(String),

    /// The document locator is neither a path nor a `file:` URI.
    #[error("Invalid document locator: {0}")]
    InvalidUri(String),

    /// Fit or probe options are inconsistent or unreadable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Geometry could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The rendering surface rejected an operation.
    #[error("Surface error: {0}")]
    Surface(String),
}

impl Error {
    /// Whether this error came from the filesystem rather than the content.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

//! Error types for the pdf-features library.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-features operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or rendering a document.
///
/// Classification never fails; only I/O, external tools and serialization do.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The pdftohtml XML could not be parsed.
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The ground-truth label file is not valid JSON for the label schema.
    #[error("Label file error: {0}")]
    Labels(#[from] serde_json::Error),

    /// An external tool exited unsuccessfully.
    #[error("{tool} failed with {status}")]
    ToolFailed {
        /// Name of the tool that was run
        tool: String,
        /// Exit status reported by the process
        status: std::process::ExitStatus,
    },

    /// Error during rendering (Markdown, HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

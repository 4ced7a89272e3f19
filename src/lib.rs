//! # pdf-features
//!
//! Layout-driven style inference for PDF text tokens.
//!
//! The library reads the XML written by poppler's `pdftohtml -xml`, computes
//! document-wide baselines (line spacing, right margin, dominant font size,
//! common text height), resolves each token's same-line neighbours and then
//! infers styles from geometry alone: superscripts and subscripts, heading
//! ranks, list nesting levels and hyperlinks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_features::{parse_xml_file, render};
//!
//! fn main() -> pdf_features::Result<()> {
//!     let mut doc = parse_xml_file("paper/etree.xml")?;
//!     doc.set_token_styles();
//!
//!     let markdown = render::to_markdown(&doc)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Ground-truth labels**: token types from `labels.json` files
//! - **Pluggable heading ranks**: implement [`TitlePolicy`] for custom rules
//! - **Multiple output formats**: Markdown, HTML, JSON
//! - **Parallel processing**: uses Rayon across pages

pub mod error;
pub mod labels;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use labels::{Label, LabelSource, PageLabels, PdfLabels};
pub use layout::{PdfModes, TokenContext};
pub use model::{DocumentState, Font, PdfFeatures, PdfPage, PdfToken, Rectangle, TokenType};
pub use parser::{contains_text, ParseOptions, PopplerParser};
pub use render::JsonFormat;
pub use style::{
    FontStyle, HeightRatioTitlePolicy, HyperlinkStyle, HyperlinkType, ListLevel, ScriptType,
    TitlePolicy, TitleType, TokenStyle,
};

use std::path::Path;

/// Read a pdftohtml XML file.
///
/// Empty or malformed XML yields an empty document; only I/O errors fail.
///
/// # Example
///
/// ```no_run
/// use pdf_features::parse_xml_file;
///
/// let doc = parse_xml_file("etree.xml").unwrap();
/// println!("Tokens: {}", doc.token_count());
/// ```
pub fn parse_xml_file<P: AsRef<Path>>(path: P) -> Result<PdfFeatures> {
    PdfFeatures::from_poppler_xml_file(path, ParseOptions::default())
}

/// Read a pdftohtml XML file with custom options.
pub fn parse_xml_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<PdfFeatures> {
    PdfFeatures::from_poppler_xml_file(path, options)
}

/// Read pdftohtml XML held in memory.
pub fn parse_xml_str(xml: &str) -> PdfFeatures {
    PdfFeatures::from_poppler_xml_str(xml, ParseOptions::default())
}

/// Run pdftohtml on a PDF and read its output.
///
/// Requires `pdftohtml` (poppler-utils) on the `PATH`, or set
/// [`ParseOptions::with_pdftohtml`].
///
/// # Example
///
/// ```no_run
/// use pdf_features::{parse_pdf, ParseOptions};
///
/// let options = ParseOptions::new().with_dataset("papers");
/// let doc = parse_pdf("paper.pdf", options).unwrap();
/// ```
pub fn parse_pdf<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<PdfFeatures> {
    PdfFeatures::from_pdf_path(path, options)
}

/// Read a pdftohtml XML file, style it and render it to Markdown.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut doc = parse_xml_file(path)?;
    doc.set_token_styles();
    render::to_markdown(&doc)
}

/// Read a pdftohtml XML file, style it and render it to HTML.
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut doc = parse_xml_file(path)?;
    doc.set_token_styles();
    render::to_html(&doc)
}

/// Read a pdftohtml XML file, style it and render it to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let mut doc = parse_xml_file(path)?;
    doc.set_token_styles();
    render::to_json(&doc, format)
}

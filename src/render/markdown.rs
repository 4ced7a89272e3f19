//! Markdown rendering for styled documents.

use crate::error::Result;
use crate::model::{PdfFeatures, PdfPage};

/// Convert a document to Markdown.
///
/// Each token becomes one block; tokens without content are skipped.
pub fn to_markdown(doc: &PdfFeatures) -> Result<String> {
    let pages: Vec<String> = doc
        .pages
        .iter()
        .map(render_page)
        .filter(|page| !page.is_empty())
        .collect();

    Ok(pages.join("\n\n"))
}

fn render_page(page: &PdfPage) -> String {
    page.tokens
        .iter()
        .filter(|token| !token.content.is_empty())
        .map(|token| token.content_markdown())
        .collect::<Vec<_>>()
        .join("\n\n")
}

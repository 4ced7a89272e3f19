//! HTML rendering for styled documents.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::{PdfFeatures, PdfToken};

/// Convert a document to an HTML fragment with one `<div>` per page.
///
/// Headings and nested list items keep their own elements; other tokens are
/// wrapped in `<p>`. Token text and link targets are escaped before the style
/// markup is added. Tokens without content are skipped.
pub fn to_html(doc: &PdfFeatures) -> Result<String> {
    let mut output = String::new();

    for page in &doc.pages {
        writeln!(output, "<div class=\"page\" data-page-number=\"{}\">", page.page_number)
            .map_err(|e| Error::Render(e.to_string()))?;
        for token in page.tokens.iter().filter(|t| !t.content.is_empty()) {
            writeln!(output, "{}", render_token(token)).map_err(|e| Error::Render(e.to_string()))?;
        }
        output.push_str("</div>\n");
    }

    Ok(output)
}

fn render_token(token: &PdfToken) -> String {
    let mut style = token.token_style.clone();
    style.hyperlink_style.link_text = escape_html(&style.hyperlink_style.link_text);
    style.hyperlink_style.link = escape_html(&style.hyperlink_style.link);
    let html = style.to_html(&escape_html(&token.content));
    let nested = style.list_level.depth().is_some_and(|depth| depth > 0);
    if style.title_type.level().is_some() || nested {
        html
    } else {
        format!("<p>{}</p>", html)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

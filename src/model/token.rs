//! Token-level types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Font, Rectangle, TokenType};
use crate::labels::Label;
use crate::layout::TokenContext;
use crate::style::TokenStyle;

/// A run of text read from one pdftohtml `<text>` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfToken {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Stable identifier
    pub id: String,
    /// Text content, trimmed
    pub content: String,
    /// Font shared with every other token using it
    pub font: Arc<Font>,
    /// Reading order index, or -1 when the source has none
    pub reading_order_no: i32,
    /// Bounding box in page coordinates
    pub bounding_box: Rectangle,
    /// Layout role
    pub token_type: TokenType,
    /// Inferred style
    pub token_style: TokenStyle,
    /// Same-line neighbourhood
    pub token_context: TokenContext,
    /// Score attached by downstream models
    pub prediction: Option<f64>,
}

impl PdfToken {
    /// Create a plain text token with default style and context.
    pub fn new(
        page_number: u32,
        id: impl Into<String>,
        content: impl Into<String>,
        font: Arc<Font>,
        bounding_box: Rectangle,
    ) -> Self {
        Self {
            page_number,
            id: id.into(),
            content: content.into(),
            font,
            reading_order_no: -1,
            bounding_box,
            token_type: TokenType::default(),
            token_style: TokenStyle::default(),
            token_context: TokenContext::default(),
            prediction: None,
        }
    }

    /// Whether the two tokens' vertical spans overlap.
    pub fn same_line(&self, other: &PdfToken) -> bool {
        !(self.bounding_box.bottom < other.bounding_box.top
            || other.bounding_box.bottom < self.bounding_box.top)
    }

    /// Content with every style decoration applied as Markdown.
    pub fn content_markdown(&self) -> String {
        self.token_style.to_markdown(&self.content)
    }

    /// Content with every style decoration applied as HTML.
    pub fn content_html(&self) -> String {
        self.token_style.to_html(&self.content)
    }

    /// Percentage of this token's box covered by a label.
    pub fn get_label_intersection_percentage(&self, label: &Label) -> f64 {
        self.bounding_box
            .get_intersection_percentage(&label.bounding_box())
    }
}

impl std::fmt::Display for PdfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PdfToken(page_number={}, content={}, bounding_box={:?}, token_type={:?})",
            self.page_number, self.content, self.bounding_box, self.token_type
        )
    }
}

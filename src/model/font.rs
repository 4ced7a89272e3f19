//! Font descriptions declared by pdftohtml `<fontspec>` elements.

use serde::{Deserialize, Serialize};

/// A font shared by every token that references its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Identifier referenced by `<text font="...">`
    pub font_id: String,
    /// Font size in points
    pub font_size: f64,
    /// Font family name (e.g., "Times-Bold")
    pub family: String,
    /// Text color in hex format (e.g., "#000000")
    pub color: String,
    /// Whether the family name marks the font as bold
    pub bold: bool,
    /// Whether the family name marks the font as italic
    pub italics: bool,
}

impl Font {
    /// Create a font, deriving bold/italic flags from the family name.
    pub fn new(
        font_id: impl Into<String>,
        font_size: f64,
        family: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let family = family.into();
        let lower = family.to_lowercase();
        let bold = lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
        let italics = lower.contains("italic") || lower.contains("oblique");

        Self {
            font_id: font_id.into(),
            font_size,
            family,
            color: color.into(),
            bold,
            italics,
        }
    }
}

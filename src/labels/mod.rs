//! Ground-truth token type labels.
//!
//! Label files are JSON documents with one entry per labelled page:
//!
//! ```json
//! {"pages": [{"number": 1, "labels": [
//!     {"top": 10, "left": 20, "width": 100, "height": 12, "label_type": 8, "metadata": ""}
//! ]}]}
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Rectangle, TokenType};

/// Source of ground-truth token types.
pub trait LabelSource {
    /// Whether the source labels no page at all.
    fn is_empty(&self) -> bool;

    /// Type of the label best overlapping `bounding_box` on `page_number`.
    fn label_type(&self, page_number: u32, bounding_box: &Rectangle) -> TokenType;
}

/// One labelled region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
    /// Index into [`TokenType::ALL`]
    pub label_type: usize,
    #[serde(default)]
    pub metadata: String,
}

impl Label {
    /// Region covered by the label.
    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::from_width_height(self.left, self.top, self.width, self.height)
    }

    /// Token type of the label; unknown indices fall back to text.
    pub fn token_type(&self) -> TokenType {
        TokenType::from_index(self.label_type).unwrap_or_else(|| {
            log::warn!("Unknown label type {}, using text", self.label_type);
            TokenType::default()
        })
    }
}

/// Labels of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLabels {
    /// Page number (1-indexed)
    pub number: u32,
    /// Labelled regions
    pub labels: Vec<Label>,
}

impl PageLabels {
    /// Type of the label covering the largest share of `bounding_box`.
    ///
    /// The first label wins ties; text when nothing overlaps.
    pub fn get_token_type(&self, bounding_box: &Rectangle) -> TokenType {
        let mut best_percentage = 0.0;
        let mut best_type = TokenType::default();

        for label in &self.labels {
            let percentage = bounding_box.get_intersection_percentage(&label.bounding_box());
            if best_percentage < percentage {
                best_percentage = percentage;
                best_type = label.token_type();
            }
        }

        best_type
    }
}

/// Labels of a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfLabels {
    /// Labelled pages
    pub pages: Vec<PageLabels>,
}

impl PdfLabels {
    /// Parse labels from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load labels from a file; a missing file means no labels.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No labeled data for {}", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl LabelSource for PdfLabels {
    fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn label_type(&self, page_number: u32, bounding_box: &Rectangle) -> TokenType {
        self.pages
            .iter()
            .find(|page| page.number == page_number)
            .map(|page| page.get_token_type(bounding_box))
            .unwrap_or_default()
    }
}

//! Heading ranks for title and section header tokens.

use serde::{Deserialize, Serialize};

use crate::model::TokenType;

use super::policy::{TITLE_H1_RATIO, TITLE_H2_RATIO, TITLE_H3_RATIO};

/// Heading rank of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TitleType {
    #[default]
    NoTitle,
    H1,
    H2,
    H3,
    H4,
}

impl TitleType {
    /// Heading level (1-4), or `None` for non-headings.
    pub fn level(self) -> Option<u8> {
        match self {
            TitleType::NoTitle => None,
            TitleType::H1 => Some(1),
            TitleType::H2 => Some(2),
            TitleType::H3 => Some(3),
            TitleType::H4 => Some(4),
        }
    }

    /// Prefix the content with `#` markers.
    pub fn get_styled_content_markdown(&self, content: &str) -> String {
        match self.level() {
            Some(level) => format!("{} {}", "#".repeat(level as usize), content),
            None => content.to_string(),
        }
    }

    /// Wrap the content in an `<hN>` element.
    pub fn get_styled_content_html(&self, content: &str) -> String {
        match self.level() {
            Some(level) => format!("<h{level}>{content}</h{level}>"),
            None => content.to_string(),
        }
    }
}

/// Decides heading ranks during the style pass.
pub trait TitlePolicy {
    /// Rank a token from its height, the document's common text height and
    /// its current type.
    fn title_type(&self, height: i32, common_text_height: f64, token_type: TokenType) -> TitleType;
}

/// Default policy: ranks section headers by how much taller they are than
/// body text. Document titles are always H1; other types are never headings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeightRatioTitlePolicy;

impl TitlePolicy for HeightRatioTitlePolicy {
    fn title_type(&self, height: i32, common_text_height: f64, token_type: TokenType) -> TitleType {
        match token_type {
            TokenType::Title => TitleType::H1,
            TokenType::SectionHeader => {
                if common_text_height <= 0.0 {
                    return TitleType::H4;
                }
                let ratio = f64::from(height) / common_text_height;
                if ratio >= TITLE_H1_RATIO {
                    TitleType::H1
                } else if ratio >= TITLE_H2_RATIO {
                    TitleType::H2
                } else if ratio >= TITLE_H3_RATIO {
                    TitleType::H3
                } else {
                    TitleType::H4
                }
            }
            _ => TitleType::NoTitle,
        }
    }
}

//! Layout labels a token can carry.

use serde::{Deserialize, Serialize};

/// The layout role of a token.
///
/// The declaration order matches the numeric label indices used in
/// ground-truth label files (`Formula` = 0 ... `PageFooter` = 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenType {
    Formula,
    Footnote,
    #[serde(rename = "List item")]
    ListItem,
    Table,
    Picture,
    Title,
    #[default]
    Text,
    #[serde(rename = "Page header")]
    PageHeader,
    #[serde(rename = "Section header")]
    SectionHeader,
    Caption,
    #[serde(rename = "Page footer")]
    PageFooter,
}

impl TokenType {
    /// All token types in label-index order.
    pub const ALL: [TokenType; 11] = [
        TokenType::Formula,
        TokenType::Footnote,
        TokenType::ListItem,
        TokenType::Table,
        TokenType::Picture,
        TokenType::Title,
        TokenType::Text,
        TokenType::PageHeader,
        TokenType::SectionHeader,
        TokenType::Caption,
        TokenType::PageFooter,
    ];

    /// Look up a token type by its label index.
    pub fn from_index(index: usize) -> Option<TokenType> {
        Self::ALL.get(index).copied()
    }

    /// Label index of this token type.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this type counts as running text for baseline statistics.
    pub fn is_text_like(self) -> bool {
        matches!(self, TokenType::Text | TokenType::ListItem)
    }
}

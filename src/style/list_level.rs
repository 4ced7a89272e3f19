//! List nesting inferred from the order in which bullet glyphs appear.

use serde::{Deserialize, Serialize};

use super::policy::{LIST_INDICATORS, MAX_LIST_LEVEL};

/// Nesting depth of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum ListLevel {
    /// Not a recognised list item
    #[default]
    NoLevel,
    Level0,
    Level1,
    Level2,
    Level3,
}

impl ListLevel {
    /// Level for a zero-based nesting depth, capped at the deepest level.
    pub fn from_depth(depth: usize) -> ListLevel {
        match depth.min(MAX_LIST_LEVEL) {
            0 => ListLevel::Level0,
            1 => ListLevel::Level1,
            2 => ListLevel::Level2,
            _ => ListLevel::Level3,
        }
    }

    /// Zero-based depth, or `None` for [`ListLevel::NoLevel`].
    pub fn depth(self) -> Option<usize> {
        match self {
            ListLevel::NoLevel => None,
            ListLevel::Level0 => Some(0),
            ListLevel::Level1 => Some(1),
            ListLevel::Level2 => Some(2),
            ListLevel::Level3 => Some(3),
        }
    }

    /// Assign levels to one contiguous run of list item contents.
    ///
    /// The first distinct indicator glyph seen in the run is level 0, the
    /// second level 1, and so on. A glyph keeps its level for the rest of the
    /// run. Indentation is not consulted.
    pub fn from_list_contents<S: AsRef<str>>(contents: &[S]) -> Vec<ListLevel> {
        let mut seen_indicators: Vec<char> = Vec::new();

        contents
            .iter()
            .map(|content| {
                let Some(first) = content.as_ref().trim_start().chars().next() else {
                    return ListLevel::NoLevel;
                };

                if !LIST_INDICATORS.contains(&first) {
                    return ListLevel::NoLevel;
                }

                let index = match seen_indicators.iter().position(|c| *c == first) {
                    Some(index) => index,
                    None => {
                        seen_indicators.push(first);
                        seen_indicators.len() - 1
                    }
                };

                ListLevel::from_depth(index)
            })
            .collect()
    }

    /// Replace the leading glyph with an indented Markdown bullet.
    ///
    /// The first character of the untrimmed content is dropped.
    pub fn get_styled_content_markdown(&self, content: &str) -> String {
        let Some(depth) = self.depth() else {
            return content.to_string();
        };
        let rest: String = content.chars().skip(1).collect();
        format!("{}- {}", "  ".repeat(depth), rest)
    }

    /// Nest the content in one `<ul><li>` wrapper per level.
    pub fn get_styled_content_html(&self, content: &str) -> String {
        let Some(depth) = self.depth() else {
            return content.to_string();
        };
        (0..depth).fold(content.to_string(), |html, _| {
            format!("<ul><li>{}</li></ul>", html)
        })
    }
}

impl From<ListLevel> for i8 {
    fn from(level: ListLevel) -> Self {
        level.depth().map_or(-1, |depth| depth as i8)
    }
}

impl TryFrom<i8> for ListLevel {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(ListLevel::NoLevel),
            0..=3 => Ok(ListLevel::from_depth(value as usize)),
            _ => Err(format!("invalid list level {}", value)),
        }
    }
}

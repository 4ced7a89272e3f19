//! Per-token style record and its Markdown/HTML decoration.

use serde::{Deserialize, Serialize};

use crate::model::Font;

use super::{HyperlinkStyle, ListLevel, ScriptType, TitleType};

/// Bold/italic emphasis of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FontStyle {
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italics: bool,
}

impl FontStyle {
    /// Emphasis from the font, strengthened by `<b>`/`<i>` markup that wraps
    /// the whole token content.
    pub fn from_node(node: roxmltree::Node<'_, '_>, content: &str, font: &Font) -> Self {
        Self {
            bold: font.bold || wraps_content(node, "b", content),
            italics: font.italics || wraps_content(node, "i", content),
        }
    }
}

fn wraps_content(node: roxmltree::Node<'_, '_>, tag: &str, content: &str) -> bool {
    if content.is_empty() {
        return false;
    }
    node.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .any(|n| {
            let text: String = n
                .descendants()
                .filter(|d| d.is_text())
                .filter_map(|d| d.text())
                .collect();
            text.trim() == content
        })
}

/// Style fields inferred for a token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenStyle {
    /// Heading rank
    pub title_type: TitleType,
    /// Superscript/subscript position
    pub script_type: ScriptType,
    /// List nesting depth
    pub list_level: ListLevel,
    /// Hyperlink role
    pub hyperlink_style: HyperlinkStyle,
    /// Bold/italic emphasis
    pub font: FontStyle,
}

impl TokenStyle {
    /// Initial style of a freshly read token: emphasis and hyperlink come from
    /// the markup, everything else waits for the style pass.
    pub fn from_node(node: roxmltree::Node<'_, '_>, content: &str, font: &Font) -> Self {
        Self {
            hyperlink_style: HyperlinkStyle::from_node(node, content),
            font: FontStyle::from_node(node, content, font),
            ..Default::default()
        }
    }

    /// Apply bold/italic Markdown emphasis.
    pub fn get_styled_content_markdown(&self, content: &str) -> String {
        match (self.font.bold, self.font.italics) {
            (true, true) => format!("***{}***", content),
            (true, false) => format!("**{}**", content),
            (false, true) => format!("*{}*", content),
            (false, false) => content.to_string(),
        }
    }

    /// Apply bold/italic HTML tags.
    pub fn get_styled_content_html(&self, content: &str) -> String {
        let mut html = content.to_string();
        if self.font.italics {
            html = format!("<i>{}</i>", html);
        }
        if self.font.bold {
            html = format!("<b>{}</b>", html);
        }
        html
    }

    /// Full Markdown decoration, in order: emphasis, heading, script, list,
    /// hyperlink.
    pub fn to_markdown(&self, content: &str) -> String {
        let markdown = self.get_styled_content_markdown(content);
        let markdown = self.title_type.get_styled_content_markdown(&markdown);
        let markdown = self.script_type.get_styled_content(&markdown);
        let markdown = self.list_level.get_styled_content_markdown(&markdown);
        self.hyperlink_style.get_styled_content_markdown(&markdown)
    }

    /// Full HTML decoration, in the same order as [`TokenStyle::to_markdown`].
    pub fn to_html(&self, content: &str) -> String {
        let html = self.get_styled_content_html(content);
        let html = self.title_type.get_styled_content_html(&html);
        let html = self.script_type.get_styled_content(&html);
        let html = self.list_level.get_styled_content_html(&html);
        self.hyperlink_style.get_styled_content_html(&html)
    }
}

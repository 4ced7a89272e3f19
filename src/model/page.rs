//! Page-level types.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::{PdfToken, Rectangle, TokenType};
use crate::layout::TokenContext;
use crate::style::{ListLevel, ScriptType, TitlePolicy};

/// A single page and its tokens in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfPage {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Page width in pdftohtml units
    pub page_width: i32,

    /// Page height in pdftohtml units
    pub page_height: i32,

    /// Tokens in document order
    pub tokens: Vec<PdfToken>,
}

impl PdfPage {
    /// Create an empty page.
    pub fn new(page_number: u32, page_width: i32, page_height: i32) -> Self {
        Self {
            page_number,
            page_width,
            page_height,
            tokens: Vec::new(),
        }
    }

    /// Check if the page has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Bounding boxes of every token, in document order.
    pub fn boxes(&self) -> Vec<Rectangle> {
        self.tokens.iter().map(|t| t.bounding_box).collect()
    }

    /// Recompute the same-line context of every token.
    pub fn resolve_contexts(&mut self) {
        let boxes = self.boxes();
        for token in &mut self.tokens {
            token.token_context = TokenContext::resolve(&token.bounding_box, &boxes);
        }
    }

    /// Index ranges of maximal runs of consecutive list item tokens.
    pub fn list_item_runs(&self) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start: Option<usize> = None;

        for (index, token) in self.tokens.iter().enumerate() {
            match (token.token_type == TokenType::ListItem, start) {
                (true, None) => start = Some(index),
                (false, Some(begin)) => {
                    runs.push(begin..index);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(begin) = start {
            runs.push(begin..self.tokens.len());
        }

        runs
    }

    /// Assign heading rank, script position and list level to every token.
    ///
    /// Tokens are classified in document order against one shrinking pool of
    /// page boxes (see [`ScriptType::from_text_height`]).
    pub fn apply_styles<P: TitlePolicy + ?Sized>(&mut self, common_text_height: f64, policy: &P) {
        let mut page_boxes = self.boxes();

        for token in &mut self.tokens {
            let style = &mut token.token_style;
            style.title_type = policy.title_type(
                token.bounding_box.height(),
                common_text_height,
                token.token_type,
            );
            style.script_type = ScriptType::from_text_height(
                common_text_height,
                &token.content,
                &token.bounding_box,
                &mut page_boxes,
                token.token_type,
            );
            style.list_level = ListLevel::NoLevel;
        }

        for run in self.list_item_runs() {
            let tokens = &mut self.tokens[run];
            let contents: Vec<&str> = tokens.iter().map(|t| t.content.as_str()).collect();
            let levels = ListLevel::from_list_contents(&contents);
            for (token, level) in tokens.iter_mut().zip(levels) {
                token.token_style.list_level = level;
            }
        }
    }
}

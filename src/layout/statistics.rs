//! Document-wide modal statistics used as reference scales by the classifiers.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::model::PdfPage;

use super::context::is_same_line;

/// Baselines of a document.
///
/// All values are modes rather than means so that outliers (titles, page
/// numbers, footnotes) do not skew them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PdfModes {
    /// Most common vertical gap between a token and the closest token below it
    pub lines_space_mode: i32,
    /// Most common distance between a line end and the page's right edge
    pub right_space_mode: i32,
    /// Size of the font used by the most tokens
    pub font_size_mode: Option<f64>,
    /// Most common height of text and list item tokens
    pub common_text_height: f64,
}

impl PdfModes {
    /// Compute the line spacing and right margin baselines.
    ///
    /// Both samples are seeded with a single `0`, so a document without any
    /// token below another yields a line spacing of `0`. Both baselines are
    /// `0` for documents without tokens.
    pub fn set_spacing_modes(&mut self, pages: &[PdfPage]) {
        let mut line_spaces = vec![0];
        let mut right_spaces = vec![0];

        for page in pages {
            for token in &page.tokens {
                let bottom = token.bounding_box.bottom;
                let right = token.bounding_box.right;

                let closest_below = page
                    .tokens
                    .iter()
                    .filter(|other| bottom < other.bounding_box.top)
                    .map(|other| other.bounding_box.top.saturating_sub(bottom))
                    .min();
                if let Some(space) = closest_below {
                    line_spaces.push(space);
                }

                let anything_on_the_right = page.tokens.iter().any(|other| {
                    is_same_line(&token.bounding_box, &other.bounding_box)
                        && right < other.bounding_box.left
                });
                if !anything_on_the_right {
                    right_spaces.push(right);
                }
            }
        }

        self.lines_space_mode = mode(line_spaces).unwrap_or_default();
        let has_tokens = pages.iter().any(|page| !page.tokens.is_empty());
        self.right_space_mode = match pages.first() {
            Some(first) if has_tokens => first
                .page_width
                .saturating_sub(mode(right_spaces).unwrap_or_default()),
            _ => 0,
        };
    }

    /// Record the size of the font carried by the most tokens.
    ///
    /// Leaves the baseline unset for documents without tokens.
    pub fn set_font_size_mode(&mut self, pages: &[PdfPage]) {
        let tokens = pages.iter().flat_map(|page| page.tokens.iter());
        let font_ids = tokens.clone().map(|token| token.font.font_id.as_str());

        let Some(font_id) = mode(font_ids) else {
            return;
        };

        self.font_size_mode = tokens
            .map(|token| &token.font)
            .find(|font| font.font_id == font_id)
            .map(|font| font.font_size);
    }

    /// Recompute the common height of text and list item tokens.
    ///
    /// Falls back to `0` when the document has no such tokens.
    pub fn set_common_text_height(&mut self, pages: &[PdfPage]) {
        let heights = pages
            .iter()
            .flat_map(|page| page.tokens.iter())
            .filter(|token| token.token_type.is_text_like())
            .map(|token| token.bounding_box.height());

        self.common_text_height = match mode(heights) {
            Some(height) => f64::from(height),
            None => {
                log::debug!("No text tokens, common text height defaults to 0");
                0.0
            }
        };
    }
}

/// Most frequent value; ties go to the value encountered first.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Copy + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for value in order {
        let count = counts[&value];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

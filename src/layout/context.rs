//! Nearest same-line neighbours of a token.

use serde::{Deserialize, Serialize};

use crate::model::Rectangle;

/// Horizontal extents of the tokens sharing a token's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenContext {
    /// Leftmost edge of the tokens on the left, or the token's own left edge
    pub left_of_token_on_the_left: i32,
    /// Rightmost edge of the tokens on the left
    pub right_of_token_on_the_left: Option<i32>,
    /// Leftmost edge of the tokens on the right
    pub left_of_token_on_the_right: Option<i32>,
    /// Rightmost edge of the tokens on the right
    pub right_of_token_on_the_right: Option<i32>,
}

impl TokenContext {
    /// Resolve the context of `token_box` among all boxes of its page.
    ///
    /// `page_boxes` may include `token_box` itself; it never counts as its
    /// own neighbour.
    pub fn resolve(token_box: &Rectangle, page_boxes: &[Rectangle]) -> Self {
        let mut context = TokenContext {
            left_of_token_on_the_left: token_box.left,
            ..Default::default()
        };

        let same_line: Vec<&Rectangle> = page_boxes
            .iter()
            .filter(|other| is_same_line(token_box, other))
            .collect();

        let on_the_left = same_line.iter().filter(|o| o.right < token_box.right);
        if let Some(right) = on_the_left.clone().map(|o| o.right).max() {
            context.right_of_token_on_the_left = Some(right);
            context.left_of_token_on_the_left = on_the_left
                .map(|o| o.left)
                .min()
                .unwrap_or(token_box.left);
        }

        let on_the_right = same_line.iter().filter(|o| token_box.left < o.left);
        context.left_of_token_on_the_right = on_the_right.clone().map(|o| o.left).min();
        context.right_of_token_on_the_right = on_the_right.map(|o| o.right).max();

        context
    }
}

/// Whether `other` shares the line of `token_box`.
///
/// The test window is the token's own vertical span, so the relation is not
/// symmetric: `other` is on the line when its top or bottom edge falls inside
/// that span.
pub fn is_same_line(token_box: &Rectangle, other: &Rectangle) -> bool {
    let top = token_box.top;
    let window_end = token_box.top.saturating_add(token_box.height());
    (top <= other.top && other.top < window_end) || (top < other.bottom && other.bottom <= window_end)
}

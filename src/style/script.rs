//! Superscript and subscript detection from page geometry.

use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::model::{Rectangle, TokenType};

use super::policy::{
    SCRIPT_LEFT_BOUND_RATIO, SCRIPT_LINE_HEIGHT_RATIO, SCRIPT_MAX_HEIGHT_RATIO,
    SCRIPT_MIN_VERTICAL_TOLERANCE,
};

/// Vertical position of a token relative to its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScriptType {
    /// Sits on the line
    #[default]
    Regular,
    /// Raised above the line (footnote markers, exponents)
    Superscript,
    /// Lowered below the line
    Subscript,
}

impl ScriptType {
    /// Classify one token.
    ///
    /// `page_boxes` is the working pool of boxes on the token's page. Once the
    /// geometric checks are reached, the first box equal to `token_box` is
    /// removed from the pool, so tokens classified later on the same page no
    /// longer see it as a neighbour. Callers classify a page's tokens in
    /// document order against one shared pool.
    pub fn from_text_height(
        common_text_height: f64,
        content: &str,
        token_box: &Rectangle,
        page_boxes: &mut Vec<Rectangle>,
        token_type: TokenType,
    ) -> ScriptType {
        if !is_numeric(content) {
            return ScriptType::Regular;
        }

        if f64::from(token_box.height()) >= SCRIPT_MAX_HEIGHT_RATIO * common_text_height {
            return ScriptType::Regular;
        }

        if matches!(
            token_type,
            TokenType::Table | TokenType::Formula | TokenType::Picture
        ) {
            return ScriptType::Regular;
        }

        let mut same_line_boxes = take_same_line_boxes(token_box, page_boxes);

        let Some(others) = Rectangle::merge_rectangles(&same_line_boxes) else {
            return ScriptType::Regular;
        };

        if f64::from(others.height()) * SCRIPT_LINE_HEIGHT_RATIO < f64::from(token_box.height()) {
            return ScriptType::Regular;
        }

        same_line_boxes.push(*token_box);
        let Some(line) = Rectangle::merge_rectangles(&same_line_boxes) else {
            return ScriptType::Regular;
        };
        let middle = f64::from(line.top) + f64::from(line.height()) / 2.0;

        let top = f64::from(token_box.top);
        let bottom = f64::from(token_box.bottom);

        if top >= middle {
            return ScriptType::Subscript;
        }
        if bottom <= middle {
            return ScriptType::Superscript;
        }

        if (top - middle).abs() >= (bottom - middle).abs() {
            ScriptType::Superscript
        } else {
            ScriptType::Subscript
        }
    }

    /// Wrap content in the matching `<sup>`/`<sub>` tag.
    ///
    /// Both Markdown and HTML output use the same inline tags.
    pub fn get_styled_content(&self, content: &str) -> String {
        match self {
            ScriptType::Superscript => format!("<sup>{}</sup>", content),
            ScriptType::Subscript => format!("<sub>{}</sub>", content),
            ScriptType::Regular => content.to_string(),
        }
    }
}

/// Remove the token's own box from the pool and return the boxes sharing its
/// line.
fn take_same_line_boxes(token_box: &Rectangle, page_boxes: &mut Vec<Rectangle>) -> Vec<Rectangle> {
    if let Some(position) = page_boxes.iter().position(|b| b == token_box) {
        page_boxes.remove(position);
    }

    let top = f64::from(token_box.top);
    let bottom = f64::from(token_box.bottom);
    let height_threshold = SCRIPT_MIN_VERTICAL_TOLERANCE.max((bottom - top) / 2.0);
    let left_threshold = f64::from(token_box.left) * SCRIPT_LEFT_BOUND_RATIO;

    page_boxes
        .iter()
        .filter(|each| {
            let separated = f64::from(each.bottom) < top + height_threshold
                || bottom - height_threshold < f64::from(each.top);
            !separated && f64::from(each.right) > left_threshold
        })
        .copied()
        .collect()
}

/// Whether every character is a digit: a decimal digit of any script, or a
/// superscript, subscript, circled or otherwise decorated single digit.
/// Fractions, roman numerals and other numeric letters are not digits.
fn is_numeric(content: &str) -> bool {
    !content.is_empty() && content.chars().all(is_digit)
}

fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
        || matches!(c,
            '\u{B2}' | '\u{B3}' | '\u{B9}'
            | '\u{1369}'..='\u{1371}'
            | '\u{19DA}'
            | '\u{2070}'
            | '\u{2074}'..='\u{2079}'
            | '\u{2080}'..='\u{2089}'
            | '\u{2460}'..='\u{2468}'
            | '\u{2474}'..='\u{247C}'
            | '\u{2488}'..='\u{2490}'
            | '\u{24EA}'
            | '\u{24F5}'..='\u{24FD}'
            | '\u{24FF}'
            | '\u{2776}'..='\u{277E}'
            | '\u{2780}'..='\u{2788}'
            | '\u{278A}'..='\u{2792}'
            | '\u{10A40}'..='\u{10A43}'
            | '\u{10E60}'..='\u{10E68}'
            | '\u{11052}'..='\u{1105A}'
            | '\u{1F100}'..='\u{1F10A}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Rectangle {
        Rectangle::from_coordinates(left, top, right, bottom)
    }

    #[test]
    fn test_non_numeric_is_regular() {
        let token = rect(100, 100, 104, 108);
        let mut pool = vec![token, rect(0, 100, 99, 130), rect(105, 100, 300, 130)];
        for content in ["a", "5a", "", "1.5", " 5"] {
            let script =
                ScriptType::from_text_height(20.0, content, &token, &mut pool, TokenType::Text);
            assert_eq!(script, ScriptType::Regular, "content {:?}", content);
        }
        // Regular early exits leave the pool untouched.
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_fractions_and_numerals_are_not_digits() {
        let token = rect(100, 100, 104, 108);
        for content in ["½", "Ⅲ", "ⅻ"] {
            let mut pool = vec![rect(0, 100, 99, 130), token, rect(105, 100, 300, 130)];
            let script =
                ScriptType::from_text_height(20.0, content, &token, &mut pool, TokenType::Text);
            assert_eq!(script, ScriptType::Regular, "content {:?}", content);
        }
    }

    #[test]
    fn test_digit_forms() {
        for content in ["7", "²", "₃", "①", "٣", "१०"] {
            assert!(is_numeric(content), "content {:?}", content);
        }
        for content in ["½", "Ⅲ", "⑩", "1.5", ""] {
            assert!(!is_numeric(content), "content {:?}", content);
        }

        let token = rect(100, 100, 104, 108);
        let mut pool = vec![rect(0, 100, 99, 130), token, rect(105, 100, 300, 130)];
        let script = ScriptType::from_text_height(20.0, "²", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Superscript);
    }

    #[test]
    fn test_tall_numbers_are_regular() {
        let token = rect(100, 100, 110, 118);
        let mut pool = vec![token, rect(0, 100, 99, 130)];
        let script = ScriptType::from_text_height(20.0, "12", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Regular);
    }

    #[test]
    fn test_tables_and_formulas_are_regular() {
        let token = rect(100, 100, 104, 108);
        for token_type in [TokenType::Table, TokenType::Formula, TokenType::Picture] {
            let mut pool = vec![token, rect(0, 100, 99, 130)];
            let script = ScriptType::from_text_height(20.0, "5", &token, &mut pool, token_type);
            assert_eq!(script, ScriptType::Regular);
        }
    }

    #[test]
    fn test_superscript_above_line_middle() {
        // Token height 8 is 40% of the common height 20; neighbours span 100..130.
        let token = rect(100, 100, 104, 108);
        let mut pool = vec![rect(0, 100, 99, 130), token, rect(105, 100, 300, 130)];
        let script = ScriptType::from_text_height(20.0, "5", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Superscript);
        assert!(!pool.contains(&token));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_subscript_below_line_middle() {
        let token = rect(100, 120, 104, 128);
        let mut pool = vec![rect(0, 100, 99, 130), token];
        let script = ScriptType::from_text_height(20.0, "2", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Subscript);
    }

    #[test]
    fn test_straddling_token_uses_distances() {
        // Line 100..130, middle 115: top is 12 away, bottom 1 away.
        let token = rect(100, 103, 104, 116);
        let mut pool = vec![rect(0, 100, 99, 130), token];
        let script = ScriptType::from_text_height(40.0, "3", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Superscript);

        // Line 100..130, middle 115: top 1 away, bottom 12 away.
        let token = rect(100, 114, 104, 127);
        let mut pool = vec![rect(0, 100, 99, 130), token];
        let script = ScriptType::from_text_height(40.0, "3", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Subscript);
    }

    #[test]
    fn test_no_neighbours_is_regular() {
        let token = rect(100, 100, 104, 108);
        let mut pool = vec![token, rect(0, 400, 99, 430)];
        let script = ScriptType::from_text_height(20.0, "5", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Regular);
    }

    #[test]
    fn test_far_left_neighbours_are_ignored() {
        // 0.7 * 200 = 140: a neighbour ending at 130 is too far left.
        let token = rect(200, 100, 204, 108);
        let mut pool = vec![rect(0, 100, 130, 130), token];
        let script = ScriptType::from_text_height(20.0, "5", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Regular);
    }

    #[test]
    fn test_similar_height_neighbours_are_regular() {
        // Neighbours merged height 9: 9 * 0.8 < 8 is false, 7.2 < 8 is true.
        let token = rect(100, 100, 104, 108);
        let mut pool = vec![rect(0, 100, 99, 109), token];
        let script = ScriptType::from_text_height(20.0, "5", &token, &mut pool, TokenType::Text);
        assert_eq!(script, ScriptType::Regular);
    }

    #[test]
    fn test_styled_content() {
        assert_eq!(ScriptType::Superscript.get_styled_content("1"), "<sup>1</sup>");
        assert_eq!(ScriptType::Subscript.get_styled_content("2"), "<sub>2</sub>");
        assert_eq!(ScriptType::Regular.get_styled_content("3"), "3");
    }
}

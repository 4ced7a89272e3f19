//! Axis-aligned bounding boxes in page coordinates.

use serde::{Deserialize, Serialize};

/// An axis-aligned box with integer page coordinates.
///
/// The y axis grows downwards, as in pdftohtml output: `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge
    pub right: i32,
    /// Bottom edge
    pub bottom: i32,
}

impl Rectangle {
    /// Create a rectangle from its edges, swapping reversed edges so the box
    /// stays well-formed.
    pub fn from_coordinates(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Create a rectangle from its top-left corner and size.
    ///
    /// Edges beyond the `i32` range saturate.
    pub fn from_width_height(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::from_coordinates(left, top, left.saturating_add(width), top.saturating_add(height))
    }

    /// Read the `left`, `top`, `width` and `height` attributes of a pdftohtml
    /// element. Missing or unparseable attributes count as 0; fractional
    /// values are truncated.
    pub fn from_poppler_tag(node: roxmltree::Node<'_, '_>) -> Self {
        let attribute = |name: &str| {
            node.attribute(name)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .map_or(0, |v| v as i32)
        };
        Self::from_width_height(
            attribute("left"),
            attribute("top"),
            attribute("width"),
            attribute("height"),
        )
    }

    /// Width of the box.
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Height of the box.
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Area of the box.
    pub fn area(&self) -> i64 {
        let width = i64::from(self.right) - i64::from(self.left);
        let height = i64::from(self.bottom) - i64::from(self.top);
        width * height
    }

    /// Percentage (0-100) of this box's area covered by `other`.
    ///
    /// Degenerate boxes with no area are never covered.
    pub fn get_intersection_percentage(&self, other: &Rectangle) -> f64 {
        let x1 = self.left.max(other.left);
        let y1 = self.top.max(other.top);
        let x2 = self.right.min(other.right);
        let y2 = self.bottom.min(other.bottom);

        if x2 <= x1 || y2 <= y1 || self.area() == 0 {
            return 0.0;
        }

        let intersection = (i64::from(x2) - i64::from(x1)) * (i64::from(y2) - i64::from(y1));
        100.0 * intersection as f64 / self.area() as f64
    }

    /// Smallest rectangle enclosing every input box, or `None` for no input.
    pub fn merge_rectangles<'a, I>(rectangles: I) -> Option<Rectangle>
    where
        I: IntoIterator<Item = &'a Rectangle>,
    {
        rectangles.into_iter().fold(None, |merged, each| {
            Some(match merged {
                None => *each,
                Some(acc) => Rectangle {
                    left: acc.left.min(each.left),
                    top: acc.top.min(each.top),
                    right: acc.right.max(each.right),
                    bottom: acc.bottom.max(each.bottom),
                },
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_edges_are_fixed() {
        let rect = Rectangle::from_coordinates(50, 40, 10, 20);
        assert_eq!(rect, Rectangle::from_coordinates(10, 20, 50, 40));
        assert_eq!(rect.width(), 40);
        assert_eq!(rect.height(), 20);
    }

    #[test]
    fn test_from_poppler_tag() {
        let xml = r#"<text top="101.6" left="128" width="285" height="17" font="0">x</text>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let rect = Rectangle::from_poppler_tag(doc.root_element());
        assert_eq!(rect, Rectangle::from_coordinates(128, 101, 413, 118));

        let doc = roxmltree::Document::parse("<text>x</text>").unwrap();
        assert_eq!(Rectangle::from_poppler_tag(doc.root_element()).area(), 0);
    }

    #[test]
    fn test_huge_coordinates_saturate() {
        let rect = Rectangle::from_width_height(i32::MAX - 10, 0, 100, 10);
        assert_eq!(rect.right, i32::MAX);
        assert_eq!(rect.width(), 10);

        let wide = Rectangle::from_coordinates(i32::MIN, 0, i32::MAX, 10);
        assert_eq!(wide.width(), i32::MAX);
        assert_eq!(wide.area(), ((1i64 << 32) - 1) * 10);
        assert_eq!(wide.get_intersection_percentage(&wide), 100.0);

        let xml = r#"<text top="10" left="3e9" width="100" height="12" font="0">x</text>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let rect = Rectangle::from_poppler_tag(doc.root_element());
        assert_eq!(rect.left, i32::MAX);
        assert_eq!(rect.right, i32::MAX);
        assert_eq!(rect.height(), 12);
    }

    #[test]
    fn test_intersection_percentage() {
        let token = Rectangle::from_width_height(0, 0, 10, 10);
        let full = Rectangle::from_width_height(-5, -5, 20, 20);
        let half = Rectangle::from_width_height(5, 0, 10, 10);
        let apart = Rectangle::from_width_height(100, 100, 5, 5);

        assert_eq!(token.get_intersection_percentage(&full), 100.0);
        assert_eq!(token.get_intersection_percentage(&half), 50.0);
        assert_eq!(token.get_intersection_percentage(&apart), 0.0);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rectangle::from_width_height(0, 0, 10, 10);
        let b = Rectangle::from_width_height(10, 0, 10, 10);
        assert_eq!(a.get_intersection_percentage(&b), 0.0);
    }

    #[test]
    fn test_merge_rectangles() {
        let boxes = [
            Rectangle::from_coordinates(10, 20, 30, 40),
            Rectangle::from_coordinates(5, 25, 20, 60),
        ];
        let merged = Rectangle::merge_rectangles(&boxes).unwrap();
        assert_eq!(merged, Rectangle::from_coordinates(5, 20, 30, 60));
        assert!(Rectangle::merge_rectangles(&Vec::<Rectangle>::new()).is_none());
    }
}

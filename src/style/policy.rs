//! Tunable thresholds shared by the style classifiers.

/// A numeric token shorter than this fraction of the common text height is a
/// script candidate.
pub const SCRIPT_MAX_HEIGHT_RATIO: f64 = 0.8;

/// A script candidate must be shorter than this fraction of its line's
/// neighbours merged together.
pub const SCRIPT_LINE_HEIGHT_RATIO: f64 = 0.8;

/// Neighbours must reach right of this fraction of the token's left edge.
pub const SCRIPT_LEFT_BOUND_RATIO: f64 = 0.7;

/// Smallest vertical tolerance, in points, when matching script neighbours.
pub const SCRIPT_MIN_VERTICAL_TOLERANCE: f64 = 3.0;

/// Glyphs that open a list item.
pub const LIST_INDICATORS: [char; 11] = [
    '-', '•', '\u{F0B7}', '‣', '⁃', '⁌', '⁍', '◘', '◦', '⦾', '⦿',
];

/// Deepest list nesting level assigned.
pub const MAX_LIST_LEVEL: usize = 3;

/// Link targets starting with this prefix are web urls.
pub const WEB_LINK_PREFIX: &str = "http";

/// Section headers at least this many times the common text height are H1.
pub const TITLE_H1_RATIO: f64 = 2.0;

/// Section headers at least this many times the common text height are H2.
pub const TITLE_H2_RATIO: f64 = 1.5;

/// Section headers at least this many times the common text height are H3.
pub const TITLE_H3_RATIO: f64 = 1.2;

//! Width-aware text helpers used by the block builders.

use unicode_width::UnicodeWidthStr;

/// Builds a horizontal rule of `width` repetitions of `ch`.
///
/// # Example
///
/// ```rust
/// use flourish::rule_line;
///
/// assert_eq!(rule_line('─', 4), "────");
/// ```
pub fn rule_line(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Centers `s` within `width` display columns by left-padding with spaces.
///
/// Uses Unicode width calculations so CJK and other wide characters center
/// correctly. Strings at least `width` wide are returned unchanged, and no
/// trailing padding is emitted.
///
/// # Example
///
/// ```rust
/// use flourish::center_to_width;
///
/// assert_eq!(center_to_width("TITLE", 11), "   TITLE");
/// assert_eq!(center_to_width("TITLE", 3), "TITLE");
/// ```
pub fn center_to_width(s: &str, width: usize) -> String {
    let text_width = s.width();
    if text_width >= width {
        return s.to_string();
    }

    let left = (width - text_width) / 2;
    format!("{}{}", " ".repeat(left), s)
}

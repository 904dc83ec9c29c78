//! The fixed table of named styles.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::StyleEffect;
use crate::color::palette;
use crate::error::FormatError;

static STYLES: Lazy<BTreeMap<&'static str, StyleEffect>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "title-large",
            StyleEffect::new()
                .bold(true)
                .font_size(28)
                .foreground(palette::DARK_GRAY)
                .font_family("Montserrat"),
        ),
        (
            "section-header",
            StyleEffect::new()
                .bold(true)
                .font_size(18)
                .foreground(palette::BLUE)
                .font_family("Montserrat"),
        ),
        (
            "subsection-header",
            StyleEffect::new()
                .bold(true)
                .font_size(14)
                .foreground(palette::MEDIUM_GRAY)
                .font_family("Open Sans"),
        ),
        (
            "quote-header",
            StyleEffect::new()
                .italic(true)
                .font_size(16)
                .foreground(palette::MEDIUM_GRAY)
                .font_family("Georgia"),
        ),
        (
            "highlight-yellow",
            StyleEffect::new().background(palette::HIGHLIGHT_YELLOW),
        ),
        ("highlight-orange", StyleEffect::new().background(palette::GOLD)),
        ("highlight-blue", StyleEffect::new().background(palette::SKY_BLUE)),
        (
            "highlight-green",
            StyleEffect::new().background(palette::PALE_GREEN),
        ),
        ("highlight-pink", StyleEffect::new().background(palette::PINK)),
        ("bold-red", StyleEffect::new().bold(true).foreground(palette::RED)),
        ("bold-blue", StyleEffect::new().bold(true).foreground(palette::BLUE)),
        (
            "bold-green",
            StyleEffect::new().bold(true).foreground(palette::GREEN),
        ),
        (
            "bold-orange",
            StyleEffect::new().bold(true).foreground(palette::ORANGE),
        ),
    ])
});

/// Resolves a style name to its effect.
///
/// The table is fixed at compile time; names outside it fail with
/// [`FormatError::UnknownStyle`].
///
/// # Example
///
/// ```rust
/// use flourish::{palette, resolve_style};
///
/// let effect = resolve_style("highlight-yellow").unwrap();
/// assert_eq!(effect.background, Some(palette::HIGHLIGHT_YELLOW));
///
/// assert!(resolve_style("nonsense").is_err());
/// ```
pub fn resolve_style(name: &str) -> Result<&'static StyleEffect, FormatError> {
    STYLES
        .get(name)
        .ok_or_else(|| FormatError::UnknownStyle(name.to_string()))
}

/// Returns all registered style names in sorted order.
pub fn style_names() -> impl Iterator<Item = &'static str> {
    STYLES.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in style_names() {
            let effect = resolve_style(name).unwrap();
            assert!(!effect.is_empty(), "style {name:?} touches nothing");
        }
    }

    #[test]
    fn test_unknown_name_fails() {
        let err = resolve_style("nonsense").unwrap_err();
        assert!(matches!(err, FormatError::UnknownStyle(name) if name == "nonsense"));
    }

    #[test]
    fn test_headers_set_full_typography() {
        let effect = resolve_style("title-large").unwrap();
        assert_eq!(effect.bold, Some(true));
        assert_eq!(effect.font_size, Some(28));
        assert_eq!(effect.font_family.as_deref(), Some("Montserrat"));
        assert_eq!(effect.foreground, Some(palette::DARK_GRAY));
        assert!(effect.background.is_none());
    }

    #[test]
    fn test_quote_header_is_italic_not_bold() {
        let effect = resolve_style("quote-header").unwrap();
        assert_eq!(effect.italic, Some(true));
        assert!(effect.bold.is_none());
    }

    #[test]
    fn test_highlights_only_touch_background() {
        for name in ["highlight-yellow", "highlight-orange", "highlight-blue", "highlight-green", "highlight-pink"] {
            let effect = resolve_style(name).unwrap();
            assert!(effect.background.is_some());
            assert!(effect.bold.is_none());
            assert!(effect.foreground.is_none());
            assert!(effect.font_size.is_none());
        }
    }

    #[test]
    fn test_bold_colors_touch_bold_and_foreground() {
        for name in ["bold-red", "bold-blue", "bold-green", "bold-orange"] {
            let effect = resolve_style(name).unwrap();
            assert_eq!(effect.bold, Some(true));
            assert!(effect.foreground.is_some());
            assert!(effect.background.is_none());
        }
    }

    #[test]
    fn test_style_count() {
        assert_eq!(style_names().count(), 13);
    }
}

//! The attribute-change record applied by styling actions.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// An immutable record of optional text attributes.
///
/// Unset fields mean "do not touch this attribute": applying an effect
/// merges it over whatever formatting the text already has, it never
/// resets attributes to defaults. Applying the same effect twice leaves
/// the text in the same state as applying it once.
///
/// # Example
///
/// ```rust
/// use flourish::{palette, StyleEffect};
///
/// let effect = StyleEffect::new()
///     .bold(true)
///     .font_size(18)
///     .foreground(palette::BLUE);
///
/// assert_eq!(effect.bold, Some(true));
/// assert_eq!(effect.italic, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleEffect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl StyleEffect {
    /// Creates an effect that touches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bold flag, returning an updated effect for chaining.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Sets the italic flag.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Sets the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the font size in points.
    pub fn font_size(mut self, points: u8) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Sets the foreground color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Sets the background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.font_family.is_none()
            && self.font_size.is_none()
            && self.foreground.is_none()
            && self.background.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    #[test]
    fn test_new_is_empty() {
        assert!(StyleEffect::new().is_empty());
    }

    #[test]
    fn test_builder_sets_only_named_fields() {
        let effect = StyleEffect::new().italic(true).font_family("Georgia");

        assert_eq!(effect.italic, Some(true));
        assert_eq!(effect.font_family.as_deref(), Some("Georgia"));
        assert_eq!(effect.bold, None);
        assert_eq!(effect.font_size, None);
        assert_eq!(effect.foreground, None);
        assert_eq!(effect.background, None);
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let effect = StyleEffect::new().background(palette::HIGHLIGHT_YELLOW);
        let json = serde_json::to_value(&effect).unwrap();

        assert_eq!(json, serde_json::json!({ "background": "#FFFF00" }));
    }

    #[test]
    fn test_deserialize_partial_record() {
        let effect: StyleEffect =
            serde_json::from_str(r##"{ "bold": true, "foreground": "#FF4136" }"##).unwrap();

        assert_eq!(effect.bold, Some(true));
        assert_eq!(effect.foreground, Some(palette::RED));
        assert!(effect.background.is_none());
    }
}

//! Callout box builder.

use super::types::{CellSpec, Emphasis, Padding, TableBlock};
use crate::color::{palette, Color};
use crate::selection::Span;
use crate::style::StyleEffect;

const DEFAULT_BODY: &str = "Your content here...";

/// The five callout flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    Info,
    Warning,
    Success,
    Alert,
    Quote,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 5] = [
        CalloutKind::Info,
        CalloutKind::Warning,
        CalloutKind::Success,
        CalloutKind::Alert,
        CalloutKind::Quote,
    ];

    /// The default title line.
    pub fn default_title(&self) -> &'static str {
        match self {
            CalloutKind::Info => "ℹ️ INFO",
            CalloutKind::Warning => "⚠️ WARNING",
            CalloutKind::Success => "✅ SUCCESS",
            CalloutKind::Alert => "🚨 ALERT",
            CalloutKind::Quote => "💬 QUOTE",
        }
    }

    /// Border color, also used for the title emphasis.
    pub fn border_color(&self) -> Color {
        match self {
            CalloutKind::Info => palette::BLUE,
            CalloutKind::Warning => palette::ORANGE,
            CalloutKind::Success => palette::GREEN,
            CalloutKind::Alert => palette::RED,
            CalloutKind::Quote => palette::MEDIUM_GRAY,
        }
    }

    /// Pale fill color for the cell background.
    pub fn fill_color(&self) -> Color {
        match self {
            CalloutKind::Info => Color::rgb(0xE3, 0xF2, 0xFD),
            CalloutKind::Warning => Color::rgb(0xFF, 0xF3, 0xE0),
            CalloutKind::Success => Color::rgb(0xE8, 0xF5, 0xE9),
            CalloutKind::Alert => Color::rgb(0xFF, 0xEB, 0xEE),
            CalloutKind::Quote => palette::PALE_GRAY,
        }
    }
}

/// Builder for a bordered, colored single-cell callout box.
///
/// # Example
///
/// ```rust
/// use flourish::{Callout, CalloutKind};
///
/// let block = Callout::new(CalloutKind::Warning)
///     .body("Submit the permit form before Friday.")
///     .build();
///
/// assert_eq!(block.num_rows(), 1);
/// assert_eq!(block.border_width, 2);
/// assert!(block.cell(0, 0).unwrap().text.starts_with("⚠️ WARNING"));
/// ```
#[derive(Debug, Clone)]
pub struct Callout {
    kind: CalloutKind,
    title: Option<String>,
    body: Option<String>,
}

impl Callout {
    /// Starts a callout of the given kind.
    pub fn new(kind: CalloutKind) -> Self {
        Self {
            kind,
            title: None,
            body: None,
        }
    }

    /// Overrides the title line.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the placeholder body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Produces the table description: a 1×1 cell with the kind's fill,
    /// a 2 pt border in the kind's color, and bold 12 pt emphasis over
    /// the title line.
    pub fn build(self) -> TableBlock {
        let border = self.kind.border_color();
        let title = self
            .title
            .unwrap_or_else(|| self.kind.default_title().to_string());
        let body = self.body.unwrap_or_else(|| DEFAULT_BODY.to_string());
        let text = format!("{title}\n\n{body}");

        let title_chars = title.chars().count();
        let emphasis = (title_chars > 0).then(|| Emphasis {
            span: Span::new(0, title_chars - 1),
            effect: StyleEffect::new()
                .bold(true)
                .foreground(border)
                .font_size(12),
        });

        TableBlock {
            rows: vec![vec![CellSpec {
                text,
                background: Some(self.kind.fill_color()),
                padding: Padding::new(10, 10, 15, 15),
                emphasis,
            }]],
            border_color: Some(border),
            border_width: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_builds_a_single_cell() {
        for kind in CalloutKind::ALL {
            let block = Callout::new(kind).build();

            assert_eq!(block.num_rows(), 1);
            assert_eq!(block.num_columns(), 1);
            assert_eq!(block.border_width, 2);
            assert_eq!(block.border_color, Some(kind.border_color()));

            let cell = block.cell(0, 0).unwrap();
            assert_eq!(cell.background, Some(kind.fill_color()));
            assert_eq!(cell.padding, Padding::new(10, 10, 15, 15));
        }
    }

    #[test]
    fn test_emphasis_covers_exactly_the_title_line() {
        let block = Callout::new(CalloutKind::Info).build();
        let cell = block.cell(0, 0).unwrap();

        let title = CalloutKind::Info.default_title();
        let emphasis = cell.emphasis.as_ref().unwrap();

        assert_eq!(emphasis.span.start, 0);
        assert_eq!(emphasis.span.len(), title.chars().count());

        let emphasized: String = cell
            .text
            .chars()
            .take(emphasis.span.len())
            .collect();
        assert_eq!(emphasized, title);
    }

    #[test]
    fn test_emphasis_effect_matches_border() {
        let block = Callout::new(CalloutKind::Alert).build();
        let effect = &block.cell(0, 0).unwrap().emphasis.as_ref().unwrap().effect;

        assert_eq!(effect.bold, Some(true));
        assert_eq!(effect.font_size, Some(12));
        assert_eq!(effect.foreground, Some(CalloutKind::Alert.border_color()));
        assert!(effect.background.is_none());
    }

    #[test]
    fn test_custom_title_and_body() {
        let block = Callout::new(CalloutKind::Quote)
            .title("REMEMBER")
            .body("Be polite, be brief, be persistent.")
            .build();
        let cell = block.cell(0, 0).unwrap();

        assert_eq!(cell.text, "REMEMBER\n\nBe polite, be brief, be persistent.");
        assert_eq!(cell.emphasis.as_ref().unwrap().span.len(), 8);
    }

    #[test]
    fn test_empty_title_has_no_emphasis() {
        let block = Callout::new(CalloutKind::Info).title("").build();
        assert!(block.cell(0, 0).unwrap().emphasis.is_none());
    }
}

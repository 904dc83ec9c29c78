//! Document-wide theme application.

use super::theme::{DocTheme, Role};
use crate::error::HostError;
use crate::host::Paragraph;

/// One paragraph the host refused to recolor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFailure {
    /// Position of the paragraph in the visited sequence.
    pub index: usize,
    pub error: HostError,
}

/// Outcome of a theme pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeReport {
    /// Paragraphs recolored successfully.
    pub recolored: usize,
    /// Paragraphs the host rejected, in visit order.
    pub failures: Vec<ThemeFailure>,
}

impl ThemeReport {
    /// Total paragraphs visited.
    pub fn visited(&self) -> usize {
        self.recolored + self.failures.len()
    }

    /// Returns true if every paragraph was recolored.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Recolors every paragraph according to its structural role.
///
/// Visits each paragraph exactly once, in order; paragraphs are
/// independent, so a host failure on one is recorded in the report and
/// the pass continues with the rest. Structural roles are read, never
/// written.
///
/// # Example
///
/// ```rust,ignore
/// let theme = DocTheme::preset("vivid")?;
/// let report = apply_theme(document.paragraphs_mut(), &theme);
/// if !report.is_clean() {
///     host.notify(format!("{} paragraphs could not be recolored", report.failures.len()));
/// }
/// ```
pub fn apply_theme<'a, P, I>(paragraphs: I, theme: &DocTheme) -> ThemeReport
where
    P: Paragraph + 'a,
    I: IntoIterator<Item = &'a mut P>,
{
    let mut report = ThemeReport::default();

    for (index, paragraph) in paragraphs.into_iter().enumerate() {
        let color = theme.color_for(Role::from(paragraph.heading()));
        match paragraph.set_foreground_color(color) {
            Ok(()) => report.recolored += 1,
            Err(error) => report.failures.push(ThemeFailure { index, error }),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::host::HeadingLevel;

    struct FakePara {
        heading: HeadingLevel,
        color: Option<Color>,
        locked: bool,
    }

    impl FakePara {
        fn new(heading: HeadingLevel) -> Self {
            Self {
                heading,
                color: None,
                locked: false,
            }
        }

        fn locked(heading: HeadingLevel) -> Self {
            Self {
                locked: true,
                ..Self::new(heading)
            }
        }
    }

    impl Paragraph for FakePara {
        fn heading(&self) -> HeadingLevel {
            self.heading
        }

        fn set_foreground_color(&mut self, color: Color) -> Result<(), HostError> {
            if self.locked {
                return Err(HostError::new("paragraph is read-only"));
            }
            self.color = Some(color);
            Ok(())
        }
    }

    fn test_theme() -> DocTheme {
        DocTheme::from_yaml_str(
            "title: \"#111111\"\nheaders: \"#222222\"\naccent: \"#333333\"\nbody: \"#444444\"\n",
        )
        .unwrap()
    }

    #[test]
    fn test_roles_map_to_theme_colors() {
        let mut paragraphs = vec![
            FakePara::new(HeadingLevel::Title),
            FakePara::new(HeadingLevel::Heading1),
            FakePara::new(HeadingLevel::Heading3),
            FakePara::new(HeadingLevel::Normal),
        ];

        let report = apply_theme(paragraphs.iter_mut(), &test_theme());

        assert_eq!(report.visited(), 4);
        assert!(report.is_clean());

        let colors: Vec<String> = paragraphs
            .iter()
            .map(|p| p.color.unwrap().hex())
            .collect();
        assert_eq!(colors, ["#111111", "#222222", "#333333", "#444444"]);
    }

    #[test]
    fn test_heading2_and_heading4_share_buckets() {
        let mut paragraphs = vec![
            FakePara::new(HeadingLevel::Heading2),
            FakePara::new(HeadingLevel::Heading4),
        ];

        apply_theme(paragraphs.iter_mut(), &test_theme());

        assert_eq!(paragraphs[0].color.unwrap().hex(), "#222222");
        assert_eq!(paragraphs[1].color.unwrap().hex(), "#333333");
    }

    #[test]
    fn test_failure_does_not_stop_the_pass() {
        let mut paragraphs = vec![
            FakePara::new(HeadingLevel::Normal),
            FakePara::locked(HeadingLevel::Normal),
            FakePara::new(HeadingLevel::Normal),
        ];

        let report = apply_theme(paragraphs.iter_mut(), &test_theme());

        assert_eq!(report.recolored, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.visited(), 3);

        assert!(paragraphs[0].color.is_some());
        assert!(paragraphs[1].color.is_none());
        assert!(paragraphs[2].color.is_some());
    }

    #[test]
    fn test_empty_document() {
        let mut paragraphs: Vec<FakePara> = Vec::new();
        let report = apply_theme(paragraphs.iter_mut(), &test_theme());

        assert_eq!(report.visited(), 0);
        assert!(report.is_clean());
    }
}

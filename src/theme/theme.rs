//! Theme definitions, presets, and file loading.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::{palette, Color};
use crate::error::FormatError;
use crate::host::HeadingLevel;

/// A paragraph's structural role for theming purposes.
///
/// The role table is deliberately small: host heading levels collapse
/// into four buckets so a theme only ever needs four colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Title,
    SectionHeading,
    SubHeading,
    Body,
}

impl From<HeadingLevel> for Role {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::Title => Role::Title,
            HeadingLevel::Heading1 | HeadingLevel::Heading2 => Role::SectionHeading,
            HeadingLevel::Heading3 | HeadingLevel::Heading4 => Role::SubHeading,
            HeadingLevel::Normal => Role::Body,
        }
    }
}

/// A named mapping from structural role to foreground color.
///
/// Every role resolves to a color; there are no partial themes. Theme
/// *sources* (YAML) may omit roles, which fall back to `body` at load
/// time, so values of this type are always total.
///
/// # Example
///
/// ```rust
/// use flourish::{DocTheme, Role};
///
/// let theme = DocTheme::preset("professional").unwrap();
/// assert_eq!(theme.color_for(Role::Body).hex(), "#333333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeSource")]
pub struct DocTheme {
    /// Color for the document title.
    pub title: Color,
    /// Color for section headings (levels 1 and 2).
    pub headers: Color,
    /// Color for sub-headings (levels 3 and 4).
    pub accent: Color,
    /// Color for everything else.
    pub body: Color,
}

impl DocTheme {
    /// Looks up the color for a role.
    pub fn color_for(&self, role: Role) -> Color {
        match role {
            Role::Title => self.title,
            Role::SectionHeading => self.headers,
            Role::SubHeading => self.accent,
            Role::Body => self.body,
        }
    }

    /// Returns a built-in preset by name.
    ///
    /// Unknown names fail with [`FormatError::UnknownTheme`].
    pub fn preset(name: &str) -> Result<Self, FormatError> {
        PRESETS
            .get(name)
            .copied()
            .ok_or_else(|| FormatError::UnknownTheme(name.to_string()))
    }

    /// Returns all preset names in sorted order.
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.keys().copied()
    }

    /// Parses a theme from YAML.
    ///
    /// `body` is required; `title`, `headers`, and `accent` fall back to
    /// `body` when omitted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flourish::{DocTheme, Role};
    ///
    /// let theme = DocTheme::from_yaml_str("body: \"#444444\"\ntitle: \"#111111\"").unwrap();
    /// assert_eq!(theme.color_for(Role::Title).hex(), "#111111");
    /// // Unspecified roles fall back to body.
    /// assert_eq!(theme.color_for(Role::SubHeading).hex(), "#444444");
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, FormatError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a theme file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| FormatError::ThemeFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&source)
    }
}

/// Raw theme shape accepted from configuration sources.
#[derive(Debug, Deserialize)]
struct ThemeSource {
    body: Color,
    title: Option<Color>,
    headers: Option<Color>,
    accent: Option<Color>,
}

impl From<ThemeSource> for DocTheme {
    fn from(source: ThemeSource) -> Self {
        Self {
            title: source.title.unwrap_or(source.body),
            headers: source.headers.unwrap_or(source.body),
            accent: source.accent.unwrap_or(source.body),
            body: source.body,
        }
    }
}

static PRESETS: Lazy<BTreeMap<&'static str, DocTheme>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "vivid",
            DocTheme {
                title: palette::RED,
                headers: palette::BLUE,
                accent: palette::ORANGE,
                body: palette::DARK_GRAY,
            },
        ),
        (
            "professional",
            DocTheme {
                title: Color::rgb(0x1A, 0x1A, 0x2E),
                headers: Color::rgb(0x16, 0x21, 0x3E),
                accent: Color::rgb(0x0F, 0x34, 0x60),
                body: palette::DARK_GRAY,
            },
        ),
        (
            "urgent",
            DocTheme {
                title: Color::rgb(0xD3, 0x2F, 0x2F),
                headers: Color::rgb(0xC6, 0x28, 0x28),
                accent: Color::rgb(0xFF, 0x57, 0x22),
                body: palette::DARK_GRAY,
            },
        ),
        (
            "community",
            DocTheme {
                title: Color::rgb(0x2E, 0x7D, 0x32),
                headers: Color::rgb(0x38, 0x8E, 0x3C),
                accent: Color::rgb(0x7C, 0xB3, 0x42),
                body: palette::DARK_GRAY,
            },
        ),
    ])
});

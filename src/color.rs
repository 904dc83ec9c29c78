//! Color values and the named palette.
//!
//! Colors are plain RGB triplets, parsed from and displayed as CSS-style
//! hex literals. The [`lookup`] table maps well-known palette names to
//! values so callers can refer to colors the same way the style registry
//! and theme presets do.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color literal {literal:?}; expected #RGB or #RRGGBB")]
pub struct ParseColorError {
    literal: String,
}

/// An RGB color.
///
/// Serializes as an uppercase `#RRGGBB` string.
///
/// # Example
///
/// ```rust
/// use flourish::Color;
///
/// let c: Color = "#ff4136".parse().unwrap();
/// assert_eq!(c.hex(), "#FF4136");
/// assert_eq!(c, Color::rgb(0xFF, 0x41, 0x36));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the RGB channels.
    pub const fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `#RRGGBB` or shorthand `#RGB`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            literal: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        match digits.len() {
            3 => {
                let channel = |i: usize| -> Result<u8, ParseColorError> {
                    let d = u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| err())?;
                    Ok(d << 4 | d)
                };
                Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| -> Result<u8, ParseColorError> {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err())
                };
                Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

/// The built-in palette.
///
/// Values are shared by the style registry, the callout kinds, and the
/// theme presets so the three surfaces stay visually consistent.
pub mod palette {
    use super::Color;

    pub const RED: Color = Color::rgb(0xFF, 0x41, 0x36);
    pub const ORANGE: Color = Color::rgb(0xFF, 0x85, 0x1B);
    pub const BLUE: Color = Color::rgb(0x00, 0x74, 0xD9);
    pub const GREEN: Color = Color::rgb(0x2E, 0xCC, 0x40);

    pub const DARK_GRAY: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const MEDIUM_GRAY: Color = Color::rgb(0x66, 0x66, 0x66);
    pub const LIGHT_GRAY: Color = Color::rgb(0xAA, 0xAA, 0xAA);
    pub const PALE_GRAY: Color = Color::rgb(0xF5, 0xF5, 0xF5);

    pub const HIGHLIGHT_YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
    pub const GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const SKY_BLUE: Color = Color::rgb(0x87, 0xCE, 0xEB);
    pub const PALE_GREEN: Color = Color::rgb(0x90, 0xEE, 0x90);
    pub const PINK: Color = Color::rgb(0xFF, 0xB6, 0xC1);
}

static NAMED: Lazy<BTreeMap<&'static str, Color>> = Lazy::new(|| {
    use palette::*;

    BTreeMap::from([
        ("red", RED),
        ("orange", ORANGE),
        ("blue", BLUE),
        ("green", GREEN),
        ("dark-gray", DARK_GRAY),
        ("medium-gray", MEDIUM_GRAY),
        ("light-gray", LIGHT_GRAY),
        ("pale-gray", PALE_GRAY),
        ("highlight-yellow", HIGHLIGHT_YELLOW),
        ("gold", GOLD),
        ("sky-blue", SKY_BLUE),
        ("pale-green", PALE_GREEN),
        ("pink", PINK),
    ])
});

/// Looks up a palette color by name.
///
/// # Example
///
/// ```rust
/// use flourish::color;
///
/// assert_eq!(color::lookup("blue"), Some(color::palette::BLUE));
/// assert_eq!(color::lookup("mauve"), None);
/// ```
pub fn lookup(name: &str) -> Option<Color> {
    NAMED.get(name).copied()
}

/// Returns all palette color names in sorted order.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED.keys().copied()
}

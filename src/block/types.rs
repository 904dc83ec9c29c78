//! The data shapes handed to the host's insertion primitives.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::selection::Span;
use crate::style::StyleEffect;

/// Cell padding in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: u8,
    pub bottom: u8,
    pub left: u8,
    pub right: u8,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0,
        bottom: 0,
        left: 0,
        right: 0,
    };

    pub const fn new(top: u8, bottom: u8, left: u8, right: u8) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// Emphasis styling for a sub-range of a cell's text, typically the
/// title line of a callout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emphasis {
    pub span: Span,
    pub effect: StyleEffect,
}

/// One table cell: initial text plus presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSpec {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub padding: Padding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

impl CellSpec {
    /// A cell with the given text and no presentation.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            background: None,
            padding: Padding::ZERO,
            emphasis: None,
        }
    }
}

/// A table to insert: rows of cells plus a uniform border.
///
/// `border_width` of zero means an invisible table, used for column
/// layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    pub rows: Vec<Vec<CellSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Border width in points, applied to all sides.
    pub border_width: u8,
}

impl TableBlock {
    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the first row.
    pub fn num_columns(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Borrows a cell by position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellSpec> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

/// A paragraph to insert: text plus an optional foreground color for the
/// whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
}

impl ParagraphBlock {
    /// A paragraph block with the given text and no coloring.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            foreground: None,
        }
    }
}

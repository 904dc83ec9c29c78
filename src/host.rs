//! Host boundary traits.
//!
//! The crate computes *what* should change (effects, target ranges,
//! block descriptions) and drives the changes through these narrow
//! capability traits. The host's document model stays on the other side:
//!
//! - [`TextContainer`]: one text-bearing element with ranged attribute
//!   mutations
//! - [`Paragraph`]: structural-role metadata plus whole-run recoloring
//! - [`BlockSink`]: structural insertion of paragraphs and tables
//!
//! Every mutation is fallible with [`HostError`]; the host decides what a
//! failure means (out-of-range index, read-only region, and so on).

use crate::block::{ParagraphBlock, TableBlock};
use crate::color::Color;
use crate::error::HostError;
use crate::selection::Span;
use serde::{Deserialize, Serialize};

/// A text-bearing container the host exposes for styling.
///
/// Offsets are in characters (Unicode scalar values). Implementations
/// apply each mutation to exactly the given span and leave the rest of
/// the run untouched.
pub trait TextContainer {
    /// Character count of the full text run.
    fn len(&self) -> usize;

    /// Returns true if the run holds no text.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full text of the run.
    fn text(&self) -> String;

    fn set_bold(&mut self, span: Span, bold: bool) -> Result<(), HostError>;

    fn set_italic(&mut self, span: Span, italic: bool) -> Result<(), HostError>;

    fn set_font_family(&mut self, span: Span, family: &str) -> Result<(), HostError>;

    /// Sets the font size in points.
    fn set_font_size(&mut self, span: Span, points: u8) -> Result<(), HostError>;

    fn set_foreground_color(&mut self, span: Span, color: Color) -> Result<(), HostError>;

    fn set_background_color(&mut self, span: Span, color: Color) -> Result<(), HostError>;
}

impl<T: TextContainer + ?Sized> TextContainer for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn text(&self) -> String {
        (**self).text()
    }

    fn set_bold(&mut self, span: Span, bold: bool) -> Result<(), HostError> {
        (**self).set_bold(span, bold)
    }

    fn set_italic(&mut self, span: Span, italic: bool) -> Result<(), HostError> {
        (**self).set_italic(span, italic)
    }

    fn set_font_family(&mut self, span: Span, family: &str) -> Result<(), HostError> {
        (**self).set_font_family(span, family)
    }

    fn set_font_size(&mut self, span: Span, points: u8) -> Result<(), HostError> {
        (**self).set_font_size(span, points)
    }

    fn set_foreground_color(&mut self, span: Span, color: Color) -> Result<(), HostError> {
        (**self).set_foreground_color(span, color)
    }

    fn set_background_color(&mut self, span: Span, color: Color) -> Result<(), HostError> {
        (**self).set_background_color(span, color)
    }
}

/// A paragraph's structural classification, as reported by the host.
///
/// Independent of visual styling; theme application reads it, never
/// writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Plain body text (including anything unstyled).
    Normal,
    Title,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
}

/// One paragraph of the host document, as seen by the theme applicator.
pub trait Paragraph {
    /// The paragraph's structural classification.
    fn heading(&self) -> HeadingLevel;

    /// Recolors the paragraph's entire text run.
    fn set_foreground_color(&mut self, color: Color) -> Result<(), HostError>;
}

/// Structural insertion primitives for block descriptions.
///
/// `index` counts body elements from the top of the document; inserting
/// at `0` places the block before everything else.
pub trait BlockSink {
    fn insert_paragraph(&mut self, index: usize, block: &ParagraphBlock) -> Result<(), HostError>;

    /// Appends a paragraph block at the end of the document.
    fn append_paragraph(&mut self, block: &ParagraphBlock) -> Result<(), HostError>;

    fn insert_table(&mut self, index: usize, table: &TableBlock) -> Result<(), HostError>;
}

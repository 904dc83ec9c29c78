//! Host-independent document styling.
//!
//! `flourish` is the core of a document formatting tool: it turns named
//! style, theme, and block requests into concrete attribute changes and
//! drives them through narrow host traits, so the same logic works
//! against any rich-text editor that can set bold, colors, and insert
//! tables.
//!
//! The pieces:
//!
//! - [`normalize`] collapses whatever selection shape the host reports
//!   into a [`StyledRange`] handle scoped to exactly the selected text
//! - [`resolve_style`] maps a fixed set of style names to
//!   [`StyleEffect`] records with merge semantics
//! - [`apply_theme`] recolors every paragraph by structural role using a
//!   [`DocTheme`]
//! - [`Callout`], [`columns`], [`contact_card`], [`divider`],
//!   [`spacer`], and [`banner`] build declarative block descriptions
//! - [`TemplateLibrary`] renders boilerplate documents (press release,
//!   call script, email, flyer, rights card)
//! - the [`insert`] module places built blocks relative to the cursor
//!
//! The host implements [`TextContainer`], [`Paragraph`], and
//! [`BlockSink`]; everything else is plain data.
//!
//! # Example
//!
//! ```rust,ignore
//! use flourish::{normalize, resolve_style};
//!
//! // Apply a named style to whatever the user selected.
//! let mut range = normalize(host.current_selection())?;
//! range.apply(resolve_style("highlight-yellow")?)?;
//! ```

pub mod block;
pub mod color;
pub mod error;
pub mod host;
pub mod insert;
pub mod selection;
pub mod style;
pub mod template;
pub mod theme;
mod util;

pub use block::{
    banner, columns, contact_card, divider, spacer, Callout, CalloutKind, CellSpec, Emphasis,
    Padding, ParagraphBlock, TableBlock, DIVIDER_WIDTH,
};
pub use color::{palette, Color, ParseColorError};
pub use error::{FormatError, HostError};
pub use host::{BlockSink, HeadingLevel, Paragraph, TextContainer};
pub use insert::{insert_callout, insert_layout, insert_text_block};
pub use selection::{normalize, RangeElement, SelectionDescriptor, SelectionRange, Span, StyledRange};
pub use style::{resolve_style, style_names, StyleEffect};
pub use template::{DocTemplate, TemplateFields, TemplateLibrary};
pub use theme::{apply_theme, DocTheme, Role, ThemeFailure, ThemeReport};
pub use util::{center_to_width, rule_line};

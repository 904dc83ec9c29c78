//! Role-to-color themes and document-wide application.
//!
//! This module provides:
//!
//! - [`Role`]: a paragraph's structural classification for coloring
//! - [`DocTheme`]: a total mapping from role to foreground color
//! - [`apply_theme`]: best-effort recoloring of every paragraph
//!
//! Themes never touch structure; they read each paragraph's heading and
//! set its foreground color, nothing else.

mod apply;
#[allow(clippy::module_inception)]
mod theme;

pub use apply::{apply_theme, ThemeFailure, ThemeReport};
pub use theme::{DocTheme, Role};

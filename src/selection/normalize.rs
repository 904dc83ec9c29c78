//! Selection normalization.

use super::descriptor::{SelectionDescriptor, SelectionRange, Span};
use crate::error::{FormatError, HostError};
use crate::host::TextContainer;
use crate::style::StyleEffect;

/// Collapses a raw selection descriptor into a [`StyledRange`] handle.
///
/// Fails with [`FormatError::NoSelection`] when the descriptor is empty.
/// When the host reports multiple disjoint elements, only the first is
/// normalized and the rest are silently ignored; styling is best-effort,
/// first element only. Normalization itself is read-only; nothing
/// changes until the caller invokes a mutation on the returned handle.
///
/// # Example
///
/// ```rust,ignore
/// let descriptor = host.current_selection();
/// let mut range = flourish::normalize(descriptor)?;
/// range.apply(flourish::resolve_style("bold-red")?)?;
/// ```
pub fn normalize<C: TextContainer>(
    descriptor: SelectionDescriptor<C>,
) -> Result<StyledRange<C>, FormatError> {
    let first = descriptor.into_first().ok_or(FormatError::NoSelection)?;
    let range = match first.span {
        Some(span) => SelectionRange::Span(span),
        None => SelectionRange::Whole,
    };

    Ok(StyledRange {
        container: first.container,
        range,
    })
}

/// A normalized handle over exactly the selected run of text.
///
/// Every accessor and mutation is scoped to the selected sub-range, or to
/// the whole container when the selection covered the full element.
/// Downstream styling code never branches on selection shape.
#[derive(Debug)]
pub struct StyledRange<C> {
    container: C,
    range: SelectionRange,
}

impl<C: TextContainer> StyledRange<C> {
    /// The normalized target range.
    pub fn range(&self) -> SelectionRange {
        self.range
    }

    /// Resolves the target to concrete offsets, or `None` when the
    /// container holds no text.
    fn resolved_span(&self) -> Option<Span> {
        match self.range {
            SelectionRange::Span(span) => Some(span),
            SelectionRange::Whole => {
                let len = self.container.len();
                (len > 0).then(|| Span::new(0, len - 1))
            }
        }
    }

    /// The currently selected text.
    pub fn text(&self) -> String {
        match self.resolved_span() {
            Some(span) => self
                .container
                .text()
                .chars()
                .skip(span.start)
                .take(span.len())
                .collect(),
            None => String::new(),
        }
    }

    /// Applies an effect with merge semantics: each set field invokes the
    /// corresponding single-attribute mutation on the host, and unset
    /// fields leave the attribute at whatever value it already had.
    pub fn apply(&mut self, effect: &StyleEffect) -> Result<(), HostError> {
        let Some(span) = self.resolved_span() else {
            return Ok(());
        };

        if let Some(bold) = effect.bold {
            self.container.set_bold(span, bold)?;
        }
        if let Some(italic) = effect.italic {
            self.container.set_italic(span, italic)?;
        }
        if let Some(family) = &effect.font_family {
            self.container.set_font_family(span, family)?;
        }
        if let Some(points) = effect.font_size {
            self.container.set_font_size(span, points)?;
        }
        if let Some(color) = effect.foreground {
            self.container.set_foreground_color(span, color)?;
        }
        if let Some(color) = effect.background {
            self.container.set_background_color(span, color)?;
        }

        Ok(())
    }

    /// Sets the background color over the selected range.
    pub fn set_background(&mut self, color: crate::color::Color) -> Result<(), HostError> {
        match self.resolved_span() {
            Some(span) => self.container.set_background_color(span, color),
            None => Ok(()),
        }
    }

    /// Sets the foreground color over the selected range.
    pub fn set_foreground(&mut self, color: crate::color::Color) -> Result<(), HostError> {
        match self.resolved_span() {
            Some(span) => self.container.set_foreground_color(span, color),
            None => Ok(()),
        }
    }

    /// Sets bold over the selected range.
    pub fn set_bold(&mut self, bold: bool) -> Result<(), HostError> {
        match self.resolved_span() {
            Some(span) => self.container.set_bold(span, bold),
            None => Ok(()),
        }
    }
}

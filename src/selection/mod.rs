//! Selection descriptors and normalization.
//!
//! Hosts report text selections in several shapes: nothing at all, a bare
//! cursor, a fully selected element, or a partial range inside one
//! element. This module provides:
//!
//! - [`Span`] / [`SelectionRange`]: offsets into a text container
//! - [`SelectionDescriptor`]: the host's raw report, one entry per element
//! - [`normalize`]: collapses a descriptor into a [`StyledRange`] handle
//!   so styling code never branches on selection shape

mod descriptor;
mod normalize;

pub use descriptor::{RangeElement, SelectionDescriptor, SelectionRange, Span};
pub use normalize::{normalize, StyledRange};

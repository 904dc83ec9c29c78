//! Named styles and their effects.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleEffect`]: An immutable set of optional text attributes
//! - [`resolve_style`]: Lookup from a fixed table of named styles
//!
//! An effect only describes *what to change*; applying one to a selection
//! happens through [`StyledRange::apply`](crate::selection::StyledRange::apply),
//! which touches exactly the attributes the effect sets and leaves the
//! rest alone.

mod effect;
mod registry;

pub use effect::StyleEffect;
pub use registry::{resolve_style, style_names};

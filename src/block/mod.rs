//! Declarative block descriptions and their builders.
//!
//! A block is a small table or paragraph structure described as plain
//! data: dimensions, per-cell text and padding, border, and which part
//! of which cell gets emphasis styling. Builders never touch a live
//! document; the description is handed verbatim to the host's insertion
//! primitives (see [`BlockSink`](crate::host::BlockSink) and the
//! placement policies in [`insert`](crate::insert)).

mod callout;
mod layout;
mod types;

pub use callout::{Callout, CalloutKind};
pub use layout::{banner, columns, contact_card, divider, spacer, DIVIDER_WIDTH};
pub use types::{CellSpec, Emphasis, Padding, ParagraphBlock, TableBlock};

//! Placement policies for inserting blocks.
//!
//! `cursor` is the body index of the element currently holding the
//! cursor, or `None` when no cursor is placed. The three policies treat
//! a missing cursor differently:
//!
//! - [`insert_callout`] refuses with `NoCursor`
//! - [`insert_layout`] falls back to the top of the document
//! - [`insert_text_block`] falls back to appending at the end

use crate::block::{ParagraphBlock, TableBlock};
use crate::error::FormatError;
use crate::host::BlockSink;

/// Inserts a callout box after the cursor's element.
///
/// Fails with [`FormatError::NoCursor`] when no cursor is placed.
pub fn insert_callout<S: BlockSink>(
    sink: &mut S,
    cursor: Option<usize>,
    table: &TableBlock,
) -> Result<(), FormatError> {
    let anchor = cursor.ok_or(FormatError::NoCursor)?;
    sink.insert_table(anchor + 1, table)?;
    Ok(())
}

/// Inserts a layout table after the cursor's element, or at the top of
/// the document when no cursor is placed.
pub fn insert_layout<S: BlockSink>(
    sink: &mut S,
    cursor: Option<usize>,
    table: &TableBlock,
) -> Result<(), FormatError> {
    let index = match cursor {
        Some(anchor) => anchor + 1,
        None => 0,
    };
    sink.insert_table(index, table)?;
    Ok(())
}

/// Inserts a paragraph block after the cursor's element, or appends at
/// the end of the document when no cursor is placed.
///
/// Used for templates, dividers, and spacers.
pub fn insert_text_block<S: BlockSink>(
    sink: &mut S,
    cursor: Option<usize>,
    block: &ParagraphBlock,
) -> Result<(), FormatError> {
    match cursor {
        Some(anchor) => sink.insert_paragraph(anchor + 1, block)?,
        None => sink.append_paragraph(block)?,
    }
    Ok(())
}

//! Column layouts, contact cards, and simple paragraph blocks.

use super::types::{CellSpec, Padding, ParagraphBlock, TableBlock};
use crate::color::{palette, Color};
use crate::util::{center_to_width, rule_line};

/// Display width of the [`divider`] rule.
pub const DIVIDER_WIDTH: usize = 56;

const GUTTER: u8 = 15;

/// Builds an invisible 1×`count` table for side-by-side content.
///
/// Cells carry placeholder text and a 15 pt gutter: right padding on
/// every cell but the last, left padding on every cell but the first.
/// A `count` of zero is treated as one column.
///
/// # Example
///
/// ```rust
/// use flourish::columns;
///
/// let layout = columns(2);
/// assert_eq!(layout.num_rows(), 1);
/// assert_eq!(layout.num_columns(), 2);
/// assert_eq!(layout.border_width, 0);
/// ```
pub fn columns(count: usize) -> TableBlock {
    let count = count.max(1);

    let cells = (0..count)
        .map(|i| CellSpec {
            text: format!("Column {} Content\n\nAdd your content here...", i + 1),
            background: None,
            padding: Padding::new(
                0,
                0,
                if i > 0 { GUTTER } else { 0 },
                if i + 1 < count { GUTTER } else { 0 },
            ),
            emphasis: None,
        })
        .collect();

    TableBlock {
        rows: vec![cells],
        border_color: None,
        border_width: 0,
    }
}

/// Builds a bordered contact card with placeholder contact lines.
pub fn contact_card() -> TableBlock {
    let text = "👤 [NAME]\n[Title/Role]\n\n📍 [Address]\n📞 [Phone]\n✉️ [Email]\n🌐 [Website]";

    TableBlock {
        rows: vec![vec![CellSpec {
            text: text.to_string(),
            background: Some(Color::rgb(0xF8, 0xF9, 0xFA)),
            padding: Padding::new(12, 12, 15, 15),
            emphasis: None,
        }]],
        border_color: Some(palette::BLUE),
        border_width: 2,
    }
}

/// Builds a light-gray horizontal rule paragraph.
pub fn divider() -> ParagraphBlock {
    ParagraphBlock {
        text: rule_line('─', DIVIDER_WIDTH),
        foreground: Some(palette::LIGHT_GRAY),
    }
}

/// Builds a paragraph of `lines` blank lines for vertical spacing.
pub fn spacer(lines: usize) -> ParagraphBlock {
    ParagraphBlock::plain("\n".repeat(lines))
}

/// Builds a double-rule masthead with `title` centered by display width.
///
/// # Example
///
/// ```rust
/// use flourish::banner;
///
/// let block = banner("PRESS RELEASE", 21);
/// let lines: Vec<&str> = block.text.lines().collect();
/// assert_eq!(lines[0].chars().count(), 21);
/// assert_eq!(lines[1], "    PRESS RELEASE");
/// ```
pub fn banner(title: &str, width: usize) -> ParagraphBlock {
    let rule = rule_line('═', width);
    ParagraphBlock::plain(format!("{rule}\n{}\n{rule}", center_to_width(title, width)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_columns_gutter() {
        let layout = columns(2);
        assert_eq!(layout.num_columns(), 2);

        let first = layout.cell(0, 0).unwrap();
        let second = layout.cell(0, 1).unwrap();

        assert_eq!(first.padding, Padding::new(0, 0, 0, 15));
        assert_eq!(second.padding, Padding::new(0, 0, 15, 0));
        assert!(first.text.starts_with("Column 1"));
        assert!(second.text.starts_with("Column 2"));
    }

    #[test]
    fn test_three_columns_middle_cell_pads_both_sides() {
        let layout = columns(3);
        let middle = layout.cell(0, 1).unwrap();

        assert_eq!(middle.padding, Padding::new(0, 0, 15, 15));
    }

    #[test]
    fn test_zero_columns_clamps_to_one() {
        let layout = columns(0);
        assert_eq!(layout.num_columns(), 1);
        assert_eq!(layout.cell(0, 0).unwrap().padding, Padding::ZERO);
    }

    #[test]
    fn test_columns_are_borderless() {
        assert_eq!(columns(2).border_width, 0);
        assert!(columns(2).border_color.is_none());
    }

    #[test]
    fn test_contact_card_presentation() {
        let card = contact_card();

        assert_eq!(card.num_rows(), 1);
        assert_eq!(card.num_columns(), 1);
        assert_eq!(card.border_color, Some(palette::BLUE));
        assert_eq!(card.border_width, 2);

        let cell = card.cell(0, 0).unwrap();
        assert_eq!(cell.background, Some(Color::rgb(0xF8, 0xF9, 0xFA)));
        assert!(cell.text.contains("[Phone]"));
    }

    #[test]
    fn test_divider_is_a_gray_rule() {
        let block = divider();

        assert_eq!(block.text.chars().count(), DIVIDER_WIDTH);
        assert!(block.text.chars().all(|c| c == '─'));
        assert_eq!(block.foreground, Some(palette::LIGHT_GRAY));
    }

    #[test]
    fn test_spacer_line_count() {
        assert_eq!(spacer(3).text, "\n\n\n");
        assert_eq!(spacer(0).text, "");
        assert!(spacer(2).foreground.is_none());
    }

    #[test]
    fn test_banner_shape() {
        let block = banner("NOTICE", 20);
        let lines: Vec<&str> = block.text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0].chars().count(), 20);
        assert!(lines[1].trim_start().starts_with("NOTICE"));
    }
}

//! Photo grid renderer.
//!
//! Cards are laid out [`GRID_COLUMNS`] per row. Each card is four lines tall:
//!
//! ```text
//! > 2 ██
//! Morning fog over the bay
//! by June Park
//! https://images.example/...
//! ```
//!
//! The `>` marker shows where focus returned after closing the preview; the
//! selected card is drawn in the selection colors.

use super::CARD_GAP;
use crate::app::GRID_COLUMNS;
use crate::ui::helpers::{position_cursor, swatch_block, write_fixed};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;
use std::io::{self, Write};

/// Lines per card, plus one blank line between card rows.
const CARD_HEIGHT: usize = 4;
const ROW_HEIGHT: usize = CARD_HEIGHT + 1;

/// Renders as many card rows as fit between `row` and `last_row` (inclusive).
///
/// Returns the next free row.
pub fn render_grid<W: Write>(
    out: &mut W,
    row: usize,
    last_row: usize,
    cards: &[CardItem],
    card_width: usize,
    theme: &Theme,
) -> io::Result<usize> {
    let mut current_row = row;

    for card_row in cards.chunks(GRID_COLUMNS) {
        if current_row + CARD_HEIGHT - 1 > last_row {
            tracing::trace!(hidden = cards.len(), "grid clipped to terminal height");
            break;
        }
        for (column, card) in card_row.iter().enumerate() {
            let col = 1 + column * (card_width + CARD_GAP);
            render_card(out, current_row, col, card, card_width, theme)?;
        }
        current_row += ROW_HEIGHT;
    }

    Ok(current_row)
}

fn render_card<W: Write>(
    out: &mut W,
    row: usize,
    col: usize,
    card: &CardItem,
    width: usize,
    theme: &Theme,
) -> io::Result<()> {
    let marker = if card.has_focus { ">" } else { " " };
    let selection = if card.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(out, row, col)?;
    write!(out, "{}{marker}{}", Theme::fg(&theme.colors.focus_fg), Theme::reset())?;
    write!(out, "{selection}{}", Theme::bold())?;
    let number = format!("{:>2} ", card.position);
    write!(out, "{number}{}", Theme::reset())?;
    match card.swatch {
        Some(rgb) => write!(out, "{}", swatch_block(rgb))?,
        None => write!(out, "  ")?,
    }
    write!(out, "{}", " ".repeat(width.saturating_sub(1 + number.len() + 2)))?;

    position_cursor(out, row + 1, col)?;
    write!(out, "{selection}")?;
    write_fixed(out, &card.label, width)?;
    write!(out, "{}", Theme::reset())?;

    position_cursor(out, row + 2, col)?;
    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write_fixed(out, &format!("by {}", card.author), width)?;

    position_cursor(out, row + 3, col)?;
    write!(out, "{}", Theme::dim())?;
    write_fixed(out, &card.thumb_url, width)?;
    write!(out, "{}", Theme::reset())?;

    Ok(())
}

//! Empty state component renderer.
//!
//! Shown in place of the grid when a page came back without photos.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyStateInfo;
use std::io::{self, Write};

/// Renders the two-line empty state message, centered, a few rows below `row`.
pub fn render_empty_state<W: Write>(
    out: &mut W,
    row: usize,
    empty: &EmptyStateInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let message_row = row + 3;

    position_cursor(out, message_row, 1)?;
    write!(out, "{}", Theme::fg(&theme.colors.empty_state_fg))?;
    write_centered(out, &empty.message, cols)?;
    write!(out, "{}", Theme::reset())?;

    position_cursor(out, message_row + 1, 1)?;
    write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))?;
    write_centered(out, &empty.subtitle, cols)?;
    write!(out, "{}", Theme::reset())?;

    Ok(message_row + 2)
}

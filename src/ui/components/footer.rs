//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{position_cursor, truncate, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Renders the keybinding hints at `row` and returns the next free row.
pub fn render_footer<W: Write>(
    out: &mut W,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    position_cursor(out, row, 1)?;
    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write_centered(out, &truncate(&footer.keybindings, cols), cols)?;
    write!(out, "{}", Theme::reset())?;
    Ok(row + 1)
}

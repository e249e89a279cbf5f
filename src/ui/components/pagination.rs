//! Pagination bar renderer: the previous/next page buttons under the grid.

use super::write_button;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;
use std::io::{self, Write};

const PREV_LABEL: &str = "[ < prev page ]";
const NEXT_LABEL: &str = "[ next page > ]";
const BUTTON_GAP: usize = 4;

/// Renders the buttons centered on `row`; disabled buttons are dimmed.
pub fn render_pagination<W: Write>(
    out: &mut W,
    row: usize,
    pagination: PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let width = PREV_LABEL.len() + BUTTON_GAP + NEXT_LABEL.len();
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(out, row, 1)?;
    write!(out, "{}", " ".repeat(padding))?;
    write_button(out, PREV_LABEL, pagination.prev_disabled, theme)?;
    write!(out, "{}", " ".repeat(BUTTON_GAP))?;
    write_button(out, NEXT_LABEL, pagination.next_disabled, theme)?;
    write!(out, "{}", " ".repeat(cols.saturating_sub(padding + width)))?;

    Ok(row + 1)
}

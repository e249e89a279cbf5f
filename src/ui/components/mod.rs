//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row, so layouts are built by threading the row through.
//!
//! # Components
//!
//! - [`header`]: title bar and status line
//! - [`grid`]: photo cards, three per row
//! - [`pagination`]: previous/next page buttons
//! - [`preview`]: modal with the selected photo and carousel buttons
//! - [`empty`]: message for a page without photos
//! - [`footer`]: keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header: title]
//! [Header: page label, location]
//! [Border]
//! [Grid | Empty state]        (preview drawn over the grid when open)
//! [Blank padding]
//! [Pagination]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod grid;
mod header;
mod pagination;
mod preview;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GalleryViewModel;
use std::io::{self, Write};

use empty::render_empty_state;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use pagination::render_pagination;
use preview::render_preview;

/// Columns between two grid cards.
pub const CARD_GAP: usize = 2;

/// Chrome below the body: pagination, border, footer.
const BOTTOM_CHROME: usize = 3;

/// Renders a horizontal border line at `row` and returns `row + 1`.
fn render_border<W: Write>(out: &mut W, row: usize, color: &str, cols: usize) -> io::Result<usize> {
    position_cursor(out, row, 1)?;
    write!(out, "{}{}{}", Theme::fg(color), "\u{2500}".repeat(cols), Theme::reset())?;
    Ok(row + 1)
}

/// Writes a button label, dimmed when disabled.
fn write_button<W: Write>(out: &mut W, label: &str, disabled: bool, theme: &Theme) -> io::Result<()> {
    if disabled {
        write!(out, "{}{}{label}{}", Theme::dim(), Theme::fg(&theme.colors.disabled_fg), Theme::reset())
    } else {
        write!(out, "{}{}{label}{}", Theme::bold(), Theme::fg(&theme.colors.button_fg), Theme::reset())
    }
}

/// Renders the full gallery screen.
pub fn render_gallery<W: Write>(
    out: &mut W,
    vm: &GalleryViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> io::Result<()> {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols)?;
    current_row = render_border(out, current_row, &theme.colors.border, cols)?;

    let body_start = current_row;
    let body_end = rows.saturating_sub(BOTTOM_CHROME).max(body_start);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, body_start, empty, theme, cols)?;
    } else {
        render_grid(out, body_start, body_end, &vm.cards, vm.card_width, theme)?;
    }

    if let Some(preview) = &vm.preview {
        render_preview(out, body_start + 1, preview, theme, cols)?;
    }

    let footer_row = rows.max(body_end + BOTTOM_CHROME);
    render_pagination(out, footer_row - 2, vm.pagination, theme, cols)?;
    render_border(out, footer_row - 1, &theme.colors.border, cols)?;
    render_footer(out, footer_row, &vm.footer, theme, cols)?;

    Ok(())
}

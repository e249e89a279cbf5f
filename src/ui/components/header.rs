//! Header component renderer.
//!
//! Two lines: the centered title bar, then a status line with the page label on
//! the left and the loading indicator or current location on the right.

use crate::ui::helpers::{position_cursor, truncate, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Renders the header starting at `row` and returns the next free row.
pub fn render_header<W: Write>(
    out: &mut W,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    position_cursor(out, row, 1)?;
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }
    write_centered(out, &header.title, cols)?;
    write!(out, "{}", Theme::reset())?;

    position_cursor(out, row + 1, 1)?;
    write!(out, "{}{}", Theme::fg(&theme.colors.text_normal), header.page_label)?;

    let label_len = header.page_label.chars().count();
    let room = cols.saturating_sub(label_len + 2);
    let (status, color) = if header.loading {
        ("loading...".to_string(), &theme.colors.loading_fg)
    } else {
        (truncate(&header.location, room), &theme.colors.text_dim)
    };
    let status_len = status.chars().count();
    write!(
        out,
        "{}{}{status}{}",
        " ".repeat(cols.saturating_sub(label_len + status_len)),
        Theme::fg(color),
        Theme::reset()
    )?;

    Ok(row + 2)
}

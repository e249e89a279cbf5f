//! Preview modal renderer.
//!
//! Draws a bordered box over the grid with the selected photo's details and the
//! carousel buttons.

use super::write_button;
use crate::ui::helpers::{position_cursor, swatch_block, truncate, write_fixed};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PreviewInfo;
use std::io::{self, Write};

const MAX_BOX_WIDTH: usize = 76;
const MIN_BOX_WIDTH: usize = 24;

const PREV_LABEL: &str = "[ < prev ]";
const NEXT_LABEL: &str = "[ next > ]";

/// Renders the modal with its top border at `row`; returns the row after it.
pub fn render_preview<W: Write>(
    out: &mut W,
    row: usize,
    preview: &PreviewInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let box_width = cols.saturating_sub(4).clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH);
    let inner = box_width - 4;
    let col = cols.saturating_sub(box_width) / 2 + 1;
    let border = Theme::fg(&theme.colors.border);

    let mut current_row = row;
    position_cursor(out, current_row, col)?;
    write!(out, "{border}\u{250c}{}\u{2510}{}", "\u{2500}".repeat(box_width - 2), Theme::reset())?;
    current_row += 1;

    let line = |out: &mut W, current_row: &mut usize, style: String, text: &str| -> io::Result<()> {
        position_cursor(out, *current_row, col)?;
        write!(out, "{border}\u{2502}{} {style}", Theme::reset())?;
        write_fixed(out, text, inner)?;
        write!(out, "{} {border}\u{2502}{}", Theme::reset(), Theme::reset())?;
        *current_row += 1;
        Ok(())
    };

    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    let dim_style = Theme::fg(&theme.colors.text_dim);

    line(out, &mut current_row, title_style, &preview.title)?;
    line(out, &mut current_row, dim_style.clone(), &format!("by {}", preview.author))?;
    line(out, &mut current_row, dim_style.clone(), preview.position.as_deref().unwrap_or(""))?;
    line(out, &mut current_row, String::new(), "")?;
    line(out, &mut current_row, Theme::fg(&theme.colors.text_normal), &preview.image_url)?;

    position_cursor(out, current_row, col)?;
    write!(out, "{border}\u{2502}{} ", Theme::reset())?;
    let swatch = preview.swatch.map(swatch_block);
    let swatch_width = if swatch.is_some() { 3 } else { 0 };
    if let Some(block) = swatch {
        write!(out, "{block} ")?;
    }
    write!(out, "{dim_style}")?;
    write_fixed(out, &truncate("dominant color", inner.saturating_sub(swatch_width)), inner.saturating_sub(swatch_width))?;
    write!(out, "{} {border}\u{2502}{}", Theme::reset(), Theme::reset())?;
    current_row += 1;

    line(out, &mut current_row, String::new(), "")?;

    position_cursor(out, current_row, col)?;
    write!(out, "{border}\u{2502}{} ", Theme::reset())?;
    let buttons_width = PREV_LABEL.len() + NEXT_LABEL.len();
    write_button(out, PREV_LABEL, preview.prev_disabled, theme)?;
    write!(out, "{}", " ".repeat(inner.saturating_sub(buttons_width)))?;
    write_button(out, NEXT_LABEL, preview.next_disabled, theme)?;
    write!(out, " {border}\u{2502}{}", Theme::reset())?;
    current_row += 1;

    position_cursor(out, current_row, col)?;
    write!(out, "{border}\u{2514}{}\u{2518}{}", "\u{2500}".repeat(box_width - 2), Theme::reset())?;

    Ok(current_row + 1)
}

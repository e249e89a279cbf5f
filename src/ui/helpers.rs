//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor positioning, centered
//! and fixed-width text, and truncation. Widths are counted in characters, not
//! bytes.

use std::io::{self, Write};

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor<W: Write>(out: &mut W, row: usize, col: usize) -> io::Result<()> {
    write!(out, "\u{1b}[{row};{col}H")
}

/// Clears the screen and homes the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\u{1b}[2J\u{1b}[H")
}

/// Truncates `text` to `max` characters, ending with `...` when shortened.
///
/// ```rust
/// use gallerist::ui::helpers::truncate;
///
/// assert_eq!(truncate("a very long caption", 10), "a very ...");
/// assert_eq!(truncate("short", 10), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max < 3 {
        return text.chars().take(max).collect();
    }
    let keep = max - 3;
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}

/// Writes `text` truncated and right-padded to exactly `width` characters.
pub fn write_fixed<W: Write>(out: &mut W, text: &str, width: usize) -> io::Result<()> {
    let text = truncate(text, width);
    let len = text.chars().count();
    write!(out, "{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Writes `text` centered in a line `cols` wide, padding both sides.
pub fn write_centered<W: Write>(out: &mut W, text: &str, cols: usize) -> io::Result<()> {
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;
    write!(
        out,
        "{}{text}{}",
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + len))
    )
}

/// A two-cell block in the given 24-bit color.
#[must_use]
pub fn swatch_block(rgb: (u8, u8, u8)) -> String {
    let (r, g, b) = rgb;
    format!("\u{1b}[38;2;{r};{g};{b}m\u{2588}\u{2588}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
        assert_eq!(truncate("abc", 2), "ab");
        assert_eq!(truncate("abcdef", 3), "...");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn fixed_width_pads_and_truncates() {
        let mut out = Vec::new();
        write_fixed(&mut out, "ab", 4).expect("write");
        write_fixed(&mut out, "abcdefgh", 6).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "ab  abc...");
    }

    #[test]
    fn centered_text_fills_line() {
        let mut out = Vec::new();
        write_centered(&mut out, "hi", 7).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "  hi   ");
    }
}

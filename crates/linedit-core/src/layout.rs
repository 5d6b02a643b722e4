//! Cell-width helpers for renderers.
//!
//! The core stores byte columns; a text-grid renderer needs display cells. These helpers convert
//! between the two (UAX #11 widths via `unicode-width`, tabs advancing to the next tab stop) so a
//! mouse hit-test always resolves to a code point boundary.

use unicode_width::UnicodeWidthChar;

/// Display width of a character in cells.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Width of `ch` when drawn at `cell_offset` cells into the line.
pub fn cell_width_at(ch: char, cell_offset: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        let tab_width = tab_width.max(1);
        tab_width - cell_offset % tab_width
    } else {
        char_width(ch)
    }
}

/// Cell offset of byte column `col` (which must be a code point boundary).
pub fn visual_x_for_col(line: &str, col: usize, tab_width: usize) -> usize {
    let mut x = 0usize;
    for ch in line[..col.min(line.len())].chars() {
        x = x.saturating_add(cell_width_at(ch, x, tab_width));
    }
    x
}

/// Byte column closest to cell offset `x`.
///
/// A click on the right half of a wide character lands after it, mirroring rounding to the
/// nearest character cell.
pub fn col_for_visual_x(line: &str, x: usize, tab_width: usize) -> usize {
    let mut cell = 0usize;
    for (col, ch) in line.char_indices() {
        let w = cell_width_at(ch, cell, tab_width);
        if x < cell + w.div_ceil(2).max(1) {
            return col;
        }
        if x < cell + w {
            return col + ch.len_utf8();
        }
        cell += w;
    }
    line.len()
}

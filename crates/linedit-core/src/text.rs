//! UTF-8 byte-offset helpers.
//!
//! Every column in `linedit-core` is a **byte offset** into a line. These helpers are the only
//! place that steps across code points, so the rest of the crate never lands inside a
//! multi-byte sequence.

/// Returns `true` for UTF-8 continuation bytes (top two bits `10`).
pub fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Byte offset of the code point that ends at `col`.
///
/// Steps back one byte, then keeps stepping while the byte under the offset is a continuation
/// byte. Returns `0` when `col` is `0`.
pub fn prev_boundary(line: &str, col: usize) -> usize {
    let bytes = line.as_bytes();
    let mut col = col.min(bytes.len());
    if col == 0 {
        return 0;
    }
    col -= 1;
    while col > 0 && is_continuation_byte(bytes[col]) {
        col -= 1;
    }
    col
}

/// Byte offset just past the code point that starts at `col`.
///
/// Returns `line.len()` when `col` is already at (or past) the end of the line.
pub fn next_boundary(line: &str, col: usize) -> usize {
    let bytes = line.as_bytes();
    if col >= bytes.len() {
        return bytes.len();
    }
    let mut col = col + 1;
    while col < bytes.len() && is_continuation_byte(bytes[col]) {
        col += 1;
    }
    col
}

/// Clamp `col` into the line and round it down to the nearest code point boundary.
pub fn floor_boundary(line: &str, col: usize) -> usize {
    let mut col = col.min(line.len());
    while !line.is_char_boundary(col) {
        col -= 1;
    }
    col
}

/// Number of leading `' '` bytes.
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}

/// Split clipboard-style text into segments on `'\n'`, stripping one trailing `'\r'` per segment.
///
/// `N` newlines always produce `N + 1` segments, so a trailing newline yields a final empty
/// segment (the cursor ends on a fresh line after pasting it).
pub(crate) fn split_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|segment| segment.strip_suffix('\r').unwrap_or(segment))
}

/// Split file contents into lines the way a line reader does.
///
/// Differs from paste-style splitting in one place: a terminator after the final line does not
/// create an extra empty line. Empty input yields no lines at all.
pub fn split_file_lines(text: &str) -> Vec<String> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    split_segments(body).map(str::to_string).collect()
}

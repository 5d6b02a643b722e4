//! Line-array text storage.
//!
//! A [`TextBuffer`] is an ordered list of lines without terminators. It is never empty: an empty
//! document is exactly one empty line. All columns are byte offsets and every primitive expects
//! them to already be code point boundaries; the cursor and command layers guarantee that.

use crate::position::Position;
use crate::text::leading_spaces;

/// Ordered sequence of UTF-8 lines for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a buffer from already-split lines (one empty line is synthesized if `lines` is empty).
    pub fn from_lines(lines: Vec<String>) -> Self {
        let mut buffer = Self { lines };
        if buffer.lines.is_empty() {
            buffer.lines.push(String::new());
        }
        buffer
    }

    /// Create a buffer from text, splitting on `'\n'` and dropping a `'\r'` before each split.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(crate::text::split_segments(text).map(str::to_string).collect())
    }

    /// All lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of `row`, if it exists.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Byte length of `row` (0 for rows past the end).
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, String::len)
    }

    /// Position just past the last byte of the last line.
    pub fn end_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.line_len(row))
    }

    /// Whole document joined with `'\n'`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// `true` when the buffer is a single empty line.
    pub fn is_blank(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Replace every line, e.g. when restoring an undo snapshot.
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
    }

    /// Insert terminator-free `text` at `(row, col)`.
    pub fn insert_at(&mut self, row: usize, col: usize, text: &str) {
        debug_assert!(!text.contains('\n'), "insert_at text must not contain a newline");
        if let Some(line) = self.lines.get_mut(row) {
            line.insert_str(col, text);
        }
    }

    /// Cut `row` at `col`, moving the tail onto a new line `row + 1` without any indentation.
    ///
    /// Returns the start of the new line.
    pub fn split_line_plain(&mut self, row: usize, col: usize) -> Position {
        let Some(line) = self.lines.get_mut(row) else {
            return self.end_position();
        };
        let tail = line.split_off(col);
        self.lines.insert(row + 1, tail);
        Position::new(row + 1, 0)
    }

    /// Cut `row` at `col` with auto-indent and return where the cursor belongs.
    ///
    /// - The new line starts with the head's leading spaces.
    /// - One more `indent_unit` is added when the byte left of `col` is `'{'`.
    /// - When the tail begins with `'}'` right after such a brace, two lines are inserted: an
    ///   indented blank line (cursor goes to its end) and the tail at the original indent.
    pub fn split_line(&mut self, row: usize, col: usize, indent_unit: usize) -> Position {
        let Some(line) = self.lines.get_mut(row) else {
            return self.end_position();
        };
        let tail = line.split_off(col);
        let indent = leading_spaces(line);
        let opens_block = line.ends_with('{');

        if opens_block && tail.starts_with('}') {
            let inner = indent + indent_unit;
            self.lines.insert(row + 1, format!("{}{}", " ".repeat(indent), tail));
            self.lines.insert(row + 1, " ".repeat(inner));
            return Position::new(row + 1, inner);
        }

        let indent = if opens_block {
            indent + indent_unit
        } else {
            indent
        };
        self.lines
            .insert(row + 1, format!("{}{}", " ".repeat(indent), tail));
        Position::new(row + 1, indent)
    }

    /// Append `lines[row + 1]` to `lines[row]` and remove it.
    ///
    /// Returns the join column (the old length of `row`), or `None` if `row` is the last line.
    pub fn join_with_next(&mut self, row: usize) -> Option<usize> {
        if row + 1 >= self.lines.len() {
            return None;
        }
        let next = self.lines.remove(row + 1);
        let line = &mut self.lines[row];
        let join_col = line.len();
        line.push_str(&next);
        Some(join_col)
    }

    /// Remove bytes `start_col..end_col` from a single line.
    pub fn erase_range(&mut self, row: usize, start_col: usize, end_col: usize) {
        if let Some(line) = self.lines.get_mut(row)
            && start_col < end_col
        {
            line.replace_range(start_col..end_col, "");
        }
    }

    /// Remove the text between two ordered positions, which may span several lines.
    ///
    /// The tail of `end.row` after `end.col` is spliced onto `start.row` and every line after
    /// `start.row` up to and including `end.row` is removed.
    pub fn erase_span(&mut self, start: Position, end: Position) {
        if start.row == end.row {
            self.erase_range(start.row, start.col, end.col);
            return;
        }
        if end.row >= self.lines.len() {
            return;
        }
        let tail = self.lines[end.row].split_off(end.col);
        let head = &mut self.lines[start.row];
        head.truncate(start.col);
        head.push_str(&tail);
        self.lines.drain(start.row + 1..=end.row);
    }

    /// Text between two ordered positions, lines joined with `'\n'`.
    pub fn text_in_span(&self, start: Position, end: Position) -> String {
        let mut out = String::new();
        for row in start.row..=end.row.min(self.lines.len() - 1) {
            let line = &self.lines[row];
            let from = if row == start.row { start.col } else { 0 };
            let to = if row == end.row { end.col } else { line.len() };
            if from < to {
                out.push_str(&line[from..to]);
            }
            if row != end.row {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        assert_eq!(TextBuffer::new().lines(), &[String::new()]);
        assert_eq!(TextBuffer::from_lines(Vec::new()).line_count(), 1);
        assert!(TextBuffer::from_text("").is_blank());
    }

    #[test]
    fn test_split_line_keeps_indent() {
        let mut buf = buffer(&["    let x = 1;"]);
        let pos = buf.split_line(0, 8, 4);
        assert_eq!(buf.lines(), &["    let ", "    x = 1;"]);
        assert_eq!(pos, Position::new(1, 4));
    }

    #[test]
    fn test_split_line_after_open_brace_indents() {
        let mut buf = buffer(&["  fn f() {"]);
        let pos = buf.split_line(0, 10, 4);
        assert_eq!(buf.lines(), &["  fn f() {", "      "]);
        assert_eq!(pos, Position::new(1, 6));
    }

    #[test]
    fn test_split_line_between_braces_opens_block() {
        let mut buf = buffer(&["  if x {}"]);
        let pos = buf.split_line(0, 8, 4);
        assert_eq!(buf.lines(), &["  if x {", "      ", "  }"]);
        assert_eq!(pos, Position::new(1, 6));
    }

    #[test]
    fn test_join_with_next() {
        let mut buf = buffer(&["ab", "cd"]);
        assert_eq!(buf.join_with_next(0), Some(2));
        assert_eq!(buf.lines(), &["abcd"]);
        assert_eq!(buf.join_with_next(0), None);
    }

    #[test]
    fn test_erase_span_multi_line() {
        let mut buf = buffer(&["hello", "big", "world"]);
        buf.erase_span(Position::new(0, 2), Position::new(2, 3));
        assert_eq!(buf.lines(), &["held"]);
    }

    #[test]
    fn test_text_in_span() {
        let buf = buffer(&["hello", "big", "world"]);
        assert_eq!(
            buf.text_in_span(Position::new(0, 3), Position::new(2, 2)),
            "lo\nbig\nwo"
        );
        assert_eq!(
            buf.text_in_span(Position::new(1, 0), Position::new(1, 3)),
            "big"
        );
    }
}

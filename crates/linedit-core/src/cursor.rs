//! UTF-8 safe cursor motion over a [`TextBuffer`].
//!
//! Horizontal motion advances by exactly one code point. Vertical motion keeps the byte column
//! when it fits and otherwise clamps to the end of the target line, then rounds down to a code
//! point boundary so the cursor never lands inside a multi-byte sequence.

use crate::buffer::TextBuffer;
use crate::position::Position;
use crate::text::{floor_boundary, next_boundary, prev_boundary};

/// One code point left; wraps to the end of the previous line at column 0.
pub fn move_left(buffer: &TextBuffer, pos: Position) -> Position {
    if pos.col > 0 {
        let line = buffer.line(pos.row).unwrap_or_default();
        Position::new(pos.row, prev_boundary(line, pos.col))
    } else if pos.row > 0 {
        Position::new(pos.row - 1, buffer.line_len(pos.row - 1))
    } else {
        pos
    }
}

/// One code point right; wraps to column 0 of the next line at end of line.
pub fn move_right(buffer: &TextBuffer, pos: Position) -> Position {
    let len = buffer.line_len(pos.row);
    if pos.col < len {
        let line = buffer.line(pos.row).unwrap_or_default();
        Position::new(pos.row, next_boundary(line, pos.col))
    } else if pos.row + 1 < buffer.line_count() {
        Position::new(pos.row + 1, 0)
    } else {
        pos
    }
}

/// One line up, column clamped to the target line.
pub fn move_up(buffer: &TextBuffer, pos: Position) -> Position {
    clamp(buffer, Position::new(pos.row.saturating_sub(1), pos.col))
}

/// One line down, column clamped to the target line.
pub fn move_down(buffer: &TextBuffer, pos: Position) -> Position {
    let row = (pos.row + 1).min(buffer.line_count() - 1);
    clamp(buffer, Position::new(row, pos.col))
}

/// Bring an arbitrary position into the buffer and onto a code point boundary.
///
/// Used for externally supplied positions (mouse hit-tests, restored state).
pub fn clamp(buffer: &TextBuffer, pos: Position) -> Position {
    let row = pos.row.min(buffer.line_count() - 1);
    let line = buffer.line(row).unwrap_or_default();
    Position::new(row, floor_boundary(line, pos.col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_move_right_steps_whole_code_points() {
        let buf = buffer(&["é😀"]);
        let p = move_right(&buf, Position::zero());
        assert_eq!(p, Position::new(0, 2));
        let p = move_right(&buf, p);
        assert_eq!(p, Position::new(0, 6));
        assert_eq!(move_right(&buf, p), p);
    }

    #[test]
    fn test_horizontal_motion_wraps_lines() {
        let buf = buffer(&["ab", "中"]);
        assert_eq!(
            move_right(&buf, Position::new(0, 2)),
            Position::new(1, 0)
        );
        assert_eq!(move_left(&buf, Position::new(1, 0)), Position::new(0, 2));
        assert_eq!(move_left(&buf, Position::zero()), Position::zero());
    }

    #[test]
    fn test_vertical_motion_clamps_and_snaps() {
        let buf = buffer(&["abcdef", "中文"]);
        // Column 4 is inside "文" (bytes 3..6), so it snaps back to 3.
        assert_eq!(move_down(&buf, Position::new(0, 4)), Position::new(1, 3));
        assert_eq!(move_down(&buf, Position::new(1, 3)), Position::new(1, 3));
        assert_eq!(move_up(&buf, Position::new(1, 6)), Position::new(0, 6));
        assert_eq!(move_up(&buf, Position::new(0, 2)), Position::new(0, 2));
    }

    #[test]
    fn test_clamp_out_of_range() {
        let buf = buffer(&["ab", "😀"]);
        assert_eq!(clamp(&buf, Position::new(9, 9)), Position::new(1, 4));
        assert_eq!(clamp(&buf, Position::new(1, 2)), Position::new(1, 0));
    }
}

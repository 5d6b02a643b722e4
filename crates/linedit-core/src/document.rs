//! A single open text document.
//!
//! [`Document`] bundles the [`TextBuffer`], cursor, optional selection, scroll offset, undo
//! history and dirty flag. The methods here are the primitive operations; the undo-boundary
//! policy lives in [`crate::commands`], which composes them.

use std::path::{Path, PathBuf};

use crate::buffer::TextBuffer;
use crate::cursor;
use crate::position::Position;
use crate::selection::Selection;
use crate::undo::{UndoSnapshot, UndoStack};

/// Name shown for a buffer that has never been saved.
pub const UNTITLED: &str = "Untitled";

/// One open text document.
#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    filename: String,
    buffer: TextBuffer,
    cursor: Position,
    selection: Option<Selection>,
    scroll: usize,
    undo: UndoStack,
    dirty: bool,
}

impl Document {
    /// Create an empty Untitled document.
    pub fn new(undo_limit: usize) -> Self {
        Self {
            path: None,
            filename: UNTITLED.to_string(),
            buffer: TextBuffer::new(),
            cursor: Position::zero(),
            selection: None,
            scroll: 0,
            undo: UndoStack::new(undo_limit),
            dirty: false,
        }
    }

    /// Create a document for `path` holding `lines` (an empty file becomes one empty line).
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>, undo_limit: usize) -> Self {
        let mut doc = Self::new(undo_limit);
        doc.buffer = TextBuffer::from_lines(lines);
        doc.set_path(path);
        doc
    }

    /// Create an Untitled document holding `text`. Handy for tests and scratch buffers.
    pub fn from_text(text: &str, undo_limit: usize) -> Self {
        let mut doc = Self::new(undo_limit);
        doc.buffer = TextBuffer::from_text(text);
        doc
    }

    /// File path, `None` for an Untitled buffer.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Last component of the path, or `"Untitled"`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Tab title: the filename with a `*` suffix while dirty.
    pub fn title(&self) -> String {
        if self.dirty {
            format!("{}*", self.filename)
        } else {
            self.filename.clone()
        }
    }

    /// Attach a path; the filename is whatever follows the last `/` or `\`.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let raw = path.to_string_lossy();
        self.filename = raw
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .to_string();
        self.path = Some(path);
    }

    /// Underlying buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Document lines.
    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    /// Whole text joined with `'\n'`.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current selection, endpoints unnormalized.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// First visible row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// `true` after any content change since the last successful save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of undo snapshots available.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// An unsaved, unmodified, empty Untitled buffer that may be replaced by a loaded file.
    pub fn is_pristine(&self) -> bool {
        self.path.is_none() && self.buffer.is_blank() && !self.dirty
    }

    /// Clear the dirty flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub(crate) fn set_cursor_raw(&mut self, pos: Position) {
        self.cursor = pos;
    }

    // ---- undo -------------------------------------------------------------------------------

    /// Snapshot lines and cursor onto the undo stack.
    pub fn push_undo(&mut self) {
        self.undo.push(UndoSnapshot {
            lines: self.buffer.lines().to_vec(),
            cursor: self.cursor,
        });
    }

    /// Restore the most recent snapshot. Returns `false` if there was nothing to undo.
    ///
    /// The selection is dropped because its endpoints may not exist in the restored text.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo.pop() else {
            return false;
        };
        self.buffer.replace_lines(snapshot.lines);
        self.cursor = cursor::clamp(&self.buffer, snapshot.cursor);
        self.selection = None;
        self.dirty = true;
        true
    }

    // ---- selection --------------------------------------------------------------------------

    /// `true` iff an anchor exists.
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// Drop the selection without touching text.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Selection endpoints in document order.
    pub fn normalized_selection(&self) -> Option<(Position, Position)> {
        self.selection.map(|s| s.normalized())
    }

    /// Text of the normalized selection, lines joined with `'\n'`. Empty without a selection.
    pub fn selected_text(&self) -> String {
        match self.normalized_selection() {
            Some((start, end)) => self.buffer.text_in_span(start, end),
            None => String::new(),
        }
    }

    /// Remove the selected range, put the cursor at its start and clear the selection.
    ///
    /// Returns `true` if there was a selection, in which case the document is marked dirty
    /// even when the range was empty.
    pub fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.normalized_selection() else {
            return false;
        };
        self.buffer.erase_span(start, end);
        self.cursor = start;
        self.selection = None;
        self.dirty = true;
        true
    }

    /// Select from document start to the end of the last line; the cursor follows.
    pub fn select_all(&mut self) {
        let end = self.buffer.end_position();
        self.selection = Some(Selection::new(Position::zero(), end));
        self.cursor = end;
    }

    // ---- motion -----------------------------------------------------------------------------

    /// Move the cursor to `target`.
    ///
    /// With `extend`, the selection grows from its existing anchor (or from the pre-motion
    /// cursor when there is none) to `target`. Without it, any selection is dropped.
    pub fn move_cursor(&mut self, target: Position, extend: bool) {
        let target = cursor::clamp(&self.buffer, target);
        if extend {
            let anchor = self.selection.map_or(self.cursor, |s| s.anchor);
            self.selection = Some(Selection::new(anchor, target));
        } else {
            self.selection = None;
        }
        self.cursor = target;
    }

    /// One code point left.
    pub fn move_left(&mut self, extend: bool) {
        self.move_cursor(cursor::move_left(&self.buffer, self.cursor), extend);
    }

    /// One code point right.
    pub fn move_right(&mut self, extend: bool) {
        self.move_cursor(cursor::move_right(&self.buffer, self.cursor), extend);
    }

    /// One line up.
    pub fn move_up(&mut self, extend: bool) {
        self.move_cursor(cursor::move_up(&self.buffer, self.cursor), extend);
    }

    /// One line down.
    pub fn move_down(&mut self, extend: bool) {
        self.move_cursor(cursor::move_down(&self.buffer, self.cursor), extend);
    }

    /// Mouse press: place the cursor and start an empty selection there.
    pub fn mouse_press(&mut self, pos: Position) {
        let pos = cursor::clamp(&self.buffer, pos);
        self.cursor = pos;
        self.selection = Some(Selection::caret(pos));
    }

    /// Mouse drag: move the active end (and cursor) if a selection is in progress.
    pub fn mouse_drag(&mut self, pos: Position) {
        let pos = cursor::clamp(&self.buffer, pos);
        if let Some(selection) = self.selection.as_mut() {
            selection.active = pos;
            self.cursor = pos;
        }
    }

    /// Mouse release: a click without a drag leaves no selection behind.
    pub fn mouse_release(&mut self) {
        if self.selection.is_some_and(|s| s.is_empty()) {
            self.selection = None;
        }
    }

    // ---- scrolling --------------------------------------------------------------------------

    /// Scroll by `delta` lines, clamped to `0..line_count`.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.buffer.line_count().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Adjust scroll so the cursor row is inside a viewport of `rows` lines.
    pub fn ensure_cursor_visible(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.cursor.row < self.scroll {
            self.scroll = self.cursor.row;
        } else if self.cursor.row >= self.scroll + rows {
            self.scroll = self.cursor.row + 1 - rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_path_extracts_filename() {
        let mut doc = Document::new(50);
        assert_eq!(doc.filename(), UNTITLED);
        doc.set_path("/home/u/src/main.rs");
        assert_eq!(doc.filename(), "main.rs");
        doc.set_path(r"C:\work\notes.txt");
        assert_eq!(doc.filename(), "notes.txt");
    }

    #[test]
    fn test_shift_motion_extends_from_original_anchor() {
        let mut doc = Document::from_text("abc\ndef", 50);
        doc.move_right(true);
        doc.move_down(true);
        assert_eq!(
            doc.selection(),
            Some(Selection::new(Position::zero(), Position::new(1, 1)))
        );
        assert_eq!(doc.selected_text(), "abc\nd");

        doc.move_left(false);
        assert!(!doc.has_selection());
        assert_eq!(doc.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_mouse_click_without_drag_clears_selection() {
        let mut doc = Document::from_text("hello", 50);
        doc.mouse_press(Position::new(0, 2));
        doc.mouse_release();
        assert!(!doc.has_selection());

        doc.mouse_press(Position::new(0, 4));
        doc.mouse_drag(Position::new(0, 1));
        doc.mouse_release();
        assert_eq!(doc.selected_text(), "ell");
        assert_eq!(doc.cursor(), Position::new(0, 1));
    }

    #[test]
    fn test_mouse_press_snaps_inside_multibyte() {
        let mut doc = Document::from_text("中文", 50);
        doc.mouse_press(Position::new(0, 4));
        assert_eq!(doc.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_scroll_clamps() {
        let mut doc = Document::from_text("a\nb\nc", 50);
        doc.scroll_by(-3);
        assert_eq!(doc.scroll(), 0);
        doc.scroll_by(10);
        assert_eq!(doc.scroll(), 2);
    }

    #[test]
    fn test_ensure_cursor_visible() {
        let mut doc = Document::from_text(&"x\n".repeat(30), 50);
        doc.move_cursor(Position::new(20, 0), false);
        doc.ensure_cursor_visible(10);
        assert_eq!(doc.scroll(), 11);
        doc.move_cursor(Position::new(3, 0), false);
        doc.ensure_cursor_visible(10);
        assert_eq!(doc.scroll(), 3);
    }
}

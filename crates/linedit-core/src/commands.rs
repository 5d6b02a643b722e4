//! Command interface layer.
//!
//! Every editing operation a host can request is a [`Command`] executed against one
//! [`Document`]. Commands never fail; each returns a [`CommandResult`] describing what happened.
//!
//! # Undo boundaries
//!
//! A command that changes content snapshots the document exactly once, before its first
//! sub-step, so a single undo restores the state from before the whole command. Commands that
//! would not change anything (backspace at the document start, pasting nothing) take no
//! snapshot at all.
//!
//! # Example
//!
//! ```rust
//! use linedit_core::{
//!     Command, CommandContext, CommandResult, Document, EditCommand, EditorConfig,
//!     MemoryClipboard, Notices, Position,
//! };
//!
//! let config = EditorConfig::default();
//! let mut clipboard = MemoryClipboard::new();
//! let mut notices = Notices::new();
//! let mut ctx = CommandContext::new(&config, &mut clipboard, &mut notices);
//!
//! let mut doc = Document::new(config.undo_limit);
//! doc.execute(Command::Edit(EditCommand::InsertChar('(')), &mut ctx);
//! assert_eq!(doc.text(), "()");
//! assert_eq!(doc.cursor(), Position::new(0, 1));
//!
//! assert_eq!(
//!     doc.execute(Command::Edit(EditCommand::Undo), &mut ctx),
//!     CommandResult::Applied
//! );
//! assert_eq!(doc.text(), "");
//! ```

use crate::config::EditorConfig;
use crate::document::Document;
use crate::io::Clipboard;
use crate::notice::Notices;
use crate::position::Position;
use crate::text::{prev_boundary, split_segments};

/// Text editing commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Type one code point, replacing any selection. Openers get their closer auto-inserted.
    ///
    /// `'\n'` breaks the line without auto-indent; other control characters except `'\t'` are
    /// dropped.
    InsertChar(char),
    /// Type a batch of code points (one frame's text input) under a single undo boundary.
    TypeText(String),
    /// Enter: split the line at the cursor with auto-indent.
    NewLine,
    /// Tab: insert one indent unit of spaces.
    InsertTab,
    /// Delete the selection, or one code point before the cursor.
    Backspace,
    /// Same as [`EditCommand::Backspace`] but without a new undo boundary (held-key repeats).
    BackspaceContinue,
    /// Delete the selection, then the word before the cursor.
    DeleteWordBackward,
    /// Delete the selection, if any.
    DeleteSelection,
    /// Insert multi-line text at the cursor, replacing any selection.
    PasteText(String),
    /// Restore the most recent undo snapshot.
    Undo,
}

/// Cursor and selection commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    /// One code point left (wrapping to the previous line end).
    MoveLeft {
        /// Extend the selection instead of clearing it.
        extend: bool,
    },
    /// One code point right (wrapping to the next line start).
    MoveRight {
        /// Extend the selection instead of clearing it.
        extend: bool,
    },
    /// One line up, column clamped.
    MoveUp {
        /// Extend the selection instead of clearing it.
        extend: bool,
    },
    /// One line down, column clamped.
    MoveDown {
        /// Extend the selection instead of clearing it.
        extend: bool,
    },
    /// Jump to a position (clamped and snapped to a boundary).
    MoveTo {
        /// Target position.
        position: Position,
        /// Extend the selection instead of clearing it.
        extend: bool,
    },
    /// Mouse button pressed over the text.
    MouseDown {
        /// Hit-tested position.
        position: Position,
    },
    /// Mouse moved with the button held.
    MouseDrag {
        /// Hit-tested position.
        position: Position,
    },
    /// Mouse button released.
    MouseUp,
    /// Select the whole document.
    SelectAll,
    /// Drop the selection.
    ClearSelection,
}

/// Clipboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCommand {
    /// Copy the selected text.
    Copy,
    /// Copy the selected text, then delete it.
    Cut,
    /// Paste the clipboard text.
    Paste,
}

/// View commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Scroll by a signed number of lines.
    ScrollBy {
        /// Lines to scroll; negative scrolls up.
        lines: isize,
    },
    /// Scroll just enough to keep the cursor row inside a viewport.
    EnsureCursorVisible {
        /// Viewport height in rows.
        rows: usize,
    },
}

/// Unified command enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text editing commands
    Edit(EditCommand),
    /// Cursor command
    Cursor(CursorCommand),
    /// Clipboard command
    Clipboard(ClipboardCommand),
    /// View commands
    View(ViewCommand),
}

/// Command execution result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The command ran (content, cursor, selection or scroll may have changed).
    Applied,
    /// Nothing to do; the document is untouched and no undo snapshot was taken.
    Noop,
    /// Success, returns text (copy/cut).
    Text(String),
    /// Undo was requested with an empty history.
    UndoEmpty,
}

/// Collaborators a command may need besides the document itself.
pub struct CommandContext<'a> {
    /// Editing tunables.
    pub config: &'a EditorConfig,
    /// Clipboard for copy/cut/paste.
    pub clipboard: &'a mut dyn Clipboard,
    /// Output queue for user-visible messages.
    pub notices: &'a mut Notices,
}

impl<'a> CommandContext<'a> {
    /// Bundle the collaborators.
    pub fn new(
        config: &'a EditorConfig,
        clipboard: &'a mut dyn Clipboard,
        notices: &'a mut Notices,
    ) -> Self {
        Self {
            config,
            clipboard,
            notices,
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_dropped_control(ch: char) -> bool {
    ch.is_control() && ch != '\t' && ch != '\n'
}

fn applied(changed: bool) -> CommandResult {
    if changed {
        CommandResult::Applied
    } else {
        CommandResult::Noop
    }
}

impl Document {
    /// Execute a command.
    pub fn execute(&mut self, command: Command, ctx: &mut CommandContext<'_>) -> CommandResult {
        match command {
            Command::Edit(cmd) => self.execute_edit(cmd, ctx.config),
            Command::Cursor(cmd) => self.execute_cursor(cmd),
            Command::Clipboard(cmd) => self.execute_clipboard(cmd, ctx),
            Command::View(cmd) => self.execute_view(cmd),
        }
    }

    fn execute_edit(&mut self, command: EditCommand, config: &EditorConfig) -> CommandResult {
        match command {
            EditCommand::InsertChar(ch) => applied(self.type_char(ch, config)),
            EditCommand::TypeText(text) => applied(self.type_text(&text, config)),
            EditCommand::NewLine => {
                self.new_line(config.indent_unit);
                CommandResult::Applied
            }
            EditCommand::InsertTab => {
                self.insert_tab(config.indent_unit);
                CommandResult::Applied
            }
            EditCommand::Backspace => applied(self.backspace()),
            EditCommand::BackspaceContinue => applied(self.backspace_continue()),
            EditCommand::DeleteWordBackward => applied(self.delete_word_backward()),
            EditCommand::DeleteSelection => applied(self.delete_selected()),
            EditCommand::PasteText(text) => applied(self.paste_text(&text)),
            EditCommand::Undo => {
                if self.undo() {
                    CommandResult::Applied
                } else {
                    CommandResult::UndoEmpty
                }
            }
        }
    }

    fn execute_cursor(&mut self, command: CursorCommand) -> CommandResult {
        match command {
            CursorCommand::MoveLeft { extend } => self.move_left(extend),
            CursorCommand::MoveRight { extend } => self.move_right(extend),
            CursorCommand::MoveUp { extend } => self.move_up(extend),
            CursorCommand::MoveDown { extend } => self.move_down(extend),
            CursorCommand::MoveTo { position, extend } => self.move_cursor(position, extend),
            CursorCommand::MouseDown { position } => self.mouse_press(position),
            CursorCommand::MouseDrag { position } => self.mouse_drag(position),
            CursorCommand::MouseUp => self.mouse_release(),
            CursorCommand::SelectAll => self.select_all(),
            CursorCommand::ClearSelection => self.clear_selection(),
        }
        CommandResult::Applied
    }

    fn execute_clipboard(
        &mut self,
        command: ClipboardCommand,
        ctx: &mut CommandContext<'_>,
    ) -> CommandResult {
        match command {
            ClipboardCommand::Copy => match self.copy_selection(ctx) {
                Some(text) => CommandResult::Text(text),
                None => CommandResult::Noop,
            },
            ClipboardCommand::Cut => match self.copy_selection(ctx) {
                Some(text) => {
                    self.push_undo();
                    self.delete_selection();
                    CommandResult::Text(text)
                }
                None => CommandResult::Noop,
            },
            ClipboardCommand::Paste => match ctx.clipboard.get_text() {
                Some(text) => applied(self.paste_text(&text)),
                None => CommandResult::Noop,
            },
        }
    }

    fn execute_view(&mut self, command: ViewCommand) -> CommandResult {
        match command {
            ViewCommand::ScrollBy { lines } => self.scroll_by(lines),
            ViewCommand::EnsureCursorVisible { rows } => self.ensure_cursor_visible(rows),
        }
        CommandResult::Applied
    }

    // ---- typing -----------------------------------------------------------------------------

    /// Type one code point under its own undo boundary. Returns `false` for a control
    /// character that would be dropped.
    pub fn type_char(&mut self, ch: char, config: &EditorConfig) -> bool {
        if is_dropped_control(ch) {
            return false;
        }
        self.push_undo();
        self.delete_selection();
        self.insert_char_raw(ch, config);
        true
    }

    /// Type a batch of code points in order under one undo boundary. Returns `false` if `text`
    /// is empty.
    pub fn type_text(&mut self, text: &str, config: &EditorConfig) -> bool {
        if text.is_empty() {
            return false;
        }
        self.push_undo();
        self.delete_selection();
        for ch in text.chars() {
            self.insert_char_raw(ch, config);
        }
        true
    }

    fn insert_char_raw(&mut self, ch: char, config: &EditorConfig) {
        let pos = self.cursor();
        if ch == '\n' {
            let next = self.buffer_mut().split_line_plain(pos.row, pos.col);
            self.set_cursor_raw(next);
            self.mark_dirty();
            return;
        }
        if is_dropped_control(ch) {
            return;
        }
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8);
        self.buffer_mut().insert_at(pos.row, pos.col, encoded);
        let col = pos.col + encoded.len();
        if let Some(closer) = config.closer_for(ch) {
            let encoded = closer.encode_utf8(&mut utf8);
            self.buffer_mut().insert_at(pos.row, col, encoded);
        }
        self.set_cursor_raw(Position::new(pos.row, col));
        self.mark_dirty();
    }

    /// Enter: replace the selection, then split the line with auto-indent.
    pub fn new_line(&mut self, indent_unit: usize) {
        self.push_undo();
        self.delete_selection();
        let pos = self.cursor();
        let next = self.buffer_mut().split_line(pos.row, pos.col, indent_unit);
        self.set_cursor_raw(next);
        self.mark_dirty();
    }

    /// Tab: replace the selection, then insert `indent_unit` spaces.
    pub fn insert_tab(&mut self, indent_unit: usize) {
        self.push_undo();
        self.delete_selection();
        let pos = self.cursor();
        self.buffer_mut()
            .insert_at(pos.row, pos.col, &" ".repeat(indent_unit));
        self.set_cursor_raw(Position::new(pos.row, pos.col + indent_unit));
        self.mark_dirty();
    }

    // ---- deletion ---------------------------------------------------------------------------

    /// Backspace under a new undo boundary. Returns `false` if nothing could be deleted.
    ///
    /// Any selection, even an empty one, is consumed instead of deleting a code point.
    pub fn backspace(&mut self) -> bool {
        if !self.has_selection() && self.cursor() == Position::zero() {
            return false;
        }
        self.push_undo();
        self.backspace_continue()
    }

    /// Backspace without an undo snapshot; used for held-key repeats.
    pub fn backspace_continue(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.delete_char_backward_raw()
    }

    fn delete_char_backward_raw(&mut self) -> bool {
        let pos = self.cursor();
        if pos.col > 0 {
            let Some(line) = self.buffer().line(pos.row) else {
                return false;
            };
            let start = prev_boundary(line, pos.col);
            self.buffer_mut().erase_range(pos.row, start, pos.col);
            self.set_cursor_raw(Position::new(pos.row, start));
            self.mark_dirty();
            true
        } else if pos.row > 0 {
            let Some(join_col) = self.buffer_mut().join_with_next(pos.row - 1) else {
                return false;
            };
            self.set_cursor_raw(Position::new(pos.row - 1, join_col));
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    /// Delete the selection and then the word left of the cursor, under one undo boundary.
    ///
    /// Trailing spaces and tabs are skipped first, then one run of either word characters
    /// (ASCII alphanumerics and `_`) or other characters. At column 0 this joins with the
    /// previous line instead.
    pub fn delete_word_backward(&mut self) -> bool {
        if !self.has_selection() && self.cursor() == Position::zero() {
            return false;
        }
        self.push_undo();
        self.delete_selection();
        self.delete_word_backward_raw();
        true
    }

    fn delete_word_backward_raw(&mut self) -> bool {
        let pos = self.cursor();
        if pos.col == 0 {
            return self.delete_char_backward_raw();
        }
        let Some(line) = self.buffer().line(pos.row) else {
            return false;
        };
        let head = &line[..pos.col];
        let trimmed = head.trim_end_matches([' ', '\t']);
        let start = match trimmed.chars().next_back() {
            Some(last) => {
                let word = is_word_char(last);
                trimmed
                    .char_indices()
                    .rev()
                    .take_while(|&(_, ch)| is_word_char(ch) == word)
                    .last()
                    .map_or(trimmed.len(), |(idx, _)| idx)
            }
            None => 0,
        };
        self.buffer_mut().erase_range(pos.row, start, pos.col);
        self.set_cursor_raw(Position::new(pos.row, start));
        self.mark_dirty();
        true
    }

    /// Delete the selection under its own undo boundary. Returns `false` without one.
    pub fn delete_selected(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        self.push_undo();
        self.delete_selection()
    }

    // ---- clipboard --------------------------------------------------------------------------

    /// Insert `text` at the cursor, replacing any selection, under one undo boundary.
    ///
    /// Each `'\n'` splits the line at the insertion point; a `'\r'` before it is dropped. The
    /// cursor ends after the last inserted segment. Returns `false` for empty text.
    pub fn paste_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.push_undo();
        self.delete_selection();
        let mut segments = split_segments(text).peekable();
        while let Some(segment) = segments.next() {
            let pos = self.cursor();
            self.buffer_mut().insert_at(pos.row, pos.col, segment);
            let mut next = Position::new(pos.row, pos.col + segment.len());
            if segments.peek().is_some() {
                next = self.buffer_mut().split_line_plain(next.row, next.col);
            }
            self.set_cursor_raw(next);
        }
        self.mark_dirty();
        true
    }

    fn copy_selection(&mut self, ctx: &mut CommandContext<'_>) -> Option<String> {
        let text = self.selected_text();
        if text.is_empty() {
            return None;
        }
        ctx.clipboard.set_text(text.clone());
        ctx.notices.push("Copied");
        Some(text)
    }
}

use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use linedit_core::layout::col_for_visual_x;
use linedit_core::{
    ClipboardCommand, Command, CursorCommand, EditCommand, Editor, EditorConfig, FrameInput,
    FrameOutcome, Key, MemoryClipboard, MouseInput, Position, StdFileSystem, ViewCommand,
};
use linedit_highlight_simple::SimpleHighlighter;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::render::{self, ScreenLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    SaveAs,
    Open,
}

/// One-line path prompt shown in the status bar.
#[derive(Debug, Clone)]
struct Prompt {
    kind: PromptKind,
    input: String,
}

pub struct App {
    editor: Editor,
    fs: StdFileSystem,
    clipboard: MemoryClipboard,
    highlighter: SimpleHighlighter,
    prompt: Option<Prompt>,
    screen: ScreenLayout,
    last_frame: Instant,
    quit_armed: bool,
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: EditorConfig, paths: Vec<PathBuf>) -> Self {
        let mut app = Self {
            editor: Editor::new(config),
            fs: StdFileSystem,
            clipboard: MemoryClipboard::new(),
            highlighter: SimpleHighlighter::default(),
            prompt: None,
            screen: ScreenLayout::default(),
            last_frame: Instant::now(),
            quit_armed: false,
            status_message: None,
            should_quit: false,
        };
        for path in paths {
            // Failures surface as notices.
            let _ = app.editor.open_path(&path, &app.fs);
        }
        app
    }

    fn take_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }

    fn tab_width(&self) -> usize {
        self.editor.config().indent_unit
    }

    /// Advance timers when no event arrived.
    pub fn tick(&mut self) {
        let dt = self.take_dt();
        self.run_frame(FrameInput::new(dt));
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => {
                self.status_message = None;
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.input.push_str(text.trim_end_matches(['\r', '\n']));
                } else if !self.editor.is_previewing() {
                    self.editor
                        .execute(Command::Edit(EditCommand::PasteText(text)), &mut self.clipboard);
                    self.follow_cursor();
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if !(ctrl && key.code == KeyCode::Char('q')) {
            self.quit_armed = false;
        }
        self.status_message = None;

        match (ctrl, key.code) {
            (true, KeyCode::Char('q')) => {
                let unsaved = self.editor.documents().documents().iter().any(|doc| doc.is_dirty());
                if unsaved && !self.quit_armed {
                    self.quit_armed = true;
                    self.status_message =
                        Some("Unsaved changes. Press Ctrl+Q again to quit.".to_string());
                } else {
                    self.should_quit = true;
                }
                return;
            }
            (true, KeyCode::Char('o')) => {
                self.prompt = Some(Prompt {
                    kind: PromptKind::Open,
                    input: String::new(),
                });
                return;
            }
            (true, KeyCode::PageUp) => {
                let docs = self.editor.documents_mut();
                let index = docs.active_index().checked_sub(1).unwrap_or(docs.len() - 1);
                docs.activate(index);
                return;
            }
            (true, KeyCode::PageDown) => {
                let docs = self.editor.documents_mut();
                docs.activate((docs.active_index() + 1) % docs.len());
                return;
            }
            (_, KeyCode::Esc) => {
                self.editor.documents_mut().clear_preview();
                self.editor
                    .execute(Command::Cursor(CursorCommand::ClearSelection), &mut self.clipboard);
                return;
            }
            (_, KeyCode::PageUp | KeyCode::PageDown) => {
                let rows = self.screen.text_rows().max(1) as isize;
                let lines = if key.code == KeyCode::PageUp { -rows } else { rows };
                self.editor
                    .execute(Command::View(ViewCommand::ScrollBy { lines }), &mut self.clipboard);
                return;
            }
            _ => {}
        }

        let dt = self.take_dt();
        if let Some(input) = frame_for_key(key, dt) {
            self.run_frame(input);
            self.follow_cursor();
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Enter => {
                let Some(prompt) = self.prompt.take() else {
                    return;
                };
                let path = prompt.input.trim();
                if path.is_empty() {
                    return;
                }
                // Both paths report through notices.
                let _ = match prompt.kind {
                    PromptKind::SaveAs => self.editor.save_as(path, &self.fs),
                    PromptKind::Open => self.editor.open_path(path, &self.fs).map(|_| ()),
                };
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let dt = self.take_dt();
        match mouse.kind {
            MouseEventKind::ScrollUp => self.run_frame(FrameInput::new(dt).with_wheel(1.0)),
            MouseEventKind::ScrollDown => self.run_frame(FrameInput::new(dt).with_wheel(-1.0)),
            MouseEventKind::Down(MouseButton::Left) if mouse.row == self.screen.tabs.y => {
                if let Some((index, close)) = self.screen.tab_at(mouse.column) {
                    let docs = self.editor.documents_mut();
                    if close {
                        docs.close(index);
                    } else {
                        docs.activate(index);
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(position) = self.hit_test(mouse.column, mouse.row) {
                    self.run_frame(FrameInput::new(dt).with_mouse(MouseInput::press(position)));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(position) = self.hit_test(mouse.column, mouse.row) {
                    self.run_frame(FrameInput::new(dt).with_mouse(MouseInput::drag(position)));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let position = self.editor.documents().active().cursor();
                self.run_frame(FrameInput::new(dt).with_mouse(MouseInput::release(position)));
            }
            _ => {}
        }
    }

    /// Map a terminal cell to a document position. Cells past the text area clamp to its edges.
    fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        let area = self.screen.text;
        if area.height == 0 || row < area.y {
            return None;
        }
        let doc = self.editor.documents().active();
        let screen_row = (row - area.y).min(area.height - 1) as usize;
        let doc_row = doc.scroll() + screen_row;
        let line = doc.lines().get(doc_row).map(String::as_str).unwrap_or("");
        let x = column.saturating_sub(area.x + self.screen.gutter) as usize;
        Some(Position::new(doc_row, col_for_visual_x(line, x, self.tab_width())))
    }

    fn run_frame(&mut self, input: FrameInput) {
        let outcome = self.editor.update(&input, &self.fs, &mut self.clipboard);
        if outcome == FrameOutcome::SaveAsRequested {
            self.prompt = Some(Prompt {
                kind: PromptKind::SaveAs,
                input: String::new(),
            });
        }
    }

    fn follow_cursor(&mut self) {
        let rows = self.screen.text_rows();
        if rows > 0 {
            self.editor.execute(
                Command::View(ViewCommand::EnsureCursorVisible { rows }),
                &mut self.clipboard,
            );
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let docs = self.editor.documents();
        self.screen.tabs = chunks[0];
        self.screen.tab_spans =
            render::render_tabs(frame, chunks[0], &docs.titles(), docs.active_index());

        if let Some(preview) = docs.preview() {
            self.screen.text = Rect::default();
            self.screen.gutter = 0;
            render::render_preview(frame, chunks[1], preview);
        } else {
            let doc = docs.active();
            let gutter = render::gutter_width(doc.lines().len());
            let highlights =
                self.highlighter
                    .highlight_rows(doc.buffer(), doc.scroll(), chunks[1].height as usize);
            render::render_document(frame, chunks[1], gutter, doc, &highlights, self.tab_width());
            self.screen.text = chunks[1];
            self.screen.gutter = gutter;
        }

        render::render_status(frame, chunks[2], self.status_line());
        render::render_shortcuts(frame, chunks[3]);
    }

    fn status_line(&self) -> String {
        if let Some(prompt) = &self.prompt {
            let label = match prompt.kind {
                PromptKind::SaveAs => "Save as",
                PromptKind::Open => "Open",
            };
            return format!(" {label}: {}_", prompt.input);
        }
        if let Some(message) = &self.status_message {
            return format!(" {message}");
        }
        if let Some(notice) = self.editor.notices().current() {
            return format!(" {}", notice.message);
        }
        let doc = self.editor.documents().active();
        let cursor = doc.cursor();
        format!(
            " {} | Ln {}, Col {} | {} lines",
            doc.title(),
            cursor.row + 1,
            cursor.col + 1,
            doc.lines().len()
        )
    }
}

/// Translate one key event into a frame.
///
/// Terminals report auto-repeat as further presses, so a held backspace arrives as a stream of
/// press edges rather than a held state.
pub fn frame_for_key(key: KeyEvent, dt: f32) -> Option<FrameInput> {
    let mut input = FrameInput::new(dt);
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        input = input.with_ctrl();
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        input = input.with_shift();
    }

    let named = match key.code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) if input.ctrl => match c.to_ascii_lowercase() {
            ' ' => Key::Space,
            // Most terminals send ctrl+backspace as ctrl+h.
            'h' => Key::Backspace,
            's' => Key::S,
            'z' => Key::Z,
            'n' => Key::N,
            'w' => Key::W,
            'a' => Key::A,
            'c' => Key::C,
            'x' => Key::X,
            'v' => Key::V,
            _ => return None,
        },
        KeyCode::Char(c) => return Some(input.with_text(c.encode_utf8(&mut [0; 4]))),
        _ => return None,
    };
    Some(input.press(named))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_chars_become_text() {
        let input = frame_for_key(key(KeyCode::Char('é'), KeyModifiers::NONE), 0.0).unwrap();
        assert_eq!(input.text, vec!['é']);
        assert!(input.pressed.is_empty());
    }

    #[test]
    fn test_ctrl_chars_become_accelerators() {
        let input = frame_for_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL), 0.0).unwrap();
        assert!(input.accelerator(Key::S));
        assert!(input.text.is_empty());

        let input = frame_for_key(key(KeyCode::Char('h'), KeyModifiers::CONTROL), 0.0).unwrap();
        assert!(input.accelerator(Key::Backspace));

        assert!(frame_for_key(key(KeyCode::Char('k'), KeyModifiers::CONTROL), 0.0).is_none());
    }

    #[test]
    fn test_shift_arrow_extends() {
        let input = frame_for_key(key(KeyCode::Right, KeyModifiers::SHIFT), 0.0).unwrap();
        assert!(input.shift);
        assert!(input.is_pressed(Key::Right));
    }

    #[test]
    fn test_repeated_backspace_presses_each_delete() {
        let mut app = App::new(EditorConfig::default(), Vec::new());
        app.handle_event(Event::Paste("abc".to_string()));
        for _ in 0..2 {
            app.handle_event(Event::Key(key(KeyCode::Backspace, KeyModifiers::NONE)));
        }
        assert_eq!(app.editor.documents().active().lines(), &["a"]);
    }

    #[test]
    fn test_ctrl_q_needs_confirmation_when_dirty() {
        let mut app = App::new(EditorConfig::default(), Vec::new());
        app.handle_event(Event::Key(key(KeyCode::Char('x'), KeyModifiers::NONE)));
        app.handle_event(Event::Key(key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!app.should_quit);
        app.handle_event(Event::Key(key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_s_on_untitled_opens_save_prompt() {
        let mut app = App::new(EditorConfig::default(), Vec::new());
        app.handle_event(Event::Key(key(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert_eq!(app.prompt.as_ref().map(|p| p.kind), Some(PromptKind::SaveAs));
        app.handle_event(Event::Key(key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(app.prompt.is_none());
    }
}

//! Frame driver.
//!
//! [`Editor`] owns the [`DocumentSet`], the configuration, the notice queue and the held
//! backspace timer, and turns one [`FrameInput`] per frame into commands on the active
//! document. Hosts that want finer control can skip `update` and drive
//! [`Editor::execute`] directly.

use std::path::{Path, PathBuf};

use crate::commands::{
    ClipboardCommand, Command, CommandContext, CommandResult, CursorCommand, EditCommand,
    ViewCommand,
};
use crate::config::EditorConfig;
use crate::documents::{ContentKind, DocumentSet};
use crate::error::FileError;
use crate::input::{FrameInput, Key};
use crate::io::{Clipboard, FileSystem};
use crate::key_repeat::{KeyRepeat, RepeatAction};
use crate::notice::Notices;

/// What the host has to follow up on after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing pending.
    Done,
    /// Ctrl+S on an Untitled document: ask the user for a path, then call
    /// [`Editor::save_as`].
    SaveAsRequested,
}

/// Multi-document editor state driven one frame at a time.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    documents: DocumentSet,
    notices: Notices,
    backspace: KeyRepeat,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with one Untitled document.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            documents: DocumentSet::new(&config),
            notices: Notices::new(),
            backspace: KeyRepeat::from_config(&config),
            config,
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Open documents.
    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    /// Open documents, mutably (tab clicks, close buttons).
    pub fn documents_mut(&mut self) -> &mut DocumentSet {
        &mut self.documents
    }

    /// Live notices.
    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// `true` while a media preview replaces the text view.
    pub fn is_previewing(&self) -> bool {
        self.documents.preview().is_some()
    }

    /// Execute a command on the active document.
    pub fn execute(&mut self, command: Command, clipboard: &mut dyn Clipboard) -> CommandResult {
        let mut ctx = CommandContext::new(&self.config, clipboard, &mut self.notices);
        self.documents.active_mut().execute(command, &mut ctx)
    }

    /// Open a file from a browser or the command line.
    pub fn open_path(
        &mut self,
        path: impl AsRef<Path>,
        fs: &dyn FileSystem,
    ) -> Result<ContentKind, FileError> {
        self.documents
            .open_path(path, fs, &self.config, &mut self.notices)
    }

    /// Save the active document.
    pub fn save(&mut self, fs: &dyn FileSystem) -> Result<(), FileError> {
        self.documents.save_active(fs, &mut self.notices)
    }

    /// Save the active document under a new path.
    pub fn save_as(&mut self, path: impl Into<PathBuf>, fs: &dyn FileSystem) -> Result<(), FileError> {
        self.documents.save_active_as(path, fs, &mut self.notices)
    }

    /// Process one frame of input.
    ///
    /// Order: notices age, ctrl accelerators (undo ends the frame), wheel, typed text, word
    /// delete or held backspace, enter, tab, arrows, mouse. Text editing input is ignored while
    /// a preview is showing.
    pub fn update(
        &mut self,
        input: &FrameInput,
        fs: &dyn FileSystem,
        clipboard: &mut dyn Clipboard,
    ) -> FrameOutcome {
        self.notices.tick(input.dt);
        let mut outcome = FrameOutcome::Done;

        if input.ctrl {
            if input.is_pressed(Key::S) {
                match self.save(fs) {
                    Err(FileError::NoPath) => outcome = FrameOutcome::SaveAsRequested,
                    // Failure is already reported through a notice.
                    Err(_) | Ok(()) => {}
                }
            }
            if input.is_pressed(Key::Z) {
                self.execute(Command::Edit(EditCommand::Undo), clipboard);
                return outcome;
            }
            if input.is_pressed(Key::N) {
                self.documents.create_new_file();
            }
            if input.is_pressed(Key::W) {
                self.documents.close_active();
            }
            if input.is_pressed(Key::A) {
                self.execute(Command::Cursor(CursorCommand::SelectAll), clipboard);
            }
            if input.is_pressed(Key::C) {
                self.execute(Command::Clipboard(ClipboardCommand::Copy), clipboard);
            }
            if input.is_pressed(Key::X) {
                self.execute(Command::Clipboard(ClipboardCommand::Cut), clipboard);
            }
            if input.is_pressed(Key::V) {
                self.execute(Command::Clipboard(ClipboardCommand::Paste), clipboard);
            }
        } else if !self.is_previewing() && input.wheel != 0.0 {
            let notches = input.wheel as isize;
            let lines = -notches * self.config.scroll_lines_per_wheel as isize;
            self.execute(Command::View(ViewCommand::ScrollBy { lines }), clipboard);
        }

        if self.is_previewing() {
            self.backspace.reset();
            return outcome;
        }

        if !input.text.is_empty() {
            let text: String = input.text.iter().collect();
            self.execute(Command::Edit(EditCommand::TypeText(text)), clipboard);
        }

        if input.accelerator(Key::Backspace) || input.accelerator(Key::Space) {
            self.execute(Command::Edit(EditCommand::DeleteWordBackward), clipboard);
        } else if input.is_down(Key::Backspace) && !input.ctrl {
            let action = self.backspace.update(
                input.is_pressed(Key::Backspace),
                true,
                input.dt,
            );
            let command = match action {
                RepeatAction::Press => Some(EditCommand::Backspace),
                RepeatAction::Repeat => Some(EditCommand::BackspaceContinue),
                RepeatAction::None => None,
            };
            if let Some(command) = command {
                self.execute(Command::Edit(command), clipboard);
            }
        } else {
            self.backspace.reset();
        }

        if input.is_pressed(Key::Enter) {
            self.execute(Command::Edit(EditCommand::NewLine), clipboard);
        }
        if input.is_pressed(Key::Tab) && !input.ctrl {
            self.execute(Command::Edit(EditCommand::InsertTab), clipboard);
        }

        let extend = input.shift;
        let arrows = [
            (Key::Left, CursorCommand::MoveLeft { extend }),
            (Key::Right, CursorCommand::MoveRight { extend }),
            (Key::Up, CursorCommand::MoveUp { extend }),
            (Key::Down, CursorCommand::MoveDown { extend }),
        ];
        for (key, command) in arrows {
            if input.is_pressed(key) {
                self.execute(Command::Cursor(command), clipboard);
            }
        }

        if let Some(mouse) = input.mouse {
            let command = if mouse.pressed {
                Some(CursorCommand::MouseDown {
                    position: mouse.position,
                })
            } else if mouse.down {
                Some(CursorCommand::MouseDrag {
                    position: mouse.position,
                })
            } else if mouse.released {
                Some(CursorCommand::MouseUp)
            } else {
                None
            };
            if let Some(command) = command {
                self.execute(Command::Cursor(command), clipboard);
            }
        }

        outcome
    }
}

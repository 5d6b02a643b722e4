#![warn(missing_docs)]
//! Linedit Core - line-array editing kernel for a multi-document code editor
//!
//! # Overview
//!
//! `linedit-core` holds everything an editor needs between "a key was pressed" and "draw the
//! buffer": the per-document line array, UTF-8 safe cursor motion, anchor/active selections,
//! word and character deletion, multi-line paste, snapshot undo and the set of open documents.
//! It draws nothing and touches no OS services directly; hosts supply a [`FileSystem`] and a
//! [`Clipboard`] and read back lines, cursor, selection and scroll to render.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Frame driver (Editor, FrameInput)          │  ← Host-facing loop
//! ├─────────────────────────────────────────────┤
//! │  DocumentSet (tabs, load/save, preview)     │  ← Lifecycle
//! ├─────────────────────────────────────────────┤
//! │  Commands (undo-boundary policy)            │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Document: cursor, selection, undo stack    │  ← Per-document state
//! ├─────────────────────────────────────────────┤
//! │  TextBuffer (Vec<String> of lines)          │  ← Text storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Coordinates
//!
//! Columns are **byte offsets** into a line and always sit on a code point boundary. Anything
//! coming from outside (mouse hit-tests, vertical motion onto a shorter line) is clamped and
//! snapped down to a boundary before it is stored.
//!
//! # Quick Start
//!
//! ```rust
//! use linedit_core::{Editor, FrameInput, Key, MemoryClipboard, MemoryFileSystem, Position};
//!
//! let fs = MemoryFileSystem::new();
//! let mut clipboard = MemoryClipboard::new();
//! let mut editor = Editor::default();
//!
//! editor.update(&FrameInput::new(0.016).with_text("fn main("), &fs, &mut clipboard);
//! editor.update(&FrameInput::new(0.016).press(Key::Right), &fs, &mut clipboard);
//! editor.update(&FrameInput::new(0.016).with_text(" {"), &fs, &mut clipboard);
//! editor.update(&FrameInput::new(0.016).press(Key::Enter), &fs, &mut clipboard);
//!
//! let doc = editor.documents().active();
//! assert_eq!(doc.lines(), &["fn main() {", "    ", "}"]);
//! assert_eq!(doc.cursor(), Position::new(1, 4));
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - line storage and mutation primitives
//! - [`cursor`] - code point motion
//! - [`undo`] - bounded snapshot history
//! - [`commands`] - edit, cursor, clipboard and view commands
//! - [`documents`] - the set of open documents
//! - [`key_repeat`] - held-backspace timing
//! - [`layout`] - display-cell conversions for renderers

pub mod buffer;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod document;
pub mod documents;
pub mod editor;
mod error;
pub mod input;
pub mod io;
pub mod key_repeat;
pub mod layout;
pub mod notice;
mod position;
mod selection;
pub mod text;
pub mod undo;

pub use buffer::TextBuffer;
pub use commands::{
    ClipboardCommand, Command, CommandContext, CommandResult, CursorCommand, EditCommand,
    ViewCommand,
};
pub use config::EditorConfig;
pub use document::{Document, UNTITLED};
pub use documents::{ContentKind, DocumentSet, Preview};
pub use editor::{Editor, FrameOutcome};
pub use error::FileError;
pub use input::{FrameInput, Key, MouseInput};
pub use io::{Clipboard, FileSystem, MemoryClipboard, MemoryFileSystem, StdFileSystem};
pub use key_repeat::{KeyRepeat, RepeatAction, RepeatState};
pub use notice::{NOTICE_LIFETIME, Notice, Notices};
pub use position::Position;
pub use selection::{Selection, SelectionDirection};
pub use undo::{DEFAULT_UNDO_LIMIT, UndoSnapshot, UndoStack};

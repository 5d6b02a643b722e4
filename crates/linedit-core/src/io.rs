//! Filesystem and clipboard collaborators.
//!
//! The core never touches the OS directly. Hosts hand in a [`FileSystem`] and a [`Clipboard`];
//! [`StdFileSystem`] and [`MemoryClipboard`] cover the common case and the in-memory variants
//! serve tests and embedders.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::text::split_file_lines;

/// Line-oriented file access.
pub trait FileSystem {
    /// Read `path` as lines (no terminators, one trailing `'\r'` stripped per line). Content
    /// that is not valid UTF-8 is an [`io::ErrorKind::InvalidData`] error.
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Write `lines` joined by a single `'\n'`, with no terminator after the final line.
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(split_file_lines(&text))
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        fs::write(path, lines.join("\n"))
    }
}

/// In-memory [`FileSystem`] keyed by path.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<HashMap<PathBuf, String>>,
    read_only: RefCell<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    /// Current contents of a file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        self.read_only.borrow_mut().push(path.into());
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        self.files
            .borrow()
            .get(path)
            .map(|text| split_file_lines(text))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        if self.read_only.borrow().iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only file",
            ));
        }
        self.insert(path, lines.join("\n"));
        Ok(())
    }
}

/// System clipboard access.
pub trait Clipboard {
    /// Current clipboard text, or `None` if empty or unavailable.
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard text.
    fn set_text(&mut self, text: String);
}

/// A process-local clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard already holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }
}

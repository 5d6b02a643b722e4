//! Ordered set of open documents (the tab strip).
//!
//! [`DocumentSet`] always holds at least one [`Document`] and exactly one active index. Media
//! files are not opened as text: [`DocumentSet::open_path`] routes them into a [`Preview`] slot
//! that the host renders however it likes, and editing input is ignored while it is set.

use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::document::Document;
use crate::error::FileError;
use crate::io::FileSystem;
use crate::notice::Notices;

/// What a path holds, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Editable text.
    Text,
    /// `png`, `jpg`, `jpeg`, `gif`, `bmp`.
    Image,
    /// `wav`, `mp3`, `ogg`.
    Audio,
}

impl ContentKind {
    /// Classify `path` by its lowercase extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("png" | "jpg" | "jpeg" | "gif" | "bmp") => Self::Image,
            Some("wav" | "mp3" | "ogg") => Self::Audio,
            _ => Self::Text,
        }
    }
}

/// A media file shown instead of the active text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Image or audio.
    pub kind: ContentKind,
    /// File being previewed.
    pub path: PathBuf,
}

/// Open documents plus the active index.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    docs: Vec<Document>,
    active: usize,
    preview: Option<Preview>,
    undo_limit: usize,
}

impl DocumentSet {
    /// Create a set holding one Untitled document.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            docs: vec![Document::new(config.undo_limit)],
            active: 0,
            preview: None,
            undo_limit: config.undo_limit,
        }
    }

    /// Number of open documents (never zero).
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Always `false`; a set holds at least one document.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// All documents in tab order.
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    /// Document at `index`.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.docs.get(index)
    }

    /// Index of the active document.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active document.
    pub fn active(&self) -> &Document {
        &self.docs[self.active]
    }

    /// The active document, mutably.
    pub fn active_mut(&mut self) -> &mut Document {
        &mut self.docs[self.active]
    }

    /// Tab titles in order.
    pub fn titles(&self) -> Vec<String> {
        self.docs.iter().map(Document::title).collect()
    }

    /// Index of the document opened from `path`, if any.
    pub fn find_path(&self, path: &Path) -> Option<usize> {
        self.docs.iter().position(|doc| doc.path() == Some(path))
    }

    /// Make document `index` active; out-of-range indices are clamped.
    pub fn activate(&mut self, index: usize) {
        self.active = index.min(self.docs.len() - 1);
    }

    /// Append an empty Untitled document and make it active.
    pub fn create_new_file(&mut self) {
        self.clear_preview();
        self.docs.push(Document::new(self.undo_limit));
        self.active = self.docs.len() - 1;
        tracing::debug!(count = self.docs.len(), "created untitled document");
    }

    /// Open `path` as text and make it active.
    ///
    /// An already-open path is just activated. A pristine Untitled active document is replaced
    /// in place, otherwise a new tab is appended. On a read error the set is left unchanged and
    /// a notice is queued. Returns the index of the document.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        fs: &dyn FileSystem,
        notices: &mut Notices,
    ) -> Result<usize, FileError> {
        let path = path.as_ref();
        self.clear_preview();
        if let Some(index) = self.find_path(path) {
            self.active = index;
            return Ok(index);
        }

        let lines = fs.read_lines(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "failed to open file");
            notices.push(format!("Could not open {}", path.display()));
            FileError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let doc = Document::from_lines(path, lines, self.undo_limit);
        tracing::debug!(path = %path.display(), lines = doc.lines().len(), "loaded file");
        if self.active().is_pristine() {
            self.docs[self.active] = doc;
        } else {
            self.docs.push(doc);
            self.active = self.docs.len() - 1;
        }
        Ok(self.active)
    }

    /// Open `path` the way a file browser would: media goes to the preview slot (when that
    /// kind of preview is enabled), everything else through [`DocumentSet::load_file`].
    pub fn open_path(
        &mut self,
        path: impl AsRef<Path>,
        fs: &dyn FileSystem,
        config: &EditorConfig,
        notices: &mut Notices,
    ) -> Result<ContentKind, FileError> {
        let path = path.as_ref();
        let kind = ContentKind::from_path(path);
        let previewable = match kind {
            ContentKind::Image => config.image_preview,
            ContentKind::Audio => config.audio_preview,
            ContentKind::Text => false,
        };
        if previewable {
            tracing::debug!(path = %path.display(), ?kind, "previewing media file");
            self.preview = Some(Preview {
                kind,
                path: path.to_path_buf(),
            });
            return Ok(kind);
        }
        self.load_file(path, fs, notices)?;
        Ok(ContentKind::Text)
    }

    /// The media preview, if one is showing.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Hide the media preview.
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Close the active document.
    pub fn close_active(&mut self) {
        self.close(self.active);
    }

    /// Close document `index` (clamped). Closing the last document leaves a fresh Untitled one.
    pub fn close(&mut self, index: usize) {
        let index = index.min(self.docs.len() - 1);
        let closed = self.docs.remove(index);
        tracing::debug!(filename = closed.filename(), dirty = closed.is_dirty(), "closed document");
        if self.docs.is_empty() {
            self.docs.push(Document::new(self.undo_limit));
        }
        if self.active >= self.docs.len() {
            self.active = self.docs.len() - 1;
        }
    }

    /// Write the active document to its path.
    ///
    /// Returns [`FileError::NoPath`] for an Untitled document; the host should ask for a path
    /// and call [`DocumentSet::save_active_as`].
    pub fn save_active(
        &mut self,
        fs: &dyn FileSystem,
        notices: &mut Notices,
    ) -> Result<(), FileError> {
        let doc = &mut self.docs[self.active];
        let Some(path) = doc.path().map(Path::to_path_buf) else {
            return Err(FileError::NoPath);
        };
        match fs.write_lines(&path, doc.lines()) {
            Ok(()) => {
                doc.mark_saved();
                tracing::debug!(path = %path.display(), "saved file");
                notices.push(format!("Saved: {}", doc.filename()));
                Ok(())
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "failed to save file");
                notices.push("Save Failed!");
                Err(FileError::Write { path, source })
            }
        }
    }

    /// Give the active document a new path, then save it.
    pub fn save_active_as(
        &mut self,
        path: impl Into<PathBuf>,
        fs: &dyn FileSystem,
        notices: &mut Notices,
    ) -> Result<(), FileError> {
        self.active_mut().set_path(path);
        self.save_active(fs, notices)
    }
}

//! Editor configuration.
//!
//! The editing core owns no global settings. Hosts build an [`EditorConfig`] (usually
//! `EditorConfig::default()` tweaked with the `with_*` setters) and pass it by reference to the
//! command layer and the frame driver.

use crate::undo::DEFAULT_UNDO_LIMIT;

/// Tunables consumed by editing commands and the frame driver.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Spaces per auto-indent level and per Tab key press.
    pub indent_unit: usize,
    /// Maximum undo snapshots per document.
    pub undo_limit: usize,
    /// Seconds a backspace must be held before it starts repeating.
    pub backspace_repeat_delay: f32,
    /// Seconds between repeated deletes while backspace stays held.
    pub backspace_repeat_interval: f32,
    /// `(opener, closer)` pairs; typing an opener also inserts its closer after the cursor.
    pub auto_pairs: Vec<(char, char)>,
    /// Lines scrolled per mouse wheel notch.
    pub scroll_lines_per_wheel: usize,
    /// Open image files as a preview instead of as text.
    pub image_preview: bool,
    /// Open audio files as a preview instead of as text.
    pub audio_preview: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_unit: 4,
            undo_limit: DEFAULT_UNDO_LIMIT,
            backspace_repeat_delay: 0.35,
            backspace_repeat_interval: 0.03,
            auto_pairs: vec![('{', '}'), ('(', ')'), ('[', ']'), ('"', '"')],
            scroll_lines_per_wheel: 3,
            image_preview: true,
            audio_preview: true,
        }
    }
}

impl EditorConfig {
    /// Set the indent unit (clamped to at least one space).
    pub fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit.max(1);
        self
    }

    /// Set the per-document undo limit.
    pub fn with_undo_limit(mut self, undo_limit: usize) -> Self {
        self.undo_limit = undo_limit;
        self
    }

    /// Set the held-backspace timing, in seconds.
    pub fn with_backspace_repeat(mut self, delay: f32, interval: f32) -> Self {
        self.backspace_repeat_delay = delay;
        self.backspace_repeat_interval = interval;
        self
    }

    /// Replace the auto-pair table. An empty table disables auto-pairing.
    pub fn with_auto_pairs(mut self, pairs: Vec<(char, char)>) -> Self {
        self.auto_pairs = pairs;
        self
    }

    /// Enable or disable media previews.
    pub fn with_previews(mut self, image: bool, audio: bool) -> Self {
        self.image_preview = image;
        self.audio_preview = audio;
        self
    }

    /// Closer to auto-insert after `opener`, if any.
    pub fn closer_for(&self, opener: char) -> Option<char> {
        self.auto_pairs
            .iter()
            .find(|(open, _)| *open == opener)
            .map(|(_, close)| *close)
    }
}

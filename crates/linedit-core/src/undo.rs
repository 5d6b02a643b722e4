//! Bounded snapshot undo history.
//!
//! Each entry is a full copy of a document's lines plus the cursor, captured **before** a
//! mutation. Restoring an entry reproduces the earlier state exactly; there is no diffing and no
//! redo. When the stack is full the oldest entry is dropped first.

use std::collections::VecDeque;

use crate::position::Position;

/// Default maximum number of snapshots kept per document.
pub const DEFAULT_UNDO_LIMIT: usize = 50;

/// One undo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoSnapshot {
    /// Deep copy of the document lines.
    pub lines: Vec<String>,
    /// Cursor at the time of the push.
    pub cursor: Position,
}

/// FIFO-evicting stack of [`UndoSnapshot`]s.
#[derive(Debug, Clone)]
pub struct UndoStack {
    entries: VecDeque<UndoSnapshot>,
    limit: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}

impl UndoStack {
    /// Create an empty stack holding at most `limit` entries (at least 1).
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Push a snapshot, evicting the oldest entry if the stack is full.
    pub fn push(&mut self, snapshot: UndoSnapshot) {
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
        tracing::trace!(depth = self.entries.len(), "undo snapshot pushed");
    }

    /// Pop the most recent snapshot. The popped snapshot is gone for good.
    pub fn pop(&mut self) -> Option<UndoSnapshot> {
        let snapshot = self.entries.pop_back();
        tracing::trace!(depth = self.entries.len(), popped = snapshot.is_some(), "undo pop");
        snapshot
    }

    /// Most recent snapshot without removing it.
    pub fn peek(&self) -> Option<&UndoSnapshot> {
        self.entries.back()
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of snapshots.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

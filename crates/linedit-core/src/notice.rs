//! User-visible notices ("Copied", "Saved: main.rs", "Save Failed!").
//!
//! Operations that report an outcome to the user push into a caller-owned [`Notices`] queue
//! instead of a process-wide toast list. The UI shell ticks the queue once per frame and draws
//! whatever is still alive.

use std::collections::VecDeque;

/// How long a notice stays visible, in seconds.
pub const NOTICE_LIFETIME: f32 = 2.0;

/// A single transient message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Message text.
    pub message: String,
    /// Seconds left before the notice expires.
    pub remaining: f32,
}

/// Queue of live notices, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message with the default lifetime.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "notice");
        self.queue.push_back(Notice {
            message,
            remaining: NOTICE_LIFETIME,
        });
    }

    /// Age the front notice by `dt` seconds and drop it once expired.
    ///
    /// Notices are shown one at a time, so only the front one ages.
    pub fn tick(&mut self, dt: f32) {
        if let Some(front) = self.queue.front_mut() {
            front.remaining -= dt;
            if front.remaining <= 0.0 {
                self.queue.pop_front();
            }
        }
    }

    /// The notice currently on display.
    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    /// All queued notices, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    /// Number of queued notices.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Messages of all queued notices, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.queue.iter().map(|n| n.message.as_str()).collect()
    }
}

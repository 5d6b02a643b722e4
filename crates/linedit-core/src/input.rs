//! Per-frame input snapshot handed to [`crate::Editor::update`].
//!
//! The host polls its window or terminal once per frame and fills in a [`FrameInput`]. Mouse
//! coordinates arrive already hit-tested into a document [`Position`]; the core never sees
//! pixels or cells.

use crate::position::Position;

/// Named keys the frame driver reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Space bar (only meaningful as a key with ctrl held; typed spaces arrive as text).
    Space,
    /// `S` accelerator (save).
    S,
    /// `Z` accelerator (undo).
    Z,
    /// `N` accelerator (new file).
    N,
    /// `W` accelerator (close tab).
    W,
    /// `A` accelerator (select all).
    A,
    /// `C` accelerator (copy).
    C,
    /// `X` accelerator (cut).
    X,
    /// `V` accelerator (paste).
    V,
}

/// Primary mouse button state over the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    /// Document position under the pointer.
    pub position: Position,
    /// Button went down this frame.
    pub pressed: bool,
    /// Button is held.
    pub down: bool,
    /// Button went up this frame.
    pub released: bool,
}

/// Everything that happened during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Typed code points in arrival order.
    pub text: Vec<char>,
    /// Keys that went down this frame.
    pub pressed: Vec<Key>,
    /// Keys held down (a key pressed this frame counts as held too).
    pub held: Vec<Key>,
    /// Either ctrl key is down.
    pub ctrl: bool,
    /// Either shift key is down.
    pub shift: bool,
    /// Mouse state, if the pointer is over the text area.
    pub mouse: Option<MouseInput>,
    /// Wheel notches; positive scrolls up.
    pub wheel: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

impl FrameInput {
    /// An empty frame lasting `dt` seconds.
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    /// Append typed text.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text.extend(text.chars());
        self
    }

    /// Mark `key` as pressed (and held) this frame.
    pub fn press(mut self, key: Key) -> Self {
        self.pressed.push(key);
        self
    }

    /// Mark `key` as held without a press edge.
    pub fn hold(mut self, key: Key) -> Self {
        self.held.push(key);
        self
    }

    /// Hold ctrl.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Hold shift.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Set the mouse state.
    pub fn with_mouse(mut self, mouse: MouseInput) -> Self {
        self.mouse = Some(mouse);
        self
    }

    /// Set the wheel delta.
    pub fn with_wheel(mut self, wheel: f32) -> Self {
        self.wheel = wheel;
        self
    }

    /// `key` went down this frame.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// `key` is held (including a press this frame).
    pub fn is_down(&self, key: Key) -> bool {
        self.is_pressed(key) || self.held.contains(&key)
    }

    /// `key` pressed with ctrl held.
    pub fn accelerator(&self, key: Key) -> bool {
        self.ctrl && self.is_pressed(key)
    }
}

impl MouseInput {
    /// Button pressed at `position` this frame.
    pub fn press(position: Position) -> Self {
        Self {
            position,
            pressed: true,
            down: true,
            released: false,
        }
    }

    /// Button held while the pointer is at `position`.
    pub fn drag(position: Position) -> Self {
        Self {
            position,
            pressed: false,
            down: true,
            released: false,
        }
    }

    /// Button released at `position` this frame.
    pub fn release(position: Position) -> Self {
        Self {
            position,
            pressed: false,
            down: false,
            released: true,
        }
    }
}

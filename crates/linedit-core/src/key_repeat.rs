//! Held-key repeat timing.
//!
//! A press acts immediately. If the key stays down, nothing happens until `delay` seconds have
//! passed; after that one repeat fires every time the elapsed-since-delay time crosses a
//! multiple of `interval`. The machine is evaluated once per frame and never yields more than
//! one action per frame, however long the frame was.

use crate::config::EditorConfig;

/// Where the key is in its press/hold cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepeatState {
    /// Key is up.
    Idle,
    /// Key went down and the initial delay has not elapsed yet.
    JustPressed {
        /// Seconds held so far.
        held: f32,
    },
    /// Key has been held past the delay.
    Holding {
        /// Seconds since the delay elapsed.
        since_delay: f32,
    },
}

/// What the caller should do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatAction {
    /// Nothing.
    None,
    /// The key was pressed this frame; act and open a new undo boundary.
    Press,
    /// Auto-repeat; act without a new undo boundary.
    Repeat,
}

/// Repeat state machine for one key.
#[derive(Debug, Clone)]
pub struct KeyRepeat {
    delay: f32,
    interval: f32,
    state: RepeatState,
}

impl KeyRepeat {
    /// Create an idle machine.
    pub fn new(delay: f32, interval: f32) -> Self {
        Self {
            delay,
            interval: interval.max(f32::EPSILON),
            state: RepeatState::Idle,
        }
    }

    /// Backspace timing from `config`.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(
            config.backspace_repeat_delay,
            config.backspace_repeat_interval,
        )
    }

    /// Current state.
    pub fn state(&self) -> RepeatState {
        self.state
    }

    /// Forget any hold in progress.
    pub fn reset(&mut self) {
        self.state = RepeatState::Idle;
    }

    /// Advance by one frame.
    ///
    /// `pressed` is the key-went-down edge for this frame, `down` whether it is currently held
    /// and `dt` the frame time in seconds.
    pub fn update(&mut self, pressed: bool, down: bool, dt: f32) -> RepeatAction {
        if pressed {
            self.state = RepeatState::JustPressed { held: 0.0 };
            return RepeatAction::Press;
        }
        if !down {
            self.state = RepeatState::Idle;
            return RepeatAction::None;
        }

        let held = match self.state {
            RepeatState::Idle => dt,
            RepeatState::JustPressed { held } => held + dt,
            RepeatState::Holding { since_delay } => since_delay + self.delay + dt,
        };
        if held <= self.delay {
            self.state = RepeatState::JustPressed { held };
            return RepeatAction::None;
        }

        let since_delay = held - self.delay;
        self.state = RepeatState::Holding { since_delay };
        // Tick counts truncate toward zero, so the frame that crosses the delay only repeats
        // once a full interval has passed.
        let ticks = (since_delay / self.interval) as i64;
        let prev_ticks = ((since_delay - dt) / self.interval) as i64;
        if ticks > prev_ticks {
            RepeatAction::Repeat
        } else {
            RepeatAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(repeat: &mut KeyRepeat, count: usize, dt: f32) -> usize {
        (0..count)
            .filter(|_| repeat.update(false, true, dt) == RepeatAction::Repeat)
            .count()
    }

    #[test]
    fn test_press_fires_immediately() {
        let mut repeat = KeyRepeat::new(0.35, 0.03);
        assert_eq!(repeat.update(true, true, 0.016), RepeatAction::Press);
        assert_eq!(repeat.state(), RepeatState::JustPressed { held: 0.0 });
    }

    #[test]
    fn test_no_repeat_before_delay() {
        let mut repeat = KeyRepeat::new(0.35, 0.03);
        repeat.update(true, true, 0.1);
        assert_eq!(frames(&mut repeat, 3, 0.1), 0);
        assert!(matches!(repeat.state(), RepeatState::JustPressed { .. }));
    }

    #[test]
    fn test_repeats_at_interval_after_delay() {
        let mut repeat = KeyRepeat::new(0.5, 0.25);
        repeat.update(true, true, 0.0);
        // 0.5s of delay, then 1.0s of holding at 0.125s per frame: 4 interval crossings.
        assert_eq!(frames(&mut repeat, 4, 0.125), 0);
        assert_eq!(frames(&mut repeat, 8, 0.125), 4);
    }

    #[test]
    fn test_long_frame_yields_at_most_one_repeat() {
        let mut repeat = KeyRepeat::new(0.0, 0.01);
        repeat.update(true, true, 0.0);
        assert_eq!(repeat.update(false, true, 0.05), RepeatAction::Repeat);
        assert_eq!(repeat.update(false, true, 0.05), RepeatAction::Repeat);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut repeat = KeyRepeat::new(0.35, 0.03);
        repeat.update(true, true, 0.0);
        frames(&mut repeat, 30, 0.016);
        assert_eq!(repeat.update(false, false, 0.016), RepeatAction::None);
        assert_eq!(repeat.state(), RepeatState::Idle);
    }
}

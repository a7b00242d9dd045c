//! Held-key and pointer tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::map::{movement_direction, HorizontalDirection};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state. OS key auto-repeat keeps
// refreshing the timestamp while the key really is held.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Input state sampled by the game loop once per tick.
///
/// `pointer_col` is the terminal column of the last pointer movement since
/// the previous sample; the host converts it to an arena coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampledInput {
    pub left: bool,
    pub right: bool,
    pub pointer_col: Option<u16>,
}

/// Tracks held direction flags and the latest pointer position.
///
/// Event handlers mutate this between ticks; [`InputTracker::sample`] reads
/// it exactly once per tick. The two direction flags are independent, like
/// the key-down/key-up flag pair they model.
#[derive(Debug, Clone)]
pub struct InputTracker {
    left_held: bool,
    right_held: bool,
    last_key_time: Instant,
    pointer_col: Option<u16>,
    key_release_timeout_ms: u32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            left_held: false,
            right_held: false,
            last_key_time: Instant::now(),
            pointer_col: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Handle a key press (or terminal auto-repeat, which refreshes the
    /// held state in terminals without release events).
    pub fn handle_key_press(&mut self, code: KeyCode) {
        match movement_direction(code) {
            Some(HorizontalDirection::Left) => {
                self.left_held = true;
                self.last_key_time = Instant::now();
            }
            Some(HorizontalDirection::Right) => {
                self.right_held = true;
                self.last_key_time = Instant::now();
            }
            None => {}
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match movement_direction(code) {
            Some(HorizontalDirection::Left) => self.left_held = false,
            Some(HorizontalDirection::Right) => self.right_held = false,
            None => {}
        }
    }

    /// Record a pointer movement at the given terminal column.
    pub fn handle_pointer_col(&mut self, col: u16) {
        self.pointer_col = Some(col);
    }

    /// Take one input snapshot for the upcoming tick.
    ///
    /// Applies the auto-release timeout and consumes the pending pointer
    /// position, so an unmoved pointer is not re-applied on later ticks.
    pub fn sample(&mut self) -> SampledInput {
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.left_held = false;
            self.right_held = false;
        }

        SampledInput {
            left: self.left_held,
            right: self.right_held,
            pointer_col: self.pointer_col.take(),
        }
    }

    pub fn reset(&mut self) {
        self.left_held = false;
        self.right_held = false;
        self.last_key_time = Instant::now();
        self.pointer_col = None;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

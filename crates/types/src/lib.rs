//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, tests).
//!
//! # Arena Dimensions
//!
//! The arena is measured in floating-point pixels, matching the classic
//! canvas breakout layout:
//!
//! - **Width**: 480 px
//! - **Height**: 320 px
//! - **Serve position**: centre-bottom, 30 px above the bottom edge
//!
//! The core takes arena dimensions as constructor arguments; the constants
//! here are the defaults used by the terminal runner.
//!
//! # Fixed Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BALL_RADIUS` | 10.0 | Ball radius in pixels |
//! | `BALL_VELOCITY` | (2, -2) | Serve velocity in px/tick |
//! | `PADDLE_WIDTH` | 75.0 | Paddle width |
//! | `PADDLE_SPEED` | 7.0 | Paddle movement per tick per held key |
//! | `BRICK_COLS` x `BRICK_ROWS` | 5 x 3 | Brick grid size |
//! | `STARTING_LIVES` | 3 | Lives at session start |
//!
//! # Examples
//!
//! ```
//! use tui_breakout_types::{BrickStatus, InputSnapshot, TerminalCondition};
//!
//! let snap = InputSnapshot::default();
//! assert!(!snap.left && !snap.right && snap.pointer_x.is_none());
//!
//! assert_eq!(TerminalCondition::Win.as_str(), "win");
//! assert!(BrickStatus::Visible.is_visible());
//! ```

/// Default arena width in pixels
pub const ARENA_WIDTH: f32 = 480.0;

/// Default arena height in pixels
pub const ARENA_HEIGHT: f32 = 320.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Ball radius in pixels
pub const BALL_RADIUS: f32 = 10.0;

/// Serve velocity in pixels per tick (rightward, upward)
pub const BALL_VELOCITY: (f32, f32) = (2.0, -2.0);

/// Vertical distance of the serve position above the bottom edge
pub const BALL_SERVE_LIFT: f32 = 30.0;

/// Paddle width in pixels
pub const PADDLE_WIDTH: f32 = 75.0;

/// Paddle height in pixels
pub const PADDLE_HEIGHT: f32 = 10.0;

/// Paddle movement in pixels per tick while a direction key is held
pub const PADDLE_SPEED: f32 = 7.0;

/// Brick grid columns
pub const BRICK_COLS: usize = 5;

/// Brick grid rows
pub const BRICK_ROWS: usize = 3;

/// Brick width in pixels
pub const BRICK_WIDTH: f32 = 75.0;

/// Brick height in pixels
pub const BRICK_HEIGHT: f32 = 20.0;

/// Gap between neighbouring bricks in pixels
pub const BRICK_PADDING: f32 = 10.0;

/// Distance from the arena top edge to the first brick row
pub const BRICK_OFFSET_TOP: f32 = 30.0;

/// Distance from the arena left edge to the first brick column
pub const BRICK_OFFSET_LEFT: f32 = 30.0;

/// Lives at the start of a session
pub const STARTING_LIVES: u32 = 3;

/// Visibility state of a single brick.
///
/// Bricks start `Visible` and flip to `Destroyed` on ball contact. The grid
/// is created once per session and never recreated; `Destroyed` bricks stay
/// destroyed until a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickStatus {
    Visible,
    Destroyed,
}

impl BrickStatus {
    pub fn is_visible(&self) -> bool {
        matches!(self, BrickStatus::Visible)
    }
}

/// Terminal conditions that end a session.
///
/// - **Win**: every brick destroyed
/// - **GameOver**: lives exhausted
///
/// Both are normal end states, not failures. The host reacts by performing a
/// full state reset (the reload-equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalCondition {
    Win,
    GameOver,
}

impl TerminalCondition {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalCondition::Win => "win",
            TerminalCondition::GameOver => "gameOver",
        }
    }
}

/// Per-tick simulation events, reported alongside the tick outcome.
///
/// At most one `BrickDestroyed` is emitted per tick (first hit wins); bounce
/// events can co-occur with it in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// A brick flipped Visible -> Destroyed at the given grid coordinates.
    BrickDestroyed { col: u8, row: u8 },
    /// The ball reflected off the left, right, or top arena edge.
    WallBounce,
    /// The ball reflected off the paddle.
    PaddleBounce,
    /// The ball crossed the bottom edge without paddle overlap.
    LifeLost,
}

/// Input state sampled once per tick.
///
/// Event handlers only mutate flag/pointer state between ticks; the
/// simulation reads a snapshot of that state exactly once per step, which
/// decouples input arrival time from stepping.
///
/// `pointer_x` is in arena pixels and is `Some` only when the pointer moved
/// since the previous sample. Both input modes are live simultaneously: the
/// pointer position is applied first, held flags after.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub pointer_x: Option<f32>,
}

impl InputSnapshot {
    /// Snapshot with no input active.
    pub const IDLE: InputSnapshot = InputSnapshot {
        left: false,
        right: false,
        pointer_x: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brick_grid_fits_inside_default_arena() {
        let grid_w =
            BRICK_OFFSET_LEFT + BRICK_COLS as f32 * (BRICK_WIDTH + BRICK_PADDING) - BRICK_PADDING;
        let grid_h =
            BRICK_OFFSET_TOP + BRICK_ROWS as f32 * (BRICK_HEIGHT + BRICK_PADDING) - BRICK_PADDING;
        assert!(grid_w <= ARENA_WIDTH);
        assert!(grid_h <= ARENA_HEIGHT / 2.0);
    }

    #[test]
    fn serve_velocity_moves_up_and_right() {
        assert!(BALL_VELOCITY.0 > 0.0);
        assert!(BALL_VELOCITY.1 < 0.0);
    }

    #[test]
    fn terminal_condition_strings() {
        assert_eq!(TerminalCondition::Win.as_str(), "win");
        assert_eq!(TerminalCondition::GameOver.as_str(), "gameOver");
    }
}

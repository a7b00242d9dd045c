//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and simulation state. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same input sequence produces identical sessions
//! - **Testable**: every rule is exercised without a live render surface
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`game`]: ball, paddle, and the per-tick simulation step
//! - [`bricks`]: the 5x3 destructible brick grid with collision hit testing
//! - [`snapshot`]: render-facing copies of the state, decoupled from stepping
//!
//! # Game Rules
//!
//! Classic breakout on a fixed arena:
//!
//! - The ball reflects off the left, right, and top edges; reflection is
//!   applied to the velocity before the position update, per axis.
//! - The first visible brick containing the ball centre (column-major scan)
//!   is destroyed; vertical velocity reflects once and the score increments.
//! - At the bottom edge the paddle returns the ball; a miss costs a life and
//!   re-serves ball and paddle at their initial positions.
//! - All bricks destroyed ends the session with Win; zero lives ends it
//!   with GameOver. Either way the session freezes until [`GameState::reset`].
//!
//! # Example
//!
//! ```
//! use tui_breakout_core::GameState;
//! use tui_breakout_types::{InputSnapshot, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! let mut game = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
//! let report = game.tick(&InputSnapshot::IDLE);
//! assert!(report.terminal.is_none());
//! ```
//!
//! # Timing
//!
//! The simulation is a fixed-timestep loop: velocities are in pixels per
//! tick, and the host calls [`GameState::tick`] once per
//! [`TICK_MS`](tui_breakout_types::TICK_MS) interval.

pub mod bricks;
pub mod game;
pub mod snapshot;

pub use tui_breakout_types as types;

// Re-export commonly used types for convenience
pub use bricks::BrickGrid;
pub use game::{Ball, GameState, Paddle, Phase, TickReport};
pub use snapshot::{BallSnapshot, GameSnapshot, PaddleSnapshot};

//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a simple framebuffer that is flushed to the terminal backend with diff
//! encoding.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw frames as a pure function of a `GameSnapshot`
//! - Only touch the terminal in [`TerminalRenderer`]

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

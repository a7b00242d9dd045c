//! Input module - terminal key and pointer handling
//!
//! Translates crossterm events into the explicit input snapshot the core
//! samples once per tick: two held-direction flags plus the last pointer
//! column. Keyboard and pointer control are live simultaneously.

pub mod map;
pub mod tracker;

pub use map::{is_restart, movement_direction, should_quit, HorizontalDirection};
pub use tracker::{InputTracker, SampledInput};

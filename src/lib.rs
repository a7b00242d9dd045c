//! TUI Breakout (workspace facade crate).
//!
//! This package keeps the `tui_breakout::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_breakout_core as core;
pub use tui_breakout_input as input;
pub use tui_breakout_term as term;
pub use tui_breakout_types as types;

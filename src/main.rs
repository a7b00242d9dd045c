//! Terminal breakout runner (default binary).
//!
//! Fixed 16 ms timestep: render the current snapshot, poll input until the
//! next tick deadline, sample one input snapshot, step the simulation. On a
//! terminal condition the loop keeps showing the overlay until the player
//! restarts (full state reset) or quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};

use tui_breakout::core::{GameSnapshot, GameState, Phase};
use tui_breakout::input::{is_restart, should_quit, InputTracker};
use tui_breakout::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_breakout::types::{InputSnapshot, ARENA_HEIGHT, ARENA_WIDTH, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
    let view = GameView::default();
    let mut tracker = InputTracker::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    // Repeat refreshes the held state in terminals that
                    // only deliver auto-repeated presses.
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if game.phase().is_terminal() {
                            if is_restart(key.code) {
                                game.reset();
                                tracker.reset();
                                last_tick = Instant::now();
                            }
                        } else {
                            tracker.handle_key_press(key.code);
                        }
                    }
                    KeyEventKind::Release => {
                        tracker.handle_key_release(key.code);
                    }
                },
                Event::Mouse(me) => {
                    if matches!(
                        me.kind,
                        MouseEventKind::Moved | MouseEventKind::Drag(_)
                    ) {
                        tracker.handle_pointer_col(me.column);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if game.phase() == Phase::Running {
                let sampled = tracker.sample();
                let input = InputSnapshot {
                    left: sampled.left,
                    right: sampled.right,
                    pointer_x: sampled
                        .pointer_col
                        .map(|col| view.arena_x_at(game.arena_width(), viewport, col)),
                };
                game.tick(&input);
            }
        }
    }
}

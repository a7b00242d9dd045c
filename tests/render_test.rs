//! Rendering tests: the view is a pure function of the snapshot.

use tui_breakout::core::{GameSnapshot, GameState};
use tui_breakout::term::{FrameBuffer, GameView, Viewport};
use tui_breakout::types::{InputSnapshot, ARENA_HEIGHT, ARENA_WIDTH};

#[test]
fn test_rendering_twice_with_unchanged_state_is_identical() {
    let game = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let snap = game.snapshot();
    let first = view.render(&snap, viewport);
    let second = view.render(&snap, viewport);
    assert_eq!(first, second);

    // Reusing a dirty framebuffer does not leak previous frames.
    let mut reused = FrameBuffer::new(80, 24);
    view.render_into(&snap, viewport, &mut reused);
    assert_eq!(first, reused);
}

#[test]
fn test_snapshot_isolates_the_view_from_live_state() {
    let mut game = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let snap = game.snapshot();
    let before = view.render(&snap, viewport);

    // Stepping the game does not affect an already-taken snapshot.
    for _ in 0..10 {
        game.tick(&InputSnapshot::IDLE);
    }
    let after = view.render(&snap, viewport);
    assert_eq!(before, after);
}

#[test]
fn test_hud_reflects_score_and_lives() {
    let mut game = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    // Destroy one brick.
    {
        let (bx, by) = tui_breakout::core::BrickGrid::origin(0, 0);
        let ball = game.ball_mut();
        ball.x = bx + 1.0;
        ball.y = by + 1.0;
        ball.dx = 0.0;
        ball.dy = 1.0;
    }
    game.tick(&InputSnapshot::IDLE);

    let fb = view.render(&game.snapshot(), viewport);
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("Score: 1"));
    assert!(text.contains("Lives: 3"));
}

#[test]
fn test_small_viewports_do_not_panic() {
    let game = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
    let view = GameView::default();
    let snap: GameSnapshot = game.snapshot();

    for (w, h) in [(0, 0), (1, 1), (10, 3), (40, 12), (200, 60)] {
        let _ = view.render(&snap, Viewport::new(w, h));
    }
}

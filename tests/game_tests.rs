//! Game rule scenarios exercised through the public facade.

use tui_breakout::core::{BrickGrid, GameState, Phase};
use tui_breakout::types::{
    InputSnapshot, TerminalCondition, TickEvent, ARENA_HEIGHT, ARENA_WIDTH, BRICK_COLS,
    BRICK_ROWS, STARTING_LIVES,
};

fn new_game() -> GameState {
    GameState::new(ARENA_WIDTH, ARENA_HEIGHT)
}

/// Aim the ball so the next tick's collision scan sees it inside the brick.
fn park_ball_in_brick(game: &mut GameState, col: usize, row: usize) {
    let (bx, by) = BrickGrid::origin(col, row);
    let ball = game.ball_mut();
    ball.x = bx + 1.0;
    ball.y = by + 1.0;
    ball.dx = 0.0;
    ball.dy = 2.0;
}

fn park_ball_below_paddleless_corner(game: &mut GameState) {
    let ball = game.ball_mut();
    ball.x = 1.0;
    ball.y = ARENA_HEIGHT - ball.radius - 1.0;
    ball.dx = 0.0;
    ball.dy = 2.0;
}

#[test]
fn test_first_brick_collision_scenario() {
    // Grid of 5x3 bricks, all visible; the ball collides with (c=0, r=0).
    let mut game = new_game();
    let dy_before = 2.0;
    park_ball_in_brick(&mut game, 0, 0);

    let report = game.tick(&InputSnapshot::IDLE);

    assert!(!game.bricks().is_visible(0, 0));
    assert_eq!(game.score(), 1);
    assert_eq!(game.ball().dy, -dy_before);
    assert!(report
        .events
        .contains(&TickEvent::BrickDestroyed { col: 0, row: 0 }));
}

#[test]
fn test_score_equals_destroyed_count_over_a_session() {
    let mut game = new_game();
    for _ in 0..500 {
        game.tick(&InputSnapshot::IDLE);
        assert_eq!(game.score(), game.bricks().destroyed_count());
        if game.phase().is_terminal() {
            break;
        }
    }
}

#[test]
fn test_game_over_fires_exactly_once_with_one_life_left() {
    let mut game = new_game();

    // Burn down to a single life.
    for _ in 0..STARTING_LIVES - 1 {
        park_ball_below_paddleless_corner(&mut game);
        assert_eq!(game.tick(&InputSnapshot::IDLE).terminal, None);
    }
    assert_eq!(game.lives(), 1);

    park_ball_below_paddleless_corner(&mut game);
    let report = game.tick(&InputSnapshot::IDLE);
    assert_eq!(report.terminal, Some(TerminalCondition::GameOver));
    assert_eq!(game.lives(), 0);

    // The signal never repeats.
    for _ in 0..10 {
        assert_eq!(game.tick(&InputSnapshot::IDLE).terminal, None);
    }
}

#[test]
fn test_win_fires_exactly_once_at_full_score() {
    let mut game = new_game();
    let mut signals = 0;

    for col in 0..BRICK_COLS {
        for row in 0..BRICK_ROWS {
            park_ball_in_brick(&mut game, col, row);
            if game.tick(&InputSnapshot::IDLE).terminal == Some(TerminalCondition::Win) {
                signals += 1;
            }
        }
    }

    assert_eq!(signals, 1);
    assert_eq!(game.score(), (BRICK_COLS * BRICK_ROWS) as u32);
    assert_eq!(game.phase(), Phase::Terminal(TerminalCondition::Win));
    assert_eq!(game.tick(&InputSnapshot::IDLE).terminal, None);
}

#[test]
fn test_paddle_never_leaves_the_arena() {
    let mut game = new_game();
    let inputs = [
        InputSnapshot {
            left: true,
            ..InputSnapshot::IDLE
        },
        InputSnapshot {
            right: true,
            ..InputSnapshot::IDLE
        },
        InputSnapshot {
            pointer_x: Some(-200.0),
            ..InputSnapshot::IDLE
        },
        InputSnapshot {
            pointer_x: Some(ARENA_WIDTH * 2.0),
            ..InputSnapshot::IDLE
        },
    ];

    for (i, input) in inputs.iter().cycle().take(400).enumerate() {
        game.tick(input);
        let paddle = game.paddle();
        assert!(
            paddle.x >= 0.0 && paddle.x <= ARENA_WIDTH - paddle.width,
            "paddle out of bounds on frame {i}: x={}",
            paddle.x
        );
        if game.phase().is_terminal() {
            break;
        }
    }
}

#[test]
fn test_ball_reflection_keeps_the_centre_in_bounds() {
    let mut game = new_game();

    for _ in 0..2000 {
        let report = game.tick(&InputSnapshot::IDLE);
        if report.events.contains(&TickEvent::LifeLost) || game.phase().is_terminal() {
            break;
        }
        let ball = game.ball();
        assert!(ball.x >= ball.radius);
        assert!(ball.x <= ARENA_WIDTH - ball.radius);
        assert!(ball.y >= ball.radius);
    }
}

#[test]
fn test_life_loss_recentres_ball_and_paddle_only() {
    let mut game = new_game();

    // Destroy one brick first so score/bricks have non-initial values.
    park_ball_in_brick(&mut game, 2, 1);
    game.tick(&InputSnapshot::IDLE);
    assert_eq!(game.score(), 1);

    // Shove the paddle off-centre, then miss.
    game.tick(&InputSnapshot {
        right: true,
        ..InputSnapshot::IDLE
    });
    park_ball_below_paddleless_corner(&mut game);
    game.tick(&InputSnapshot::IDLE);

    assert_eq!(game.lives(), STARTING_LIVES - 1);
    // Score and bricks survive the re-serve.
    assert_eq!(game.score(), 1);
    assert!(!game.bricks().is_visible(2, 1));
    // Paddle back at centre.
    assert_eq!(
        game.paddle().x,
        (ARENA_WIDTH - game.paddle().width) / 2.0
    );
}

#[test]
fn test_reset_is_the_reload_equivalent() {
    let mut game = new_game();
    park_ball_in_brick(&mut game, 0, 0);
    game.tick(&InputSnapshot::IDLE);
    while !game.phase().is_terminal() {
        park_ball_below_paddleless_corner(&mut game);
        game.tick(&InputSnapshot::IDLE);
    }

    game.reset();
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), STARTING_LIVES);
    assert_eq!(game.bricks().destroyed_count(), 0);

    // And the session steps normally again.
    let report = game.tick(&InputSnapshot::IDLE);
    assert_eq!(report.terminal, None);
}

//! Render-facing snapshot of the session state.
//!
//! Rendering is a pure function of a snapshot: the view never reads live
//! state, so drawing the same snapshot twice produces the same frame.

use tui_breakout_types::{
    BrickStatus, TerminalCondition, ARENA_HEIGHT, ARENA_WIDTH, BRICK_COLS, BRICK_ROWS,
};

use crate::game::{Ball, GameState, Paddle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl From<Ball> for BallSnapshot {
    fn from(value: Ball) -> Self {
        Self {
            x: value.x,
            y: value.y,
            radius: value.radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleSnapshot {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl From<Paddle> for PaddleSnapshot {
    fn from(value: Paddle) -> Self {
        Self {
            x: value.x,
            width: value.width,
            height: value.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub arena_w: f32,
    pub arena_h: f32,
    pub ball: BallSnapshot,
    pub paddle: PaddleSnapshot,
    /// Brick statuses as `[row][col]`.
    pub bricks: [[BrickStatus; BRICK_COLS]; BRICK_ROWS],
    pub score: u32,
    pub lives: u32,
    pub terminal: Option<TerminalCondition>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.terminal.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        GameState::new(ARENA_WIDTH, ARENA_HEIGHT).snapshot()
    }
}

impl GameState {
    /// Fill an existing snapshot, reusing the caller's allocation-free buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.arena_w = self.arena_width();
        out.arena_h = self.arena_height();
        out.ball = BallSnapshot::from(*self.ball());
        out.paddle = PaddleSnapshot::from(*self.paddle());
        self.bricks().write_status_grid(&mut out.bricks);
        out.score = self.score();
        out.lives = self.lives();
        out.terminal = self.terminal();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot {
            arena_w: 0.0,
            arena_h: 0.0,
            ball: BallSnapshot {
                x: 0.0,
                y: 0.0,
                radius: 0.0,
            },
            paddle: PaddleSnapshot {
                x: 0.0,
                width: 0.0,
                height: 0.0,
            },
            bricks: [[BrickStatus::Visible; BRICK_COLS]; BRICK_ROWS],
            score: 0,
            lives: 0,
            terminal: None,
        };
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_breakout_types::STARTING_LIVES;

    #[test]
    fn snapshot_mirrors_live_state() {
        let state = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
        let snap = state.snapshot();

        assert_eq!(snap.arena_w, ARENA_WIDTH);
        assert_eq!(snap.ball.x, state.ball().x);
        assert_eq!(snap.paddle.x, state.paddle().x);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.lives, STARTING_LIVES);
        assert!(snap.playable());
    }

    #[test]
    fn snapshot_tracks_destroyed_bricks() {
        let mut state = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
        {
            let (bx, by) = crate::bricks::BrickGrid::origin(2, 0);
            let ball = state.ball_mut();
            ball.x = bx + 1.0;
            ball.y = by + 1.0;
            ball.dx = 0.0;
            ball.dy = 1.0;
        }
        state.tick(&tui_breakout_types::InputSnapshot::IDLE);

        let snap = state.snapshot();
        assert_eq!(snap.bricks[0][2], BrickStatus::Destroyed);
        assert_eq!(snap.score, 1);
    }
}

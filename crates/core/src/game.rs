//! Game state module - manages the complete session state
//!
//! This module ties together the ball, paddle, brick grid, and the score and
//! life counters. One call to [`GameState::tick`] advances the simulation by
//! exactly one fixed step; rendering reads a [`GameSnapshot`] and never
//! touches live state.
//!
//! [`GameSnapshot`]: crate::snapshot::GameSnapshot

use arrayvec::ArrayVec;

use tui_breakout_types::{
    InputSnapshot, TerminalCondition, TickEvent, BALL_RADIUS, BALL_SERVE_LIFT, BALL_VELOCITY,
    PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH, STARTING_LIVES,
};

use crate::bricks::BrickGrid;

/// The ball: position and velocity in arena pixels, fixed radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position: centre-bottom, moving up and right.
    pub fn serve(arena_w: f32, arena_h: f32) -> Self {
        let (dx, dy) = BALL_VELOCITY;
        Self {
            x: arena_w / 2.0,
            y: arena_h - BALL_SERVE_LIFT,
            dx,
            dy,
            radius: BALL_RADIUS,
        }
    }

    /// Apply one tick of velocity to the position.
    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }
}

/// The paddle: x position along the bottom edge, fixed dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centred on the bottom edge.
    pub fn centered(arena_w: f32) -> Self {
        Self {
            x: (arena_w - PADDLE_WIDTH) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Centre the paddle on the given arena x coordinate.
    pub fn center_on(&mut self, x: f32) {
        self.x = x - self.width / 2.0;
    }

    /// Clamp the paddle into `[0, arena_w - width]`.
    pub fn clamp_to(&mut self, arena_w: f32) {
        self.x = self.x.clamp(0.0, arena_w - self.width);
    }

    /// Whether the ball centre x lies strictly over the paddle.
    pub fn overlaps(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }
}

/// Session state machine: stepping, or ended until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminal(TerminalCondition),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }
}

/// Outcome of one tick.
///
/// `terminal` is `Some` on exactly the tick that ended the session; every
/// later tick is a no-op reporting `None` until [`GameState::reset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub terminal: Option<TerminalCondition>,
    pub events: ArrayVec<TickEvent, 4>,
}

impl TickReport {
    fn push(&mut self, event: TickEvent) {
        let _ = self.events.try_push(event);
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    arena_w: f32,
    arena_h: f32,
    ball: Ball,
    paddle: Paddle,
    bricks: BrickGrid,
    score: u32,
    lives: u32,
    phase: Phase,
}

impl GameState {
    /// Create a new session for the given arena dimensions.
    pub fn new(arena_w: f32, arena_h: f32) -> Self {
        Self {
            arena_w,
            arena_h,
            ball: Ball::serve(arena_w, arena_h),
            paddle: Paddle::centered(arena_w),
            bricks: BrickGrid::new(),
            score: 0,
            lives: STARTING_LIVES,
            phase: Phase::Running,
        }
    }

    pub fn arena_width(&self) -> f32 {
        self.arena_w
    }

    pub fn arena_height(&self) -> f32 {
        self.arena_h
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The condition that ended the session, if any.
    pub fn terminal(&self) -> Option<TerminalCondition> {
        match self.phase {
            Phase::Running => None,
            Phase::Terminal(cond) => Some(cond),
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Mutable ball access for scripted scenarios and benches.
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// Mutable paddle access for scripted scenarios and benches.
    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }

    /// Advance the simulation by one fixed step.
    ///
    /// Order within a tick: brick collision, win check, edge reflection
    /// (before the position update, per axis), bottom-edge resolution
    /// (paddle bounce or life loss), paddle movement from the sampled input,
    /// ball advance. Once the phase is terminal the call returns immediately
    /// without stepping.
    pub fn tick(&mut self, input: &InputSnapshot) -> TickReport {
        let mut report = TickReport::default();
        if self.phase.is_terminal() {
            return report;
        }

        // At most one brick resolves per tick: the first visible brick in
        // column-major order whose rectangle contains the ball centre.
        if let Some((col, row)) = self.bricks.hit_test(self.ball.x, self.ball.y) {
            self.ball.dy = -self.ball.dy;
            self.bricks.destroy(col, row);
            self.score += 1;
            report.push(TickEvent::BrickDestroyed {
                col: col as u8,
                row: row as u8,
            });
            if self.score == self.bricks.total() {
                return self.finish(TerminalCondition::Win, report);
            }
        }

        // Reflection is applied to the velocity before the position update.
        let next_x = self.ball.x + self.ball.dx;
        if next_x > self.arena_w - self.ball.radius || next_x < self.ball.radius {
            self.ball.dx = -self.ball.dx;
            report.push(TickEvent::WallBounce);
        }

        let next_y = self.ball.y + self.ball.dy;
        if next_y < self.ball.radius {
            self.ball.dy = -self.ball.dy;
            report.push(TickEvent::WallBounce);
        } else if next_y > self.arena_h - self.ball.radius {
            if self.paddle.overlaps(self.ball.x) {
                self.ball.dy = -self.ball.dy;
                report.push(TickEvent::PaddleBounce);
            } else {
                self.lives -= 1;
                report.push(TickEvent::LifeLost);
                if self.lives == 0 {
                    return self.finish(TerminalCondition::GameOver, report);
                }
                // Re-serve: ball and paddle return to their initial
                // positions; bricks, score, and lives are untouched. The
                // re-served ball still advances below, within this tick.
                self.serve();
            }
        }

        // Paddle input: pointer position applies first, held flags after,
        // then the clamp. Right wins over left when both are held.
        if let Some(px) = input.pointer_x {
            self.paddle.center_on(px);
        }
        if input.right {
            self.paddle.x += PADDLE_SPEED;
        } else if input.left {
            self.paddle.x -= PADDLE_SPEED;
        }
        self.paddle.clamp_to(self.arena_w);

        self.ball.advance();
        report
    }

    /// Full state reset: ball, paddle, bricks, score, lives, phase.
    ///
    /// This is the reload-equivalent the host invokes after a terminal
    /// condition.
    pub fn reset(&mut self) {
        *self = Self::new(self.arena_w, self.arena_h);
    }

    fn serve(&mut self) {
        self.ball = Ball::serve(self.arena_w, self.arena_h);
        self.paddle = Paddle::centered(self.arena_w);
    }

    fn finish(&mut self, cond: TerminalCondition, mut report: TickReport) -> TickReport {
        self.phase = Phase::Terminal(cond);
        report.terminal = Some(cond);
        report
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(
            tui_breakout_types::ARENA_WIDTH,
            tui_breakout_types::ARENA_HEIGHT,
        )
    }
}

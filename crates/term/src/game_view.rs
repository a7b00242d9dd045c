//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Drawing the same snapshot twice produces
//! the same framebuffer, so it can be unit-tested without a terminal.

use tui_breakout_core::snapshot::GameSnapshot;
use tui_breakout_types::{TerminalCondition, BRICK_COLS, BRICK_HEIGHT, BRICK_ROWS, BRICK_WIDTH};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// The classic canvas palette: everything draws in the same blue.
const INK: Rgb = Rgb::new(0, 149, 221);

const ARENA_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the breakout arena.
///
/// Arena pixels map to terminal cells with a fixed scale. The default
/// (8 px per column, 16 px per row) turns the 480x320 arena into a 60x20
/// cell interior, which compensates for the usual terminal glyph aspect
/// ratio and fits an 80x24 terminal with room for the frame.
pub struct GameView {
    px_per_col: f32,
    px_per_row: f32,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            px_per_col: 8.0,
            px_per_row: 16.0,
        }
    }
}

impl GameView {
    pub fn new(px_per_col: f32, px_per_row: f32) -> Self {
        Self {
            px_per_col,
            px_per_row,
        }
    }

    fn interior_cols(&self, arena_w: f32) -> u16 {
        (arena_w / self.px_per_col).round() as u16
    }

    fn interior_rows(&self, arena_h: f32) -> u16 {
        (arena_h / self.px_per_row).round() as u16
    }

    fn frame_origin(&self, arena_w: f32, arena_h: f32, viewport: Viewport) -> (u16, u16) {
        let frame_w = self.interior_cols(arena_w) + 2;
        let frame_h = self.interior_rows(arena_h) + 2;
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Horizontal cell span of an arena-pixel span, at least one cell wide.
    fn col_span(&self, x: f32, w: f32) -> (u16, u16) {
        let start = (x / self.px_per_col).round().max(0.0) as u16;
        let end = ((x + w) / self.px_per_col).round() as u16;
        (start, end.max(start + 1) - start)
    }

    fn row_span(&self, y: f32, h: f32) -> (u16, u16) {
        let start = (y / self.px_per_row).round().max(0.0) as u16;
        let end = ((y + h) / self.px_per_row).round() as u16;
        (start, end.max(start + 1) - start)
    }

    /// Map a terminal column back to an arena x coordinate.
    ///
    /// This is the inverse transform used to turn pointer movement into a
    /// paddle position. Out-of-frame columns clamp to the arena edges.
    pub fn arena_x_at(&self, arena_w: f32, viewport: Viewport, col: u16) -> f32 {
        let frame_w = self.interior_cols(arena_w) + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let interior_col = col as f32 - (start_x + 1) as f32;
        ((interior_col + 0.5) * self.px_per_col).clamp(0.0, arena_w)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized and
    /// cleared here.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let interior_w = self.interior_cols(snap.arena_w);
        let interior_h = self.interior_rows(snap.arena_h);
        let (start_x, start_y) = self.frame_origin(snap.arena_w, snap.arena_h, viewport);

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: ARENA_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let ink = CellStyle {
            fg: INK,
            bg: ARENA_BG,
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, interior_w, interior_h, ' ', bg);
        draw_border(fb, start_x, start_y, interior_w + 2, interior_h + 2, border);

        // Origin of the arena interior in terminal cells.
        let ox = start_x + 1;
        let oy = start_y + 1;

        // Visible bricks.
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                if !snap.bricks[row][col].is_visible() {
                    continue;
                }
                let (bx, by) = tui_breakout_core::BrickGrid::origin(col, row);
                let (cx, cw) = self.col_span(bx, BRICK_WIDTH);
                let (cy, ch) = self.row_span(by, BRICK_HEIGHT);
                fb.fill_rect(ox + cx, oy + cy, cw, ch, '█', ink);
            }
        }

        // Paddle.
        let (px, pw) = self.col_span(snap.paddle.x, snap.paddle.width);
        let (py, ph) = self.row_span(snap.arena_h - snap.paddle.height, snap.paddle.height);
        let py = py.min(interior_h.saturating_sub(1));
        fb.fill_rect(ox + px, oy + py, pw, ph.min(interior_h - py), '▀', ink);

        // Ball.
        let bx = ((snap.ball.x / self.px_per_col) as u16).min(interior_w.saturating_sub(1));
        let by = ((snap.ball.y / self.px_per_row) as u16).min(interior_h.saturating_sub(1));
        fb.put_char(
            ox + bx,
            oy + by,
            '●',
            CellStyle {
                bold: true,
                ..ink
            },
        );

        // Score and lives, inside the frame on the top interior row.
        let hud = CellStyle {
            fg: INK,
            bg: ARENA_BG,
            bold: true,
            dim: false,
        };
        fb.put_str(ox + 1, oy, "Score: ", hud);
        fb.put_u32(ox + 8, oy, snap.score, hud);

        let lives_label = "Lives: ";
        let lives_w = lives_label.len() as u16 + decimal_width(snap.lives);
        let lx = ox + interior_w.saturating_sub(lives_w + 1);
        fb.put_str(lx, oy, lives_label, hud);
        fb.put_u32(lx + lives_label.len() as u16, oy, snap.lives, hud);

        // Terminal overlay.
        if let Some(cond) = snap.terminal {
            let text = match cond {
                TerminalCondition::Win => "YOU WIN, CONGRATULATIONS!",
                TerminalCondition::GameOver => "GAME OVER",
            };
            draw_centered(fb, start_x, start_y + (interior_h + 2) / 2, interior_w + 2, text, true);
            draw_centered(
                fb,
                start_x,
                start_y + (interior_h + 2) / 2 + 1,
                interior_w + 2,
                "R: restart   Q: quit",
                false,
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str, bold: bool) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold,
        dim: !bold,
    };
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

fn decimal_width(mut value: u32) -> u16 {
    let mut w = 1;
    while value >= 10 {
        value /= 10;
        w += 1;
    }
    w
}

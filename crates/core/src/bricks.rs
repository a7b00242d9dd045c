//! Brick grid module - manages the destructible target grid
//!
//! The grid is 5 columns x 3 rows where each brick is either Visible or
//! Destroyed. Uses a flat array in column-major order so iteration matches
//! the collision scan order (column outer, row inner).
//! Brick geometry is computed from the fixed layout constants and never
//! stored per brick.

use tui_breakout_types::{
    BrickStatus, BRICK_COLS, BRICK_HEIGHT, BRICK_OFFSET_LEFT, BRICK_OFFSET_TOP, BRICK_PADDING,
    BRICK_ROWS, BRICK_WIDTH,
};

/// Total number of bricks in the grid
const GRID_SIZE: usize = BRICK_COLS * BRICK_ROWS;

/// The brick grid - 5 columns x 3 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickGrid {
    /// Flat array of statuses, column-major order (col * ROWS + row)
    status: [BrickStatus; GRID_SIZE],
}

impl BrickGrid {
    /// Create a grid with every brick visible
    pub fn new() -> Self {
        Self {
            status: [BrickStatus::Visible; GRID_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: usize, row: usize) -> Option<usize> {
        if col >= BRICK_COLS || row >= BRICK_ROWS {
            return None;
        }
        Some(col * BRICK_ROWS + row)
    }

    /// Total brick count (the win threshold for the score counter)
    pub fn total(&self) -> u32 {
        GRID_SIZE as u32
    }

    /// Get status at (col, row), or `None` out of bounds
    pub fn status(&self, col: usize, row: usize) -> Option<BrickStatus> {
        Self::index(col, row).map(|i| self.status[i])
    }

    /// Check whether the brick at (col, row) is visible
    pub fn is_visible(&self, col: usize, row: usize) -> bool {
        matches!(self.status(col, row), Some(BrickStatus::Visible))
    }

    /// Count bricks flipped to Destroyed
    pub fn destroyed_count(&self) -> u32 {
        self.status
            .iter()
            .filter(|s| !s.is_visible())
            .count() as u32
    }

    /// Mark the brick at (col, row) destroyed.
    ///
    /// Returns false when out of bounds or already destroyed.
    pub fn destroy(&mut self, col: usize, row: usize) -> bool {
        match Self::index(col, row) {
            Some(i) if self.status[i].is_visible() => {
                self.status[i] = BrickStatus::Destroyed;
                true
            }
            _ => false,
        }
    }

    /// Top-left corner of the brick at (col, row) in arena pixels
    pub fn origin(col: usize, row: usize) -> (f32, f32) {
        (
            col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
            row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
        )
    }

    /// Whether the brick rectangle at (col, row) strictly contains the point
    pub fn contains(col: usize, row: usize, x: f32, y: f32) -> bool {
        let (bx, by) = Self::origin(col, row);
        x > bx && x < bx + BRICK_WIDTH && y > by && y < by + BRICK_HEIGHT
    }

    /// Find the first visible brick whose rectangle contains the point.
    ///
    /// Scan order is column-major (column outer, row inner); at most one
    /// brick is resolved per call.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        for col in 0..BRICK_COLS {
            for row in 0..BRICK_ROWS {
                if self.is_visible(col, row) && Self::contains(col, row, x, y) {
                    return Some((col, row));
                }
            }
        }
        None
    }

    /// Copy the grid into a `[row][col]` status matrix (for snapshots)
    pub fn write_status_grid(&self, out: &mut [[BrickStatus; BRICK_COLS]; BRICK_ROWS]) {
        for col in 0..BRICK_COLS {
            for row in 0..BRICK_ROWS {
                out[row][col] = self.status[col * BRICK_ROWS + row];
            }
        }
    }

    /// Restore every brick to Visible
    pub fn reset(&mut self) {
        self.status = [BrickStatus::Visible; GRID_SIZE];
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

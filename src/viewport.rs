//! Mapping between world coordinates and terminal cells.
//!
//! The whole play area is stretched over the terminal.  World y grows
//! upward while terminal rows grow downward, so the vertical axis flips.

use glam::Vec2;

use crate::entities::{Aabb, ScreenBounds};
use crate::error::{GameError, Result};

pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 15;

/// A block of terminal cells, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col0: u16,
    pub row0: u16,
    pub col1: u16,
    pub row1: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub bounds: ScreenBounds,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, bounds: ScreenBounds) -> Result<Self> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GameError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }
        Ok(Self { cols, rows, bounds })
    }

    fn cell_width(&self) -> f32 {
        self.bounds.width / self.cols as f32
    }

    fn cell_height(&self) -> f32 {
        self.bounds.height / self.rows as f32
    }

    /// The cell containing `point`, or `None` when it is off screen.
    pub fn to_cell(&self, point: Vec2) -> Option<(u16, u16)> {
        let col = (point.x / self.cell_width()).floor();
        let row = ((self.bounds.height - point.y) / self.cell_height()).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// World position at the center of a cell.  Used for pointer input.
    pub fn to_world(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.cell_width(),
            self.bounds.height - (row as f32 + 0.5) * self.cell_height(),
        )
    }

    /// Cells covered by a box, clipped to the screen.  Every box that is at
    /// least partly on screen covers at least one cell.
    pub fn cells_for(&self, aabb: &Aabb) -> Option<CellRect> {
        let max_col = self.cols as f32 - 1.0;
        let max_row = self.rows as f32 - 1.0;

        let col0 = (aabb.left() / self.cell_width()).floor();
        let col1 = (aabb.right() / self.cell_width()).ceil() - 1.0;
        let row0 = ((self.bounds.height - aabb.top()) / self.cell_height()).floor();
        let row1 = ((self.bounds.height - aabb.bottom()) / self.cell_height()).ceil() - 1.0;

        if col1 < 0.0 || row1 < 0.0 || col0 > max_col || row0 > max_row {
            return None;
        }

        let col0 = col0.clamp(0.0, max_col);
        let row0 = row0.clamp(0.0, max_row);
        Some(CellRect {
            col0: col0 as u16,
            row0: row0 as u16,
            col1: col1.clamp(col0, max_col) as u16,
            row1: row1.clamp(row0, max_row) as u16,
        })
    }
}

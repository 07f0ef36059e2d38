//! CellStack - the explicit stack driving both maze carving and the trail
//!
//! The carver pushes while it explores and pops at dead ends; the trail
//! pushes on forward moves and pops on backtracks. Classification needs one
//! element of lookahead below the top, hence `peek_below`.

use super::grid::Coord;

#[derive(Clone, Debug, Default)]
pub struct CellStack {
    cells: Vec<Coord>,
}

impl CellStack {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, cell: Coord) {
        self.cells.push(cell);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Coord> {
        self.cells.pop()
    }

    /// Top of the stack without removing it.
    #[inline]
    pub fn peek(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Element directly under the top, if any.
    #[inline]
    pub fn peek_below(&self) -> Option<Coord> {
        if self.cells.len() < 2 {
            return None;
        }
        Some(self.cells[self.cells.len() - 2])
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Bottom-to-top view of the stack.
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.cells
    }
}

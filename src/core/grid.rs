//! MazeGrid - flat wall storage for one maze
//!
//! One byte per cell, one bit per wall. The buffer doubles as the render
//! surface: JS views it directly through `walls_ptr`, so there is no copy
//! between game state and what gets drawn.

use super::direction::Direction;

pub const WALL_TOP: u8 = 1 << 0;
pub const WALL_RIGHT: u8 = 1 << 1;
pub const WALL_BOTTOM: u8 = 1 << 2;
pub const WALL_LEFT: u8 = 1 << 3;
pub const WALL_ALL: u8 = WALL_TOP | WALL_RIGHT | WALL_BOTTOM | WALL_LEFT;

/// Wall bit guarding movement in `dir`.
#[inline]
pub fn wall_bit(dir: Direction) -> u8 {
    match dir {
        Direction::Up => WALL_TOP,
        Direction::Right => WALL_RIGHT,
        Direction::Down => WALL_BOTTOM,
        Direction::Left => WALL_LEFT,
    }
}

/// A cell position. Laid out as two u32s so slices of coords can be handed
/// to JS as a plain Uint32Array.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

/// Wall state for a width x height maze, row-major.
///
/// Invariant: walls are mirrored. Whenever the bit facing a neighbour is
/// clear, the neighbour's bit facing back is clear too. `carve` is the only
/// way to drop walls, and it always drops the pair.
pub struct MazeGrid {
    width: u32,
    height: u32,
    size: usize,
    walls: Vec<u8>,
}

impl MazeGrid {
    /// Create a grid with every wall present.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;

        Self {
            width,
            height,
            size,
            walls: vec![WALL_ALL; size],
        }
    }

    /// Rebuild a grid from captured wall bytes. The caller guarantees the
    /// buffer matches the dimensions (see `SavedLayout`).
    pub(crate) fn from_walls(width: u32, height: u32, walls: Vec<u8>) -> Self {
        debug_assert_eq!(walls.len(), (width * height) as usize);

        Self {
            width,
            height,
            size: walls.len(),
            walls,
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        ((idx as u32) % self.width, (idx as u32) / self.width)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    // === Wall access ===
    #[inline]
    pub fn has_wall(&self, x: u32, y: u32, dir: Direction) -> bool {
        self.walls[self.index(x, y)] & wall_bit(dir) != 0
    }

    /// Raw wall bits for one cell (render/debug view).
    #[inline]
    pub fn wall_bits(&self, x: u32, y: u32) -> u8 {
        self.walls[self.index(x, y)]
    }

    /// Open the passage from (x, y) towards `dir`, clearing the matching
    /// bit on both sides. The neighbour must be in bounds.
    pub fn carve(&mut self, x: u32, y: u32, dir: Direction) {
        let (dx, dy) = dir.delta();
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        debug_assert!(self.in_bounds(nx, ny));

        let here = self.index(x, y);
        let there = self.index(nx as u32, ny as u32);
        self.walls[here] &= !wall_bit(dir);
        self.walls[there] &= !wall_bit(dir.opposite());
    }

    /// Whole wall buffer, row-major (for snapshots and tests).
    #[inline]
    pub fn walls(&self) -> &[u8] {
        &self.walls
    }

    // === Raw pointer for JS interop ===
    pub fn walls_ptr(&self) -> *const u8 {
        self.walls.as_ptr()
    }
}

//! Maze carver - randomized depth-first search with backtracking
//!
//! Walks the grid with an explicit stack, knocking a wall pair out towards
//! one unvisited neighbour at a time. When a cell has no unvisited
//! neighbours left it is popped and the walk resumes from the cell below.
//! Every cell gets visited exactly once, so the open passages form a
//! spanning tree: any two cells are joined by exactly one path.

use crate::core::direction::Direction;
use crate::core::grid::{Coord, MazeGrid};
use crate::core::stack::CellStack;

use super::random::RandomSource;

/// Carve a maze of the given dimensions. Both must be at least 1.
pub fn carve(width: u32, height: u32, rng: &mut impl RandomSource) -> MazeGrid {
    debug_assert!(width > 0 && height > 0);

    let mut grid = MazeGrid::new(width, height);
    let mut visited = vec![false; grid.size()];
    let mut stack = CellStack::new();
    let mut candidates: Vec<Direction> = Vec::with_capacity(4);

    let start = Coord { x: 0, y: 0 };
    visited[grid.index(start.x, start.y)] = true;
    stack.push(start);

    // Peek, do not pop: the cell stays the walk head until it dead-ends.
    while let Some(cell) = stack.peek() {
        candidates.clear();
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let nx = cell.x as i32 + dx;
            let ny = cell.y as i32 + dy;
            if grid.in_bounds(nx, ny) && !visited[grid.index(nx as u32, ny as u32)] {
                candidates.push(dir);
            }
        }

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let dir = candidates[rng.pick(candidates.len())];
        let (dx, dy) = dir.delta();
        let next = Coord {
            x: (cell.x as i32 + dx) as u32,
            y: (cell.y as i32 + dy) as u32,
        };

        grid.carve(cell.x, cell.y, dir);
        visited[grid.index(next.x, next.y)] = true;
        stack.push(next);
    }

    grid
}

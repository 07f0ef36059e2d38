//! Trail tracker - the player's active path and its move history
//!
//! The stack always holds the exact path from the start cell to the player.
//! Because the maze is a tree, stepping onto the cell directly under the
//! stack top is the only way to re-enter the active path, so one peek below
//! the top classifies every move.

use crate::core::grid::Coord;
use crate::core::stack::CellStack;

/// How a validated move relates to the active path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveClass {
    Forward,
    Backtrack,
}

/// A directed step between two adjacent cells, for rendering. Four u32s in
/// memory, so segment lists can be viewed from JS as a flat Uint32Array.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Segment {
    pub from: Coord,
    pub to: Coord,
}

pub struct TrailTracker {
    stack: CellStack,
    forward: Vec<Segment>,
    backtrack: Vec<Segment>,
}

impl TrailTracker {
    /// An empty tracker. Call `reset` before recording moves.
    pub fn new() -> Self {
        Self {
            stack: CellStack::new(),
            forward: Vec::new(),
            backtrack: Vec::new(),
        }
    }

    /// Drop all history and restart the path at `start`.
    pub fn reset(&mut self, start: Coord) {
        self.stack.clear();
        self.stack.push(start);
        self.forward.clear();
        self.backtrack.clear();
    }

    /// Record a move the caller has already validated against the walls.
    /// `from` must be the current path head.
    pub fn record_move(&mut self, from: Coord, to: Coord) -> MoveClass {
        debug_assert_eq!(self.stack.peek(), Some(from));

        if self.stack.peek_below() == Some(to) {
            self.backtrack.push(Segment { from, to });
            self.stack.pop();
            MoveClass::Backtrack
        } else {
            self.forward.push(Segment { from, to });
            self.stack.push(to);
            MoveClass::Forward
        }
    }

    /// The active path, start cell first. Empty until the first `reset`.
    #[inline]
    pub fn path(&self) -> &[Coord] {
        self.stack.as_slice()
    }

    #[inline]
    pub fn forward_segments(&self) -> &[Segment] {
        &self.forward
    }

    #[inline]
    pub fn backtrack_segments(&self) -> &[Segment] {
        &self.backtrack
    }
}

impl Default for TrailTracker {
    fn default() -> Self {
        Self::new()
    }
}

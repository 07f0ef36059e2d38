//! Core data structures - grid geometry, walls, cell stack
//!
//! Nothing in this layer knows about levels, timing or the WASM boundary.

pub mod direction;
pub mod grid;
pub mod stack;

pub use direction::Direction;
pub use grid::{Coord, MazeGrid};
pub use stack::CellStack;

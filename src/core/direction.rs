//! Movement directions on the maze grid.
//!
//! Row 0 is the top of the maze, so `Up` decreases y. The discriminants are
//! part of the JS interface (see the `dir_*` exports in lib.rs).

/// One of the four cardinal directions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions in scan order: up, right, down, left.
    ///
    /// The maze carver collects candidate neighbours in this order, which
    /// keeps layouts reproducible for a given random sequence.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Grid delta (dx, dy) for one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The direction pointing back the way we came.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Decode a direction from its wire value. Returns `None` for anything
    /// outside 0..=3 so the facade can ignore garbage input.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }
}

use crate::core::grid::{MazeGrid, WALL_BOTTOM, WALL_LEFT, WALL_RIGHT, WALL_TOP};

/// Immutable copy of a maze's wall state, captured right after carving.
///
/// Restoring from a snapshot rebuilds the identical layout without touching
/// the random source, which is what makes "Restart Level" replay the same
/// maze. Snapshots are plain values; cloning one into another session
/// replays the maze there too.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SavedLayout {
    width: u32,
    height: u32,
    walls: Vec<u8>,
}

impl SavedLayout {
    pub fn capture(grid: &MazeGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            walls: grid.walls().to_vec(),
        }
    }

    /// Build a snapshot from raw wall bytes. Rejects buffers that do not
    /// match the dimensions or whose walls are not mirrored between
    /// neighbours.
    pub fn from_walls(width: u32, height: u32, walls: Vec<u8>) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "layout dimensions must be positive: {}x{}",
                width, height
            ));
        }

        let expected = (width as usize) * (height as usize);
        if walls.len() != expected {
            return Err(format!(
                "wall buffer length {} does not match a {}x{} grid",
                walls.len(),
                width,
                height
            ));
        }

        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) as usize;
                if x + 1 < width {
                    let right = walls[idx] & WALL_RIGHT != 0;
                    let left = walls[idx + 1] & WALL_LEFT != 0;
                    if right != left {
                        return Err(format!(
                            "unmirrored wall between ({}, {}) and ({}, {})",
                            x,
                            y,
                            x + 1,
                            y
                        ));
                    }
                }
                if y + 1 < height {
                    let bottom = walls[idx] & WALL_BOTTOM != 0;
                    let top = walls[idx + width as usize] & WALL_TOP != 0;
                    if bottom != top {
                        return Err(format!(
                            "unmirrored wall between ({}, {}) and ({}, {})",
                            x,
                            y,
                            x,
                            y + 1
                        ));
                    }
                }
            }
        }

        Ok(Self {
            width,
            height,
            walls,
        })
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn walls(&self) -> &[u8] {
        &self.walls
    }
}

pub(super) fn rebuild(layout: &SavedLayout) -> MazeGrid {
    MazeGrid::from_walls(layout.width, layout.height, layout.walls.clone())
}

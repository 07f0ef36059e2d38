use crate::core::grid::{Coord, MazeGrid};
use crate::systems::generator;
use crate::systems::random::XorShift32;

use super::snapshot::{self, SavedLayout};
use super::SessionCore;

pub(super) fn generate_new_maze(session: &mut SessionCore, width: u32, height: u32) {
    let width = width.max(1);
    let height = height.max(1);

    let grid = generator::carve(width, height, &mut session.rng);
    session.saved = Some(SavedLayout::capture(&grid));
    install_grid(session, grid);
}

pub(super) fn set_level(session: &mut SessionCore, index: usize) {
    let index = session.levels.clamp_index(index);
    session.level_index = index;

    let Some(level) = session.levels.get(index) else {
        return;
    };
    let (cols, rows) = (level.cols, level.rows);

    generate_new_maze(session, cols, rows);
}

pub(super) fn restore_saved_layout(session: &mut SessionCore) {
    let rebuilt = session.saved.as_ref().map(snapshot::rebuild);

    match rebuilt {
        Some(grid) => install_grid(session, grid),
        // Nothing generated yet: fall back to a fresh maze at the selected
        // level's dimensions.
        None => {
            let index = session.level_index;
            set_level(session, index);
        }
    }
}

pub(super) fn install_layout(session: &mut SessionCore, layout: &SavedLayout) {
    session.saved = Some(layout.clone());
    let grid = snapshot::rebuild(layout);
    install_grid(session, grid);
}

pub(super) fn reseed(session: &mut SessionCore, seed: u32) {
    session.rng = XorShift32::new(seed);
}

/// Put a grid in place and reset the whole run: player to the start corner,
/// goal to the far corner, trail to the single start cell, clock idle.
fn install_grid(session: &mut SessionCore, grid: MazeGrid) {
    let start = Coord { x: 0, y: 0 };
    let goal = Coord {
        x: grid.width() - 1,
        y: grid.height() - 1,
    };

    session.grid = Some(grid);
    session.player = start;
    session.goal = goal;
    session.trail.reset(start);
    session.clock.reset();
    session.beat_target = false;
    // A 1x1 maze is finished at spawn; the clock never runs.
    session.game_over = start == goal;
}

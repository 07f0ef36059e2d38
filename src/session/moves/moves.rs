use crate::core::direction::Direction;
use crate::core::grid::Coord;
use crate::systems::trail::MoveClass;

use super::SessionCore;

/// Result of one movement attempt, as seen by the frontend. The
/// discriminants are part of the JS interface (see `outcome_*` in lib.rs).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum MoveOutcome {
    /// Nothing happened: wall, grid edge, finished run, or no maze yet.
    Blocked = 0,
    Forward = 1,
    Backtrack = 2,
    /// The step that reached the goal. Always a forward step.
    Won = 3,
}

pub(super) fn attempt_move(session: &mut SessionCore, dir: Direction) -> MoveOutcome {
    if session.game_over {
        return MoveOutcome::Blocked;
    }

    let Some(grid) = session.grid.as_ref() else {
        return MoveOutcome::Blocked;
    };

    let (dx, dy) = dir.delta();
    let nx = session.player.x as i32 + dx;
    let ny = session.player.y as i32 + dy;

    // Leaving the grid and hitting a wall are the same non-event.
    if !grid.in_bounds(nx, ny) {
        return MoveOutcome::Blocked;
    }
    if grid.has_wall(session.player.x, session.player.y, dir) {
        return MoveOutcome::Blocked;
    }

    let from = session.player;
    let to = Coord {
        x: nx as u32,
        y: ny as u32,
    };

    // First successful move arms the clock; later calls are no-ops.
    session.clock.start();

    let class = session.trail.record_move(from, to);
    session.player = to;

    if to == session.goal {
        session.game_over = true;
        session.clock.stop();
        session.beat_target = session.clock.elapsed_ms() <= session.target_ms();
        return MoveOutcome::Won;
    }

    match class {
        MoveClass::Forward => MoveOutcome::Forward,
        MoveClass::Backtrack => MoveOutcome::Backtrack,
    }
}

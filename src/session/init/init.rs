use crate::core::grid::Coord;
use crate::domain::levels::LevelRegistry;
use crate::systems::random::XorShift32;
use crate::systems::trail::TrailTracker;

use super::clock::RunClock;
use super::SessionCore;

pub(super) const DEFAULT_SEED: u32 = 12345;

pub(super) fn create_session_core(seed: u32) -> SessionCore {
    SessionCore {
        levels: LevelRegistry::builtin(),
        level_index: 0,
        grid: None,
        saved: None,
        player: Coord { x: 0, y: 0 },
        goal: Coord { x: 0, y: 0 },
        trail: TrailTracker::new(),
        game_over: false,
        beat_target: false,
        clock: RunClock::new(),
        rng: XorShift32::new(seed),
    }
}

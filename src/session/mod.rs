//! Session - one maze run from generation to win
//!
//! `SessionCore` owns everything a run needs: the grid, the player and goal,
//! the trail, the clock, the level selection and the saved layout. It is
//! plain Rust and fully testable natively; the WASM boundary lives in
//! `facade.rs` and does nothing but delegate.
//!
//! All mutation goes through the command and move handlers in their
//! submodules; this file only wires state to them.

use crate::core::direction::Direction;
use crate::core::grid::{Coord, MazeGrid};
use crate::domain::levels::LevelRegistry;
use crate::systems::random::XorShift32;
use crate::systems::trail::{Segment, TrailTracker};

#[path = "clock/clock.rs"]
mod clock;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "moves/moves.rs"]
mod moves;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::Game;
pub use moves::MoveOutcome;
pub use snapshot::SavedLayout;

use clock::RunClock;

/// One independent game session.
///
/// Freshly constructed sessions have no maze: dimension getters read 0 and
/// the buffer getters are empty until the first generate or restore.
pub struct SessionCore {
    levels: LevelRegistry,
    level_index: usize,

    grid: Option<MazeGrid>,
    saved: Option<SavedLayout>,

    player: Coord,
    goal: Coord,
    trail: TrailTracker,

    game_over: bool,
    beat_target: bool,
    clock: RunClock,

    rng: XorShift32,
}

impl SessionCore {
    /// Create a session with the built-in levels and the default seed.
    pub fn new() -> Self {
        init::create_session_core(init::DEFAULT_SEED)
    }

    /// Create a session with a caller-chosen seed, for reproducible runs.
    pub fn with_seed(seed: u32) -> Self {
        init::create_session_core(seed)
    }

    pub fn load_level_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let registry = LevelRegistry::from_bundle_json(json)?;
        self.level_index = registry.clamp_index(self.level_index);
        self.levels = registry;
        Ok(())
    }

    pub fn get_level_manifest_json(&self) -> String {
        self.levels.manifest_json()
    }

    // === Scalar state ===

    pub fn width(&self) -> u32 {
        self.grid.as_ref().map_or(0, |g| g.width())
    }

    pub fn height(&self) -> u32 {
        self.grid.as_ref().map_or(0, |g| g.height())
    }

    pub fn player_x(&self) -> u32 { self.player.x }

    pub fn player_y(&self) -> u32 { self.player.y }

    pub fn goal_x(&self) -> u32 { self.goal.x }

    pub fn goal_y(&self) -> u32 { self.goal.y }

    pub fn game_over(&self) -> bool { self.game_over }

    /// Whether the winning run came in under the level's target time.
    /// Meaningful once `game_over` reads true.
    pub fn beat_target(&self) -> bool { self.beat_target }

    /// True from the first successful move until the next generate/restore.
    pub fn started(&self) -> bool {
        self.clock.started()
    }

    /// Milliseconds on the run clock: 0 before the first move, live while
    /// running, frozen at the win.
    pub fn elapsed_ms(&self) -> f64 {
        self.clock.elapsed_ms()
    }

    pub fn level_index(&self) -> usize { self.level_index }

    pub fn level_count(&self) -> usize {
        self.levels.count()
    }

    /// Target time of the selected level.
    pub fn target_ms(&self) -> f64 {
        self.levels
            .get(self.level_index)
            .map_or(0.0, |level| level.target_ms)
    }

    // === Commands ===

    /// Carve a fresh maze and reset the run. Dimensions are clamped to >= 1.
    pub fn generate_new_maze(&mut self, width: u32, height: u32) {
        commands::generate_new_maze(self, width, height)
    }

    /// Select a level (index clamped into the table) and generate its maze.
    pub fn set_level(&mut self, index: usize) {
        commands::set_level(self, index)
    }

    /// Rebuild the current maze from its snapshot and reset the run. Without
    /// a snapshot this generates a fresh maze at the selected level's size.
    pub fn restore_saved_layout(&mut self) {
        commands::restore_saved_layout(self)
    }

    /// Replay the current maze from the start ("Restart Level").
    pub fn restart_level(&mut self) {
        commands::restore_saved_layout(self)
    }

    /// Install a specific layout, e.g. one captured in another session.
    pub fn restore_layout(&mut self, layout: &SavedLayout) {
        commands::install_layout(self, layout)
    }

    /// Reset the random source; the next generate is reproducible.
    pub fn reseed(&mut self, seed: u32) {
        commands::reseed(self, seed)
    }

    /// Try to step the player. Illegal moves (walls, bounds, finished run,
    /// no maze yet) change nothing and report `Blocked`.
    pub fn attempt_move(&mut self, dir: Direction) -> MoveOutcome {
        moves::attempt_move(self, dir)
    }

    /// Snapshot of the current maze, if one has been generated.
    pub fn saved_layout(&self) -> Option<&SavedLayout> {
        self.saved.as_ref()
    }

    // === Render buffers (JS reads these through the facade) ===

    /// One byte of wall bits per cell, row-major.
    pub fn walls_ptr(&self) -> *const u8 {
        self.grid
            .as_ref()
            .map_or(std::ptr::null(), |g| g.walls_ptr())
    }

    pub fn walls_len(&self) -> usize {
        self.grid.as_ref().map_or(0, |g| g.size())
    }

    /// Active path as (x, y) pairs, start cell first.
    pub fn trail_ptr(&self) -> *const u32 {
        self.trail.path().as_ptr() as *const u32
    }

    /// Length of the trail view in u32 elements (two per cell).
    pub fn trail_len(&self) -> usize {
        self.trail.path().len() * 2
    }

    /// Forward move history as (from_x, from_y, to_x, to_y) quads.
    pub fn forward_segments_ptr(&self) -> *const u32 {
        segments_ptr(self.trail.forward_segments())
    }

    /// Length of the forward view in u32 elements (four per segment).
    pub fn forward_segments_len(&self) -> usize {
        self.trail.forward_segments().len() * 4
    }

    /// Backtrack move history as (from_x, from_y, to_x, to_y) quads.
    pub fn backtrack_segments_ptr(&self) -> *const u32 {
        segments_ptr(self.trail.backtrack_segments())
    }

    /// Length of the backtrack view in u32 elements (four per segment).
    pub fn backtrack_segments_len(&self) -> usize {
        self.trail.backtrack_segments().len() * 4
    }
}

impl Default for SessionCore {
    fn default() -> Self {
        Self::new()
    }
}

fn segments_ptr(segments: &[Segment]) -> *const u32 {
    segments.as_ptr() as *const u32
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

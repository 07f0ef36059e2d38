use wasm_bindgen::prelude::*;

use crate::core::direction::Direction;

use super::{MoveOutcome, SessionCore};

#[wasm_bindgen]
pub struct Game {
    core: SessionCore,
}

#[wasm_bindgen]
impl Game {
    /// Create a session with no maze yet. Call `set_level` or
    /// `generate_new_maze` before reading the buffers.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SessionCore::new(),
        }
    }

    /// Create a session with a fixed seed, for reproducible mazes.
    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(seed: u32) -> Self {
        Self {
            core: SessionCore::with_seed(seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> u32 { self.core.player_x() }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> u32 { self.core.player_y() }

    #[wasm_bindgen(getter)]
    pub fn goal_x(&self) -> u32 { self.core.goal_x() }

    #[wasm_bindgen(getter)]
    pub fn goal_y(&self) -> u32 { self.core.goal_y() }

    #[wasm_bindgen(getter)]
    pub fn game_over(&self) -> bool { self.core.game_over() }

    /// Whether the winning run came in under the level's target time.
    #[wasm_bindgen(getter)]
    pub fn beat_target(&self) -> bool { self.core.beat_target() }

    /// True from the first successful move until the next generate/restore.
    #[wasm_bindgen(getter)]
    pub fn started(&self) -> bool { self.core.started() }

    /// Milliseconds on the run clock: 0 before the first move, live while
    /// running, frozen at the win.
    #[wasm_bindgen(getter)]
    pub fn elapsed_ms(&self) -> f64 { self.core.elapsed_ms() }

    #[wasm_bindgen(getter)]
    pub fn level(&self) -> u32 { self.core.level_index() as u32 }

    #[wasm_bindgen(getter)]
    pub fn level_count(&self) -> u32 { self.core.level_count() as u32 }

    /// Target time of the selected level, in milliseconds.
    #[wasm_bindgen(getter)]
    pub fn target_ms(&self) -> f64 { self.core.target_ms() }

    /// Carve a fresh maze and reset the run.
    pub fn generate_new_maze(&mut self, width: u32, height: u32) {
        self.core.generate_new_maze(width, height);
    }

    /// Select a level (index clamped into the table) and generate its maze.
    pub fn set_level(&mut self, index: u32) {
        self.core.set_level(index as usize);
    }

    /// Rebuild the current maze from its snapshot and reset the run.
    pub fn restore_saved_layout(&mut self) {
        self.core.restore_saved_layout();
    }

    /// Replay the current maze from the start ("Restart Level" button).
    pub fn restart_level(&mut self) {
        self.core.restart_level();
    }

    /// Try to step the player. Returns one of the `outcome_*` codes;
    /// anything illegal is reported as blocked and changes nothing.
    pub fn attempt_move(&mut self, direction: u8) -> u8 {
        let Some(dir) = Direction::from_u8(direction) else {
            return MoveOutcome::Blocked as u8;
        };
        self.core.attempt_move(dir) as u8
    }

    /// Reset the random source; the next generate is reproducible.
    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    pub fn load_level_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_level_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;

        web_sys::console::log_1(
            &format!("🦀 Loaded level bundle ({} levels)", self.core.level_count()).into(),
        );
        Ok(())
    }

    pub fn get_level_manifest_json(&self) -> String {
        self.core.get_level_manifest_json()
    }

    // === Render buffers (valid until the next command) ===

    /// Pointer to one byte of wall bits per cell, row-major.
    pub fn walls_ptr(&self) -> *const u8 {
        self.core.walls_ptr()
    }

    pub fn walls_len(&self) -> usize {
        self.core.walls_len()
    }

    /// Pointer to the active path as (x, y) pairs, start cell first.
    pub fn trail_ptr(&self) -> *const u32 {
        self.core.trail_ptr()
    }

    /// Trail length in u32 elements (two per cell).
    pub fn trail_len(&self) -> usize {
        self.core.trail_len()
    }

    /// Pointer to forward history as (from_x, from_y, to_x, to_y) quads.
    pub fn forward_segments_ptr(&self) -> *const u32 {
        self.core.forward_segments_ptr()
    }

    /// Forward history length in u32 elements (four per segment).
    pub fn forward_segments_len(&self) -> usize {
        self.core.forward_segments_len()
    }

    /// Pointer to backtrack history as (from_x, from_y, to_x, to_y) quads.
    pub fn backtrack_segments_ptr(&self) -> *const u32 {
        self.core.backtrack_segments_ptr()
    }

    /// Backtrack history length in u32 elements (four per segment).
    pub fn backtrack_segments_len(&self) -> usize {
        self.core.backtrack_segments_len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

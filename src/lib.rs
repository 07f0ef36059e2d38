//! Trailblaze Engine - maze carving and run tracking in WASM
//!
//! Architecture:
//! - core/     - Grid geometry, walls, cell stack
//! - domain/   - Level presets
//! - systems/  - Maze carver, trail tracker, random source
//! - session/  - Run orchestration and the WASM facade
//!
//! The frontend draws straight out of WASM memory: wall bytes, the trail
//! and both segment lists are exposed as pointer + length pairs.

pub mod core;
pub mod domain;
pub mod session;
pub mod systems;

use wasm_bindgen::prelude::*;

use crate::core::grid::{WALL_BOTTOM, WALL_LEFT, WALL_RIGHT, WALL_TOP};

// When the `wee_alloc` feature is enabled, use it as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Trailblaze WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::direction::Direction;
pub use session::{Game, MoveOutcome, SavedLayout, SessionCore};

// Export direction codes for JS
#[wasm_bindgen]
pub fn dir_up() -> u8 { Direction::Up as u8 }
#[wasm_bindgen]
pub fn dir_right() -> u8 { Direction::Right as u8 }
#[wasm_bindgen]
pub fn dir_down() -> u8 { Direction::Down as u8 }
#[wasm_bindgen]
pub fn dir_left() -> u8 { Direction::Left as u8 }

// Export move outcome codes for JS
#[wasm_bindgen]
pub fn outcome_blocked() -> u8 { MoveOutcome::Blocked as u8 }
#[wasm_bindgen]
pub fn outcome_forward() -> u8 { MoveOutcome::Forward as u8 }
#[wasm_bindgen]
pub fn outcome_backtrack() -> u8 { MoveOutcome::Backtrack as u8 }
#[wasm_bindgen]
pub fn outcome_won() -> u8 { MoveOutcome::Won as u8 }

// Export wall bits for JS
#[wasm_bindgen]
pub fn wall_top() -> u8 { WALL_TOP }
#[wasm_bindgen]
pub fn wall_right() -> u8 { WALL_RIGHT }
#[wasm_bindgen]
pub fn wall_bottom() -> u8 { WALL_BOTTOM }
#[wasm_bindgen]
pub fn wall_left() -> u8 { WALL_LEFT }

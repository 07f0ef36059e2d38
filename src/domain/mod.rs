//! Domain content - the level presets the game ships with

pub mod levels;

pub use levels::{LevelDef, LevelRegistry};

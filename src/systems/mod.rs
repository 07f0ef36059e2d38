//! Systems - maze carving, trail tracking and the random source feeding them

pub mod generator;
pub mod random;
pub mod trail;

pub use random::{RandomSource, XorShift32};
pub use trail::{MoveClass, Segment, TrailTracker};

//! The core gameplay simulation: a falling/jumping bird must pass through
//! procedurally spaced gaps between scrolling pipe columns. One point per
//! pipe cleared; spawn cadence and pipe speed ramp with the score.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

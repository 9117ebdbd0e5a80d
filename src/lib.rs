//! Skybird - Terminal Flappy-Style Arcade Game Library
//!
//! This module exposes the simulation and its collaborators for testing and
//! external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod assets;
pub mod audio;
pub mod constants;
pub mod game;
pub mod highscores;
pub mod input;
pub mod ui;

pub use constants::*;
pub use game::{GameSession, SessionOutcome, SessionPhase};

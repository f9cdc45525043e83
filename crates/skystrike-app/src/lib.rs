//! SKYSTRIKE headless host application.
//!
//! Wires the simulation engine to the outside world: a game-loop thread
//! paced at the fixed tick rate, a command channel for the input
//! collaborator, and a snapshot sink for the render collaborator.

pub mod game_loop;
pub mod state;

pub use skystrike_core as core;

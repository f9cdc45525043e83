//! Simulation engine for SKYSTRIKE.
//!
//! Owns the hecs ECS world, runs the fixed-tick system schedule, and
//! produces `LevelSnapshot`s for the host. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod levels;
pub mod progression;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skystrike_core as core;

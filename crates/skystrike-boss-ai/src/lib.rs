//! Boss behavior state machines.
//!
//! Pure functions that advance the boss's move pattern and shield state.
//! No ECS dependency — operates on the plain data structs from
//! `skystrike-core` so the transitions are testable in isolation.

pub mod movement;
pub mod shield;

#[cfg(test)]
mod tests;

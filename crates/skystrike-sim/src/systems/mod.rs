//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine state
//! they need. The engine calls them in a fixed order; reordering changes
//! observable game balance.

pub mod cleanup;
pub mod collision;
pub mod enemy_fire;
pub mod movement;
pub mod penetration;
pub mod snapshot;
pub mod spawn;

use hecs::World;

use skystrike_core::components::EnemyUnit;

/// Number of live entities in the enemy-unit group (boss included).
pub fn count_enemy_units(world: &World) -> usize {
    let mut query = world.query::<&EnemyUnit>();
    query.iter().count()
}

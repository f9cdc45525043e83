//! Enemy and boss fire rolls.
//!
//! Each live enemy unit makes one independent probability check per tick;
//! successful rolls spawn a projectile into the enemy-shot group.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{BossPlane, Destructible, EnemyWing};
use skystrike_core::constants::{
    BOSS_SHOT_X_OFFSET, BOSS_SHOT_Y_OFFSET, ENEMY_SHOT_X_OFFSET, ENEMY_SHOT_Y_OFFSET,
};
use skystrike_core::events::RenderEvent;
use skystrike_core::types::Position;

use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    events: &mut Vec<RenderEvent>,
) {
    // Collect spawn positions first; spawning mid-query would alias the world.
    let mut enemy_shots: Vec<Position> = Vec::new();
    for (_entity, (pos, wing, destructible)) in
        world.query_mut::<(&Position, &EnemyWing, &Destructible)>()
    {
        if destructible.destroyed {
            continue;
        }
        if rng.gen_bool(wing.fire_probability) {
            enemy_shots.push(pos.offset(ENEMY_SHOT_X_OFFSET, ENEMY_SHOT_Y_OFFSET));
        }
    }

    let mut boss_shots: Vec<Position> = Vec::new();
    for (_entity, (pos, boss, destructible)) in
        world.query_mut::<(&Position, &BossPlane, &Destructible)>()
    {
        if destructible.destroyed {
            continue;
        }
        if rng.gen_bool(boss.fire_probability) {
            boss_shots.push(pos.offset(BOSS_SHOT_X_OFFSET, BOSS_SHOT_Y_OFFSET));
        }
    }

    for position in enemy_shots {
        world_setup::spawn_enemy_shot(world, next_actor_id, position, events);
    }
    for position in boss_shots {
        world_setup::spawn_boss_shot(world, next_actor_id, position, events);
    }
}

//! Spawn controller — introduces enemies and the boss per level policy.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::enums::BossDirective;
use skystrike_core::events::RenderEvent;
use skystrike_core::types::{Position, ScreenBounds};

use crate::engine::LevelRuntime;
use crate::world_setup;

/// Roll spawns for this tick. One independent roll per missing enemy slot;
/// boss-bearing levels additionally guarantee the boss is present exactly
/// once and never re-spawned after its defeat.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: &mut LevelRuntime,
    bounds: ScreenBounds,
    next_actor_id: &mut u32,
    events: &mut Vec<RenderEvent>,
) {
    let policy = level.plan.spawn;

    let current = super::count_enemy_units(world) as u32;
    for _ in current..policy.total_enemies {
        if rng.gen_bool(policy.spawn_probability) {
            let y = rng.gen_range(0.0..bounds.enemy_spawn_max_y());
            world_setup::spawn_enemy_plane(
                world,
                next_actor_id,
                Position::new(bounds.width, y),
                events,
            );
        }
    }

    let boss_due = match policy.boss {
        BossDirective::Absent => false,
        BossDirective::AfterEnemiesCleared => super::count_enemy_units(world) == 0,
        BossDirective::AlwaysPresent => true,
    };
    if boss_due && level.boss_entity.is_none() && !level.boss_defeated {
        level.boss_entity = Some(world_setup::spawn_boss(
            world,
            rng,
            next_actor_id,
            bounds,
            events,
        ));
    }
}

//! Per-tick status timers and movement.
//!
//! Invincibility windows count down here, then every live entity advances:
//! the user plane by its held direction, the boss by its move pattern (and
//! its shield state machine steps), everything with a `Velocity` by plain
//! integration. Destroyed entities do not move. Moves that would carry the
//! user plane or the boss outside the vertical bounds are dropped for that
//! tick only.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skystrike_boss_ai::{movement as boss_movement, shield as boss_shield};
use skystrike_core::components::{BossPlane, Destructible, UserPlane};
use skystrike_core::constants::{USER_VERTICAL_VELOCITY, Y_LOWER_BOUND, Y_UPPER_BOUND};
use skystrike_core::types::{Position, Velocity};

pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    for (_entity, destructible) in world.query_mut::<&mut Destructible>() {
        destructible.tick_invincibility();
    }

    // User plane: bounded vertical movement.
    for (_entity, (pos, plane, destructible)) in
        world.query_mut::<(&mut Position, &UserPlane, &Destructible)>()
    {
        if destructible.destroyed {
            continue;
        }
        let candidate = pos.y + USER_VERTICAL_VELOCITY * plane.direction.multiplier();
        if (Y_UPPER_BOUND..=Y_LOWER_BOUND).contains(&candidate) {
            pos.y = candidate;
        }
    }

    // Boss: pattern-driven vertical movement, then the shield machine.
    for (_entity, (pos, boss, destructible)) in
        world.query_mut::<(&mut Position, &mut BossPlane, &Destructible)>()
    {
        if destructible.destroyed {
            continue;
        }
        let step = boss_movement::next_move(&mut boss.movement, rng);
        let candidate = pos.y + step;
        if (Y_UPPER_BOUND..=Y_LOWER_BOUND).contains(&candidate) {
            pos.y = candidate;
        }
        boss_shield::update_shield(&mut boss.shield, rng, boss.shield_probability);
    }

    // Enemies and projectiles: fixed-velocity drift.
    for (_entity, (pos, vel, destructible)) in
        world.query_mut::<(&mut Position, &Velocity, &Destructible)>()
    {
        if destructible.destroyed {
            continue;
        }
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

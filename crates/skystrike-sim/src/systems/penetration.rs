//! Enemy penetration check.
//!
//! An enemy whose absolute horizontal displacement since spawn exceeds the
//! screen width has breached the defenses: the user takes one damage, the
//! enemy is destroyed, and the kill tally is decremented to compensate for
//! the list-size delta the removal will cause at scoring time.

use hecs::{Entity, World};

use skystrike_core::components::{Destructible, EnemyWing, UserPlane};
use skystrike_core::types::{Position, ScreenBounds};

pub fn run(world: &mut World, bounds: ScreenBounds, user: Option<Entity>) {
    let mut penetrators: Vec<Entity> = Vec::new();
    for (entity, (pos, wing, destructible)) in
        world.query_mut::<(&Position, &EnemyWing, &Destructible)>()
    {
        if destructible.destroyed {
            continue;
        }
        if (pos.x - wing.spawn_x).abs() > bounds.width {
            penetrators.push(entity);
        }
    }
    if penetrators.is_empty() {
        return;
    }

    let Some(user) = user else {
        return;
    };
    for enemy in penetrators {
        if let Ok(mut destructible) = world.get::<&mut Destructible>(enemy) {
            destructible.destroy();
        }
        if let Ok(mut destructible) = world.get::<&mut Destructible>(user) {
            destructible.take_damage();
        }
        if let Ok(mut plane) = world.get::<&mut UserPlane>(user) {
            plane.decrement_kill_count();
        }
    }
}

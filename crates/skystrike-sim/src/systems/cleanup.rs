//! Cleanup system: removes destroyed actors and off-screen projectiles.
//!
//! Destroyed actors leave the world in the same tick they were marked
//! destroyed. Projectiles past the screen edge can never intersect
//! anything again and are culled. Uses a pre-allocated buffer to avoid
//! per-tick allocation; every successful despawn emits `EntityRemoved`.

use hecs::{Entity, World};

use skystrike_core::components::{ActorId, Destructible, EnemyShot, UserShot};
use skystrike_core::constants::SHOT_CULL_MARGIN;
use skystrike_core::events::RenderEvent;
use skystrike_core::types::{Position, ScreenBounds};

pub fn run(
    world: &mut World,
    bounds: ScreenBounds,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<RenderEvent>,
) {
    despawn_buffer.clear();

    for (entity, destructible) in world.query_mut::<&Destructible>() {
        if destructible.destroyed {
            despawn_buffer.push(entity);
        }
    }

    let off_screen = |pos: &Position| {
        pos.x < -SHOT_CULL_MARGIN || pos.x > bounds.width + SHOT_CULL_MARGIN
    };
    for (entity, (pos, _shot)) in world.query_mut::<(&Position, &UserShot)>() {
        if off_screen(pos) {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (pos, _shot)) in world.query_mut::<(&Position, &EnemyShot)>() {
        if off_screen(pos) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let id = world.get::<&ActorId>(entity).map(|id| *id).ok();
        if world.despawn(entity).is_ok() {
            if let Some(id) = id {
                events.push(RenderEvent::EntityRemoved { id });
            }
        }
    }
}

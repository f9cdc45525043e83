//! Entity spawn factories.
//!
//! Creates the user plane, enemy planes, the boss, and projectiles with
//! their component bundles. Every spawn emits an `EntityAdded` render
//! event so the render layer can mirror entity lifetimes.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::*;
use skystrike_core::constants::*;
use skystrike_core::enums::ActorKind;
use skystrike_core::events::RenderEvent;
use skystrike_core::types::{Position, ScreenBounds, Velocity};

fn alloc_id(next_actor_id: &mut u32) -> ActorId {
    let id = ActorId(*next_actor_id);
    *next_actor_id += 1;
    id
}

/// Spawn the user plane at its start position on the left edge.
pub fn spawn_user_plane(
    world: &mut World,
    next_actor_id: &mut u32,
    health: i32,
    events: &mut Vec<RenderEvent>,
) -> hecs::Entity {
    let id = alloc_id(next_actor_id);
    let position = Position::new(USER_INITIAL_X, USER_INITIAL_Y);
    events.push(RenderEvent::EntityAdded {
        id,
        kind: ActorKind::UserPlane,
        position,
    });
    world.spawn((
        UserUnit,
        id,
        ActorKind::UserPlane,
        position,
        Hitbox::new(USER_HITBOX_WIDTH, USER_HITBOX_HEIGHT),
        Destructible::new(health),
        UserPlane::default(),
    ))
}

/// Spawn one enemy plane drifting in from the given position.
pub fn spawn_enemy_plane(
    world: &mut World,
    next_actor_id: &mut u32,
    position: Position,
    events: &mut Vec<RenderEvent>,
) -> hecs::Entity {
    let id = alloc_id(next_actor_id);
    events.push(RenderEvent::EntityAdded {
        id,
        kind: ActorKind::EnemyPlane,
        position,
    });
    world.spawn((
        EnemyUnit,
        id,
        ActorKind::EnemyPlane,
        position,
        Velocity::new(ENEMY_HORIZONTAL_VELOCITY, 0.0),
        Hitbox::new(ENEMY_HITBOX_WIDTH, ENEMY_HITBOX_HEIGHT),
        Destructible::new(ENEMY_INITIAL_HEALTH),
        EnemyWing {
            fire_probability: ENEMY_FIRE_PROBABILITY,
            spawn_x: position.x,
        },
    ))
}

/// Spawn the boss at the right edge with a freshly shuffled move pattern.
pub fn spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    bounds: ScreenBounds,
    events: &mut Vec<RenderEvent>,
) -> hecs::Entity {
    let id = alloc_id(next_actor_id);
    let position = Position::new(bounds.width, BOSS_INITIAL_Y);
    events.push(RenderEvent::EntityAdded {
        id,
        kind: ActorKind::Boss,
        position,
    });
    world.spawn((
        EnemyUnit,
        id,
        ActorKind::Boss,
        position,
        Hitbox::new(BOSS_HITBOX_WIDTH, BOSS_HITBOX_HEIGHT),
        Destructible::new(BOSS_INITIAL_HEALTH),
        BossPlane {
            movement: skystrike_boss_ai::movement::build_move_pattern(rng),
            shield: ShieldState::default(),
            fire_probability: BOSS_FIRE_PROBABILITY,
            shield_probability: BOSS_SHIELD_PROBABILITY,
        },
    ))
}

/// Spawn a user projectile.
pub fn spawn_user_shot(
    world: &mut World,
    next_actor_id: &mut u32,
    position: Position,
    events: &mut Vec<RenderEvent>,
) -> hecs::Entity {
    let id = alloc_id(next_actor_id);
    events.push(RenderEvent::EntityAdded {
        id,
        kind: ActorKind::UserShot,
        position,
    });
    world.spawn((
        UserShot,
        id,
        ActorKind::UserShot,
        position,
        Velocity::new(USER_SHOT_VELOCITY, 0.0),
        Hitbox::new(USER_SHOT_HITBOX_WIDTH, USER_SHOT_HITBOX_HEIGHT),
        Destructible::new(1),
    ))
}

/// Spawn an enemy plane's projectile.
pub fn spawn_enemy_shot(
    world: &mut World,
    next_actor_id: &mut u32,
    position: Position,
    events: &mut Vec<RenderEvent>,
) -> hecs::Entity {
    let id = alloc_id(next_actor_id);
    events.push(RenderEvent::EntityAdded {
        id,
        kind: ActorKind::EnemyShot,
        position,
    });
    world.spawn((
        EnemyShot,
        id,
        ActorKind::EnemyShot,
        position,
        Velocity::new(ENEMY_SHOT_VELOCITY, 0.0),
        Hitbox::new(ENEMY_SHOT_HITBOX_WIDTH, ENEMY_SHOT_HITBOX_HEIGHT),
        Destructible::new(1),
    ))
}

/// Spawn a boss fireball.
pub fn spawn_boss_shot(
    world: &mut World,
    next_actor_id: &mut u32,
    position: Position,
    events: &mut Vec<RenderEvent>,
) -> hecs::Entity {
    let id = alloc_id(next_actor_id);
    events.push(RenderEvent::EntityAdded {
        id,
        kind: ActorKind::BossShot,
        position,
    });
    world.spawn((
        EnemyShot,
        id,
        ActorKind::BossShot,
        position,
        Velocity::new(BOSS_SHOT_VELOCITY, 0.0),
        Hitbox::new(BOSS_SHOT_HITBOX_WIDTH, BOSS_SHOT_HITBOX_HEIGHT),
        Destructible::new(1),
    ))
}

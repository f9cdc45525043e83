//! Snapshot builder — flattens the world into the view the host consumes.

use hecs::{Entity, World};

use skystrike_core::components::{ActorId, BossPlane, Destructible, Hitbox, UserPlane};
use skystrike_core::enums::{ActorKind, GamePhase, LevelId, LevelOutcome};
use skystrike_core::events::{Alert, RenderEvent};
use skystrike_core::state::{ActorView, LevelSnapshot, UserView};
use skystrike_core::types::{Position, Rect, SimTime};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    level: Option<LevelId>,
    outcome: Option<LevelOutcome>,
    user_entity: Option<Entity>,
    events: Vec<RenderEvent>,
    alerts: Vec<Alert>,
) -> LevelSnapshot {
    let user = user_entity.and_then(|entity| build_user_view(world, entity));

    let mut actors = Vec::new();
    let mut query = world.query::<(&ActorId, &ActorKind, &Position, &Hitbox, &Destructible)>();
    for (entity, (id, kind, pos, hitbox, destructible)) in query.iter() {
        if Some(entity) == user_entity {
            continue;
        }
        let shielded = world
            .get::<&BossPlane>(entity)
            .map(|boss| boss.shield.shielded)
            .unwrap_or(false);
        actors.push(ActorView {
            id: *id,
            kind: *kind,
            position: *pos,
            bounds: Rect::new(pos.x, pos.y, hitbox.width, hitbox.height),
            health: destructible.health,
            invincible: destructible.is_invincible(),
            shielded,
        });
    }

    LevelSnapshot {
        time: *time,
        phase,
        level,
        outcome,
        user,
        actors,
        events,
        alerts,
    }
}

fn build_user_view(world: &World, entity: Entity) -> Option<UserView> {
    let id = world.get::<&ActorId>(entity).ok()?;
    let pos = world.get::<&Position>(entity).ok()?;
    let destructible = world.get::<&Destructible>(entity).ok()?;
    let plane = world.get::<&UserPlane>(entity).ok()?;
    Some(UserView {
        id: *id,
        position: *pos,
        health: destructible.health,
        invincible: destructible.is_invincible(),
        kills: plane.kills,
    })
}

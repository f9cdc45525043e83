//! Collision resolver.
//!
//! Four ordered group pairs are tested every tick with O(n·m) AABB
//! overlap checks; entity counts stay small enough that nothing smarter is
//! warranted. Both sides of an intersecting pair receive one damage
//! application — an entity overlapping several opponents is hit once per
//! pair. Destroyed entities neither deal nor take damage.

use hecs::{Component, Entity, World};

use skystrike_core::components::{
    BossPlane, Destructible, EnemyShot, EnemyUnit, Hitbox, UserShot, UserUnit,
};
use skystrike_core::types::{Position, Rect};

pub fn run(world: &mut World) {
    resolve_pair::<UserUnit, EnemyUnit>(world);
    resolve_pair::<UserShot, EnemyUnit>(world);
    resolve_pair::<EnemyShot, UserUnit>(world);
    resolve_pair::<UserShot, EnemyShot>(world);
}

/// Bounding boxes of the live members of one entity group.
fn collect_group<M: Component>(world: &mut World) -> Vec<(Entity, Rect)> {
    let mut group = Vec::new();
    for (entity, (_marker, pos, hitbox, destructible)) in
        world.query_mut::<(&M, &Position, &Hitbox, &Destructible)>()
    {
        if destructible.destroyed {
            continue;
        }
        group.push((
            entity,
            Rect::new(pos.x, pos.y, hitbox.width, hitbox.height),
        ));
    }
    group
}

fn resolve_pair<A: Component, B: Component>(world: &mut World) {
    let group_a = collect_group::<A>(world);
    let group_b = collect_group::<B>(world);
    for &(a, a_rect) in &group_a {
        for &(b, b_rect) in &group_b {
            if a_rect.intersects(&b_rect) {
                apply_damage(world, a);
                apply_damage(world, b);
            }
        }
    }
}

/// One damage application at a hit site: projectiles die unconditionally,
/// a raised boss shield suppresses everything, otherwise the destructible
/// contract applies.
fn apply_damage(world: &mut World, entity: Entity) {
    let is_shot = world.get::<&UserShot>(entity).is_ok() || world.get::<&EnemyShot>(entity).is_ok();
    if is_shot {
        if let Ok(mut destructible) = world.get::<&mut Destructible>(entity) {
            destructible.destroy();
        }
        return;
    }

    let shielded = world
        .get::<&BossPlane>(entity)
        .map(|boss| boss.shield.shielded)
        .unwrap_or(false);
    if shielded {
        return;
    }

    if let Ok(mut destructible) = world.get::<&mut Destructible>(entity) {
        destructible.take_damage();
    }
}

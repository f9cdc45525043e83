//! Level progression predicate, evaluated at the end of each tick.
//!
//! Losing takes priority over winning: a tick in which the user dies and
//! the objective completes is still a loss.

use hecs::{Entity, World};

use skystrike_core::components::{Destructible, UserPlane};
use skystrike_core::enums::{LevelOutcome, Objective};

use crate::engine::LevelRuntime;

/// Decide whether the level just ended, and how.
pub fn evaluate(world: &World, level: &LevelRuntime, user: Option<Entity>) -> Option<LevelOutcome> {
    let user_destroyed = user
        .and_then(|entity| world.get::<&Destructible>(entity).ok().map(|d| d.destroyed))
        .unwrap_or(true);
    if user_destroyed {
        return Some(LevelOutcome::Lost);
    }

    let objective_met = match level.plan.objective {
        Objective::KillTarget { kills } => user
            .and_then(|entity| world.get::<&UserPlane>(entity).ok().map(|p| p.kills >= kills))
            .unwrap_or(false),
        Objective::DefeatBoss => level.boss_defeated,
    };
    if !objective_met {
        return None;
    }

    Some(match level.plan.next {
        Some(next) => LevelOutcome::Advance { next },
        None => LevelOutcome::Won,
    })
}

//! Level catalogue and the factory boundary.
//!
//! Levels are looked up in an explicit registry keyed by `LevelId` — the
//! host supplies a `LevelFactory` at engine construction and the engine
//! calls it on every transition. A missing entry is a fatal
//! `LevelError::UnknownLevel`, never a retry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use skystrike_core::constants::{ENEMY_SPAWN_PROBABILITY, USER_INITIAL_HEALTH};
use skystrike_core::enums::{BossDirective, LevelId, Objective};
use skystrike_core::error::LevelError;
use skystrike_core::types::ScreenBounds;

/// Per-level spawn parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPolicy {
    /// Target number of simultaneously present enemy units (boss included).
    pub total_enemies: u32,
    /// Per-missing-slot spawn probability each tick.
    pub spawn_probability: f64,
    pub boss: BossDirective,
}

/// Everything the engine needs to run one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelPlan {
    pub id: LevelId,
    pub player_health: i32,
    pub spawn: SpawnPolicy,
    pub objective: Objective,
    /// Level to advance to when the objective is met; `None` means the
    /// objective wins the game.
    pub next: Option<LevelId>,
}

/// Abstract level construction supplied by the host.
pub trait LevelFactory: Send {
    fn create(&self, id: LevelId, bounds: ScreenBounds) -> Result<LevelPlan, LevelError>;
}

type LevelBuilder = fn(ScreenBounds) -> LevelPlan;

/// Default `LevelFactory`: a map from level id to builder function.
pub struct LevelRegistry {
    builders: HashMap<LevelId, LevelBuilder>,
}

impl LevelRegistry {
    /// An empty registry. Useful for hosts that supply their own levels.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// The standard four-level campaign.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(LevelId::One, level_one);
        registry.register(LevelId::Two, level_two);
        registry.register(LevelId::Three, level_three);
        registry.register(LevelId::Four, level_four);
        registry
    }

    pub fn register(&mut self, id: LevelId, builder: LevelBuilder) {
        self.builders.insert(id, builder);
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl LevelFactory for LevelRegistry {
    fn create(&self, id: LevelId, bounds: ScreenBounds) -> Result<LevelPlan, LevelError> {
        match self.builders.get(&id) {
            Some(builder) => Ok(builder(bounds)),
            None => Err(LevelError::UnknownLevel(id)),
        }
    }
}

fn level_one(_bounds: ScreenBounds) -> LevelPlan {
    LevelPlan {
        id: LevelId::One,
        player_health: USER_INITIAL_HEALTH,
        spawn: SpawnPolicy {
            total_enemies: 5,
            spawn_probability: ENEMY_SPAWN_PROBABILITY,
            boss: BossDirective::Absent,
        },
        objective: Objective::KillTarget { kills: 2 },
        next: Some(LevelId::Two),
    }
}

fn level_two(_bounds: ScreenBounds) -> LevelPlan {
    LevelPlan {
        id: LevelId::Two,
        player_health: USER_INITIAL_HEALTH,
        spawn: SpawnPolicy {
            total_enemies: 0,
            spawn_probability: ENEMY_SPAWN_PROBABILITY,
            boss: BossDirective::AfterEnemiesCleared,
        },
        objective: Objective::DefeatBoss,
        next: Some(LevelId::Three),
    }
}

fn level_three(_bounds: ScreenBounds) -> LevelPlan {
    LevelPlan {
        id: LevelId::Three,
        player_health: USER_INITIAL_HEALTH,
        spawn: SpawnPolicy {
            total_enemies: 8,
            spawn_probability: ENEMY_SPAWN_PROBABILITY,
            boss: BossDirective::Absent,
        },
        objective: Objective::KillTarget { kills: 6 },
        next: Some(LevelId::Four),
    }
}

fn level_four(_bounds: ScreenBounds) -> LevelPlan {
    LevelPlan {
        id: LevelId::Four,
        player_health: USER_INITIAL_HEALTH,
        spawn: SpawnPolicy {
            total_enemies: 5,
            spawn_probability: ENEMY_SPAWN_PROBABILITY,
            boss: BossDirective::AlwaysPresent,
        },
        objective: Objective::DefeatBoss,
        next: None,
    }
}

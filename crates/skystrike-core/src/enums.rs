//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side an actor fights for. Determines the collision pairings
/// that apply damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Friendly,
    Enemy,
}

/// Vertical movement state of the user plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
    #[default]
    Stopped,
}

/// What kind of actor an entity is, for render-layer bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    UserPlane,
    EnemyPlane,
    Boss,
    UserShot,
    EnemyShot,
    BossShot,
}

/// Identifier for a playable level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelId {
    One,
    Two,
    Three,
    Four,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    Won,
    Lost,
}

/// Terminal state of a level, reported exactly once per level lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelOutcome {
    /// The user plane was destroyed.
    Lost,
    /// The final level's goal was met.
    Won,
    /// The level's goal was met and play continues on the next level.
    Advance { next: LevelId },
}

/// When the spawn controller introduces the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossDirective {
    /// This level has no boss.
    Absent,
    /// The boss appears once no regular enemies remain.
    AfterEnemiesCleared,
    /// The boss is kept present from the first tick.
    AlwaysPresent,
}

/// Level goal evaluated by the progression predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Objective {
    /// Reach this many kills.
    KillTarget { kills: i32 },
    /// Destroy the level's boss.
    DefeatBoss,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

impl MoveDirection {
    /// Sign applied to the user plane's vertical velocity.
    pub fn multiplier(&self) -> f64 {
        match self {
            MoveDirection::Up => -1.0,
            MoveDirection::Down => 1.0,
            MoveDirection::Stopped => 0.0,
        }
    }
}

impl ActorKind {
    pub fn faction(&self) -> Faction {
        match self {
            ActorKind::UserPlane | ActorKind::UserShot => Faction::Friendly,
            ActorKind::EnemyPlane
            | ActorKind::Boss
            | ActorKind::EnemyShot
            | ActorKind::BossShot => Faction::Enemy,
        }
    }

    /// Whether this actor is a projectile (single-hit, no invincibility).
    pub fn is_shot(&self) -> bool {
        matches!(
            self,
            ActorKind::UserShot | ActorKind::EnemyShot | ActorKind::BossShot
        )
    }
}

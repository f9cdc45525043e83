//! Level snapshot — the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::enums::*;
use crate::events::{Alert, RenderEvent};
use crate::types::{Position, Rect, SimTime};

/// Complete simulation state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Level currently in play, if any.
    pub level: Option<LevelId>,
    /// Terminal state, present only on the tick it was reached.
    pub outcome: Option<LevelOutcome>,
    pub user: Option<UserView>,
    /// Every actor except the user plane.
    pub actors: Vec<ActorView>,
    pub events: Vec<RenderEvent>,
    pub alerts: Vec<Alert>,
}

/// The user plane as seen by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: ActorId,
    pub position: Position,
    pub health: i32,
    /// Polled by the render layer to drive the flashing effect.
    pub invincible: bool,
    pub kills: i32,
}

/// A non-user actor as seen by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorView {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Position,
    pub bounds: Rect,
    /// Remaining health; projectiles report 1 until destroyed.
    pub health: i32,
    pub invincible: bool,
    /// Only ever true for the boss.
    pub shielded: bool,
}

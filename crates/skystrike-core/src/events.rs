//! Events emitted by the simulation for the render layer and host UI.

use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::enums::{ActorKind, AlertLevel, LevelId};
use crate::types::Position;

/// Render-sync events drained into each snapshot. The render layer mirrors
/// entity lifetimes from these; `HealthChanged` feeds the heart display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderEvent {
    /// A new entity entered the field.
    EntityAdded {
        id: ActorId,
        kind: ActorKind,
        position: Position,
    },
    /// An entity left the field (destroyed or culled).
    EntityRemoved { id: ActorId },
    /// The user plane's health after this tick.
    HealthChanged { health: i32 },
    /// A level began (initial entry or advance).
    LevelStarted { level: LevelId },
}

/// Alert for the host UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}

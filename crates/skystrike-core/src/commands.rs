//! Player commands delivered by the host input collaborator.
//!
//! Commands are queued and applied at the next tick boundary; `Fire` is the
//! one command that appends to an entity list, which is safe because it is
//! only processed between ticks on the simulation thread.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Flight control ---
    /// Start moving the user plane upward.
    MoveUp,
    /// Start moving the user plane downward.
    MoveDown,
    /// Stop vertical movement.
    Stop,
    /// Fire a single user projectile.
    Fire,

    // --- Game lifecycle ---
    /// Pause if active, resume if paused.
    TogglePause,
    /// Start a new game at the first level.
    StartGame,
    /// Abandon the current level and return to the menu.
    ReturnToMenu,
}

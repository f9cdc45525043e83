//! Shared state between the host and the game-loop thread.

use std::sync::{Arc, Mutex};

use skystrike_core::commands::PlayerCommand;
use skystrike_core::state::LevelSnapshot;

/// Commands accepted by the game-loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    Player(PlayerCommand),
    Shutdown,
}

/// Latest snapshot, for synchronous polling by the host.
pub type SharedSnapshot = Arc<Mutex<Option<LevelSnapshot>>>;

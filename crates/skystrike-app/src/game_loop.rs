//! Game loop thread — runs the simulation engine at the fixed tick rate
//! and hands snapshots to the host.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel and drain at the tick
//! boundary. Snapshots go through the sink callback (the render-sync
//! boundary) and into shared state for synchronous polling.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use skystrike_core::constants::TICK_RATE;
use skystrike_core::state::LevelSnapshot;
use skystrike_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Callback receiving every snapshot as it is produced.
pub type SnapshotSink = Box<dyn FnMut(&LevelSnapshot) + Send>;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input collaborator to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
    sink: SnapshotSink,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skystrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, sink);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    mut sink: SnapshotSink,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause semantics internally).
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the render collaborator.
        sink(&snapshot);

        // 4. Store the latest snapshot for synchronous polling.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

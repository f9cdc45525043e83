//! Headless SKYSTRIKE host.
//!
//! Reads line commands from stdin (the input collaborator) and logs render
//! events, alerts, and terminal outcomes (the presentation collaborator).
//! Commands: up, down, stop, fire, pause, start, menu, quit.

use std::io::BufRead;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use skystrike_app::game_loop::spawn_game_loop;
use skystrike_app::state::GameLoopCommand;
use skystrike_core::commands::PlayerCommand;
use skystrike_core::events::RenderEvent;
use skystrike_core::state::LevelSnapshot;
use skystrike_sim::engine::SimConfig;

fn main() -> Result<()> {
    env_logger::init();

    let latest_snapshot = Arc::new(Mutex::new(None));
    let mut last_health: Option<i32> = None;
    let sink = Box::new(move |snapshot: &LevelSnapshot| {
        for event in &snapshot.events {
            match event {
                // Health is re-announced every tick; only log changes.
                RenderEvent::HealthChanged { health } => {
                    if last_health != Some(*health) {
                        log::info!("health: {health}");
                        last_health = Some(*health);
                    }
                }
                other => log::debug!("render: {other:?}"),
            }
        }
        for alert in &snapshot.alerts {
            log::warn!("alert: {}", alert.message);
        }
        if let Some(outcome) = &snapshot.outcome {
            log::info!("outcome: {outcome:?}");
        }
    });

    let cmd_tx = spawn_game_loop(SimConfig::default(), latest_snapshot.clone(), sink);
    cmd_tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match line.trim() {
            "up" => PlayerCommand::MoveUp,
            "down" => PlayerCommand::MoveDown,
            "stop" => PlayerCommand::Stop,
            "fire" => PlayerCommand::Fire,
            "pause" => PlayerCommand::TogglePause,
            "start" => PlayerCommand::StartGame,
            "menu" => PlayerCommand::ReturnToMenu,
            "quit" => {
                cmd_tx.send(GameLoopCommand::Shutdown)?;
                break;
            }
            "" => continue,
            other => {
                log::warn!("unknown command: {other}");
                continue;
            }
        };
        cmd_tx.send(GameLoopCommand::Player(command))?;
    }

    Ok(())
}

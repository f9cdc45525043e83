//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands at
//! tick boundaries, runs all systems in a fixed order, and produces
//! `LevelSnapshot`s. Completely headless, enabling deterministic testing:
//! same seed + same commands = same simulation.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::components::{ActorId, Destructible, UserPlane};
use skystrike_core::constants::{USER_SHOT_X, USER_SHOT_Y_OFFSET};
use skystrike_core::enums::{AlertLevel, GamePhase, LevelId, LevelOutcome, MoveDirection};
use skystrike_core::error::LevelError;
use skystrike_core::events::{Alert, RenderEvent};
use skystrike_core::state::LevelSnapshot;
use skystrike_core::types::{Position, ScreenBounds, SimTime};

use crate::levels::{LevelFactory, LevelPlan, LevelRegistry};
use crate::progression;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Playfield dimensions from the host.
    pub bounds: ScreenBounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: ScreenBounds::default(),
        }
    }
}

/// State of the level currently in play.
pub struct LevelRuntime {
    pub plan: LevelPlan,
    /// The boss entity, once spawned and while it lives.
    pub boss_entity: Option<Entity>,
    /// Latched when the boss is destroyed; the boss is never re-spawned.
    pub boss_defeated: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    bounds: ScreenBounds,
    rng: ChaCha8Rng,
    factory: Box<dyn LevelFactory>,
    level: Option<LevelRuntime>,
    user_entity: Option<Entity>,
    next_actor_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    render_events: Vec<RenderEvent>,
    alerts: Vec<Alert>,
    outcome: Option<LevelOutcome>,
}

impl SimulationEngine {
    /// Create an engine with the standard level registry.
    pub fn new(config: SimConfig) -> Self {
        Self::with_factory(config, Box::new(LevelRegistry::standard()))
    }

    /// Create an engine with a host-supplied level factory.
    pub fn with_factory(config: SimConfig, factory: Box<dyn LevelFactory>) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            bounds: config.bounds,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            factory,
            level: None,
            user_entity: None,
            next_actor_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            render_events: Vec::new(),
            alerts: Vec::new(),
            outcome: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> LevelSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
        }

        let events = std::mem::take(&mut self.render_events);
        let alerts = std::mem::take(&mut self.alerts);
        let outcome = self.outcome.take();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.level.as_ref().map(|level| level.plan.id),
            outcome,
            self.user_entity,
            events,
            alerts,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable world access (for test setups).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn user_entity(&self) -> Option<Entity> {
        self.user_entity
    }

    #[cfg(test)]
    pub fn level(&self) -> Option<&LevelRuntime> {
        self.level.as_ref()
    }

    /// Start an arbitrary level directly (for tests that skip the campaign).
    #[cfg(test)]
    pub fn jump_to_level(&mut self, id: LevelId) {
        self.start_level(id).expect("level must exist in registry");
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    if let Err(err) = self.start_level(LevelId::One) {
                        log::error!("failed to start game: {err}");
                        self.push_alert(
                            AlertLevel::Critical,
                            format!("failed to load level: {err}"),
                        );
                    }
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.clear_level();
                self.phase = GamePhase::MainMenu;
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                _ => {}
            },
            PlayerCommand::MoveUp => self.set_user_direction(MoveDirection::Up),
            PlayerCommand::MoveDown => self.set_user_direction(MoveDirection::Down),
            PlayerCommand::Stop => self.set_user_direction(MoveDirection::Stopped),
            PlayerCommand::Fire => {
                // Appending the shot outside the system schedule is safe:
                // commands only drain on the simulation thread, between ticks.
                if self.phase != GamePhase::Active {
                    return;
                }
                let Some(user) = self.user_entity else {
                    return;
                };
                let origin = self.world.get::<&Position>(user).map(|pos| *pos).ok();
                if let Some(origin) = origin {
                    world_setup::spawn_user_shot(
                        &mut self.world,
                        &mut self.next_actor_id,
                        Position::new(USER_SHOT_X, origin.y + USER_SHOT_Y_OFFSET),
                        &mut self.render_events,
                    );
                }
            }
        }
    }

    fn set_user_direction(&mut self, direction: MoveDirection) {
        let Some(user) = self.user_entity else {
            return;
        };
        if let Ok(mut plane) = self.world.get::<&mut UserPlane>(user) {
            plane.direction = direction;
        }
    }

    /// Construct and enter a level, replacing any current one wholesale.
    /// Factory failure leaves the engine exactly as it was.
    fn start_level(&mut self, id: LevelId) -> Result<(), LevelError> {
        let plan = self.factory.create(id, self.bounds)?;

        self.clear_level();
        let user = world_setup::spawn_user_plane(
            &mut self.world,
            &mut self.next_actor_id,
            plan.player_health,
            &mut self.render_events,
        );
        self.user_entity = Some(user);
        self.level = Some(LevelRuntime {
            plan,
            boss_entity: None,
            boss_defeated: false,
        });
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.render_events.push(RenderEvent::LevelStarted { level: id });
        log::info!("level {id:?} started");
        Ok(())
    }

    /// Tear down the current level: the render layer is told to drop every
    /// sprite, then the world is emptied.
    fn clear_level(&mut self) {
        let mut removed = Vec::new();
        {
            let mut query = self.world.query::<&ActorId>();
            for (_entity, id) in query.iter() {
                removed.push(*id);
            }
        }
        for id in removed {
            self.render_events.push(RenderEvent::EntityRemoved { id });
        }
        self.world.clear();
        self.level = None;
        self.user_entity = None;
    }

    fn push_alert(&mut self, level: AlertLevel, message: String) {
        self.alerts.push(Alert {
            level,
            message,
            tick: self.time.tick,
        });
    }

    /// Run all systems in order. The ordering is the contract: spawn, move,
    /// fire, penetration, collisions, cleanup, scoring, termination.
    fn run_systems(&mut self) {
        let Some(level) = self.level.as_mut() else {
            return;
        };

        // 1. Spawn controller.
        systems::spawn::run(
            &mut self.world,
            &mut self.rng,
            level,
            self.bounds,
            &mut self.next_actor_id,
            &mut self.render_events,
        );
        // 2. Status timers + movement for every live entity.
        systems::movement::run(&mut self.world, &mut self.rng);
        // 3. Enemy and boss fire rolls.
        systems::enemy_fire::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_actor_id,
            &mut self.render_events,
        );
        // 4. Enemy count before combat resolution, for the kill delta.
        let enemies_before = systems::count_enemy_units(&self.world);
        // 5. Penetration: breach damages the user and compensates the tally.
        systems::penetration::run(&mut self.world, self.bounds, self.user_entity);
        // 6. Collisions across the four group pairs.
        systems::collision::run(&mut self.world);
        // Latch the boss kill before cleanup removes the entity.
        if let Some(boss) = level.boss_entity {
            let boss_dead = self
                .world
                .get::<&Destructible>(boss)
                .map(|d| d.destroyed)
                .unwrap_or(true);
            if boss_dead {
                level.boss_defeated = true;
                level.boss_entity = None;
            }
        }
        // 7. Cleanup: destroyed actors leave their lists this tick.
        systems::cleanup::run(
            &mut self.world,
            self.bounds,
            &mut self.despawn_buffer,
            &mut self.render_events,
        );
        // 8. Kills inferred from the enemy-list delta.
        let enemies_after = systems::count_enemy_units(&self.world);
        if let Some(user) = self.user_entity {
            if let Ok(mut plane) = self.world.get::<&mut UserPlane>(user) {
                for _ in enemies_after..enemies_before {
                    plane.increment_kill_count();
                }
            }
        }
        // 9. Heart display sync.
        if let Some(user) = self.user_entity {
            if let Ok(destructible) = self.world.get::<&Destructible>(user) {
                self.render_events.push(RenderEvent::HealthChanged {
                    health: destructible.health,
                });
            }
        }
        self.time.advance();
        // 10. Termination check. A transition here resets the clock, so the
        // advance above must come first.
        let outcome = progression::evaluate(&self.world, level, self.user_entity);
        if let Some(outcome) = outcome {
            self.finish_level(outcome);
        }
    }

    /// React to a terminal level state. Reported once per level lifetime.
    fn finish_level(&mut self, outcome: LevelOutcome) {
        self.outcome = Some(outcome);
        match outcome {
            LevelOutcome::Lost => {
                log::info!("user plane destroyed, game over");
                self.phase = GamePhase::Lost;
            }
            LevelOutcome::Won => {
                log::info!("final objective met, game won");
                self.phase = GamePhase::Won;
            }
            LevelOutcome::Advance { next } => {
                if let Err(err) = self.start_level(next) {
                    log::error!("level transition failed: {err}");
                    self.push_alert(
                        AlertLevel::Critical,
                        format!("failed to load level: {err}"),
                    );
                    self.clear_level();
                    self.phase = GamePhase::MainMenu;
                }
            }
        }
    }
}

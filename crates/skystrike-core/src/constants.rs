//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One logical tick every 50 ms.
pub const TICK_RATE: u32 = 20;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Default screen width in pixels, used when the host supplies no bounds.
pub const DEFAULT_SCREEN_WIDTH: f64 = 1300.0;

/// Default screen height in pixels.
pub const DEFAULT_SCREEN_HEIGHT: f64 = 750.0;

/// Upper Y bound for the user plane and the boss (top of the playfield).
pub const Y_UPPER_BOUND: f64 = 0.0;

/// Lower Y bound for the user plane and the boss.
pub const Y_LOWER_BOUND: f64 = 750.0;

/// Strip at the bottom of the screen kept clear of enemy spawns.
pub const ENEMY_SPAWN_MARGIN: f64 = 150.0;

/// How far past the screen edge a projectile may travel before it is culled.
pub const SHOT_CULL_MARGIN: f64 = 100.0;

// --- Combat ---

/// Ticks of damage immunity granted after a fighter plane is hit (1 second).
pub const INVINCIBILITY_TICKS: u32 = TICK_RATE;

// --- User plane ---

pub const USER_INITIAL_HEALTH: i32 = 5;

/// Vertical speed in pixels per tick while a move key is held.
pub const USER_VERTICAL_VELOCITY: f64 = 8.0;

pub const USER_INITIAL_X: f64 = 5.0;
pub const USER_INITIAL_Y: f64 = 350.0;
pub const USER_HITBOX_WIDTH: f64 = 90.0;
pub const USER_HITBOX_HEIGHT: f64 = 40.0;

/// User shots always start at this X column.
pub const USER_SHOT_X: f64 = 110.0;
pub const USER_SHOT_Y_OFFSET: f64 = 20.0;
pub const USER_SHOT_VELOCITY: f64 = 15.0;
pub const USER_SHOT_HITBOX_WIDTH: f64 = 30.0;
pub const USER_SHOT_HITBOX_HEIGHT: f64 = 7.0;

// --- Enemy planes ---

pub const ENEMY_INITIAL_HEALTH: i32 = 2;

/// Leftward drift in pixels per tick.
pub const ENEMY_HORIZONTAL_VELOCITY: f64 = -6.0;

/// Per-tick probability that an enemy plane fires.
pub const ENEMY_FIRE_PROBABILITY: f64 = 0.01;

pub const ENEMY_HITBOX_WIDTH: f64 = 120.0;
pub const ENEMY_HITBOX_HEIGHT: f64 = 50.0;

pub const ENEMY_SHOT_X_OFFSET: f64 = -100.0;
pub const ENEMY_SHOT_Y_OFFSET: f64 = 0.0;
pub const ENEMY_SHOT_VELOCITY: f64 = -10.0;
pub const ENEMY_SHOT_HITBOX_WIDTH: f64 = 25.0;
pub const ENEMY_SHOT_HITBOX_HEIGHT: f64 = 25.0;

// --- Boss ---

pub const BOSS_INITIAL_HEALTH: i32 = 2;
pub const BOSS_INITIAL_Y: f64 = 350.0;

/// Magnitude of one vertical step in the boss move pattern.
pub const BOSS_VERTICAL_VELOCITY: f64 = 8.0;

/// Per-tick probability that the boss fires.
pub const BOSS_FIRE_PROBABILITY: f64 = 0.04;

/// Per-tick probability that an idle shield activates.
pub const BOSS_SHIELD_PROBABILITY: f64 = 0.002;

/// Ticks the shield stays up once activated (5 seconds).
pub const SHIELD_MAX_ACTIVE_TICKS: u32 = 100;

/// Number of {+v, -v, 0} triples in the boss move pattern.
pub const MOVE_CYCLES_PER_PATTERN: usize = 5;

/// Ticks the pattern returns the same entry before it reshuffles.
pub const MAX_TICKS_WITH_SAME_MOVE: u32 = 10;

pub const BOSS_HITBOX_WIDTH: f64 = 200.0;
pub const BOSS_HITBOX_HEIGHT: f64 = 50.0;

pub const BOSS_SHOT_X_OFFSET: f64 = -50.0;
pub const BOSS_SHOT_Y_OFFSET: f64 = 75.0;
pub const BOSS_SHOT_VELOCITY: f64 = -15.0;
pub const BOSS_SHOT_HITBOX_WIDTH: f64 = 75.0;
pub const BOSS_SHOT_HITBOX_HEIGHT: f64 = 75.0;

// --- Spawning ---

/// Per-missing-slot probability of spawning one enemy per tick.
pub const ENEMY_SPAWN_PROBABILITY: f64 = 0.20;

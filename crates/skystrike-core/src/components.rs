//! ECS components for hecs entities.
//!
//! Components are plain data; the only logic that lives here is the
//! damage contract on `Destructible`, which every hit site goes through.
//! Boss state transitions live in `skystrike-boss-ai`, systems in
//! `skystrike-sim`.

use serde::{Deserialize, Serialize};

use crate::constants::INVINCIBILITY_TICKS;
use crate::enums::MoveDirection;

/// Sequential handle shared with the render layer. Stable for the
/// lifetime of the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Collision footprint, anchored at the entity's position (top-left).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

/// Destructible capability composed into fighter planes and projectiles.
///
/// Health never goes negative; `destroyed` is monotonic. Once destroyed,
/// further damage and movement have no effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Destructible {
    pub health: i32,
    pub destroyed: bool,
    /// Remaining ticks of the invincibility window; 0 = vulnerable.
    pub invincible_ticks: u32,
}

/// The player's plane: movement state and kill tally.
///
/// The tally may be decremented (penetration compensation) and has no
/// explicit floor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserPlane {
    pub direction: MoveDirection,
    pub kills: i32,
}

/// A regular enemy plane: fixed drift plus a per-tick fire roll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyWing {
    /// Per-tick probability of firing one shot.
    pub fire_probability: f64,
    /// X at which this plane entered the field; penetration is measured
    /// as displacement from here.
    pub spawn_x: f64,
}

/// Vertical move pattern driving the boss. Built once at spawn;
/// reshuffled by `skystrike-boss-ai` when the same-move streak expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovePattern {
    pub steps: Vec<f64>,
    pub index: usize,
    pub streak: u32,
}

/// Boss shield state, independent of the invincibility window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShieldState {
    pub shielded: bool,
    /// Ticks the shield has been up in the current activation.
    pub active_ticks: u32,
}

/// The boss plane: move pattern, shield, and firing odds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossPlane {
    pub movement: MovePattern,
    pub shield: ShieldState,
    pub fire_probability: f64,
    pub shield_probability: f64,
}

// --- Entity-group markers ---
// The four entity lists of a level, expressed as marker components so the
// collision resolver can pair them by group.

/// Friendly-unit group (the user plane).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserUnit;

/// Enemy-unit group (enemy planes and the boss).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyUnit;

/// User projectile group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserShot;

/// Enemy projectile group (enemy and boss shots).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot;

impl Destructible {
    pub fn new(health: i32) -> Self {
        Self {
            health,
            destroyed: false,
            invincible_ticks: 0,
        }
    }

    /// Apply one point of damage unless invincible or already destroyed.
    /// Reaching zero health destroys the entity; surviving a hit arms the
    /// invincibility window.
    pub fn take_damage(&mut self) {
        if self.destroyed || self.is_invincible() {
            return;
        }
        self.health -= 1;
        debug_assert!(self.health >= 0, "health must never go negative");
        if self.health <= 0 {
            self.destroy();
        } else {
            self.invincible_ticks = INVINCIBILITY_TICKS;
        }
    }

    /// Mark destroyed. Idempotent; never reverts.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Count down the invincibility window; called once per tick.
    pub fn tick_invincibility(&mut self) {
        if self.invincible_ticks > 0 {
            self.invincible_ticks -= 1;
        }
    }
}

impl Hitbox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl UserPlane {
    pub fn increment_kill_count(&mut self) {
        self.kills += 1;
    }

    pub fn decrement_kill_count(&mut self) {
        self.kills -= 1;
    }
}

//! Boss shield state machine.
//!
//! Two states: idle and shielded. Activation is a small per-tick
//! probability roll; once up, the shield stays for a fixed tick cap and
//! then drops, resetting its counter. While shielded all damage is
//! suppressed — independently of the invincibility window.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::ShieldState;
use skystrike_core::constants::SHIELD_MAX_ACTIVE_TICKS;

/// Advance the shield by one tick.
pub fn update_shield(shield: &mut ShieldState, rng: &mut ChaCha8Rng, activation_probability: f64) {
    if shield.shielded {
        shield.active_ticks += 1;
    } else if rng.gen_bool(activation_probability) {
        activate(shield);
    }
    if shield.shielded && shield.active_ticks == SHIELD_MAX_ACTIVE_TICKS {
        deactivate(shield);
    }
}

/// Raise the shield. The active-tick counter starts from its current value,
/// which is zero except when forced up mid-activation.
pub fn activate(shield: &mut ShieldState) {
    shield.shielded = true;
}

fn deactivate(shield: &mut ShieldState) {
    shield.shielded = false;
    shield.active_ticks = 0;
}

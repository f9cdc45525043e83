//! Boss vertical move pattern.
//!
//! The pattern is a fixed multiset of vertical steps — {+v, -v, 0} repeated
//! `MOVE_CYCLES_PER_PATTERN` times — shuffled at construction. The current
//! entry is replayed until the same-move streak expires, at which point the
//! pattern reshuffles and the index advances (wrapping at the end). This
//! yields pseudo-random but bounded vertical motion.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::MovePattern;
use skystrike_core::constants::{
    BOSS_VERTICAL_VELOCITY, MAX_TICKS_WITH_SAME_MOVE, MOVE_CYCLES_PER_PATTERN,
};

/// Build a freshly shuffled move pattern.
pub fn build_move_pattern(rng: &mut ChaCha8Rng) -> MovePattern {
    let mut steps = Vec::with_capacity(MOVE_CYCLES_PER_PATTERN * 3);
    for _ in 0..MOVE_CYCLES_PER_PATTERN {
        steps.push(BOSS_VERTICAL_VELOCITY);
        steps.push(-BOSS_VERTICAL_VELOCITY);
        steps.push(0.0);
    }
    steps.shuffle(rng);
    MovePattern {
        steps,
        index: 0,
        streak: 0,
    }
}

/// Return this tick's vertical step and advance the streak.
///
/// The entry at the current index is returned for `MAX_TICKS_WITH_SAME_MOVE`
/// consecutive calls; the call that completes the streak reshuffles the
/// pattern, resets the streak, and moves the index forward, wrapping to the
/// start when it runs off the end.
pub fn next_move(pattern: &mut MovePattern, rng: &mut ChaCha8Rng) -> f64 {
    let current = pattern.steps[pattern.index];
    pattern.streak += 1;
    if pattern.streak == MAX_TICKS_WITH_SAME_MOVE {
        pattern.steps.shuffle(rng);
        pattern.streak = 0;
        pattern.index += 1;
    }
    if pattern.index == pattern.steps.len() {
        pattern.index = 0;
    }
    current
}

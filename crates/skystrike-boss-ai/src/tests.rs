#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use skystrike_core::components::ShieldState;
    use skystrike_core::constants::{
        BOSS_SHIELD_PROBABILITY, BOSS_VERTICAL_VELOCITY, MAX_TICKS_WITH_SAME_MOVE,
        MOVE_CYCLES_PER_PATTERN, SHIELD_MAX_ACTIVE_TICKS,
    };

    use crate::movement::{build_move_pattern, next_move};
    use crate::shield::{activate, update_shield};

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    // ---- Move pattern ----

    #[test]
    fn test_pattern_composition() {
        let mut rng = rng(1);
        let pattern = build_move_pattern(&mut rng);
        assert_eq!(pattern.steps.len(), MOVE_CYCLES_PER_PATTERN * 3);

        let ups = pattern
            .steps
            .iter()
            .filter(|&&s| s == BOSS_VERTICAL_VELOCITY)
            .count();
        let downs = pattern
            .steps
            .iter()
            .filter(|&&s| s == -BOSS_VERTICAL_VELOCITY)
            .count();
        let zeros = pattern.steps.iter().filter(|&&s| s == 0.0).count();
        assert_eq!(ups, MOVE_CYCLES_PER_PATTERN);
        assert_eq!(downs, MOVE_CYCLES_PER_PATTERN);
        assert_eq!(zeros, MOVE_CYCLES_PER_PATTERN);
    }

    #[test]
    fn test_same_move_streak_then_advance() {
        let mut rng = rng(7);
        let mut pattern = build_move_pattern(&mut rng);
        let first = pattern.steps[0];

        // The same entry is returned for the whole streak.
        for _ in 0..MAX_TICKS_WITH_SAME_MOVE {
            assert_eq!(next_move(&mut pattern, &mut rng), first);
        }

        // The streak-completing call reshuffled and advanced the index.
        assert_eq!(pattern.streak, 0);
        assert_eq!(pattern.index, 1);
    }

    #[test]
    fn test_index_wraps_at_pattern_length() {
        let mut rng = rng(11);
        let mut pattern = build_move_pattern(&mut rng);
        let len = pattern.steps.len();

        // Force the index to the last slot, then complete one streak.
        pattern.index = len - 1;
        for _ in 0..MAX_TICKS_WITH_SAME_MOVE {
            next_move(&mut pattern, &mut rng);
        }
        assert_eq!(pattern.index, 0, "index must wrap to the start");
    }

    #[test]
    fn test_moves_are_always_pattern_entries() {
        let mut rng = rng(23);
        let mut pattern = build_move_pattern(&mut rng);
        for _ in 0..500 {
            let step = next_move(&mut pattern, &mut rng);
            assert!(
                step == BOSS_VERTICAL_VELOCITY || step == -BOSS_VERTICAL_VELOCITY || step == 0.0,
                "unexpected step {step}"
            );
        }
    }

    // ---- Shield ----

    #[test]
    fn test_shield_deactivates_after_exact_cap() {
        let mut rng = rng(3);
        let mut shield = ShieldState::default();
        activate(&mut shield);

        // Probability 0 so no re-activation roll can interfere.
        for i in 0..SHIELD_MAX_ACTIVE_TICKS {
            assert!(shield.shielded, "shield dropped early at tick {i}");
            update_shield(&mut shield, &mut rng, 0.0);
        }
        assert!(!shield.shielded);
        assert_eq!(shield.active_ticks, 0, "counter resets on deactivation");
    }

    #[test]
    fn test_shield_never_activates_at_zero_probability() {
        let mut rng = rng(5);
        let mut shield = ShieldState::default();
        for _ in 0..10_000 {
            update_shield(&mut shield, &mut rng, 0.0);
        }
        assert!(!shield.shielded);
    }

    #[test]
    fn test_shield_eventually_activates_at_nominal_probability() {
        let mut rng = rng(9);
        let mut shield = ShieldState::default();
        let mut activated = false;
        // 0.002/tick over 20k ticks activates with overwhelming probability.
        for _ in 0..20_000 {
            update_shield(&mut shield, &mut rng, BOSS_SHIELD_PROBABILITY);
            if shield.shielded {
                activated = true;
                break;
            }
        }
        assert!(activated, "shield never activated over 20k ticks");
    }
}

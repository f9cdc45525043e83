#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Destructible, UserPlane};
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::LevelError;
    use crate::events::{Alert, RenderEvent};
    use crate::state::LevelSnapshot;
    use crate::types::{Position, Rect, SimTime};

    /// Verify the tagged enums round-trip through serde_json.
    #[test]
    fn test_level_outcome_serde() {
        let variants = vec![
            LevelOutcome::Lost,
            LevelOutcome::Won,
            LevelOutcome::Advance {
                next: LevelId::Two,
            },
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: LevelOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Won,
            GamePhase::Lost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::MoveUp,
            PlayerCommand::MoveDown,
            PlayerCommand::Stop,
            PlayerCommand::Fire,
            PlayerCommand::TogglePause,
            PlayerCommand::StartGame,
            PlayerCommand::ReturnToMenu,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_render_event_serde() {
        let events = vec![
            RenderEvent::EntityAdded {
                id: crate::components::ActorId(7),
                kind: ActorKind::EnemyPlane,
                position: Position::new(1300.0, 220.0),
            },
            RenderEvent::EntityRemoved {
                id: crate::components::ActorId(7),
            },
            RenderEvent::HealthChanged { health: 4 },
            RenderEvent::LevelStarted {
                level: LevelId::Three,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: RenderEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Critical,
            message: "failed to load level".to_string(),
            tick: 900,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.tick, back.tick);
    }

    #[test]
    fn test_level_error_display() {
        let err = LevelError::UnknownLevel(LevelId::Four);
        assert!(err.to_string().contains("Four"));
    }

    /// Verify an empty snapshot serializes and stays small.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = LevelSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LevelSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Geometry ----

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 40.0);
        let b = Rect::new(90.0, 30.0, 50.0, 50.0);
        let c = Rect::new(200.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_shared_edge_does_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 40.0);
        let b = Rect::new(100.0, 0.0, 50.0, 40.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        // TICK_RATE ticks = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Destructible contract ----

    #[test]
    fn test_take_damage_arms_invincibility() {
        let mut d = Destructible::new(2);
        d.take_damage();
        assert_eq!(d.health, 1);
        assert!(d.is_invincible());
        assert!(!d.destroyed);
    }

    #[test]
    fn test_invincibility_suppresses_damage() {
        let mut d = Destructible::new(2);
        d.take_damage();
        d.take_damage();
        assert_eq!(d.health, 1, "second hit inside the window must not land");
    }

    #[test]
    fn test_invincibility_lapses_after_exact_duration() {
        let mut d = Destructible::new(3);
        d.take_damage();
        for _ in 0..INVINCIBILITY_TICKS {
            assert!(d.is_invincible());
            d.tick_invincibility();
        }
        assert!(!d.is_invincible());
        d.take_damage();
        assert_eq!(d.health, 1);
    }

    #[test]
    fn test_health_reaches_zero_destroys_without_invincibility() {
        let mut d = Destructible::new(1);
        d.take_damage();
        assert_eq!(d.health, 0);
        assert!(d.destroyed);
        assert!(!d.is_invincible(), "a destroyed plane is not invincible");
    }

    #[test]
    fn test_destroyed_takes_no_further_damage() {
        let mut d = Destructible::new(1);
        d.take_damage();
        d.take_damage();
        d.take_damage();
        assert_eq!(d.health, 0, "health must never go negative");
        assert!(d.destroyed);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut d = Destructible::new(5);
        d.destroy();
        d.destroy();
        assert!(d.destroyed);
        assert_eq!(d.health, 5, "destroy() does not touch health");
    }

    // ---- Kill tally ----

    #[test]
    fn test_kill_count_increment_and_decrement() {
        let mut user = UserPlane::default();
        user.increment_kill_count();
        user.increment_kill_count();
        user.decrement_kill_count();
        assert_eq!(user.kills, 1);
    }

    #[test]
    fn test_kill_count_has_no_floor() {
        let mut user = UserPlane::default();
        user.decrement_kill_count();
        assert_eq!(user.kills, -1);
    }

    #[test]
    fn test_move_direction_multiplier() {
        assert_eq!(MoveDirection::Up.multiplier(), -1.0);
        assert_eq!(MoveDirection::Down.multiplier(), 1.0);
        assert_eq!(MoveDirection::Stopped.multiplier(), 0.0);
    }

    #[test]
    fn test_actor_kind_factions() {
        assert_eq!(ActorKind::UserPlane.faction(), Faction::Friendly);
        assert_eq!(ActorKind::UserShot.faction(), Faction::Friendly);
        assert_eq!(ActorKind::EnemyPlane.faction(), Faction::Enemy);
        assert_eq!(ActorKind::Boss.faction(), Faction::Enemy);
        assert_eq!(ActorKind::BossShot.faction(), Faction::Enemy);
    }

    #[test]
    fn test_actor_kind_shot_classification() {
        assert!(ActorKind::UserShot.is_shot());
        assert!(ActorKind::EnemyShot.is_shot());
        assert!(ActorKind::BossShot.is_shot());
        assert!(!ActorKind::UserPlane.is_shot());
        assert!(!ActorKind::Boss.is_shot());
    }
}

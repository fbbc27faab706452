#[cfg(test)]
mod tests {
    use crate::commands::{FrameInput, PlayerCommand};
    use crate::components::{Battleship, Drone, Part};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{display_score, GameStateSnapshot, ScoreView};
    use crate::types::{Position, Rect, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_rect_containment_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 6.0, 12.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_zero_area_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_part_rect_uses_grid_spacing() {
        let rect = Part::rect_at(Position::new(100.0, 50.0), glam::DVec2::new(2.0, 1.0));
        assert_eq!(rect.x, 100.0 + 2.0 * INTERNAL_SPACE);
        assert_eq!(rect.y, 50.0 + INTERNAL_SPACE);
        assert_eq!(rect.width, SIZE);
        assert_eq!(rect.height, SIZE);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Entity construction ----

    #[test]
    fn test_drone_core_protection_detected() {
        // Body part in the core's column, further forward (greater row).
        let parts = vec![
            Part::new(0, 0, Wing::Left),
            Part::new(2, 0, Wing::Core),
            Part::new(2, 2, Wing::Body),
            Part::new(4, 0, Wing::Right),
        ];
        let drone = Drone::new(0, 0, parts);
        assert!(drone.is_core_protected());
        assert_eq!(drone.status, DroneStatus::Alive);
    }

    #[test]
    fn test_drone_body_behind_core_does_not_protect() {
        let parts = vec![
            Part::new(2, 1, Wing::Core),
            Part::new(2, 0, Wing::Body),
            Part::new(3, 2, Wing::Body),
        ];
        let drone = Drone::new(0, 0, parts);
        assert!(!drone.is_core_protected());
    }

    #[test]
    fn test_drone_without_core_is_unprotected() {
        let drone = Drone::new(0, 0, vec![Part::new(0, 0, Wing::Body)]);
        assert!(!drone.is_core_protected());
    }

    #[test]
    fn test_drone_without_parts_starts_destroyed() {
        let drone = Drone::new(1, 2, Vec::new());
        assert_eq!(drone.status, DroneStatus::Destroyed);
        assert!(!drone.is_core_protected());
    }

    #[test]
    fn test_battleship_extents_fixed_at_creation() {
        let parts = vec![
            Part::new(0, 1, Wing::None),
            Part::new(2, 1, Wing::Core),
            Part::new(4, 3, Wing::None),
        ];
        let mut ship = Battleship::new(BattleshipVariant::Reflowing, parts);
        let width = ship.width();
        let height = ship.height();
        assert_eq!(width, 4.0 * INTERNAL_SPACE + SIZE);
        assert_eq!(height, 3.0 * INTERNAL_SPACE + SIZE);
        assert_eq!(ship.status, BattleshipStatus::Passive);

        ship.parts.pop();
        assert_eq!(ship.width(), width);
        assert_eq!(ship.height(), height);
        assert_eq!(ship.blueprint.len(), 3);
    }

    #[test]
    fn test_partless_battleship_is_defeated() {
        let ship = Battleship::new(BattleshipVariant::FixedShape, Vec::new());
        assert_eq!(ship.status, BattleshipStatus::Destroyed);
        assert!(ship.is_defeated());
        assert_eq!(ship.width(), 0.0);
    }

    // ---- Scores ----

    #[test]
    fn test_display_score_scaling() {
        assert_eq!(display_score(0, 1000), 0);
        assert_eq!(display_score(500, 1000), 4999);
        assert_eq!(display_score(1000, 1000), MAX_DISPLAY_SCORE);
        assert_eq!(display_score(2000, 1000), MAX_DISPLAY_SCORE);
        assert_eq!(display_score(50, 0), 0);
        assert_eq!(ScoreView::new(1000, 1000).display, MAX_DISPLAY_SCORE);
    }

    // ---- Inputs ----

    #[test]
    fn test_frame_input_axis_clamped() {
        assert_eq!(FrameInput::steer(5).axis(), 1);
        assert_eq!(FrameInput::steer(-3).axis(), -1);
        assert_eq!(FrameInput::idle().axis(), 0);
        assert!(FrameInput::fire().fire);
    }

    // ---- Serde ----

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Intro,
            GamePhase::Playing,
            GamePhase::LevelComplete,
            GamePhase::Win,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_projectile_owner_serde() {
        let variants = vec![
            ProjectileOwner::Player,
            ProjectileOwner::Battleship,
            ProjectileOwner::Drone { row: 2, col: 3 },
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ProjectileOwner = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_wing_serde_is_snake_case() {
        assert_eq!(serde_json::to_string(&Wing::Left).unwrap(), "\"left\"");
        assert_eq!(serde_json::to_string(&Wing::Core).unwrap(), "\"core\"");
        let back: Wing = serde_json::from_str("\"body\"").unwrap();
        assert_eq!(back, Wing::Body);
    }

    #[test]
    fn test_player_command_serde() {
        let json = r#"{"type":"BeginLevel","index":2}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, PlayerCommand::BeginLevel { index: 2 }));

        let json = serde_json::to_string(&PlayerCommand::ResetSession).unwrap();
        assert!(json.contains("ResetSession"));
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::DroneDestroyed {
            row: 1,
            col: 2,
            points: 120,
            perfect: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"DroneDestroyed\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Intro);
        assert!(back.drones.is_empty());
        assert!(back.battleship.is_none());
    }
}

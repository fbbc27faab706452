//! Headless input source: lines the ship up under a target and fires.
//!
//! The nearest drone row to the player is cleared first, aiming for cores
//! where one is still standing. With the fleet gone the autopilot hunts the
//! battleship.

use radiant_core::commands::FrameInput;
use radiant_core::constants::{INTERNAL_SPACE, SHIP_MOVE_SPEED, SIZE};
use radiant_core::enums::{BattleshipStatus, GamePhase, PartStatus, Wing};
use radiant_core::state::{GameStateSnapshot, PartView};
use radiant_core::types::Position;

/// Largest ship-to-target offset (pixels) at which a shot still lands on
/// the target part.
const FIRE_TOLERANCE: f64 = SIZE / 2.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    shots_requested: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames on which the autopilot pressed fire.
    pub fn shots_requested(&self) -> u64 {
        self.shots_requested
    }

    /// Choose the input for the next frame.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> FrameInput {
        if snapshot.phase != GamePhase::Playing {
            return FrameInput::idle();
        }
        let Some(target_x) = target_x(snapshot) else {
            return FrameInput::idle();
        };

        let ship_centre = snapshot.ship.position.x + snapshot.ship.width / 2.0;
        let diff = target_x - ship_centre;
        if diff.abs() <= FIRE_TOLERANCE {
            self.shots_requested += 1;
            return FrameInput::fire();
        }

        // Avoid overshooting by less than one step
        if diff.abs() < SHIP_MOVE_SPEED / 2.0 {
            return FrameInput::idle();
        }
        FrameInput::steer(if diff < 0.0 { -1 } else { 1 })
    }
}

/// Horizontal centre of the part the autopilot wants to hit.
fn target_x(snapshot: &GameStateSnapshot) -> Option<f64> {
    let drone = snapshot.drones.iter().max_by(|a, b| {
        a.position
            .y
            .total_cmp(&b.position.y)
            .then(b.position.x.total_cmp(&a.position.x))
    });
    if let Some(drone) = drone {
        return aim_at(drone.position, &drone.parts);
    }

    let battleship = snapshot.battleship.as_ref()?;
    if battleship.status == BattleshipStatus::Destroyed {
        return None;
    }
    aim_at(battleship.position, &battleship.parts)
}

fn aim_at(origin: Position, parts: &[PartView]) -> Option<f64> {
    let alive = |p: &&PartView| p.status == PartStatus::Alive;
    let part = parts
        .iter()
        .filter(alive)
        .find(|p| p.wing == Wing::Core)
        .or_else(|| parts.iter().find(alive))?;
    Some(origin.x + part.offset.x * INTERNAL_SPACE + SIZE / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use radiant_core::constants::SHIP_WIDTH;
    use radiant_core::state::{DroneView, ShipView};

    fn part(col: f64, row: f64, wing: Wing, status: PartStatus) -> PartView {
        PartView {
            offset: DVec2::new(col, row),
            wing,
            status,
        }
    }

    fn snapshot_with(ship_x: f64, drones: Vec<DroneView>) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Playing,
            ship: ShipView {
                position: Position::new(ship_x, 704.0),
                width: SHIP_WIDTH,
                height: 48.0,
            },
            drones,
            ..Default::default()
        }
    }

    fn drone(row: u32, col: u32, x: f64, y: f64, parts: Vec<PartView>) -> DroneView {
        DroneView {
            row,
            col,
            position: Position::new(x, y),
            parts,
        }
    }

    #[test]
    fn test_idle_outside_play() {
        let mut pilot = Autopilot::new();
        let mut snapshot = snapshot_with(370.0, Vec::new());
        snapshot.phase = GamePhase::Intro;
        assert_eq!(pilot.decide(&snapshot), FrameInput::idle());
        // Playing but nothing to shoot at
        snapshot.phase = GamePhase::Playing;
        assert_eq!(pilot.decide(&snapshot), FrameInput::idle());
    }

    #[test]
    fn test_steers_toward_lowest_drone_core() {
        let mut pilot = Autopilot::new();
        let core = part(2.0, 1.0, Wing::Core, PartStatus::Alive);
        let snapshot = snapshot_with(
            370.0,
            vec![
                drone(0, 0, 600.0, 100.0, vec![core]),
                drone(1, 0, 100.0, 168.0, vec![core]),
            ],
        );
        // Core centre of the lower drone is at 138, ship centre at 400
        assert_eq!(pilot.decide(&snapshot), FrameInput::steer(-1));
    }

    #[test]
    fn test_fires_when_aligned() {
        let mut pilot = Autopilot::new();
        let snapshot = snapshot_with(
            100.0,
            vec![drone(
                0,
                0,
                100.0,
                100.0,
                vec![
                    part(0.0, 0.0, Wing::Left, PartStatus::Alive),
                    part(1.0, 0.0, Wing::Core, PartStatus::Destroyed),
                    part(2.0, 0.0, Wing::Right, PartStatus::Alive),
                ],
            )],
        );
        // Dead core: falls back to the first alive part at 106, ship centre 130
        assert_eq!(pilot.decide(&snapshot), FrameInput::steer(-1));

        let aligned = snapshot_with(100.0 - 24.0, snapshot.drones.clone());
        assert_eq!(pilot.decide(&aligned), FrameInput::fire());
        assert_eq!(pilot.shots_requested(), 1);
    }
}

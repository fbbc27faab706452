//! Drone kill scoring.
//!
//! Applied once, at the moment a drone transitions to destroyed. Rewards a
//! clean core shot with the full value and degrades wing kills by wasted
//! hits.

use radiant_core::components::{Drone, Part};
use radiant_core::constants::{DRONE_DESTROY_BONUS, DRONE_PART_POINTS};
use radiant_core::enums::Wing;

/// Score awarded for a destroyed drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroneScore {
    pub points: u32,
    /// Core kill with the minimum number of hits.
    pub perfect: bool,
}

/// Full value of a drone: every part plus the destruction bonus.
pub fn max_drone_score(drone: &Drone) -> u32 {
    drone.parts.len() as u32 * DRONE_PART_POINTS + DRONE_DESTROY_BONUS
}

/// Hits needed for a perfect kill: one, or two when a body part shields the core.
pub fn min_hits_needed(drone: &Drone) -> u32 {
    if drone.is_core_protected() {
        2
    } else {
        1
    }
}

pub fn score_drone(drone: &Drone) -> DroneScore {
    if drone.parts.is_empty() {
        return DroneScore {
            points: 0,
            perfect: false,
        };
    }

    let core_destroyed = drone.parts.iter().any(|p| p.is_core() && !p.is_alive());
    if core_destroyed && drone.hit_count == min_hits_needed(drone) {
        return DroneScore {
            points: max_drone_score(drone),
            perfect: true,
        };
    }

    let destroyed = drone.parts.iter().filter(|p| !p.is_alive()).count() as u32;
    let base = destroyed * DRONE_PART_POINTS + DRONE_DESTROY_BONUS;

    let bonus = if wing_destroyed(&drone.parts, Wing::Left) && drone.hits_on_right_wing == 0 {
        alive_wing_points(&drone.parts, Wing::Right) / 2
    } else if wing_destroyed(&drone.parts, Wing::Right) && drone.hits_on_left_wing == 0 {
        alive_wing_points(&drone.parts, Wing::Left) / 2
    } else {
        0
    };

    let wasted = drone.hit_count.saturating_sub(min_hits_needed(drone));
    let penalty = wasted * DRONE_PART_POINTS * 2;

    DroneScore {
        points: (base + bonus).saturating_sub(penalty),
        perfect: false,
    }
}

/// True iff the wing has at least one part and none of them are alive.
pub fn wing_destroyed(parts: &[Part], wing: Wing) -> bool {
    let mut members = parts.iter().filter(|p| p.wing == wing).peekable();
    members.peek().is_some() && members.all(|p| !p.is_alive())
}

fn alive_wing_points(parts: &[Part], wing: Wing) -> u32 {
    parts
        .iter()
        .filter(|p| p.wing == wing && p.is_alive())
        .count() as u32
        * DRONE_PART_POINTS
}

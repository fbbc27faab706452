//! Formation system: sweeps the fleet sideways and bounces it at the margins.
//!
//! Only this system moves the formation origin. Drones never move on their
//! own; each frame they are re-placed at `origin + slot`.

use hecs::World;

use radiant_core::components::{Drone, FleetState};
use radiant_core::constants::{CANVAS_WIDTH, DRONE_WIDTH, SPACE};
use radiant_core::types::Position;

use crate::world_setup::slot_position;

/// Advance the formation one frame. A fleet with no alive drones stays put.
pub fn run(world: &mut World, fleet: &mut FleetState) {
    let any_alive = world.query::<&Drone>().iter().any(|(_, d)| d.is_alive());
    if !any_alive || fleet.dx == 0.0 {
        return;
    }

    fleet.origin.x += fleet.dx;
    snap(world, fleet);

    let (left, width) = bounds(world);
    if width > 0.0 && (left <= SPACE || left + width >= CANVAS_WIDTH - SPACE) {
        fleet.dx = -fleet.dx;
    }
}

/// Place every drone at its formation slot.
pub fn snap(world: &mut World, fleet: &FleetState) {
    for (_entity, (drone, pos)) in world.query_mut::<(&Drone, &mut Position)>() {
        *pos = slot_position(fleet, drone.row, drone.col);
    }
}

/// Horizontal extent of the alive fleet as `(left, width)`. An empty fleet
/// yields `(0.0, 0.0)`.
pub fn bounds(world: &World) -> (f64, f64) {
    let mut query = world.query::<(&Drone, &Position)>();
    let mut extent: Option<(f64, f64)> = None;
    for (_entity, (drone, pos)) in query.iter() {
        if !drone.is_alive() {
            continue;
        }
        let right = pos.x + DRONE_WIDTH;
        extent = Some(match extent {
            Some((l, r)) => (l.min(pos.x), r.max(right)),
            None => (pos.x, right),
        });
    }
    extent.map_or((0.0, 0.0), |(left, right)| (left, right - left))
}

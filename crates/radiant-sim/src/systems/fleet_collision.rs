//! Fleet collision system: resolves player shots against drone parts,
//! applies the destruction cascade, and scores kills.

use hecs::{Entity, World};

use radiant_core::components::{Drone, Part};
use radiant_core::constants::{DRONE_HEIGHT, DRONE_PART_POINTS, DRONE_WIDTH};
use radiant_core::enums::{Direction, DroneStatus, PartStatus, Wing};
use radiant_core::events::GameEvent;
use radiant_core::types::{Position, Rect};

use crate::scoring::{score_drone, wing_destroyed};
use crate::session::FrameLog;
use crate::systems::projectiles;

/// Run fleet collision. Each shot resolves against at most one part.
pub fn run(world: &mut World, log: &mut FrameLog, despawn_buffer: &mut Vec<Entity>) {
    let shots = projectiles::live_shots(world, Direction::Up);
    if shots.is_empty() {
        return;
    }
    despawn_buffer.clear();

    // Formation order: (row, col)
    let mut drones: Vec<(Entity, u32, u32)> = world
        .query::<&Drone>()
        .iter()
        .map(|(e, d)| (e, d.row, d.col))
        .collect();
    drones.sort_by_key(|&(_, row, col)| (row, col));

    for (shot, shot_rect) in &shots {
        for &(entity, _, _) in &drones {
            let Ok((drone, pos)) = world.query_one_mut::<(&mut Drone, &Position)>(entity) else {
                continue;
            };
            if resolve_hit(drone, *pos, shot_rect, log) {
                despawn_buffer.push(*shot);
                break;
            }
        }
    }

    projectiles::despawn_all(world, despawn_buffer);
}

/// Test one shot against one drone. Returns true if a part was destroyed.
fn resolve_hit(drone: &mut Drone, pos: Position, shot: &Rect, log: &mut FrameLog) -> bool {
    if !drone.is_alive() || !Rect::at(pos, DRONE_WIDTH, DRONE_HEIGHT).intersects(shot) {
        return false;
    }

    let hit = drone
        .parts
        .iter()
        .position(|part| part.is_alive() && Part::rect_at(pos, part.offset).intersects(shot));
    let Some(index) = hit else {
        return false;
    };

    drone.parts[index].status = PartStatus::Destroyed;
    let wing = drone.parts[index].wing;
    drone.hit_count += 1;
    match wing {
        Wing::Left => drone.hits_on_left_wing += 1,
        Wing::Right => drone.hits_on_right_wing += 1,
        _ => {}
    }

    let wing_gone = matches!(wing, Wing::Left | Wing::Right) && wing_destroyed(&drone.parts, wing);
    let nothing_left = !drone.parts.iter().any(Part::is_alive);

    if wing == Wing::Core || wing_gone || nothing_left {
        drone.status = DroneStatus::Destroyed;
        let score = score_drone(drone);
        log.award(score.points);
        log.emit(GameEvent::DroneDestroyed {
            row: drone.row,
            col: drone.col,
            points: score.points,
            perfect: score.perfect,
        });
        tracing::debug!(
            row = drone.row,
            col = drone.col,
            hits = drone.hit_count,
            points = score.points,
            perfect = score.perfect,
            "drone destroyed"
        );
    } else {
        log.award(DRONE_PART_POINTS);
        log.emit(GameEvent::DronePartDestroyed {
            row: drone.row,
            col: drone.col,
            wing,
            points: DRONE_PART_POINTS,
        });
    }
    true
}

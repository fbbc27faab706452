//! Battleship collision system: resolves player shots against the hull.
//!
//! Dispatches on the hull profile: a fixed-shape hull marks parts destroyed
//! in place, the reflowing boss removes the part and collapses its row.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use radiant_boss::profiles::get_profile;
use radiant_boss::reflow::reflow;
use radiant_core::components::{Battleship, Part};
use radiant_core::constants::{BATTLESHIP_DESTROY_BONUS, BATTLESHIP_PART_POINTS};
use radiant_core::enums::{BattleshipStatus, Direction, PartStatus};
use radiant_core::events::GameEvent;
use radiant_core::types::Position;

use crate::session::FrameLog;
use crate::systems::projectiles;

/// Run battleship collision. Consumed shots are despawned before returning.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    log: &mut FrameLog,
    despawn_buffer: &mut Vec<Entity>,
) {
    let shots = projectiles::live_shots(world, Direction::Up);
    if shots.is_empty() {
        return;
    }
    despawn_buffer.clear();

    for (_entity, (battleship, pos)) in world.query_mut::<(&mut Battleship, &Position)>() {
        if battleship.status == BattleshipStatus::Destroyed {
            continue;
        }
        let profile = get_profile(battleship.variant);

        for (shot, shot_rect) in &shots {
            let hit = battleship.parts.iter().position(|part| {
                part.is_alive()
                    && Part::rect_at(*pos, profile.hit_offset(part)).intersects(shot_rect)
            });
            let Some(index) = hit else {
                continue;
            };

            despawn_buffer.push(*shot);
            log.battleship_hit = true;

            if battleship.parts[index].is_core() {
                if profile.core_hit_marks_part {
                    battleship.parts[index].status = PartStatus::Destroyed;
                }
                battleship.status = BattleshipStatus::Destroyed;
                let points = BATTLESHIP_PART_POINTS + BATTLESHIP_DESTROY_BONUS;
                log.award(points);
                log.emit(GameEvent::BattleshipDestroyed { points });
                tracing::info!(variant = ?battleship.variant, "battleship destroyed");
                break;
            }

            log.award(BATTLESHIP_PART_POINTS);
            log.emit(GameEvent::BattleshipPartDestroyed {
                points: BATTLESHIP_PART_POINTS,
            });

            if profile.removes_destroyed_parts {
                let removed = battleship.parts.remove(index);
                if profile.reflows {
                    let outcome = reflow(&mut battleship.parts, removed.target_offset, rng);
                    tracing::debug!(
                        col = removed.target_offset.x,
                        row = removed.target_offset.y,
                        ?outcome,
                        "boss reflow"
                    );
                }
            } else {
                battleship.parts[index].status = PartStatus::Destroyed;
            }
        }
    }

    projectiles::despawn_all(world, despawn_buffer);
}

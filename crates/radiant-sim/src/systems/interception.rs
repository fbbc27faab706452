//! Interception system: a player shot and an enemy shot that touch cancel
//! each other. No score effect.

use hecs::{Entity, World};

use radiant_core::enums::Direction;
use radiant_core::events::GameEvent;

use crate::session::FrameLog;
use crate::systems::projectiles;

pub fn run(world: &mut World, log: &mut FrameLog, despawn_buffer: &mut Vec<Entity>) {
    let ups = projectiles::live_shots(world, Direction::Up);
    let downs = projectiles::live_shots(world, Direction::Down);
    despawn_buffer.clear();

    for (up, up_rect) in &ups {
        let hit = downs
            .iter()
            .find(|(down, down_rect)| !despawn_buffer.contains(down) && up_rect.intersects(down_rect));
        if let Some((down, _)) = hit {
            despawn_buffer.push(*up);
            despawn_buffer.push(*down);
            log.emit(GameEvent::ProjectilesIntercepted);
        }
    }

    projectiles::despawn_all(world, despawn_buffer);
}

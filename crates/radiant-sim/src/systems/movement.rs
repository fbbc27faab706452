//! Projectile motion system.
//!
//! Moves every shot along its direction, then drops shots that have left
//! the canvas.

use hecs::{Entity, World};

use radiant_core::components::Projectile;
use radiant_core::constants::{CANVAS_HEIGHT, DRONE_PROJECTILE_SPEED, SHIP_PROJECTILE_SPEED};
use radiant_core::enums::Direction;

use crate::systems::projectiles;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        let dy = match projectile.direction {
            Direction::Up => -SHIP_PROJECTILE_SPEED,
            Direction::Down => DRONE_PROJECTILE_SPEED,
        };
        projectile.rect.translate_y(dy);

        let rect = projectile.rect;
        if !(rect.bottom() > 0.0 && rect.top() < CANVAS_HEIGHT) {
            despawn_buffer.push(entity);
        }
    }

    projectiles::despawn_all(world, despawn_buffer);
}

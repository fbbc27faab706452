//! Ship collision system: the first enemy shot touching the player ship is
//! consumed and reported. Life accounting happens in the engine.

use hecs::World;

use radiant_core::components::Projectile;
use radiant_core::enums::Direction;

use crate::systems::player;

/// Returns true if the ship was hit this frame.
pub fn run(world: &mut World) -> bool {
    let Some(ship) = player::ship_rect(world) else {
        return false;
    };

    let hit = world
        .query::<&Projectile>()
        .iter()
        .find(|(_, p)| p.direction == Direction::Down && ship.intersects(&p.rect))
        .map(|(e, _)| e);

    match hit {
        Some(entity) => {
            let _ = world.despawn(entity);
            true
        }
        None => false,
    }
}

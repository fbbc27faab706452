//! Projectile spawning and lookup shared by the combat systems.

use hecs::{Entity, World};

use radiant_core::components::Projectile;
use radiant_core::constants::{PROJECTILE_HEIGHT, PROJECTILE_WIDTH};
use radiant_core::enums::{Direction, ProjectileOwner};
use radiant_core::types::{Position, Rect};

/// Spawn a shot centred horizontally on its owner. Upward shots start at the
/// owner's top edge, downward shots at its bottom edge.
pub fn spawn(
    world: &mut World,
    owner_pos: Position,
    owner_width: f64,
    owner_height: f64,
    direction: Direction,
    owner: ProjectileOwner,
) -> Entity {
    let x = owner_pos.x + owner_width / 2.0 - PROJECTILE_WIDTH / 2.0;
    let y = match direction {
        Direction::Up => owner_pos.y,
        Direction::Down => owner_pos.y + owner_height,
    };
    world.spawn((Projectile {
        rect: Rect::new(x, y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        direction,
        owner,
    },))
}

/// Every live shot travelling in `direction`, with its rectangle.
pub fn live_shots(world: &World, direction: Direction) -> Vec<(Entity, Rect)> {
    world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.direction == direction)
        .map(|(e, p)| (e, p.rect))
        .collect()
}

pub fn any_live(world: &World, pred: impl Fn(&Projectile) -> bool) -> bool {
    world.query::<&Projectile>().iter().any(|(_, p)| pred(p))
}

/// Remove projectiles, optionally only those travelling in `direction`.
pub fn clear(world: &mut World, direction: Option<Direction>, buffer: &mut Vec<Entity>) {
    buffer.clear();
    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if direction.map_or(true, |d| projectile.direction == d) {
            buffer.push(entity);
        }
    }
    despawn_all(world, buffer);
}

/// Despawn every entity in `buffer`, leaving it empty.
pub fn despawn_all(world: &mut World, buffer: &mut Vec<Entity>) {
    for entity in buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

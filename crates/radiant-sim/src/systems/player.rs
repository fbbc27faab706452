//! Player ship control: horizontal steering, single-shot firing, and the
//! end-of-frame edge clamp.

use hecs::World;

use radiant_core::commands::FrameInput;
use radiant_core::components::PlayerShip;
use radiant_core::constants::{CANVAS_WIDTH, SHIP_MOVE_SPEED, SPACE};
use radiant_core::enums::{Direction, ProjectileOwner};
use radiant_core::events::GameEvent;
use radiant_core::types::{Position, Rect};

use crate::session::FrameLog;
use crate::systems::projectiles;

/// Apply one frame of input. The shot leaves from where the ship stood before
/// this frame's move. Firing is ignored while a player shot is live.
pub fn run(world: &mut World, input: FrameInput, log: &mut FrameLog) {
    let ship = world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (hull, pos))| (*pos, *hull));
    let Some((pos, hull)) = ship else {
        return;
    };

    if input.fire && !projectiles::any_live(world, |p| p.direction == Direction::Up) {
        projectiles::spawn(
            world,
            pos,
            hull.width,
            hull.height,
            Direction::Up,
            ProjectileOwner::Player,
        );
        log.emit(GameEvent::ShotFired {
            owner: ProjectileOwner::Player,
        });
    }

    for (_entity, (_hull, pos)) in world.query_mut::<(&PlayerShip, &mut Position)>() {
        pos.x += input.axis() as f64 * SHIP_MOVE_SPEED;
    }
}

/// Keep the ship inside the canvas margins.
pub fn clamp(world: &mut World) {
    for (_entity, (hull, pos)) in world.query_mut::<(&PlayerShip, &mut Position)>() {
        pos.x = pos.x.clamp(SPACE / 2.0, CANVAS_WIDTH - hull.width - SPACE / 2.0);
    }
}

/// Move the ship back to its starting column.
pub fn recentre(world: &mut World, x: f64) {
    for (_entity, (_hull, pos)) in world.query_mut::<(&PlayerShip, &mut Position)>() {
        pos.x = x;
    }
}

/// The ship's hit box, if a ship exists.
pub fn ship_rect(world: &World) -> Option<Rect> {
    world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (hull, pos))| Rect::at(*pos, hull.width, hull.height))
}

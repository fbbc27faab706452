//! Battleship motion: tracks the fleet while passive, drifts on its own
//! velocity while active, and wraps around the horizontal edges.

use hecs::World;

use radiant_boss::activation::{passive_anchor, wrap_horizontal};
use radiant_core::components::Battleship;
use radiant_core::enums::BattleshipStatus;
use radiant_core::types::Position;

use crate::systems::formation;

/// Position the battleship for this frame. A passive hull over an empty
/// fleet falls through to its own (zero) velocity.
pub fn run(world: &mut World) {
    let (fleet_left, fleet_width) = formation::bounds(world);

    for (_entity, (battleship, pos)) in world.query_mut::<(&Battleship, &mut Position)>() {
        match battleship.status {
            BattleshipStatus::Destroyed => {}
            BattleshipStatus::Passive => {
                match passive_anchor(fleet_left, fleet_width, battleship.width()) {
                    Some(x) => pos.x = x,
                    None => pos.x += battleship.dx,
                }
            }
            BattleshipStatus::Active => pos.x += battleship.dx,
        }
    }
}

/// Wrap an active battleship that has fully left the canvas.
pub fn wrap(world: &mut World) {
    for (_entity, (battleship, pos)) in world.query_mut::<(&Battleship, &mut Position)>() {
        if battleship.status == BattleshipStatus::Active {
            pos.x = wrap_horizontal(pos.x, battleship.width());
        }
    }
}

//! Boss tween system: eases reflowed parts toward their new slots.

use hecs::World;

use radiant_boss::profiles::get_profile;
use radiant_boss::reflow::tween;
use radiant_core::components::Battleship;
use radiant_core::constants::BOSS_TWEEN_SPEED;

pub fn run(world: &mut World) {
    for (_entity, battleship) in world.query_mut::<&mut Battleship>() {
        if get_profile(battleship.variant).tweens {
            tween(&mut battleship.parts, BOSS_TWEEN_SPEED);
        }
    }
}

//! Enemy fire system.
//!
//! The rearmost alive drone of each column may fire, at most one live shot
//! per drone. An active battleship fires without a rate limit. Rolls are
//! drawn in `(row, col)` order, then the battleship, so a fixed seed yields
//! a fixed volley sequence.

use std::collections::BTreeMap;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use radiant_core::components::{Battleship, Drone};
use radiant_core::constants::{
    BATTLESHIP_FIRE_CHANCE, DRONE_FIRE_CHANCE, DRONE_HEIGHT, DRONE_WIDTH,
};
use radiant_core::enums::{BattleshipStatus, Direction, ProjectileOwner};
use radiant_core::events::GameEvent;
use radiant_core::types::Position;

use crate::session::FrameLog;
use crate::systems::projectiles;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, log: &mut FrameLog) {
    let mut alive: Vec<(u32, u32, Position)> = world
        .query::<(&Drone, &Position)>()
        .iter()
        .filter(|(_, (d, _))| d.is_alive())
        .map(|(_, (d, pos))| (d.row, d.col, *pos))
        .collect();
    alive.sort_by_key(|&(row, col, _)| (row, col));

    let mut rearmost: BTreeMap<u32, u32> = BTreeMap::new();
    for &(row, col, _) in &alive {
        let entry = rearmost.entry(col).or_insert(row);
        *entry = (*entry).max(row);
    }

    for (row, col, pos) in alive {
        if rearmost.get(&col) != Some(&row) || !rng.gen_bool(DRONE_FIRE_CHANCE) {
            continue;
        }
        let owner = ProjectileOwner::Drone { row, col };
        if projectiles::any_live(world, |p| p.owner == owner) {
            continue;
        }
        projectiles::spawn(world, pos, DRONE_WIDTH, DRONE_HEIGHT, Direction::Down, owner);
        log.emit(GameEvent::ShotFired { owner });
    }

    let gunner = world
        .query::<(&Battleship, &Position)>()
        .iter()
        .find(|(_, (b, _))| b.status == BattleshipStatus::Active)
        .map(|(_, (b, pos))| (*pos, b.width(), b.height()));

    if let Some((pos, width, height)) = gunner {
        if rng.gen_bool(BATTLESHIP_FIRE_CHANCE) {
            let owner = ProjectileOwner::Battleship;
            projectiles::spawn(world, pos, width, height, Direction::Down, owner);
            log.emit(GameEvent::ShotFired { owner });
        }
    }
}

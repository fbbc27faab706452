//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: never modifies the world.

use hecs::World;

use radiant_core::components::*;
use radiant_core::enums::*;
use radiant_core::state::*;
use radiant_core::types::{Position, SimTime};

use crate::session::Session;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &Session,
    level_number: u32,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        level_index: session.level_index,
        level_number,
        lives: session.lives,
        score: ScoreView::new(session.raw_score, session.total_attainable),
        ship: build_ship(world),
        drones: build_drones(world),
        battleship: build_battleship(world),
        projectiles: build_projectiles(world),
    }
}

fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (hull, pos))| ShipView {
            position: *pos,
            width: hull.width,
            height: hull.height,
        })
        .unwrap_or_default()
}

fn part_view(part: &Part) -> PartView {
    PartView {
        offset: part.visual_offset,
        wing: part.wing,
        status: part.status,
    }
}

/// Alive drones in formation order.
fn build_drones(world: &World) -> Vec<DroneView> {
    let mut drones: Vec<DroneView> = world
        .query::<(&Drone, &Position)>()
        .iter()
        .filter(|(_, (drone, _))| drone.is_alive())
        .map(|(_, (drone, pos))| DroneView {
            row: drone.row,
            col: drone.col,
            position: *pos,
            parts: drone.parts.iter().map(part_view).collect(),
        })
        .collect();
    drones.sort_by_key(|d| (d.row, d.col));
    drones
}

fn build_battleship(world: &World) -> Option<BattleshipView> {
    world
        .query::<(&Battleship, &Position)>()
        .iter()
        .next()
        .map(|(_, (battleship, pos))| BattleshipView {
            position: *pos,
            status: battleship.status,
            variant: battleship.variant,
            width: battleship.width(),
            height: battleship.height(),
            parts: battleship.parts.iter().map(part_view).collect(),
            blueprint: match battleship.variant {
                BattleshipVariant::Reflowing => battleship.blueprint.clone(),
                BattleshipVariant::FixedShape => Vec::new(),
            },
        })
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<&Projectile>()
        .iter()
        .map(|(_, p)| ProjectileView {
            rect: p.rect,
            direction: p.direction,
            owner: p.owner,
        })
        .collect()
}

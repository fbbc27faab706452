//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, the drone fleet, and the battleship for a
//! level from its templates.

use hecs::World;

use radiant_core::components::*;
use radiant_core::constants::*;
use radiant_core::enums::*;
use radiant_core::types::Position;

use crate::levels::{BattleshipTemplate, DroneShapeCatalog, LevelConfig, PartTemplate};

/// Per-level aggregates that live outside the ECS world.
#[derive(Debug, Clone, Copy)]
pub struct LevelSetup {
    pub fleet: FleetState,
    /// Formation column count, used by the activation rule.
    pub fleet_columns: u32,
}

/// Horizontal centre position for the player ship.
pub fn ship_start_x() -> f64 {
    (CANVAS_WIDTH - SHIP_WIDTH) / 2.0
}

/// Spawn the player's ship centred near the bottom of the canvas.
pub fn spawn_player_ship(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerShip {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
        },
        Position::new(ship_start_x(), SHIP_Y),
    ))
}

/// Spawn the fleet and battleship for `level`, with every drone already at
/// its formation slot.
pub fn setup_level(
    world: &mut World,
    level: &LevelConfig,
    catalog: &DroneShapeCatalog,
) -> LevelSetup {
    let battleship = create_battleship(level);
    let hull_width = battleship.width();
    let hull_height = battleship.height();
    world.spawn((
        battleship,
        Position::new((CANVAS_WIDTH - hull_width) / 2.0, BATTLESHIP_Y),
    ));

    let fleet_columns = level.fleet.columns();
    let fleet_width = fleet_columns as f64 * (DRONE_WIDTH + FLEET_SPACING) - FLEET_SPACING;
    let fleet = FleetState {
        origin: Position::new(
            (CANVAS_WIDTH - fleet_width) / 2.0,
            BATTLESHIP_Y + hull_height + BATTLESHIP_FLEET_GAP,
        ),
        dx: -level.fleet_speed,
    };

    for drone in create_fleet(level, catalog) {
        let position = slot_position(&fleet, drone.row, drone.col);
        world.spawn((drone, position));
    }

    tracing::debug!(
        level = level.level_number,
        fleet_columns,
        fleet_x = fleet.origin.x,
        fleet_y = fleet.origin.y,
        "level entities spawned"
    );

    LevelSetup {
        fleet,
        fleet_columns,
    }
}

/// Screen position of formation slot `(row, col)`.
pub fn slot_position(fleet: &FleetState, row: u32, col: u32) -> Position {
    Position::new(
        fleet.origin.x + col as f64 * (DRONE_WIDTH + FLEET_SPACING),
        fleet.origin.y + row as f64 * (DRONE_HEIGHT + FLEET_SPACING),
    )
}

/// Build the drones for a level. Unknown shape keys are skipped with a warning.
pub fn create_fleet(level: &LevelConfig, catalog: &DroneShapeCatalog) -> Vec<Drone> {
    let mut drones = Vec::new();
    for (row, col, key) in level.fleet.slots() {
        let Some(shape) = catalog.get(key) else {
            tracing::warn!(
                level = level.level_number,
                drone_type = key,
                row,
                col,
                "drone type not in shape catalog, skipping"
            );
            continue;
        };
        drones.push(Drone::new(row, col, build_parts(shape)));
    }
    drones
}

fn build_parts(shape: &[PartTemplate]) -> Vec<Part> {
    shape
        .iter()
        .map(|t| Part::new(t.offset[0], t.offset[1], t.wing))
        .collect()
}

/// Build the battleship for a level. A template without a matching core
/// gets its first part promoted to core, with a warning.
pub fn create_battleship(level: &LevelConfig) -> Battleship {
    let template: &BattleshipTemplate = &level.battleship;
    let mut parts: Vec<Part> = template
        .offsets
        .iter()
        .map(|&[col, row]| {
            let wing = if template.core == Some([col, row]) {
                Wing::Core
            } else {
                Wing::None
            };
            Part::new(col, row, wing)
        })
        .collect();

    if !parts.is_empty() && !parts.iter().any(Part::is_core) {
        tracing::warn!(
            level = level.level_number,
            "battleship has no core part, assigning the first part as core"
        );
        parts[0].wing = Wing::Core;
    }

    Battleship::new(template.variant, parts)
}

/// Sum of every point the level table can award: each drone's full value
/// and each battleship's parts plus destruction bonus. Empty entities count
/// for nothing.
pub fn total_attainable_score(levels: &[LevelConfig], catalog: &DroneShapeCatalog) -> u32 {
    levels
        .iter()
        .map(|level| {
            let drones: u32 = level
                .fleet
                .slots()
                .iter()
                .filter_map(|(_, _, key)| catalog.get(*key))
                .filter(|shape| !shape.is_empty())
                .map(|shape| shape.len() as u32 * DRONE_PART_POINTS + DRONE_DESTROY_BONUS)
                .sum();
            let hull = level.battleship.offsets.len() as u32;
            let battleship = if hull > 0 {
                hull * BATTLESHIP_PART_POINTS + BATTLESHIP_DESTROY_BONUS
            } else {
                0
            };
            drones + battleship
        })
        .sum()
}

/// Despawn everything belonging to the current level: drones, the
/// battleship, and all projectiles. The player ship survives.
pub fn clear_level(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Drone>().into_iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query_mut::<&Battleship>().into_iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query_mut::<&Projectile>().into_iter().map(|(e, _)| e));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

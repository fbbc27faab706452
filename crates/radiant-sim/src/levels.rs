//! Level definitions: drone shape catalog and the per-level layout tables.
//!
//! Each level names a fleet layout, a fleet speed, and a battleship
//! template. Tables are plain serde data so a host can ship its own as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use radiant_core::constants::{FLEET_MOVE_SPEED, NUM_COLS, NUM_ROWS};
use radiant_core::enums::{BattleshipVariant, Wing};

use crate::error::SimError;

/// Drone shapes keyed by type name.
pub type DroneShapeCatalog = BTreeMap<String, Vec<PartTemplate>>;

/// One part of a shape: grid offset `[col, row]` and its wing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartTemplate {
    pub offset: [i32; 2],
    #[serde(default)]
    pub wing: Wing,
}

impl PartTemplate {
    pub const fn new(col: i32, row: i32, wing: Wing) -> Self {
        Self {
            offset: [col, row],
            wing,
        }
    }
}

/// How a level's drones are arranged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FleetLayout {
    /// `rows × columns` copies of one shape.
    Grid {
        rows: u32,
        columns: u32,
        shape: String,
    },
    /// Explicit shape key per slot, front row first.
    Rows { rows: Vec<Vec<String>> },
}

impl FleetLayout {
    /// Number of formation columns (the widest row).
    pub fn columns(&self) -> u32 {
        match self {
            FleetLayout::Grid { columns, .. } => *columns,
            FleetLayout::Rows { rows } => rows.iter().map(Vec::len).max().unwrap_or(0) as u32,
        }
    }

    /// Every slot as `(row, col, shape key)`.
    pub fn slots(&self) -> Vec<(u32, u32, &str)> {
        match self {
            FleetLayout::Grid {
                rows,
                columns,
                shape,
            } => (0..*rows)
                .flat_map(|row| (0..*columns).map(move |col| (row, col, shape.as_str())))
                .collect(),
            FleetLayout::Rows { rows } => rows
                .iter()
                .enumerate()
                .flat_map(|(row, keys)| {
                    keys.iter()
                        .enumerate()
                        .map(move |(col, key)| (row as u32, col as u32, key.as_str()))
                })
                .collect(),
        }
    }
}

/// Battleship shape. An empty `offsets` list means the level has no battleship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleshipTemplate {
    #[serde(default)]
    pub variant: BattleshipVariant,
    pub offsets: Vec<[i32; 2]>,
    /// Offset of the core part. Falls back to the first part if absent from `offsets`.
    #[serde(default)]
    pub core: Option<[i32; 2]>,
}

impl BattleshipTemplate {
    /// The 11-part hull used when a level does not override it.
    #[rustfmt::skip]
    pub fn standard() -> Self {
        Self {
            variant: BattleshipVariant::FixedShape,
            offsets: vec![
                [0, 1], [0, 2], [0, 3],
                [1, 3],
                [2, 1], [2, 2], [2, 3],
                [3, 3],
                [4, 1], [4, 2], [4, 3],
            ],
            core: Some([2, 1]),
        }
    }

    pub fn none() -> Self {
        Self {
            variant: BattleshipVariant::FixedShape,
            offsets: Vec::new(),
            core: None,
        }
    }
}

impl Default for BattleshipTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything needed to build one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level_number: u32,
    /// Fleet speed magnitude (pixels per frame).
    pub fleet_speed: f64,
    pub fleet: FleetLayout,
    #[serde(default)]
    pub battleship: BattleshipTemplate,
}

/// A complete level table as loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelTable {
    #[serde(default = "default_drone_shapes")]
    pub drone_shapes: DroneShapeCatalog,
    pub levels: Vec<LevelConfig>,
}

/// Parse a level table from JSON. The drone catalog defaults to the shipped one.
pub fn from_json(json: &str) -> Result<LevelTable, SimError> {
    let table: LevelTable =
        serde_json::from_str(json).map_err(|e| SimError::InvalidLevelTable {
            reason: e.to_string(),
        })?;
    if table.levels.is_empty() {
        return Err(SimError::NoLevels);
    }
    Ok(table)
}

/// The shipped drone shapes.
pub fn default_drone_shapes() -> DroneShapeCatalog {
    use Wing::*;

    let mut shapes = BTreeMap::new();
    shapes.insert(
        "one".to_string(),
        vec![
            PartTemplate::new(0, 0, Left),
            PartTemplate::new(0, 1, Left),
            PartTemplate::new(0, 2, Left),
            PartTemplate::new(2, 1, Core),
            PartTemplate::new(4, 0, Right),
            PartTemplate::new(4, 1, Right),
            PartTemplate::new(4, 2, Right),
        ],
    );
    shapes.insert(
        "two".to_string(),
        vec![
            PartTemplate::new(0, 0, Left),
            PartTemplate::new(0, 1, Left),
            PartTemplate::new(1, 2, Left),
            PartTemplate::new(2, 0, Core),
            PartTemplate::new(3, 2, Right),
            PartTemplate::new(4, 0, Right),
            PartTemplate::new(4, 1, Right),
        ],
    );
    // Body part at (2,2) shields the core
    shapes.insert(
        "three".to_string(),
        vec![
            PartTemplate::new(0, 0, Left),
            PartTemplate::new(0, 1, Left),
            PartTemplate::new(0, 2, Left),
            PartTemplate::new(1, 2, Left),
            PartTemplate::new(2, 0, Core),
            PartTemplate::new(2, 2, Body),
            PartTemplate::new(3, 2, Right),
            PartTemplate::new(4, 0, Right),
            PartTemplate::new(4, 1, Right),
            PartTemplate::new(4, 2, Right),
        ],
    );
    shapes
}

/// The four shipped levels.
pub fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig {
            level_number: 1,
            fleet_speed: FLEET_MOVE_SPEED,
            fleet: grid("one"),
            battleship: BattleshipTemplate::standard(),
        },
        LevelConfig {
            level_number: 2,
            fleet_speed: FLEET_MOVE_SPEED * 1.5,
            fleet: grid("two"),
            battleship: BattleshipTemplate::standard(),
        },
        LevelConfig {
            level_number: 3,
            fleet_speed: FLEET_MOVE_SPEED * 2.0,
            fleet: grid("three"),
            battleship: BattleshipTemplate {
                variant: BattleshipVariant::FixedShape,
                offsets: vec![
                    [0, 1], [0, 2], [0, 3],
                    [1, 2], [1, 3],
                    [2, 1], [2, 2], [2, 3],
                    [3, 2], [3, 3],
                    [4, 1], [4, 2], [4, 3],
                ],
                core: Some([2, 1]),
            },
        },
        LevelConfig {
            level_number: 4,
            fleet_speed: FLEET_MOVE_SPEED,
            fleet: FleetLayout::Rows {
                rows: ["three", "two", "one"]
                    .iter()
                    .map(|key| vec![key.to_string(); NUM_COLS as usize])
                    .collect(),
            },
            battleship: boss_template(),
        },
    ]
}

fn grid(shape: &str) -> FleetLayout {
    FleetLayout::Grid {
        rows: NUM_ROWS,
        columns: NUM_COLS,
        shape: shape.to_string(),
    }
}

/// The reflowing boss: two seven-column wings around a spine in column 7,
/// with the bridge and core above.
#[rustfmt::skip]
fn boss_template() -> BattleshipTemplate {
    let offsets = vec![
        // right wing
        [8, 5], [9, 5], [10, 5], [11, 5], [12, 5], [13, 5], [14, 5],
        [8, 6], [9, 6], [10, 6], [11, 6], [12, 6], [13, 6], [14, 6],
        [8, 7], [9, 7], [10, 7], [11, 7], [12, 7], [14, 7],
        [8, 8], [10, 8], [12, 8], [14, 8],
        [8, 9],
        // left wing
        [0, 5], [1, 5], [2, 5], [3, 5], [4, 5], [5, 5], [6, 5],
        [0, 6], [1, 6], [2, 6], [3, 6], [4, 6], [5, 6], [6, 6],
        [0, 7], [2, 7], [3, 7], [4, 7], [5, 7], [6, 7],
        [0, 8], [2, 8], [4, 8], [6, 8],
        [6, 9],
        // spine
        [7, 5], [7, 6], [7, 7], [7, 8], [7, 9], [7, 10],
        // bridge
        [5, 1], [5, 2], [5, 3],
        [6, 2], [6, 3],
        [7, 2], [7, 3],
        [8, 2], [8, 3],
        [9, 1], [9, 2], [9, 3],
        // core
        [7, 1],
    ];
    BattleshipTemplate {
        variant: BattleshipVariant::Reflowing,
        offsets,
        core: Some([7, 1]),
    }
}

//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Canvas ---

/// Playfield width in pixels.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const CANVAS_HEIGHT: f64 = 800.0;

// --- General geometry ---

/// Edge length of one square part.
pub const SIZE: f64 = 12.0;

/// Gap between adjacent parts.
pub const DIVIDER: f64 = SIZE / 3.0;

/// Distance between the origins of two adjacent parts (one grid unit).
pub const INTERNAL_SPACE: f64 = SIZE + DIVIDER;

/// Margin used for the formation bounce test and ship clamping.
pub const SPACE: f64 = 2.0 * SIZE;

/// Default number of drone columns in a grid fleet.
pub const NUM_COLS: u32 = 4;

/// Default number of drone rows in a grid fleet.
pub const NUM_ROWS: u32 = 3;

/// Lives at session start. The game ends on the hit after the last life.
pub const PLAYER_LIVES: u32 = 2;

// --- Ship ---

pub const SHIP_WIDTH: f64 = 5.0 * SIZE;
pub const SHIP_HEIGHT: f64 = 4.0 * SIZE;

/// Ship top edge (fixed row near the bottom of the canvas).
pub const SHIP_Y: f64 = CANVAS_HEIGHT - 4.0 * SIZE - SHIP_HEIGHT;

/// Horizontal pixels per frame at full axis deflection.
pub const SHIP_MOVE_SPEED: f64 = 5.0;

/// Upward projectile speed (pixels per frame).
pub const SHIP_PROJECTILE_SPEED: f64 = 10.0;

// --- Projectiles ---

pub const PROJECTILE_WIDTH: f64 = SIZE / 2.0;
pub const PROJECTILE_HEIGHT: f64 = SIZE;

// --- Drone ---

/// Drone bounding box: 5 part columns wide, 3 part rows tall.
pub const DRONE_WIDTH: f64 = 5.0 * SIZE + 4.0 * DIVIDER;
pub const DRONE_HEIGHT: f64 = 3.0 * SIZE + 2.0 * DIVIDER;

/// Per-frame chance that a frontline drone fires.
pub const DRONE_FIRE_CHANCE: f64 = 0.01;

/// Downward projectile speed (pixels per frame).
pub const DRONE_PROJECTILE_SPEED: f64 = 4.0;

// --- Battleship ---

/// Active battleship speed relative to the fleet speed it inherits.
pub const BATTLESHIP_ACTIVE_SPEED_MULTIPLIER: f64 = 1.4;

/// Per-frame chance that an active battleship fires.
pub const BATTLESHIP_FIRE_CHANCE: f64 = 0.025;

/// Battleship top edge at level start.
pub const BATTLESHIP_Y: f64 = SIZE;

// --- Fleet ---

/// Gap between drones in the formation.
pub const FLEET_SPACING: f64 = SPACE;

/// Base fleet speed (pixels per frame).
pub const FLEET_MOVE_SPEED: f64 = 1.0;

/// Vertical gap between the battleship and the first drone row.
pub const BATTLESHIP_FLEET_GAP: f64 = 2.0 * SIZE;

// --- Boss reflow ---

/// Columns `[0, 7)` form the boss's left wing.
pub const BOSS_LEFT_WING_END: i32 = 7;

/// The boss's middle (spine) column.
pub const BOSS_MIDDLE_COLUMN: i32 = 7;

/// Columns `[8, 15)` form the boss's right wing.
pub const BOSS_RIGHT_WING_START: i32 = 8;
pub const BOSS_RIGHT_WING_END: i32 = 15;

/// Row comparison tolerance for reflow (grid units).
pub const BOSS_ROW_TOLERANCE: f64 = 0.1;

/// Offsets closer than this are considered settled.
pub const BOSS_SETTLE_EPSILON: f64 = 0.01;

/// Tween speed of reflowing parts (grid units per frame).
pub const BOSS_TWEEN_SPEED: f64 = FLEET_MOVE_SPEED * 2.0 / INTERNAL_SPACE;

// --- Scoring ---

/// Upper bound of the normalised score shown to the player.
pub const MAX_DISPLAY_SCORE: u32 = 9999;

pub const DRONE_PART_POINTS: u32 = 10;
pub const DRONE_DESTROY_BONUS: u32 = 50;
pub const BATTLESHIP_PART_POINTS: u32 = 25;
pub const BATTLESHIP_DESTROY_BONUS: u32 = 500;

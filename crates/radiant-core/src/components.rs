//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems; the only methods
//! here are constructors that establish creation-time invariants and
//! read-only accessors.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{INTERNAL_SPACE, SIZE};
use crate::enums::*;
use crate::types::{Position, Rect};

/// One square building block of a drone or battleship.
///
/// Offsets are in grid units relative to the owner's origin. For drones and
/// fixed-shape battleships all three offsets stay equal. For the reflowing
/// boss, `target_offset` is the logical slot assigned by reflow,
/// `visual_offset` is the tweened render slot, and `offset` catches up with
/// the target only once the tween arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub offset: DVec2,
    pub target_offset: DVec2,
    pub visual_offset: DVec2,
    pub wing: Wing,
    pub status: PartStatus,
}

impl Part {
    pub fn new(col: i32, row: i32, wing: Wing) -> Self {
        let offset = DVec2::new(col as f64, row as f64);
        Self {
            offset,
            target_offset: offset,
            visual_offset: offset,
            wing,
            status: PartStatus::Alive,
        }
    }

    pub fn is_core(&self) -> bool {
        self.wing == Wing::Core
    }

    pub fn is_alive(&self) -> bool {
        self.status == PartStatus::Alive
    }

    /// Screen rectangle of this part drawn at `grid_offset` from `origin`.
    pub fn rect_at(origin: Position, grid_offset: DVec2) -> Rect {
        Rect::new(
            origin.x + grid_offset.x * INTERNAL_SPACE,
            origin.y + grid_offset.y * INTERNAL_SPACE,
            SIZE,
            SIZE,
        )
    }
}

/// A composite enemy occupying one formation slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drone {
    /// Formation row (0 = nearest the battleship).
    pub row: u32,
    /// Formation column.
    pub col: u32,
    pub status: DroneStatus,
    pub parts: Vec<Part>,
    /// Hits landed on any part of this drone.
    pub hit_count: u32,
    pub hits_on_left_wing: u32,
    pub hits_on_right_wing: u32,
    is_core_protected: bool,
}

impl Drone {
    /// Build a drone from its parts. A drone without parts starts destroyed.
    pub fn new(row: u32, col: u32, parts: Vec<Part>) -> Self {
        let is_core_protected = core_is_shielded(&parts);
        let status = if parts.is_empty() {
            DroneStatus::Destroyed
        } else {
            DroneStatus::Alive
        };
        Self {
            row,
            col,
            status,
            parts,
            hit_count: 0,
            hits_on_left_wing: 0,
            hits_on_right_wing: 0,
            is_core_protected,
        }
    }

    /// True iff a body part sits in the core's column, in front of it.
    /// Fixed at construction.
    pub fn is_core_protected(&self) -> bool {
        self.is_core_protected
    }

    pub fn is_alive(&self) -> bool {
        self.status == DroneStatus::Alive
    }
}

fn core_is_shielded(parts: &[Part]) -> bool {
    let Some(core) = parts.iter().find(|p| p.is_core()) else {
        return false;
    };
    parts.iter().any(|p| {
        p.wing == Wing::Body && p.offset.x == core.offset.x && p.offset.y > core.offset.y
    })
}

/// The multi-part capital ship above the fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battleship {
    pub status: BattleshipStatus,
    /// Horizontal velocity (pixels per frame). Only applied while active.
    pub dx: f64,
    pub variant: BattleshipVariant,
    pub parts: Vec<Part>,
    /// Shape offsets at spawn, kept for the static blueprint outline.
    pub blueprint: Vec<DVec2>,
    width: f64,
    height: f64,
}

impl Battleship {
    /// Build a battleship from its parts. Extents are measured once here and
    /// never follow later part removal. A part-less battleship starts destroyed.
    pub fn new(variant: BattleshipVariant, parts: Vec<Part>) -> Self {
        let (width, height, status) = if parts.is_empty() {
            (0.0, 0.0, BattleshipStatus::Destroyed)
        } else {
            let max_x = parts.iter().map(|p| p.offset.x).fold(0.0, f64::max);
            let max_y = parts.iter().map(|p| p.offset.y).fold(0.0, f64::max);
            (
                max_x * INTERNAL_SPACE + SIZE,
                max_y * INTERNAL_SPACE + SIZE,
                BattleshipStatus::Passive,
            )
        };
        let blueprint = parts.iter().map(|p| p.offset).collect();
        Self {
            status,
            dx: 0.0,
            variant,
            parts,
            blueprint,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Defeated: core destroyed, or nothing left alive to shoot.
    pub fn is_defeated(&self) -> bool {
        self.status == BattleshipStatus::Destroyed || !self.parts.iter().any(Part::is_alive)
    }
}

/// A live shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub direction: Direction,
    pub owner: ProjectileOwner,
}

/// Marks the player's ship entity. Position lives in its `Position` component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip {
    pub width: f64,
    pub height: f64,
}

/// Shared formation state for the current level. Drones derive their screen
/// position from it; it owns no entities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FleetState {
    /// Screen position of the (row 0, col 0) slot.
    pub origin: Position,
    /// Horizontal velocity (pixels per frame). Sign flips at the margins.
    pub dx: f64,
}

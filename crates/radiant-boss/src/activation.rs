//! Battleship activation state machine.
//!
//! Pure functions that compute status transitions for the battleship based
//! on the state of the fleet below it. No ECS dependency. Operates on
//! plain data.

use radiant_core::constants::*;
use radiant_core::enums::BattleshipStatus;

/// Input to the activation FSM for one frame.
pub struct BattleshipContext {
    pub status: BattleshipStatus,
    pub dx: f64,
    /// Alive drones in the whole fleet.
    pub fleet_alive: usize,
    /// Alive drones in the frontmost formation row (row 0).
    pub front_row_alive: usize,
    /// Column count of the level's formation.
    pub fleet_columns: u32,
    /// The battleship took a hit during this frame.
    pub hit_this_frame: bool,
    /// Current fleet velocity.
    pub fleet_dx: f64,
}

/// Output from the activation FSM.
pub struct ActivationUpdate {
    pub new_status: BattleshipStatus,
    pub new_dx: f64,
    pub status_changed: bool,
}

/// Evaluate the FSM for the battleship. Returns the updated status and velocity.
pub fn evaluate(ctx: &BattleshipContext) -> ActivationUpdate {
    let no_change = ActivationUpdate {
        new_status: ctx.status,
        new_dx: ctx.dx,
        status_changed: false,
    };

    match ctx.status {
        BattleshipStatus::Passive => evaluate_passive(ctx).unwrap_or(no_change),
        // Active and Destroyed never step back
        BattleshipStatus::Active | BattleshipStatus::Destroyed => no_change,
    }
}

fn evaluate_passive(ctx: &BattleshipContext) -> Option<ActivationUpdate> {
    // Whole fleet gone: take over at base speed
    if ctx.fleet_alive == 0 {
        return Some(activate(
            FLEET_MOVE_SPEED * BATTLESHIP_ACTIVE_SPEED_MULTIPLIER,
        ));
    }

    let front_row_broken = ctx.front_row_alive < ctx.fleet_columns as usize;
    if ctx.hit_this_frame || front_row_broken {
        // Inherit the fleet's current heading
        return Some(activate(ctx.fleet_dx * BATTLESHIP_ACTIVE_SPEED_MULTIPLIER));
    }

    None
}

fn activate(dx: f64) -> ActivationUpdate {
    ActivationUpdate {
        new_status: BattleshipStatus::Active,
        new_dx: dx,
        status_changed: true,
    }
}

/// Horizontal wraparound for an active battleship. Once the hull has fully
/// left one edge it reappears just outside the opposite edge.
pub fn wrap_horizontal(x: f64, width: f64) -> f64 {
    if x > CANVAS_WIDTH {
        -width
    } else if x + width < 0.0 {
        CANVAS_WIDTH
    } else {
        x
    }
}

/// Horizontal position of a passive battleship: centred over the fleet's
/// alive bounding interval. `None` when the fleet has no width to track.
pub fn passive_anchor(fleet_left: f64, fleet_width: f64, hull_width: f64) -> Option<f64> {
    if fleet_width > 0.0 {
        Some(fleet_left + fleet_width / 2.0 - hull_width / 2.0)
    } else {
        None
    }
}

//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or is passed in.

pub mod activation;
pub mod battleship_collision;
pub mod battleship_motion;
pub mod boss_tween;
pub mod enemy_fire;
pub mod fleet_collision;
pub mod formation;
pub mod interception;
pub mod movement;
pub mod player;
pub mod projectiles;
pub mod ship_collision;
pub mod snapshot;

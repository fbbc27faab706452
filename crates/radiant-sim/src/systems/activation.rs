//! Activation system: evaluates the battleship state machine once per frame.
//!
//! Calls the FSM from radiant-boss, then writes the result back.

use hecs::World;

use radiant_boss::activation::{evaluate, BattleshipContext};
use radiant_core::components::{Battleship, Drone, FleetState};
use radiant_core::events::GameEvent;

use crate::session::FrameLog;

pub fn run(world: &mut World, fleet: &FleetState, fleet_columns: u32, log: &mut FrameLog) {
    let (fleet_alive, front_row_alive) = {
        let mut query = world.query::<&Drone>();
        query
            .iter()
            .filter(|(_, d)| d.is_alive())
            .fold((0, 0), |(all, front), (_, d)| {
                (all + 1, front + usize::from(d.row == 0))
            })
    };

    for (_entity, battleship) in world.query_mut::<&mut Battleship>() {
        let ctx = BattleshipContext {
            status: battleship.status,
            dx: battleship.dx,
            fleet_alive,
            front_row_alive,
            fleet_columns,
            hit_this_frame: log.battleship_hit,
            fleet_dx: fleet.dx,
        };

        let update = evaluate(&ctx);
        if update.status_changed {
            battleship.status = update.new_status;
            battleship.dx = update.new_dx;
            log.emit(GameEvent::BattleshipActivated { dx: update.new_dx });
            tracing::debug!(
                dx = update.new_dx,
                fleet_alive,
                front_row_alive,
                hit = log.battleship_hit,
                "battleship activated"
            );
        }
    }
}

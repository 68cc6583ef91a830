#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeded animal scheduler that wanders registered animals around a scenario.
//!
//! Each tick consumes draws from the scenario's random source in a fixed
//! order: one draw for the number of attempts, then per attempt one draw for
//! the animal and, when it has two or more legal destinations, one draw for
//! the destination. Replaying a scenario with the same seed therefore yields
//! the same log.

use research_sim_core::{Command, Coordinate, EntityId, Event, SimError};
use research_sim_world::{self as world, query, Scenario};
use tracing::debug;

/// Stateful scheduler that issues random animal moves against a scenario.
#[derive(Debug, Default)]
pub struct AnimalScheduler {
    ticks: u64,
}

impl AnimalScheduler {
    /// Creates a scheduler that has not run any ticks yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks handled so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one tick, moving a random subset of the registered animals.
    ///
    /// Events produced by the moves are appended to `out`. A scenario without
    /// registered animals consumes no draws.
    pub fn handle(&mut self, world: &mut Scenario, out: &mut Vec<Event>) -> Result<(), SimError> {
        self.ticks += 1;
        let animals = query::animals(world);
        if animals.is_empty() {
            debug!(tick = self.ticks, "scheduler_idle");
            return Ok(());
        }

        let attempts = world.draw_index(animals.len()) + 1;
        debug!(tick = self.ticks, attempts, "scheduler_tick");
        for _ in 0..attempts {
            let animal = animals[world.draw_index(animals.len())];
            let Some(destination) = choose_destination(world, animal)? else {
                debug!(entity = %animal, "scheduler_animal_stuck");
                continue;
            };
            world::apply(
                world,
                Command::Move {
                    entity: animal,
                    destination,
                },
                out,
            )?;
        }
        Ok(())
    }
}

fn choose_destination(
    world: &mut Scenario,
    animal: EntityId,
) -> Result<Option<Coordinate>, SimError> {
    let moves = query::possible_moves(world, animal)?;
    let destination = match moves.len() {
        0 => None,
        1 => Some(moves[0]),
        count => Some(moves[world.draw_index(count)]),
    };
    Ok(destination)
}

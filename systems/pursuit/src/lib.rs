#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure pursuit system that chooses one step for every ghost whose decision
//! is due.
//!
//! With a target the ghost greedily closes the Manhattan distance; it never
//! plans a path, so a wall between ghost and target can stall it. Without a
//! target it wanders at random using a seeded generator.

use pellet_chase_core::{CellCoord, Command, Direction, Event, GhostView, MazeView};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the pursuit system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a configuration seeding the random wander source.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }

    /// Seed of the random wander source.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

/// Pure system that reacts to decision events and emits ghost step commands.
#[derive(Debug)]
pub struct Pursuit {
    rng: ChaCha8Rng,
    candidates: Vec<(Direction, CellCoord)>,
}

impl Pursuit {
    /// Creates a new pursuit system using the provided configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed()),
            candidates: Vec::with_capacity(Direction::SCAN_ORDER.len()),
        }
    }

    /// Consumes world events and immutable views to emit step commands.
    ///
    /// Only `GhostDecisionDue` events are considered. A ghost with no passable
    /// neighbour receives no command and stays put for the tick.
    pub fn handle(
        &mut self,
        events: &[Event],
        ghost_view: &GhostView,
        maze: MazeView<'_>,
        target: Option<CellCoord>,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            let Event::GhostDecisionDue { ghost } = event else {
                continue;
            };
            let Some(snapshot) = ghost_view.get(*ghost) else {
                continue;
            };

            if let Some(direction) = self.select_step(snapshot.cell, maze, target) {
                out.push(Command::StepGhost {
                    ghost: *ghost,
                    direction,
                });
            }
        }
    }

    /// Picks the next step for a ghost standing on `origin`.
    ///
    /// Candidates are the passable neighbours in [`Direction::SCAN_ORDER`].
    /// With a target the candidate closest to it wins, earlier candidates
    /// winning ties. Without one the choice is uniform over the candidates.
    pub fn select_step(
        &mut self,
        origin: CellCoord,
        maze: MazeView<'_>,
        target: Option<CellCoord>,
    ) -> Option<Direction> {
        self.candidates.clear();
        self.candidates.extend(maze.passable_neighbors(origin));

        match target {
            Some(target) => first_minimum(
                self.candidates
                    .iter()
                    .map(|&(direction, cell)| (direction, cell.manhattan_distance(target))),
            ),
            None => self
                .candidates
                .choose(&mut self.rng)
                .map(|&(direction, _)| direction),
        }
    }
}

/// Returns the direction with the smallest distance, keeping the earliest on ties.
fn first_minimum<I>(scored: I) -> Option<Direction>
where
    I: IntoIterator<Item = (Direction, u32)>,
{
    // `min_by_key` yields the first of several equal minima.
    scored
        .into_iter()
        .min_by_key(|&(_, distance)| distance)
        .map(|(direction, _)| direction)
}

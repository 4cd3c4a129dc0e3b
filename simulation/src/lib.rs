#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fixed-tick simulation loop for Pellet Chase.
//!
//! [`Simulation`] owns the world and the pursuit system and runs the per-tick
//! protocol between them. Callers drive it with [`Simulation::set_intent`],
//! [`Simulation::tick`] and [`Simulation::restart`], and read results either
//! from the emitted events or through [`Simulation::snapshot`].

use pellet_chase_core::{
    Command, Direction, Event, FrameSnapshot, GameStatus, GhostView, MazeView, PlayState,
    PlayerSnapshot,
};
use pellet_chase_system_pursuit::{self as pursuit, Pursuit};
use pellet_chase_world::{self as world, query, GridError, Layout, Rules, World};
use tracing::{debug, trace};

/// Ticks simulated per second by real-time drivers.
pub const DEFAULT_TICK_RATE: u32 = 15;

/// Tuning for a simulation session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    rules: Rules,
    rng_seed: Option<u64>,
}

impl Config {
    /// Creates a configuration with the provided rules and an entropy seed.
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self {
            rules,
            rng_seed: None,
        }
    }

    /// Fixes the seed of the ghosts' random wander source.
    #[must_use]
    pub const fn with_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = Some(rng_seed);
        self
    }

    /// Rules applied to every game of the session.
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Fixed seed, if one was requested.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

/// Caller-owned game session.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    pursuit: Pursuit,
    rng_seed: u64,
    commands: Vec<Command>,
}

impl Simulation {
    /// Creates a session playing the classic maze.
    pub fn new(config: Config) -> Result<Self, GridError> {
        Ok(Self::with_layout(Layout::classic()?, config))
    }

    /// Creates a session playing the provided layout.
    #[must_use]
    pub fn with_layout(layout: Layout, config: Config) -> Self {
        let rng_seed = config.rng_seed().unwrap_or_else(rand::random);
        debug!(rng_seed, "creating simulation");
        Self {
            world: World::new(layout, config.rules()),
            pursuit: Pursuit::new(pursuit::Config::new(rng_seed)),
            rng_seed,
            commands: Vec::new(),
        }
    }

    /// Seed actually used by the pursuit system.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Buffers the direction the player tries on the next tick.
    pub fn set_intent(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        world::apply(
            &mut self.world,
            Command::SetIntent { direction },
            out_events,
        );
    }

    /// Advances the game by one tick. Does nothing once the game has ended.
    pub fn tick(&mut self, out_events: &mut Vec<Event>) {
        if query::play_state(&self.world).is_terminal() {
            return;
        }

        let first = out_events.len();
        world::apply(&mut self.world, Command::Tick, out_events);

        let ghost_view = query::ghost_view(&self.world);
        let target = Some(query::player(&self.world).cell);
        self.pursuit.handle(
            &out_events[first..],
            &ghost_view,
            query::maze(&self.world),
            target,
            &mut self.commands,
        );
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, out_events);
        }
        world::apply(&mut self.world, Command::SettleTick, out_events);

        for event in &out_events[first..] {
            match *event {
                Event::GameWon { score } => debug!(score, "all pellets eaten"),
                Event::GameLost { cell, ghost } => {
                    debug!(%cell, ghost = ghost.get(), "player caught");
                }
                _ => {}
            }
        }
        trace!(
            tick = query::tick_index(&self.world),
            events = out_events.len() - first,
            "tick complete"
        );
    }

    /// Rebuilds the maze and actors and returns to the running state.
    pub fn restart(&mut self, out_events: &mut Vec<Event>) {
        world::apply(&mut self.world, Command::Restart, out_events);
        debug!("game restarted");
    }

    /// Copies the state of the last completed tick.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        query::frame(&self.world)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn play_state(&self) -> PlayState {
        query::play_state(&self.world)
    }

    /// Score, pellets remaining and lifecycle state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        query::status(&self.world)
    }

    /// Player position, heading and intent.
    #[must_use]
    pub fn player(&self) -> PlayerSnapshot {
        query::player(&self.world)
    }

    /// Ghost positions, identities and colours.
    #[must_use]
    pub fn ghosts(&self) -> GhostView {
        query::ghost_view(&self.world)
    }

    /// Live maze cells.
    #[must_use]
    pub fn maze(&self) -> MazeView<'_> {
        query::maze(&self.world)
    }

    /// Banner adapters greet the player with.
    #[must_use]
    pub fn welcome_banner(&self) -> &'static str {
        query::welcome_banner(&self.world)
    }
}

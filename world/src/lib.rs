#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Pellet Chase.
//!
//! The world owns the maze, the actors and the score. It is mutated only
//! through [`apply`], which executes a single [`Command`] and reports the
//! outcome as [`Event`] values. Read access goes through the [`query`]
//! module.

mod actor;
mod layout;
mod maze;

use pellet_chase_core::{CellKind, Command, Direction, Event, GhostId, PlayState, WELCOME_BANNER};

use crate::actor::{Ghost, Player};
pub use crate::layout::{GhostSpawn, Layout, CLASSIC_MAZE, PLAYER_FACING};
pub use crate::maze::{GridError, MazeGrid};

const DEFAULT_DECISION_INTERVAL: u32 = 5;
const DEFAULT_PELLET_VALUE: u32 = 10;

/// Fixed tuning applied to every game played in a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    decision_interval: u32,
    pellet_value: u32,
}

impl Rules {
    /// Creates a rule set. A zero interval is treated as one tick.
    #[must_use]
    pub const fn new(decision_interval: u32, pellet_value: u32) -> Self {
        let decision_interval = if decision_interval == 0 {
            1
        } else {
            decision_interval
        };
        Self {
            decision_interval,
            pellet_value,
        }
    }

    /// Ticks between two pursuit decisions of the same ghost.
    #[must_use]
    pub const fn decision_interval(&self) -> u32 {
        self.decision_interval
    }

    /// Points credited per pellet.
    #[must_use]
    pub const fn pellet_value(&self) -> u32 {
        self.pellet_value
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(DEFAULT_DECISION_INTERVAL, DEFAULT_PELLET_VALUE)
    }
}

/// Represents the authoritative Pellet Chase world state.
#[derive(Clone, Debug)]
pub struct World {
    banner: &'static str,
    layout: Layout,
    rules: Rules,
    maze: MazeGrid,
    player: Player,
    ghosts: Vec<Ghost>,
    score: u32,
    pellets_remaining: usize,
    play_state: PlayState,
    tick_index: u64,
}

impl World {
    /// Creates a world ready to play the provided layout.
    #[must_use]
    pub fn new(layout: Layout, rules: Rules) -> Self {
        let maze = layout.maze().clone();
        let pellets_remaining = maze.count_cells(CellKind::Pellet);
        Self {
            banner: WELCOME_BANNER,
            player: Player::spawn(layout.player_spawn(), PLAYER_FACING),
            ghosts: spawn_ghosts(&layout),
            maze,
            pellets_remaining,
            score: 0,
            play_state: PlayState::Running,
            tick_index: 0,
            layout,
            rules,
        }
    }

    fn reset(&mut self) {
        self.maze = self.layout.maze().clone();
        self.pellets_remaining = self.maze.count_cells(CellKind::Pellet);
        self.player = Player::spawn(self.layout.player_spawn(), PLAYER_FACING);
        self.ghosts = spawn_ghosts(&self.layout);
        self.score = 0;
        self.play_state = PlayState::Running;
        self.tick_index = 0;
    }

    fn advance_player(&mut self, out_events: &mut Vec<Event>) {
        let from = self.player.cell();
        if self.player.advance(&self.maze) {
            out_events.push(Event::PlayerMoved {
                from,
                to: self.player.cell(),
            });
        } else {
            out_events.push(Event::PlayerBlocked {
                at: from,
                intent: self.player.intent(),
            });
        }
    }

    fn resolve_pellet(&mut self, out_events: &mut Vec<Event>) {
        let cell = self.player.cell();
        if self.maze.cell_at(cell) != Ok(CellKind::Pellet) {
            return;
        }

        let consumed = self.maze.consume_pellet(cell);
        debug_assert!(consumed.is_ok(), "confirmed pellet not consumable: {consumed:?}");
        if consumed.is_err() {
            return;
        }

        self.score = self.score.saturating_add(self.rules.pellet_value());
        self.pellets_remaining = self.pellets_remaining.saturating_sub(1);
        out_events.push(Event::PelletEaten {
            cell,
            score: self.score,
            pellets_remaining: self.pellets_remaining,
        });

        if self.pellets_remaining == 0 {
            self.play_state = PlayState::Won;
            out_events.push(Event::GameWon { score: self.score });
        }
    }

    fn schedule_ghosts(&mut self, out_events: &mut Vec<Event>) {
        let interval = self.rules.decision_interval();
        for ghost in &mut self.ghosts {
            if ghost.count_tick(interval) {
                out_events.push(Event::GhostDecisionDue { ghost: ghost.id() });
            }
        }
    }

    fn step_ghost(
        &mut self,
        ghost_id: GhostId,
        direction: Direction,
        out_events: &mut Vec<Event>,
    ) {
        let Some(ghost) = self.ghosts.iter_mut().find(|ghost| ghost.id() == ghost_id) else {
            return;
        };

        if !ghost.take_decision() {
            return;
        }

        let from = ghost.cell();
        if ghost.try_move(direction, &self.maze) {
            out_events.push(Event::GhostAdvanced {
                ghost: ghost_id,
                from,
                to: ghost.cell(),
            });
        }
    }

    fn settle(&mut self, out_events: &mut Vec<Event>) {
        // Ghosts left without a step this tick hold their position.
        for ghost in &mut self.ghosts {
            let _ = ghost.take_decision();
        }

        let cell = self.player.cell();
        if let Some(ghost) = self.ghosts.iter().find(|ghost| ghost.cell() == cell) {
            self.play_state = PlayState::Lost;
            out_events.push(Event::GameLost {
                cell,
                ghost: ghost.id(),
            });
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// A tick is driven as `Tick`, then any `StepGhost` commands answering the
/// `GhostDecisionDue` events it produced, then `SettleTick`. Once the game is
/// won or lost only `SetIntent` and `Restart` have an effect.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SetIntent { direction } => {
            world.player.set_intent(direction);
            out_events.push(Event::IntentBuffered { direction });
        }
        Command::Tick => {
            if world.play_state.is_terminal() {
                return;
            }

            world.tick_index = world.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced {
                tick: world.tick_index,
            });
            world.advance_player(out_events);
            world.resolve_pellet(out_events);
            if world.play_state.is_terminal() {
                return;
            }
            world.schedule_ghosts(out_events);
        }
        Command::StepGhost { ghost, direction } => {
            if world.play_state.is_terminal() {
                return;
            }
            world.step_ghost(ghost, direction, out_events);
        }
        Command::SettleTick => {
            if world.play_state.is_terminal() {
                return;
            }
            world.settle(out_events);
        }
        Command::Restart => {
            world.reset();
            out_events.push(Event::GameRestarted);
        }
    }
}

fn spawn_ghosts(layout: &Layout) -> Vec<Ghost> {
    layout
        .ghost_spawns()
        .iter()
        .zip(0u32..)
        .map(|(spawn, index)| Ghost::spawn(GhostId::new(index), spawn.cell(), spawn.color()))
        .collect()
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use pellet_chase_core::{
        FrameSnapshot, GameStatus, GhostSnapshot, GhostView, MazeView, PlayState,
        PlayerSnapshot,
    };

    use super::{Layout, Rules, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the live maze.
    #[must_use]
    pub fn maze(world: &World) -> MazeView<'_> {
        world.maze.view()
    }

    /// Captures the player's position, heading and buffered intent.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            cell: world.player.cell(),
            direction: world.player.direction(),
            intent: world.player.intent(),
        }
    }

    /// Captures a read-only view of the ghosts inhabiting the maze.
    #[must_use]
    pub fn ghost_view(world: &World) -> GhostView {
        GhostView::from_snapshots(
            world
                .ghosts
                .iter()
                .map(|ghost| GhostSnapshot {
                    id: ghost.id(),
                    cell: ghost.cell(),
                    color: ghost.color(),
                    direction: ghost.direction(),
                    ticks_since_decision: ghost.ticks_since_decision(),
                })
                .collect(),
        )
    }

    /// Reports score, pellets remaining and lifecycle state.
    #[must_use]
    pub fn status(world: &World) -> GameStatus {
        GameStatus {
            score: world.score,
            pellets_remaining: world.pellets_remaining,
            play_state: world.play_state,
        }
    }

    /// Reports the current lifecycle state.
    #[must_use]
    pub fn play_state(world: &World) -> PlayState {
        world.play_state
    }

    /// Number of ticks simulated since the last restart.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Layout the world restarts from.
    #[must_use]
    pub fn layout(world: &World) -> &Layout {
        &world.layout
    }

    /// Rules the world was created with.
    #[must_use]
    pub fn rules(world: &World) -> Rules {
        world.rules
    }

    /// Copies everything a renderer needs into an owned frame.
    #[must_use]
    pub fn frame(world: &World) -> FrameSnapshot {
        let maze = maze(world);
        let (columns, rows) = maze.dimensions();
        FrameSnapshot {
            columns,
            rows,
            cells: maze.rows().flatten().copied().collect(),
            player: player(world),
            ghosts: ghost_view(world).into_vec(),
            status: status(world),
            tick: world.tick_index,
        }
    }
}

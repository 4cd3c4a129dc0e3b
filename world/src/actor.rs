//! Movement legality shared by the player and the ghosts.

use pellet_chase_core::{CellCoord, Direction, GhostColor, GhostId};

use crate::MazeGrid;

/// Position and heading common to every actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Actor {
    cell: CellCoord,
    direction: Option<Direction>,
}

impl Actor {
    pub(crate) const fn spawn(cell: CellCoord, direction: Option<Direction>) -> Self {
        Self { cell, direction }
    }

    pub(crate) const fn cell(&self) -> CellCoord {
        self.cell
    }

    pub(crate) const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Moves one cell in `direction` when the destination is passable.
    ///
    /// A refused move leaves both position and heading untouched.
    pub(crate) fn try_move(&mut self, direction: Direction, maze: &MazeGrid) -> bool {
        let Some(candidate) = self.cell.step(direction) else {
            return false;
        };

        if !maze.is_passable(candidate) {
            return false;
        }

        self.cell = candidate;
        self.direction = Some(direction);
        true
    }
}

/// Player-controlled actor with a single-slot intent buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Player {
    actor: Actor,
    intent: Direction,
}

impl Player {
    pub(crate) const fn spawn(cell: CellCoord, facing: Direction) -> Self {
        Self {
            actor: Actor::spawn(cell, Some(facing)),
            intent: facing,
        }
    }

    pub(crate) const fn cell(&self) -> CellCoord {
        self.actor.cell()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.actor.direction().unwrap_or(self.intent)
    }

    pub(crate) const fn intent(&self) -> Direction {
        self.intent
    }

    /// Last write wins; the buffer survives blocked moves.
    pub(crate) fn set_intent(&mut self, direction: Direction) {
        self.intent = direction;
    }

    pub(crate) fn advance(&mut self, maze: &MazeGrid) -> bool {
        self.actor.try_move(self.intent, maze)
    }
}

/// Adversary whose steps are chosen by the pursuit system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Ghost {
    id: GhostId,
    color: GhostColor,
    actor: Actor,
    ticks_since_decision: u32,
    decision_pending: bool,
}

impl Ghost {
    pub(crate) const fn spawn(id: GhostId, cell: CellCoord, color: GhostColor) -> Self {
        Self {
            id,
            color,
            actor: Actor::spawn(cell, None),
            ticks_since_decision: 0,
            decision_pending: false,
        }
    }

    pub(crate) const fn id(&self) -> GhostId {
        self.id
    }

    pub(crate) const fn color(&self) -> GhostColor {
        self.color
    }

    pub(crate) const fn cell(&self) -> CellCoord {
        self.actor.cell()
    }

    pub(crate) const fn direction(&self) -> Option<Direction> {
        self.actor.direction()
    }

    pub(crate) const fn ticks_since_decision(&self) -> u32 {
        self.ticks_since_decision
    }

    /// Counts one tick and reports whether a decision became due.
    ///
    /// The counter restarts from zero whenever a decision is scheduled.
    pub(crate) fn count_tick(&mut self, decision_interval: u32) -> bool {
        self.ticks_since_decision = self.ticks_since_decision.saturating_add(1);
        if self.ticks_since_decision < decision_interval {
            return false;
        }

        self.ticks_since_decision = 0;
        self.decision_pending = true;
        true
    }

    /// Consumes the pending decision, if any.
    pub(crate) fn take_decision(&mut self) -> bool {
        std::mem::replace(&mut self.decision_pending, false)
    }

    pub(crate) fn try_move(&mut self, direction: Direction, maze: &MazeGrid) -> bool {
        self.actor.try_move(direction, maze)
    }
}

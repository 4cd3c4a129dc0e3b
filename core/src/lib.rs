#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared vocabulary of the Pellet Chase workspace.
//!
//! Adapters and systems never touch world state directly: they send
//! [`Command`] values, the world answers with [`Event`] values, and anything
//! that needs to look around reads a [`MazeView`] or [`GhostView`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Greeting shown by adapters when a session starts.
pub const WELCOME_BANNER: &str = "Welcome to Pellet Chase.";

/// Every mutation the world accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Buffers the player's desired direction, replacing any unconsumed intent.
    SetIntent {
        /// Direction the player wants to travel in.
        direction: Direction,
    },
    /// Advances the player, resolves pellets and schedules ghost decisions.
    Tick,
    /// Requests that a ghost with a pending decision step one cell.
    StepGhost {
        /// Identifier of the ghost attempting to move.
        ghost: GhostId,
        /// Direction of travel chosen for the step.
        direction: Direction,
    },
    /// Closes the current tick by resolving player and ghost collisions.
    SettleTick,
    /// Rebuilds the maze, actors and score from their initial values.
    Restart,
}

/// Outcomes reported by the world while executing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that the player's intent buffer was overwritten.
    IntentBuffered {
        /// Direction now held in the buffer.
        direction: Direction,
    },
    /// Indicates that the simulation clock advanced by one tick.
    TimeAdvanced {
        /// One-based index of the tick that started.
        tick: u64,
    },
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: CellCoord,
        /// Cell the player occupies after moving.
        to: CellCoord,
    },
    /// Reports that the buffered intent pointed into a wall this tick.
    PlayerBlocked {
        /// Cell the player remains on.
        at: CellCoord,
        /// Intent that could not be honoured.
        intent: Direction,
    },
    /// Announces that the player consumed a pellet.
    PelletEaten {
        /// Cell that held the pellet.
        cell: CellCoord,
        /// Score after the pellet was credited.
        score: u32,
        /// Pellets left in the maze after consumption.
        pellets_remaining: usize,
    },
    /// Announces that every pellet was collected.
    GameWon {
        /// Final score.
        score: u32,
    },
    /// Announces that a ghost reached its decision interval this tick.
    GhostDecisionDue {
        /// Identifier of the ghost awaiting a step.
        ghost: GhostId,
    },
    /// Confirms that a ghost moved between two cells.
    GhostAdvanced {
        /// Identifier of the ghost that advanced.
        ghost: GhostId,
        /// Cell the ghost occupied before moving.
        from: CellCoord,
        /// Cell the ghost occupies after moving.
        to: CellCoord,
    },
    /// Announces that a ghost caught the player.
    GameLost {
        /// Cell shared by the player and the ghost.
        cell: CellCoord,
        /// First ghost, in identifier order, found on the player's cell.
        ghost: GhostId,
    },
    /// Confirms that the world returned to its initial state.
    GameRestarted,
}

/// Cardinal movement directions available to every actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// Order in which neighbouring cells are enumerated by pursuit decisions.
    ///
    /// Ties between equally attractive neighbours resolve to the earliest
    /// entry, so this order is part of the observable ghost behaviour.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Unit offset expressed as `(columns, rows)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Direction pointing the opposite way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Column and row of a maze cell, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Column index.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Row index.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Sum of the absolute column and row differences.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Cell adjacent to this one in the given direction.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the grid's concern.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<CellCoord> {
        let column = match direction {
            Direction::Left => self.column.checked_sub(1)?,
            Direction::Right => self.column.checked_add(1)?,
            Direction::Up | Direction::Down => self.column,
        };
        let row = match direction {
            Direction::Up => self.row.checked_sub(1)?,
            Direction::Down => self.row.checked_add(1)?,
            Direction::Left | Direction::Right => self.row,
        };
        Some(CellCoord::new(column, row))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Contents of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Impassable wall segment.
    Wall,
    /// Walkable cell holding an uneaten pellet.
    Pellet,
    /// Walkable cell with nothing in it.
    Empty,
}

impl CellKind {
    /// Reports whether actors may stand on the cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Lifecycle state of a single game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayState {
    /// Actors advance every tick.
    #[default]
    Running,
    /// Every pellet was eaten; the frame is frozen until restart.
    Won,
    /// A ghost caught the player; the frame is frozen until restart.
    Lost,
}

impl PlayState {
    /// Reports whether the game reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Stable upper-case name presented to collaborators.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Won => "WON",
            Self::Lost => "LOST",
        }
    }
}

/// Unique identifier assigned to a ghost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GhostId(u32);

impl GhostId {
    /// Creates a new ghost identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Visual appearance applied to a ghost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GhostColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl GhostColor {
    /// Creates a new ghost color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Immutable representation of the player's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerSnapshot {
    /// Grid cell currently occupied by the player.
    pub cell: CellCoord,
    /// Direction of the last successful move.
    pub direction: Direction,
    /// Buffered direction applied on the next tick.
    pub intent: Direction,
}

/// Immutable representation of a single ghost's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GhostSnapshot {
    /// Unique identifier assigned to the ghost.
    pub id: GhostId,
    /// Grid cell currently occupied by the ghost.
    pub cell: CellCoord,
    /// Appearance assigned to the ghost.
    pub color: GhostColor,
    /// Direction of the ghost's last step, if it has moved since spawning.
    pub direction: Option<Direction>,
    /// Ticks counted toward the next pursuit decision.
    pub ticks_since_decision: u32,
}

/// Read-only snapshot describing all ghosts within the maze.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GhostView {
    snapshots: Vec<GhostSnapshot>,
}

impl GhostView {
    /// Creates a new ghost view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<GhostSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured ghost snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &GhostSnapshot> {
        self.snapshots.iter()
    }

    /// Looks up the snapshot captured for the provided ghost.
    #[must_use]
    pub fn get(&self, ghost: GhostId) -> Option<&GhostSnapshot> {
        self.snapshots
            .binary_search_by_key(&ghost, |snapshot| snapshot.id)
            .ok()
            .map(|index| &self.snapshots[index])
    }

    /// Number of ghosts captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view holds no ghosts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Unwraps the snapshots, still ordered by identifier.
    #[must_use]
    pub fn into_vec(self) -> Vec<GhostSnapshot> {
        self.snapshots
    }
}

/// Score and lifecycle summary read by presentation every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GameStatus {
    /// Points accumulated in the current game.
    pub score: u32,
    /// Pellets still present in the maze.
    pub pellets_remaining: usize,
    /// Current lifecycle state.
    pub play_state: PlayState,
}

/// Read-only view into the dense maze grid.
#[derive(Clone, Copy, Debug)]
pub struct MazeView<'a> {
    cells: &'a [CellKind],
    columns: u32,
    rows: u32,
}

impl<'a> MazeView<'a> {
    /// Captures a new maze view backed by the provided row-major cell slice.
    #[must_use]
    pub fn new(cells: &'a [CellKind], columns: u32, rows: u32) -> Self {
        Self {
            cells,
            columns,
            rows,
        }
    }

    /// Provides the dimensions of the maze as `(columns, rows)`.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Returns the kind of the provided cell, or `None` outside the maze.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<CellKind> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether the cell lies inside the maze and is not a wall.
    #[must_use]
    pub fn is_passable(&self, cell: CellCoord) -> bool {
        self.cell(cell).is_some_and(CellKind::is_passable)
    }

    /// In-bounds neighbours of `cell`, enumerated in [`Direction::SCAN_ORDER`].
    pub fn neighbors(
        &self,
        cell: CellCoord,
    ) -> impl Iterator<Item = (Direction, CellCoord)> + 'a {
        let view = *self;
        Direction::SCAN_ORDER.into_iter().filter_map(move |direction| {
            let neighbor = cell.step(direction)?;
            view.index(neighbor).map(|_| (direction, neighbor))
        })
    }

    /// Passable neighbours of `cell`, enumerated in [`Direction::SCAN_ORDER`].
    pub fn passable_neighbors(
        &self,
        cell: CellCoord,
    ) -> impl Iterator<Item = (Direction, CellCoord)> + 'a {
        let view = *self;
        self.neighbors(cell)
            .filter(move |&(_, neighbor)| view.is_passable(neighbor))
    }

    /// Counts the cells of the provided kind.
    #[must_use]
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| **cell == kind).count()
    }

    /// Iterates rows from top to bottom, each as a slice of cells.
    pub fn rows(&self) -> impl Iterator<Item = &'a [CellKind]> {
        let width = usize::try_from(self.columns).unwrap_or(0).max(1);
        self.cells.chunks(width)
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Owned copy of everything a renderer needs for one frame.
///
/// Captured between ticks, so a frame never mixes state from two ticks even
/// when handed to another thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSnapshot {
    /// Number of maze columns.
    pub columns: u32,
    /// Number of maze rows.
    pub rows: u32,
    /// Row-major maze cells.
    pub cells: Vec<CellKind>,
    /// Player state.
    pub player: PlayerSnapshot,
    /// Ghost states ordered by identifier.
    pub ghosts: Vec<GhostSnapshot>,
    /// Score, pellet counter and lifecycle state.
    pub status: GameStatus,
    /// Number of ticks simulated since the last restart.
    pub tick: u64,
}

impl FrameSnapshot {
    /// Borrows the captured cells as a maze view.
    #[must_use]
    pub fn maze(&self) -> MazeView<'_> {
        MazeView::new(&self.cells, self.columns, self.rows)
    }
}

//! Fixed maze template and spawn points used to (re)build a game.

use pellet_chase_core::{CellCoord, Direction, GhostColor};

use crate::{GridError, MazeGrid};

/// Compiled-in maze played by default.
///
/// `#` marks walls, `.` pellets and spaces empty floor. The spawn cells are
/// left empty so nothing is eaten before the first move.
pub const CLASSIC_MAZE: [&str; 15] = [
    "####################",
    "# .......##........#",
    "#.##.###.##.###.##.#",
    "#..................#",
    "#.##.#.######.#.##.#",
    "#....  ............#",
    "#.##.#.######.#.##.#",
    "#..................#",
    "####.#.##  ##.#.####",
    "#......#    #......#",
    "#.##.#.######.#.##.#",
    "#...#..........#...#",
    "#.#...##.##.##...#.#",
    "#........##........#",
    "####################",
];

const CLASSIC_PLAYER_SPAWN: CellCoord = CellCoord::new(1, 1);
const CLASSIC_GHOSTS: [GhostSpawn; 2] = [
    GhostSpawn::new(CellCoord::new(5, 5), GhostColor::from_rgb(255, 0, 0)),
    GhostSpawn::new(CellCoord::new(6, 5), GhostColor::from_rgb(255, 184, 255)),
];

/// Heading the player starts with, and the intent buffered before any input.
pub const PLAYER_FACING: Direction = Direction::Right;

/// Starting cell and appearance of one ghost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GhostSpawn {
    cell: CellCoord,
    color: GhostColor,
}

impl GhostSpawn {
    /// Creates a new ghost spawn descriptor.
    #[must_use]
    pub const fn new(cell: CellCoord, color: GhostColor) -> Self {
        Self { cell, color }
    }

    /// Cell the ghost occupies when a game starts.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Appearance assigned to the ghost.
    #[must_use]
    pub const fn color(&self) -> GhostColor {
        self.color
    }
}

/// Pristine maze plus spawn points; every restart rebuilds from this value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    maze: MazeGrid,
    player_spawn: CellCoord,
    ghost_spawns: Vec<GhostSpawn>,
}

impl Layout {
    /// Validates that every spawn point is passable within `maze`.
    pub fn new(
        maze: MazeGrid,
        player_spawn: CellCoord,
        ghost_spawns: Vec<GhostSpawn>,
    ) -> Result<Self, GridError> {
        let spawns = std::iter::once(player_spawn).chain(ghost_spawns.iter().map(GhostSpawn::cell));
        for cell in spawns {
            if !maze.is_passable(cell) {
                return Err(GridError::BlockedSpawn { cell });
            }
        }

        Ok(Self {
            maze,
            player_spawn,
            ghost_spawns,
        })
    }

    /// Builds the default layout: [`CLASSIC_MAZE`] with two ghosts.
    pub fn classic() -> Result<Self, GridError> {
        let maze = MazeGrid::parse(&CLASSIC_MAZE)?;
        Self::new(maze, CLASSIC_PLAYER_SPAWN, CLASSIC_GHOSTS.to_vec())
    }

    /// Maze in its initial, fully stocked state.
    #[must_use]
    pub fn maze(&self) -> &MazeGrid {
        &self.maze
    }

    /// Cell the player occupies when a game starts.
    #[must_use]
    pub const fn player_spawn(&self) -> CellCoord {
        self.player_spawn
    }

    /// Ghost spawn points in identifier order.
    #[must_use]
    pub fn ghost_spawns(&self) -> &[GhostSpawn] {
        &self.ghost_spawns
    }
}

//! Static maze geometry and pellet bookkeeping.

use pellet_chase_core::{CellCoord, CellKind, MazeView};
use thiserror::Error;

const WALL_SYMBOL: char = '#';
const PELLET_SYMBOL: char = '.';
const EMPTY_SYMBOL: char = ' ';

/// Errors raised while building or mutating a [`MazeGrid`].
///
/// `OutOfBounds` and `InvalidPelletConsumption` indicate a caller bug: the
/// world only ever queries cells it has already bounded and only consumes
/// cells it has just confirmed to hold a pellet.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The queried cell lies outside the maze extents.
    #[error("cell {cell} lies outside the maze")]
    OutOfBounds {
        /// Cell that was queried.
        cell: CellCoord,
    },
    /// A pellet was consumed from a cell that does not hold one.
    #[error("cell {cell} holds {found:?}, not a pellet")]
    InvalidPelletConsumption {
        /// Cell that was targeted.
        cell: CellCoord,
        /// Kind actually stored in the cell.
        found: CellKind,
    },
    /// The template contained no rows or no columns.
    #[error("maze template is empty")]
    Empty,
    /// The template exceeds the addressable coordinate range.
    #[error("maze template is too large")]
    TooLarge,
    /// A template row differs in length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A border cell is not a wall, so actors could walk off the grid.
    #[error("border cell {cell} is not a wall")]
    OpenBorder {
        /// Offending border cell.
        cell: CellCoord,
    },
    /// The template used a symbol other than `#`, `.` or a space.
    #[error("unknown symbol {symbol:?} at column {column}, row {row}")]
    UnknownCell {
        /// Symbol found in the template.
        symbol: char,
        /// Zero-based column index.
        column: usize,
        /// Zero-based row index.
        row: usize,
    },
    /// An actor spawn point is a wall or outside the maze.
    #[error("spawn cell {cell} is not passable")]
    BlockedSpawn {
        /// Offending spawn cell.
        cell: CellCoord,
    },
}

/// Rectangular grid of walls, pellets and empty cells.
///
/// Dimensions are fixed at construction and every border cell is a wall. The
/// only mutation after construction is a pellet turning into an empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    columns: u32,
    rows: u32,
    cells: Vec<CellKind>,
}

impl MazeGrid {
    /// Builds a maze from text rows using `#` for walls, `.` for pellets and a
    /// space for empty cells.
    pub fn parse(template: &[&str]) -> Result<Self, GridError> {
        let expected = template.first().map_or(0, |row| row.chars().count());
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(expected * template.len());
        for (row, line) in template.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found,
                });
            }

            for (column, symbol) in line.chars().enumerate() {
                let kind = match symbol {
                    WALL_SYMBOL => CellKind::Wall,
                    PELLET_SYMBOL => CellKind::Pellet,
                    EMPTY_SYMBOL => CellKind::Empty,
                    _ => {
                        return Err(GridError::UnknownCell {
                            symbol,
                            column,
                            row,
                        })
                    }
                };
                cells.push(kind);
            }
        }

        let columns = u32::try_from(expected).map_err(|_| GridError::TooLarge)?;
        let rows = u32::try_from(template.len()).map_err(|_| GridError::TooLarge)?;
        let grid = Self {
            columns,
            rows,
            cells,
        };
        grid.ensure_walled_border()?;
        Ok(grid)
    }

    /// Provides the dimensions of the maze as `(columns, rows)`.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Returns the kind stored in the provided cell.
    pub fn cell_at(&self, cell: CellCoord) -> Result<CellKind, GridError> {
        self.view().cell(cell).ok_or(GridError::OutOfBounds { cell })
    }

    /// Reports whether the cell lies inside the maze and is not a wall.
    #[must_use]
    pub fn is_passable(&self, cell: CellCoord) -> bool {
        self.view().is_passable(cell)
    }

    /// Counts the cells of the provided kind.
    #[must_use]
    pub fn count_cells(&self, kind: CellKind) -> usize {
        self.view().count(kind)
    }

    /// Borrows the maze as a read-only view for systems and renderers.
    #[must_use]
    pub fn view(&self) -> MazeView<'_> {
        MazeView::new(&self.cells, self.columns, self.rows)
    }

    /// Turns the pellet stored in `cell` into an empty cell.
    pub(crate) fn consume_pellet(&mut self, cell: CellCoord) -> Result<(), GridError> {
        let found = self.cell_at(cell)?;
        if found != CellKind::Pellet {
            return Err(GridError::InvalidPelletConsumption { cell, found });
        }

        let index = self.index(cell).ok_or(GridError::OutOfBounds { cell })?;
        self.cells[index] = CellKind::Empty;
        Ok(())
    }

    fn ensure_walled_border(&self) -> Result<(), GridError> {
        let last_column = self.columns - 1;
        let last_row = self.rows - 1;
        for row in 0..self.rows {
            for column in 0..self.columns {
                let on_border =
                    row == 0 || column == 0 || row == last_row || column == last_column;
                let cell = CellCoord::new(column, row);
                if on_border && self.cell_at(cell)? != CellKind::Wall {
                    return Err(GridError::OpenBorder { cell });
                }
            }
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: [&str; 4] = ["#####", "#. .#", "# #.#", "#####"];

    #[test]
    fn parse_reads_symbols_row_major() {
        let grid = MazeGrid::parse(&SMALL).expect("valid template");

        assert_eq!(grid.dimensions(), (5, 4));
        assert_eq!(grid.cell_at(CellCoord::new(1, 1)), Ok(CellKind::Pellet));
        assert_eq!(grid.cell_at(CellCoord::new(2, 1)), Ok(CellKind::Empty));
        assert_eq!(grid.cell_at(CellCoord::new(2, 2)), Ok(CellKind::Wall));
        assert_eq!(grid.count_cells(CellKind::Pellet), 3);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let error = MazeGrid::parse(&["####", "#.#", "####"]).expect_err("ragged");
        assert_eq!(
            error,
            GridError::Ragged {
                row: 1,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn parse_rejects_open_border() {
        let error = MazeGrid::parse(&["####", "#.. ", "####"]).expect_err("open border");
        assert_eq!(
            error,
            GridError::OpenBorder {
                cell: CellCoord::new(3, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_symbols_and_empty_templates() {
        let error = MazeGrid::parse(&["###", "#o#", "###"]).expect_err("unknown symbol");
        assert_eq!(
            error,
            GridError::UnknownCell {
                symbol: 'o',
                column: 1,
                row: 1
            }
        );
        assert_eq!(MazeGrid::parse(&[]), Err(GridError::Empty));
        assert_eq!(MazeGrid::parse(&[""]), Err(GridError::Empty));
    }

    #[test]
    fn cell_at_reports_out_of_bounds() {
        let grid = MazeGrid::parse(&SMALL).expect("valid template");
        let outside = CellCoord::new(5, 0);

        assert_eq!(
            grid.cell_at(outside),
            Err(GridError::OutOfBounds { cell: outside })
        );
        assert!(!grid.is_passable(outside));
        assert!(!grid.is_passable(CellCoord::new(0, 0)));
        assert!(grid.is_passable(CellCoord::new(2, 1)));
    }

    #[test]
    fn consume_pellet_empties_cell_once() {
        let mut grid = MazeGrid::parse(&SMALL).expect("valid template");
        let cell = CellCoord::new(1, 1);

        grid.consume_pellet(cell).expect("pellet present");
        assert_eq!(grid.cell_at(cell), Ok(CellKind::Empty));
        assert_eq!(grid.count_cells(CellKind::Pellet), 2);

        assert_eq!(
            grid.consume_pellet(cell),
            Err(GridError::InvalidPelletConsumption {
                cell,
                found: CellKind::Empty
            })
        );
        assert_eq!(
            grid.consume_pellet(CellCoord::new(9, 9)),
            Err(GridError::OutOfBounds {
                cell: CellCoord::new(9, 9)
            })
        );
    }
}

//! Grid model for the maze and its pure query primitives.
//!
//! This module holds the canonical representation of the maze searched by the engine: a
//! rectangular matrix of [`CellState`] values addressed by [`Cell`] coordinates. The grid validates
//! its own shape on construction, so every [`Grid`] value the engine receives is rectangular and at
//! least one cell wide and tall.

use std::fmt;

use thiserror::Error;

/// Grid position addressed by row and column.
///
/// Cells carry no identity beyond their coordinates. They order row-major, which keeps any sorted
/// collection of cells (such as the visited set of a step) in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based row index, counted from the top of the grid.
    pub row: usize,
    /// Zero-based column index, counted from the left of the grid.
    pub col: usize,
}

impl Cell {
    /// Builds a cell from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell one step away in the given direction.
    ///
    /// Stepping up from row zero or left from column zero has no result. Whether the returned cell
    /// lies inside a particular grid is for [`Grid::is_in_bounds`] to decide.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row_offset, col_offset) = direction.offset();

        let Some(row) = self.row.checked_add_signed(row_offset) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_offset) else {
            return None;
        };

        Some(Self::new(row, col))
    }

    /// Number of orthogonal moves between two cells, ignoring walls.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` if the two cells share an edge.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal direction of travel between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// Neighbour order used by breadth-first search and the priority-ordered searches.
    pub const BREADTH_FIRST: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Neighbour order used by depth-first search.
    ///
    /// The order differs from [`Direction::BREADTH_FIRST`] on purpose: it is the tie-break that
    /// makes depth-first traces reproducible and visibly distinct from breadth-first ones.
    pub const DEPTH_FIRST: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Row and column offsets of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Traversability of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Walkable cell.
    #[default]
    Open,
    /// Obstacle; never entered by a search.
    Wall,
}

impl CellState {
    /// Returns the character used for this state in the plain-text maze format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
        }
    }

    /// Reads a cell state back from its plain-text symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            _ => None,
        }
    }
}

/// Shape violations detected while building a [`Grid`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The grid was given no rows at all.
    #[error("grid has no rows")]
    NoRows,
    /// The grid was given rows without any cells.
    #[error("grid has no columns")]
    NoColumns,
    /// A row differs in length from the first row.
    #[error("row {row} has {found} cells but the first row has {expected}")]
    Jagged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Rectangular maze of open and walled cells.
///
/// This structure stores the cells row-major in a single buffer. It offers no mutation methods:
/// editing walls is the business of whoever builds the grid, and the search engine only ever
/// borrows it immutably, so a grid cannot change while a trace is being recorded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns, identical for every row.
    cols: usize,
    /// Cell states, row-major.
    cells: Vec<CellState>,
}

impl Grid {
    /// Builds a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// This function returns a [`ShapeError`] if:
    /// - There are no rows, or the first row is empty
    /// - Any row differs in length from the first one
    pub fn new(rows: Vec<Vec<CellState>>) -> Result<Self, ShapeError> {
        let cols = rows.first().ok_or(ShapeError::NoRows)?.len();
        if cols == 0 {
            return Err(ShapeError::NoColumns);
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, states) in rows.into_iter().enumerate() {
            if states.len() != cols {
                return Err(ShapeError::Jagged {
                    row,
                    expected: cols,
                    found: states.len(),
                });
            }
            cells.extend(states);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Builds a grid where every cell has the same state.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, state: CellState) -> Result<Self, ShapeError> {
        if rows == 0 {
            return Err(ShapeError::NoRows);
        }
        if cols == 0 {
            return Err(ShapeError::NoColumns);
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![state; rows * cols],
        })
    }

    /// Builds a grid with no walls.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if either dimension is zero.
    pub fn open(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        Self::filled(rows, cols, CellState::Open)
    }

    /// Builds a grid whose outer ring is walled and whose interior is open.
    ///
    /// This is the blank maze a wall editor starts from. Grids fewer than three cells across in
    /// either dimension come out as solid wall.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if either dimension is zero.
    pub fn with_border(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let mut grid = Self::open(rows, cols)?;

        for (idx, state) in grid.cells.iter_mut().enumerate() {
            let (row, col) = (idx / cols, idx % cols);
            if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
                *state = CellState::Wall;
            }
        }

        Ok(grid)
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the cell lies inside the grid.
    #[must_use]
    pub const fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Returns the state of a cell, or [`None`] if it lies outside the grid.
    #[must_use]
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        if !self.is_in_bounds(cell) {
            return None;
        }

        self.cells.get(cell.row * self.cols + cell.col).copied()
    }

    /// Returns `true` if the cell is inside the grid and walkable.
    ///
    /// Cells outside the grid are never open.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.state(cell) == Some(CellState::Open)
    }

    /// Enumerates the in-bounds orthogonal neighbours of a cell in the given order.
    ///
    /// Neighbours are filtered by bounds only. Walls are returned like any other cell; deciding
    /// whether a neighbour can be entered is left to the caller.
    pub fn neighbors<'grid>(
        &'grid self,
        cell: Cell,
        order: &'grid [Direction],
    ) -> impl Iterator<Item = Cell> + 'grid {
        order
            .iter()
            .filter_map(move |&direction| cell.step(direction))
            .filter(move |&neighbor| self.is_in_bounds(neighbor))
    }

    /// Iterates over every cell of the grid with its state, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| (Cell::new(idx / cols, idx % cols), state))
    }

    /// Number of walkable cells in the grid.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state == CellState::Open)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, state) in self.iter() {
            if cell.col == 0 && cell.row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", state.symbol())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_valid_rows() {
        let grid = Grid::new(vec![
            vec![CellState::Wall, CellState::Open, CellState::Wall],
            vec![CellState::Open, CellState::Open, CellState::Open],
        ])
        .expect("rectangular rows should build a grid");

        assert_eq!(grid.rows(), 2, "grid should have two rows");
        assert_eq!(grid.cols(), 3, "grid should have three columns");
        assert_eq!(grid.state(Cell::new(0, 0)), Some(CellState::Wall), "top left is a wall");
        assert_eq!(grid.state(Cell::new(1, 2)), Some(CellState::Open), "bottom right is open");
    }

    #[test]
    fn test_grid_new_jagged_rows() {
        let result = Grid::new(vec![
            vec![CellState::Open, CellState::Open],
            vec![CellState::Open, CellState::Open],
            vec![CellState::Open],
        ]);

        assert_eq!(
            result,
            Err(ShapeError::Jagged {
                row: 2,
                expected: 2,
                found: 1
            }),
            "a short row should be rejected"
        );
    }

    #[test]
    fn test_grid_new_empty() {
        assert_eq!(Grid::new(Vec::new()), Err(ShapeError::NoRows), "no rows");
        assert_eq!(
            Grid::new(vec![Vec::new(), Vec::new()]),
            Err(ShapeError::NoColumns),
            "empty rows"
        );
    }

    #[test]
    fn test_grid_filled_zero_dimensions() {
        assert_eq!(Grid::open(0, 4), Err(ShapeError::NoRows), "zero rows");
        assert_eq!(Grid::open(4, 0), Err(ShapeError::NoColumns), "zero columns");
    }

    #[test]
    fn test_grid_with_border() {
        let grid = Grid::with_border(5, 5).expect("5x5 grid should build");

        assert_eq!(grid.open_count(), 9, "only the 3x3 interior should be open");
        assert!(!grid.is_open(Cell::new(0, 2)), "top border is walled");
        assert!(!grid.is_open(Cell::new(4, 2)), "bottom border is walled");
        assert!(!grid.is_open(Cell::new(2, 0)), "left border is walled");
        assert!(!grid.is_open(Cell::new(2, 4)), "right border is walled");
        assert!(grid.is_open(Cell::new(2, 2)), "centre is open");
    }

    #[test]
    fn test_grid_with_border_too_small_for_interior() {
        let grid = Grid::with_border(2, 7).expect("2x7 grid should build");

        assert_eq!(grid.open_count(), 0, "a two-row grid is all border");
    }

    #[test]
    fn test_is_in_bounds() {
        let grid = Grid::open(3, 4).expect("3x4 grid should build");

        assert!(grid.is_in_bounds(Cell::new(0, 0)), "origin is in bounds");
        assert!(grid.is_in_bounds(Cell::new(2, 3)), "far corner is in bounds");
        assert!(!grid.is_in_bounds(Cell::new(3, 0)), "row past the end");
        assert!(!grid.is_in_bounds(Cell::new(0, 4)), "column past the end");
    }

    #[test]
    fn test_is_open_out_of_bounds() {
        let grid = Grid::open(2, 2).expect("2x2 grid should build");

        assert!(!grid.is_open(Cell::new(5, 5)), "cells outside the grid are never open");
        assert_eq!(grid.state(Cell::new(2, 0)), None, "no state outside the grid");
    }

    #[test]
    fn test_neighbors_breadth_first_order() {
        let grid = Grid::open(3, 3).expect("3x3 grid should build");

        let neighbors: Vec<Cell> = grid
            .neighbors(Cell::new(1, 1), &Direction::BREADTH_FIRST)
            .collect();

        assert_eq!(
            neighbors,
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ],
            "neighbours should come up, down, left, right"
        );
    }

    #[test]
    fn test_neighbors_depth_first_order() {
        let grid = Grid::open(3, 3).expect("3x3 grid should build");

        let neighbors: Vec<Cell> = grid
            .neighbors(Cell::new(1, 1), &Direction::DEPTH_FIRST)
            .collect();

        assert_eq!(
            neighbors,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(0, 1)
            ],
            "neighbours should come right, down, left, up"
        );
    }

    #[test]
    fn test_neighbors_filtered_by_bounds_only() {
        let grid = Grid::with_border(3, 3).expect("3x3 grid should build");

        let corner: Vec<Cell> = grid
            .neighbors(Cell::new(0, 0), &Direction::BREADTH_FIRST)
            .collect();
        let centre: Vec<Cell> = grid
            .neighbors(Cell::new(1, 1), &Direction::BREADTH_FIRST)
            .collect();

        assert_eq!(
            corner,
            vec![Cell::new(1, 0), Cell::new(0, 1)],
            "the corner has only two neighbours"
        );
        assert_eq!(centre.len(), 4, "walls are still reported as neighbours");
    }

    #[test]
    fn test_cell_step_saturates_at_origin() {
        let origin = Cell::new(0, 0);

        assert_eq!(origin.step(Direction::Up), None, "no row above zero");
        assert_eq!(origin.step(Direction::Left), None, "no column left of zero");
        assert_eq!(origin.step(Direction::Down), Some(Cell::new(1, 0)), "down");
        assert_eq!(origin.step(Direction::Right), Some(Cell::new(0, 1)), "right");
    }

    #[test]
    fn test_cell_manhattan_and_adjacency() {
        let cell = Cell::new(2, 3);

        assert_eq!(cell.manhattan(Cell::new(5, 1)), 5, "three rows and two columns");
        assert!(cell.is_adjacent(Cell::new(2, 4)), "horizontal neighbour");
        assert!(!cell.is_adjacent(Cell::new(3, 4)), "diagonal is not adjacent");
        assert!(!cell.is_adjacent(cell), "a cell is not adjacent to itself");
    }

    #[test]
    fn test_cell_ordering_is_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0), "rows compare first");
        assert!(Cell::new(1, 2) < Cell::new(1, 3), "then columns");
    }

    #[test]
    fn test_grid_display() {
        let grid = Grid::with_border(3, 4).expect("3x4 grid should build");

        assert_eq!(grid.to_string(), "####\n#..#\n####", "border and open interior");
    }

    #[test]
    fn test_cell_state_symbols() {
        for state in [CellState::Open, CellState::Wall] {
            assert_eq!(
                CellState::from_symbol(state.symbol()),
                Some(state),
                "symbol should read back as the same state"
            );
        }
        assert_eq!(CellState::from_symbol('x'), None, "unknown symbol");
    }
}

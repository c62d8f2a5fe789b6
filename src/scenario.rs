//! Plain-text maze format and the default scenario.
//!
//! This module reads mazes written one row per line, where `#` is a wall, `.` is open, `S` marks
//! the start and `E` marks the end. Both markers sit on open cells. A bare [`Grid`] uses the same
//! format without the markers.

use std::{fmt, str::FromStr, sync::LazyLock};

use thiserror::Error;

use crate::{
    algorithm::Algorithm,
    engine,
    grid::{Cell, CellState, Grid, ShapeError},
    trace::Trace,
};

/// Symbol of the start marker.
const START_SYMBOL: char = 'S';

/// Symbol of the end marker.
const END_SYMBOL: char = 'E';

/// Endpoint markers of the text format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The `S` marker.
    Start,
    /// The `E` marker.
    End,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start ({START_SYMBOL})"),
            Self::End => write!(f, "end ({END_SYMBOL})"),
        }
    }
}

/// Failures while reading the plain-text maze format.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside the format's alphabet.
    #[error("unexpected symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        col: usize,
    },
    /// A marker the scenario needs never appears.
    #[error("maze has no {0} marker")]
    MissingMarker(Marker),
    /// A marker appears more than once.
    #[error("maze has a second {marker} marker at {at}")]
    DuplicateMarker {
        /// Which marker is repeated.
        marker: Marker,
        /// Position of the repeated occurrence.
        at: Cell,
    },
    /// The rows do not form a valid rectangle.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Grid together with the endpoints of a search.
///
/// This structure is what the external grid supplier hands to the engine: an immutable maze and
/// the cells to search between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// The maze.
    pub grid: Grid,
    /// Cell the search starts from.
    pub start: Cell,
    /// Cell the search tries to reach.
    pub end: Cell,
}

impl Scenario {
    /// Runs a search over this scenario.
    #[must_use]
    pub fn search(&self, algorithm: Algorithm) -> Trace {
        engine::search(&self.grid, self.start, self.end, algorithm)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        DEFAULT_SCENARIO
            .parse()
            .expect("failed to parse the default scenario")
    }
}

impl FromStr for Scenario {
    type Err = ParseError;

    /// Reads a maze with exactly one `S` and one `E` marker.
    ///
    /// Whitespace around the whole document is ignored.
    ///
    /// # Errors
    ///
    /// This function returns a [`ParseError`] if:
    /// - A row contains a character other than `#`, `.`, `S` or `E`
    /// - Either marker is missing or appears more than once
    /// - The rows are empty or not all the same length
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let layout = read(input, true)?;

        Ok(Self {
            grid: layout.grid,
            start: layout
                .start
                .ok_or(ParseError::MissingMarker(Marker::Start))?,
            end: layout.end.ok_or(ParseError::MissingMarker(Marker::End))?,
        })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, state) in self.grid.iter() {
            if cell.col == 0 && cell.row > 0 {
                writeln!(f)?;
            }

            let symbol = if cell == self.start {
                START_SYMBOL
            } else if cell == self.end {
                END_SYMBOL
            } else {
                state.symbol()
            };
            write!(f, "{symbol}")?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    /// Reads a maze of `#` and `.` characters, one row per line.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on any other character, including the endpoint markers, or if the
    /// rows do not form a rectangle.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        read(input, false).map(|layout| layout.grid)
    }
}

/// Result of reading the text format: the grid and any markers found on it.
struct Layout {
    /// Cell states read from the text.
    grid: Grid,
    /// Position of the `S` marker, if any.
    start: Option<Cell>,
    /// Position of the `E` marker, if any.
    end: Option<Cell>,
}

/// Reads the text format, accepting endpoint markers only when `markers` is set.
fn read(input: &str, markers: bool) -> Result<Layout, ParseError> {
    let mut start = None;
    let mut end = None;
    let mut rows = Vec::new();

    for (row, line) in input.trim().lines().enumerate() {
        let mut states = Vec::with_capacity(line.len());

        for (col, symbol) in line.chars().enumerate() {
            let cell = Cell::new(row, col);
            let state = match symbol {
                START_SYMBOL if markers => place(&mut start, Marker::Start, cell)?,
                END_SYMBOL if markers => place(&mut end, Marker::End, cell)?,
                other => CellState::from_symbol(other).ok_or(ParseError::UnknownSymbol {
                    symbol: other,
                    row,
                    col,
                })?,
            };
            states.push(state);
        }

        rows.push(states);
    }

    Ok(Layout {
        grid: Grid::new(rows)?,
        start,
        end,
    })
}

/// Records a marker position, rejecting a second occurrence.
///
/// Markers always sit on open cells, so the state of the marked cell is returned.
fn place(slot: &mut Option<Cell>, marker: Marker, at: Cell) -> Result<CellState, ParseError> {
    if slot.replace(at).is_some() {
        return Err(ParseError::DuplicateMarker { marker, at });
    }

    Ok(CellState::Open)
}

/// Bundled maze used when no other is supplied.
///
/// A 15x15 bordered maze with its start in the top-left corner and its end in the bottom-right.
static DEFAULT_SCENARIO: LazyLock<&str> = LazyLock::new(|| {
    "\
###############
#S....#.......#
#.###.#.#####.#
#.#...#.#.....#
#.#.###.#.###.#
#.#.....#...#.#
#.#####.###.#.#
#.....#...#.#.#
#####.###.#.#.#
#...#...#.#...#
#.#.###.#.###.#
#.#.....#...#.#
#.#########.#.#
#...........#E#
###############"
});

//! Grid pathfinding engine that records replayable search traces.
//!
//! This crate runs a graph search over a rectangular maze of open and walled cells and returns a
//! [`Trace`]: every intermediate state of the search, in order, ready for frame-by-frame playback.
//! Breadth-first, depth-first, Dijkstra and A* searches share one traversal loop and differ only in
//! their [`Frontier`](frontier::Frontier) discipline and neighbour order.
//!
//! The main entry points are [`search`] and [`search_named`]. Grids come either from
//! [`Grid::new`] or from the plain-text format read by [`Scenario`], and a recorded trace is
//! replayed with a [`Playback`] cursor.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow until the crate is published."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The command-line dependencies are used in the binary crate."
)]

pub mod algorithm;
pub mod engine;
pub mod frontier;
pub mod grid;
pub mod playback;
pub mod scenario;
pub mod trace;

pub use algorithm::{Algorithm, UnknownIdentifier};
pub use engine::{explore, search, search_named};
pub use grid::{Cell, CellState, Direction, Grid, ShapeError};
pub use playback::Playback;
pub use scenario::{Marker, ParseError, Scenario};
pub use trace::{Outcome, Step, StepStatus, Trace};

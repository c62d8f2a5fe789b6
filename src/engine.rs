//! Search engine that records a replayable trace of a grid traversal.
//!
//! Every search variant runs through [`explore`], a single traversal loop parameterized by a
//! [`Frontier`] and a neighbour order. The loop snapshots its state after each removal from the
//! frontier and returns the complete [`Trace`] once the destination is reached or the frontier runs
//! dry.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    algorithm::Algorithm,
    frontier::{Entry, Frontier, Priority, Queue, Stack},
    grid::{Cell, Direction, Grid},
    trace::{Step, Trace},
};

/// Runs the selected search from `start` to `end` and returns its trace.
///
/// The trace is empty if either endpoint lies outside the grid or on a wall. Otherwise its last
/// step is flagged either complete (the destination was reached) or no-path (every reachable cell
/// was explored without reaching it).
#[must_use]
pub fn search(grid: &Grid, start: Cell, end: Cell, algorithm: Algorithm) -> Trace {
    let order = algorithm.neighbor_order();

    debug!(%algorithm, %start, %end, rows = grid.rows(), cols = grid.cols(), "starting search");

    match algorithm {
        Algorithm::BreadthFirst => explore(grid, start, end, Queue::default(), &order),
        Algorithm::DepthFirst => explore(grid, start, end, Stack::default(), &order),
        Algorithm::Dijkstra => explore(grid, start, end, Priority::by_distance(), &order),
        Algorithm::AStar => explore(grid, start, end, Priority::by_estimate(end), &order),
    }
}

/// Runs the search named by a textual identifier.
///
/// Identifiers are those accepted by [`Algorithm`]'s [`FromStr`](std::str::FromStr)
/// implementation. An unrecognized identifier yields an empty trace, the same as a rejected
/// endpoint.
#[must_use]
pub fn search_named(grid: &Grid, start: Cell, end: Cell, id: &str) -> Trace {
    match id.parse::<Algorithm>() {
        Ok(algorithm) => search(grid, start, end, algorithm),
        Err(err) => {
            debug!(%err, "no search performed");
            Trace::default()
        }
    }
}

/// Traversal loop shared by every search variant.
///
/// The loop starts from a single entry at `start`, marked visited. Each iteration removes the next
/// entry from `frontier`, records a [`Step`], and then either stops (the entry is `end`, in which
/// case a completed copy of the step closes the trace) or inserts every open, unvisited neighbour
/// into the frontier, marking it visited on discovery. When the frontier runs dry the last step is
/// flagged as having found no path.
///
/// Plugging in another [`Frontier`] implementation is all it takes to add a search variant.
#[must_use]
pub fn explore<F: Frontier>(
    grid: &Grid,
    start: Cell,
    end: Cell,
    mut frontier: F,
    order: &[Direction],
) -> Trace {
    let mut steps = Trace::default();

    if !grid.is_open(start) || !grid.is_open(end) {
        debug!(%start, %end, "endpoint is out of bounds or on a wall, no search performed");
        return steps;
    }

    let mut visited = BTreeSet::from([start]);
    frontier.insert(Entry::origin(start));

    while let Some(entry) = frontier.remove() {
        let step = Step::new(
            visited.clone(),
            entry.path.clone(),
            entry.position,
            frontier.positions(),
        );

        if entry.position == end {
            let terminal = step.completed();
            steps.push(step);
            steps.push(terminal);

            debug!(
                steps = steps.len(),
                distance = entry.distance,
                visited = visited.len(),
                "destination reached"
            );
            return steps;
        }

        steps.push(step);

        for neighbor in grid.neighbors(entry.position, order) {
            if grid.is_open(neighbor) && visited.insert(neighbor) {
                trace!(from = %entry.position, to = %neighbor, "discovered");
                frontier.insert(entry.extend(neighbor));
            }
        }
    }

    steps.mark_no_path();
    debug!(
        steps = steps.len(),
        visited = visited.len(),
        "frontier exhausted without reaching the destination"
    );

    steps
}

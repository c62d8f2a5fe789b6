//! Step snapshots and the trace that orders them.
//!
//! A [`Trace`] is the full record of one search call, materialized before it is handed back, so a
//! playback front end can index into it freely without any engine-side state.

use std::{collections::BTreeSet, slice};

use crate::grid::Cell;

/// Progress marker carried by every [`Step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// The search is still running at this step.
    #[default]
    Exploring,
    /// The destination has been reached; this is the final step of its trace.
    Complete,
    /// The frontier ran dry without reaching the destination; this is the final step of its trace.
    NoPath,
}

/// Immutable snapshot of the search state at one point of its progress.
///
/// Every snapshot owns its own copies of the visited set, the path and the pending frontier, so
/// whatever the search does after emitting it cannot change what it records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Cells discovered so far, in row-major order.
    visited: BTreeSet<Cell>,
    /// Path from the start to [`current`](Step::current()), both included.
    path: Vec<Cell>,
    /// Cell being processed at this step.
    current: Cell,
    /// Cells still waiting in the frontier, in the order the frontier keeps them.
    frontier: Vec<Cell>,
    /// Whether this step ends the trace, and how.
    status: StepStatus,
}

impl Step {
    /// Builds an in-progress snapshot.
    pub(crate) const fn new(
        visited: BTreeSet<Cell>,
        path: Vec<Cell>,
        current: Cell,
        frontier: Vec<Cell>,
    ) -> Self {
        Self {
            visited,
            path,
            current,
            frontier,
            status: StepStatus::Exploring,
        }
    }

    /// Builds the terminal snapshot that follows this one when the destination is reached.
    ///
    /// The copy keeps the visited set, path and current cell, empties the frontier and is flagged
    /// [`StepStatus::Complete`].
    pub(crate) fn completed(&self) -> Self {
        Self {
            visited: self.visited.clone(),
            path: self.path.clone(),
            current: self.current,
            frontier: Vec::new(),
            status: StepStatus::Complete,
        }
    }

    /// Cells discovered so far.
    #[must_use]
    pub const fn visited(&self) -> &BTreeSet<Cell> {
        &self.visited
    }

    /// Path from the start to the current cell, both included.
    #[must_use]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Number of edges in [`path`](Step::path()).
    #[must_use]
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Cell being processed at this step.
    #[must_use]
    pub const fn current(&self) -> Cell {
        self.current
    }

    /// Cells still pending in the frontier.
    ///
    /// Queue and stack frontiers list their cells oldest first; priority frontiers list them in the
    /// order they would be removed.
    #[must_use]
    pub fn frontier(&self) -> &[Cell] {
        &self.frontier
    }

    /// Progress marker of this step.
    #[must_use]
    pub const fn status(&self) -> StepStatus {
        self.status
    }

    /// Returns `true` if the destination was reached at this step.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == StepStatus::Complete
    }

    /// Returns `true` if this is the last step of a search that found no path.
    #[must_use]
    pub fn is_no_path(&self) -> bool {
        self.status == StepStatus::NoPath
    }
}

/// How a search call ended, read off the last step of its trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The start or end was out of bounds or on a wall; nothing was explored.
    Rejected,
    /// The destination was reached.
    Found,
    /// Every reachable cell was explored without reaching the destination.
    NoPath,
}

/// Ordered, read-only record of every step of one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    /// Steps in the order the search produced them.
    steps: Vec<Step>,
}

impl Trace {
    /// Appends a step.
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Flags the last recorded step as the end of a search that found no path.
    ///
    /// No new step is added. An empty trace stays empty.
    pub(crate) fn mark_no_path(&mut self) {
        if let Some(last) = self.steps.last_mut() {
            last.status = StepStatus::NoPath;
        }
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the search was rejected before exploring anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Returns the final step, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// All steps as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// How the search ended.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.last().map(Step::status) {
            None => Outcome::Rejected,
            Some(StepStatus::Complete) => Outcome::Found,
            Some(StepStatus::Exploring | StepStatus::NoPath) => Outcome::NoPath,
        }
    }

    /// Path from start to end if the destination was reached.
    #[must_use]
    pub fn solution(&self) -> Option<&[Cell]> {
        self.last()
            .filter(|step| step.is_complete())
            .map(Step::path)
    }
}

impl<'trace> IntoIterator for &'trace Trace {
    type Item = &'trace Step;
    type IntoIter = slice::Iter<'trace, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Frontier disciplines shared by every search variant.
//!
//! The traversal loop in [`crate::engine`] is written once against the [`Frontier`] trait. Each
//! algorithm differs only in which frontier it hands to that loop: a FIFO [`Queue`] for
//! breadth-first search, a LIFO [`Stack`] for depth-first search and a min-[`Priority`] frontier
//! for Dijkstra and A*.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, VecDeque},
};

use crate::grid::Cell;

/// Pending-to-visit record: a cell, the path that reached it and that path's length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Cell to be processed.
    pub position: Cell,
    /// Cells from the start up to and including [`position`](Entry::position).
    pub path: Vec<Cell>,
    /// Number of edges traversed from the start.
    pub distance: usize,
}

impl Entry {
    /// Builds the entry the search starts from.
    #[must_use]
    pub fn origin(start: Cell) -> Self {
        Self {
            position: start,
            path: vec![start],
            distance: 0,
        }
    }

    /// Builds the entry for a neighbour reached from this one.
    #[must_use]
    pub fn extend(&self, next: Cell) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);

        Self {
            position: next,
            path,
            distance: self.distance + 1,
        }
    }
}

/// Order in which discovered cells are handed back to the traversal loop.
pub trait Frontier {
    /// Adds a newly discovered entry.
    fn insert(&mut self, entry: Entry);

    /// Removes the entry to process next, or returns [`None`] when nothing is pending.
    fn remove(&mut self) -> Option<Entry>;

    /// Positions of the pending entries, as recorded in a step snapshot.
    fn positions(&self) -> Vec<Cell>;
}

/// First-in, first-out frontier used by breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct Queue {
    /// Pending entries, oldest at the front.
    entries: VecDeque<Entry>,
}

impl Frontier for Queue {
    fn insert(&mut self, entry: Entry) {
        self.entries.push_back(entry);
    }

    fn remove(&mut self) -> Option<Entry> {
        self.entries.pop_front()
    }

    fn positions(&self) -> Vec<Cell> {
        self.entries.iter().map(|entry| entry.position).collect()
    }
}

/// Last-in, first-out frontier used by depth-first search.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    /// Pending entries, newest at the end.
    entries: Vec<Entry>,
}

impl Frontier for Stack {
    fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn remove(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// Lists positions bottom of the stack first, so the last one is removed next.
    fn positions(&self) -> Vec<Cell> {
        self.entries.iter().map(|entry| entry.position).collect()
    }
}

/// Heap slot of a [`Priority`] frontier.
#[derive(Debug)]
struct Ranked {
    /// Cost the frontier orders by; lower is removed first.
    priority: usize,
    /// Insertion counter; among equal priorities the oldest is removed first.
    sequence: u64,
    /// The pending entry itself.
    entry: Entry,
}

impl Ranked {
    /// Ordering key, reversed so that [`BinaryHeap`] (a max-heap) pops the cheapest, oldest slot.
    const fn key(&self) -> (Reverse<usize>, Reverse<u64>) {
        (Reverse(self.priority), Reverse(self.sequence))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-priority frontier used by Dijkstra and A*.
///
/// Entries are ranked by their distance from the start, plus the Manhattan distance to a goal when
/// one is set. Ties go to the entry inserted first, which keeps traces deterministic.
#[derive(Debug, Default)]
pub struct Priority {
    /// Pending entries.
    heap: BinaryHeap<Ranked>,
    /// Goal used for the A* estimate; [`None`] ranks by distance alone.
    goal: Option<Cell>,
    /// Next insertion counter.
    sequence: u64,
}

impl Priority {
    /// Frontier ranked by accumulated distance only (Dijkstra).
    #[must_use]
    pub fn by_distance() -> Self {
        Self::default()
    }

    /// Frontier ranked by accumulated distance plus the Manhattan estimate to `goal` (A*).
    #[must_use]
    pub fn by_estimate(goal: Cell) -> Self {
        Self {
            goal: Some(goal),
            ..Self::default()
        }
    }

    /// Cost an entry is ranked by.
    fn rank(&self, entry: &Entry) -> usize {
        entry.distance
            + self
                .goal
                .map_or(0, |goal| entry.position.manhattan(goal))
    }
}

impl Frontier for Priority {
    fn insert(&mut self, entry: Entry) {
        let priority = self.rank(&entry);
        let sequence = self.sequence;
        self.sequence += 1;

        self.heap.push(Ranked {
            priority,
            sequence,
            entry,
        });
    }

    fn remove(&mut self) -> Option<Entry> {
        self.heap.pop().map(|ranked| ranked.entry)
    }

    /// Lists positions in the order they would be removed.
    fn positions(&self) -> Vec<Cell> {
        let mut ranked: Vec<&Ranked> = self.heap.iter().collect();
        ranked.sort_unstable_by(|left, right| right.cmp(left));
        ranked.into_iter().map(|slot| slot.entry.position).collect()
    }
}

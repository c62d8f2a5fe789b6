//! Identifiers for the search variants the engine can run.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::grid::Direction;

/// Search variant selector.
///
/// All variants share the traversal loop in [`crate::engine`]; they differ only in frontier
/// discipline and neighbour order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search over a FIFO queue. Finds a path with the fewest edges.
    BreadthFirst,
    /// Depth-first search over a LIFO stack.
    DepthFirst,
    /// Cost-ordered search over a min-priority frontier.
    Dijkstra,
    /// Cost-plus-estimate search over a min-priority frontier, using the Manhattan distance to the
    /// destination as its estimate.
    AStar,
}

impl Algorithm {
    /// Every variant, in menu order.
    pub const ALL: [Self; 4] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::Dijkstra,
        Self::AStar,
    ];

    /// Short identifier, accepted back by the [`FromStr`] implementation.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-first search",
            Self::DepthFirst => "Depth-first search",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// Order in which this variant enumerates the neighbours of a cell.
    #[must_use]
    pub const fn neighbor_order(self) -> [Direction; 4] {
        match self {
            Self::DepthFirst => Direction::DEPTH_FIRST,
            Self::BreadthFirst | Self::Dijkstra | Self::AStar => Direction::BREADTH_FIRST,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Algorithm identifier that names no known variant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown search algorithm {0:?}; expected one of bfs, dfs, dijkstra or astar")]
pub struct UnknownIdentifier(pub String);

impl FromStr for Algorithm {
    type Err = UnknownIdentifier;

    /// Parses an identifier, ignoring case and surrounding whitespace.
    ///
    /// Both the short and the long spellings are accepted: `bfs` or `breadth-first`, `dfs` or
    /// `depth-first`, `dijkstra`, and `astar`, `a-star` or `a*`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a-star" | "a*" => Ok(Self::AStar),
            _ => Err(UnknownIdentifier(input.to_owned())),
        }
    }
}

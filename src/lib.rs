//! # maze_pathfinding
//!
//! Pathfinding between two cells of a 2D grid maze using four
//! interchangeable strategies: depth-first and breadth-first search on a
//! purpose-built double-ended list, and A* /
//! [Jump Point Search](https://en.wikipedia.org/wiki/Jump_point_search) on a
//! purpose-built binary min-heap. Movement is 4-directional by default and
//! 8-directional when diagonals are enabled; all edges have uniform cost.
//!
//! The single entry point is [solve]:
//!
//! ```
//! use maze_pathfinding::{solve, Algorithm, Cell, MazeGrid, SolveOptions};
//!
//! let grid = MazeGrid::new(5, 5, true);
//! let result = solve(
//!     &grid,
//!     Cell::new(0, 0),
//!     Cell::new(4, 4),
//!     Algorithm::Bfs,
//!     &SolveOptions::default(),
//! )
//! .unwrap();
//! assert!(result.found);
//! assert_eq!(result.path.len(), 9); // 8 unit steps
//! ```
pub mod cell;
pub mod dlist;
pub mod grid;
pub mod heap;
pub mod node;
pub mod solver;

use core::fmt;
use std::collections::VecDeque;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

pub use crate::cell::{Cell, Direction};
pub use crate::dlist::DoubleEndedList;
pub use crate::grid::{AsciiMaze, MazeGrid, MazeParseError};
pub use crate::heap::MinHeap;
pub use crate::node::{NodePool, SearchNode};
pub use crate::solver::{solve, Algorithm, Heuristic, SearchResult, SolveError, SolveOptions};

/// Hash set with deterministic insertion-order iteration, used for explored
/// sets so diagnostics and visualizations are reproducible.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Cost of a cardinal step in scaled integer units.
pub const C: i32 = 1000;
/// Cost of a diagonal step: ⌊C·√2⌋, slightly under the true value so the
/// octile heuristic stays admissible.
pub const D: i32 = 1414;
/// Helper constant for the octile closed form, `2·C − D`.
pub const E: i32 = 2 * C - D;

/// Converts a scaled integer path cost to its floating point equivalent
/// where a cardinal step costs 1.0.
pub fn cost_as_float(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}

/// Error raised by [DoubleEndedList] and [MinHeap] when popping or
/// extracting from an empty collection. The solver loops guard every pop
/// with an emptiness check, so this surfacing from [solve] indicates a
/// broken internal invariant rather than a caller mistake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyCollection;

impl fmt::Display for EmptyCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "pop from an empty collection")
    }
}

impl std::error::Error for EmptyCollection {}

/// Turns a sequence of waypoints (such as the jump points produced by JPS)
/// into a unit-step path on the grid. Due to path symmetry this is typically
/// one of many ways to follow the waypoints; steps move diagonally first,
/// then straight.
pub fn expand_waypoints(waypoints: Vec<Cell>) -> Vec<Cell> {
    let mut waypoint_queue: VecDeque<Cell> = waypoints.into_iter().collect();
    let Some(mut current) = waypoint_queue.pop_front() else {
        return Vec::new();
    };
    let mut path = vec![current];
    for next in waypoint_queue {
        while current.chebyshev_distance(&next) >= 1 {
            let Some(delta) = current.direction_to(&next) else {
                break;
            };
            current = current + delta;
            path.push(current);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_straight_segment() {
        let path = expand_waypoints(vec![Cell::new(0, 0), Cell::new(0, 3)]);
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(0, 3),
            ]
        );
    }

    #[test]
    fn expand_mixed_segment() {
        // Diagonal steps are taken first, then straight ones.
        let path = expand_waypoints(vec![Cell::new(0, 0), Cell::new(2, 3)]);
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 1),
                Cell::new(2, 2),
                Cell::new(2, 3),
            ]
        );
    }

    #[test]
    fn expand_degenerate_inputs() {
        assert!(expand_waypoints(Vec::new()).is_empty());
        assert_eq!(
            expand_waypoints(vec![Cell::new(1, 1)]),
            vec![Cell::new(1, 1)]
        );
    }

    #[test]
    fn scaled_costs() {
        assert_eq!(cost_as_float(8 * C), 8.0);
        assert!((cost_as_float(D) - std::f64::consts::SQRT_2).abs() < 1e-3);
    }
}

use core::fmt;

use log::info;

use crate::cell::Cell;
use crate::grid::MazeGrid;
use crate::{EmptyCollection, FxIndexSet};

pub mod informed;
pub mod jps;
pub mod uninformed;

/// The available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Depth-first search: stack discipline, no optimality guarantee.
    Dfs,
    /// Breadth-first search: queue discipline, shortest-hop paths on
    /// unit-cost grids.
    Bfs,
    /// A* with an admissible heuristic: cost-optimal paths.
    Astar,
    /// Jump Point Search: A* with symmetry-pruned expansions, same costs.
    Jps,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::Astar => "A*",
            Algorithm::Jps => "JPS",
        };
        write!(f, "{}", name)
    }
}

/// Heuristic estimate used by the informed solvers (A* and JPS).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Sum of axis distances. Admissible for 4-directional movement only;
    /// with diagonals enabled it can overestimate and cost optimality is no
    /// longer guaranteed.
    Manhattan,
    /// Diagonal-aware closed form. Admissible for both movement modes.
    Octile,
    /// Straight-line distance, capped at the octile value so that rounding
    /// never puts it above the cost of a pure diagonal path. Admissible for
    /// both modes.
    Euclidean,
}

/// Knobs recognized by [solve]. `heuristic` only affects the informed
/// algorithms; `max_expansions` bounds the number of node expansions and
/// makes [solve] fail with [SolveError::BudgetExhausted] when exceeded.
#[derive(Clone, Debug)]
pub struct SolveOptions {
    pub allow_diagonal: bool,
    pub heuristic: Heuristic,
    pub max_expansions: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> SolveOptions {
        SolveOptions {
            allow_diagonal: false,
            heuristic: Heuristic::Manhattan,
            max_expansions: None,
        }
    }
}

/// The outcome of a completed search. "No path exists" is a normal outcome
/// with `found == false` and an empty path, not an error; `explored` then
/// covers every cell reachable from the start.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub found: bool,
    /// Unit-step cells from start to goal inclusive; empty when not found.
    pub path: Vec<Cell>,
    /// Every cell that was expanded, in expansion order.
    pub explored: FxIndexSet<Cell>,
    /// Number of node expansions performed (stale heap entries excluded).
    pub nodes_expanded: usize,
}

/// Errors raised by [solve].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Start or goal is out of bounds or blocked. Checked before any
    /// traversal.
    InvalidEndpoint(Cell),
    /// The expansion budget given in [SolveOptions::max_expansions] was
    /// exhausted before the search terminated.
    BudgetExhausted { expanded: usize },
    /// An internal collection was popped while empty. Unreachable while the
    /// solver loop invariants hold.
    EmptyCollection(EmptyCollection),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::InvalidEndpoint(cell) => {
                write!(f, "endpoint {} is out of bounds or blocked", cell)
            }
            SolveError::BudgetExhausted { expanded } => {
                write!(f, "expansion budget exhausted after {} nodes", expanded)
            }
            SolveError::EmptyCollection(e) => write!(f, "internal invariant violation: {}", e),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<EmptyCollection> for SolveError {
    fn from(e: EmptyCollection) -> SolveError {
        SolveError::EmptyCollection(e)
    }
}

/// Intermediate outcome shared by the solver engines; [solve] wraps it into
/// a [SearchResult].
pub(crate) struct SearchOutcome {
    pub found: bool,
    pub path: Vec<Cell>,
    pub explored: FxIndexSet<Cell>,
    pub nodes_expanded: usize,
}

impl SearchOutcome {
    pub(crate) fn not_found(explored: FxIndexSet<Cell>, nodes_expanded: usize) -> SearchOutcome {
        SearchOutcome {
            found: false,
            path: Vec::new(),
            explored,
            nodes_expanded,
        }
    }
}

/// Finds a path from `start` to `goal` on `grid` using the chosen
/// `algorithm`. Pure function of its inputs: repeated calls with identical
/// arguments return identical results.
///
/// Fails fast with [SolveError::InvalidEndpoint] if either endpoint is out
/// of bounds or blocked. A goal that is walkable but unreachable is not an
/// error; the search exhausts the reachable space and reports
/// `found == false`.
pub fn solve(
    grid: &MazeGrid,
    start: Cell,
    goal: Cell,
    algorithm: Algorithm,
    options: &SolveOptions,
) -> Result<SearchResult, SolveError> {
    for endpoint in [start, goal] {
        if !grid.is_walkable(endpoint) {
            return Err(SolveError::InvalidEndpoint(endpoint));
        }
    }
    info!(
        "solving {}x{} maze from {} to {} with {}",
        grid.rows(),
        grid.cols(),
        start,
        goal,
        algorithm
    );
    let outcome = match algorithm {
        Algorithm::Dfs => uninformed::dfs(grid, start, goal, options),
        Algorithm::Bfs => uninformed::bfs(grid, start, goal, options),
        Algorithm::Astar => informed::astar(grid, start, goal, options),
        Algorithm::Jps => jps::jps(grid, start, goal, options),
    }?;
    info!(
        "{}: found: {}, nodes expanded: {}, path length: {}",
        algorithm,
        outcome.found,
        outcome.nodes_expanded,
        outcome.path.len()
    );
    Ok(SearchResult {
        found: outcome.found,
        path: outcome.path,
        explored: outcome.explored,
        nodes_expanded: outcome.nodes_expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoints_fail_fast() {
        let mut grid = MazeGrid::new(3, 3, true);
        grid.set_walkable(Cell::new(1, 1), false);
        let options = SolveOptions::default();
        for algorithm in [
            Algorithm::Dfs,
            Algorithm::Bfs,
            Algorithm::Astar,
            Algorithm::Jps,
        ] {
            // Blocked start.
            assert_eq!(
                solve(&grid, Cell::new(1, 1), Cell::new(0, 0), algorithm, &options),
                Err(SolveError::InvalidEndpoint(Cell::new(1, 1)))
            );
            // Out-of-bounds goal.
            assert_eq!(
                solve(&grid, Cell::new(0, 0), Cell::new(3, 3), algorithm, &options),
                Err(SolveError::InvalidEndpoint(Cell::new(3, 3)))
            );
        }
    }

    #[test]
    fn budget_exhaustion_is_distinguishable() {
        let grid = MazeGrid::new(8, 8, true);
        let options = SolveOptions {
            max_expansions: Some(3),
            ..SolveOptions::default()
        };
        for algorithm in [
            Algorithm::Dfs,
            Algorithm::Bfs,
            Algorithm::Astar,
            Algorithm::Jps,
        ] {
            let result = solve(&grid, Cell::new(0, 0), Cell::new(7, 7), algorithm, &options);
            assert!(matches!(result, Err(SolveError::BudgetExhausted { .. })));
        }
    }

    #[test]
    fn start_equals_goal() {
        let grid = MazeGrid::new(3, 3, true);
        let options = SolveOptions::default();
        for algorithm in [
            Algorithm::Dfs,
            Algorithm::Bfs,
            Algorithm::Astar,
            Algorithm::Jps,
        ] {
            let result =
                solve(&grid, Cell::new(1, 1), Cell::new(1, 1), algorithm, &options).unwrap();
            assert!(result.found);
            assert_eq!(result.path, vec![Cell::new(1, 1)]);
        }
    }

    #[test]
    fn all_algorithms_solve_an_ascii_maze() {
        let maze = MazeGrid::from_ascii(
            "A..#...\n\
             ##.#.#.\n\
             ...#.#.\n\
             .###.#.\n\
             .....#B\n",
        )
        .unwrap();
        let start = maze.start.unwrap();
        let goal = maze.goal.unwrap();
        let options = SolveOptions::default();
        for algorithm in [
            Algorithm::Dfs,
            Algorithm::Bfs,
            Algorithm::Astar,
            Algorithm::Jps,
        ] {
            let result = solve(&maze.grid, start, goal, algorithm, &options).unwrap();
            assert!(result.found, "{} failed to find a path", algorithm);
            assert_eq!(result.path.first(), Some(&start));
            assert_eq!(result.path.last(), Some(&goal));
            // Every step in the returned path is a legal orthogonal move.
            for pair in result.path.windows(2) {
                assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
                assert!(maze.grid.is_walkable(pair[1]));
            }
        }
    }
}

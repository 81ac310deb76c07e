use std::collections::hash_map::Entry;

use fxhash::FxHashMap;
use num_traits::Zero;

use crate::cell::Cell;
use crate::grid::MazeGrid;
use crate::heap::MinHeap;
use crate::node::{NodePool, SearchNode};
use crate::solver::{SearchOutcome, SolveError, SolveOptions};
use crate::{C, D, E, FxIndexSet};

/// Heuristic value from `cell` to `goal` in scaled integer units, per the
/// chosen [Heuristic](crate::Heuristic) kind.
pub fn heuristic_value(kind: crate::Heuristic, cell: &Cell, goal: &Cell) -> i32 {
    let delta_row = (cell.row - goal.row).abs();
    let delta_col = (cell.col - goal.col).abs();
    // Closed form for the cost of a path taking the maximal number of
    // diagonal steps before going straight.
    let octile = (E * (delta_row - delta_col).abs() + D * (delta_row + delta_col)) / 2;
    match kind {
        crate::Heuristic::Manhattan => C * (delta_row + delta_col),
        crate::Heuristic::Octile => octile,
        crate::Heuristic::Euclidean => {
            let sq = (delta_row * delta_row + delta_col * delta_col) as f64;
            // A diagonal step costs D = ⌊C·√2⌋, so the raw straight-line
            // value can land one unit above a pure diagonal path. The octile
            // value is the optimal cost on an open grid, hence a valid cap.
            ((sq.sqrt() * C as f64) as i32).min(octile)
        }
    }
}

/// Best-first search over successor expansions, shared by A* and JPS.
///
/// The open list is a [MinHeap] keyed by `(f, insertion sequence)`: equal-f
/// entries come out in insertion order, which fixes the tie-breaking policy
/// and makes results reproducible. Instead of a `decrease_key`, a cheaper
/// route to a seen cell inserts a duplicate entry and the stale one is
/// discarded on extraction by comparing against the best known cost
/// (lazy deletion).
///
/// `successors` receives the expanded cell and the cell of its parent node
/// (if any), which is what lets the JPS expander prune by travel direction.
pub(crate) fn informed_search<Cost, FN, IN, FH, FS>(
    start: Cell,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> Result<InformedOutcome, SolveError>
where
    Cost: Zero + Ord + Copy,
    FN: FnMut(Option<&Cell>, &Cell) -> IN,
    IN: IntoIterator<Item = (Cell, Cost)>,
    FH: FnMut(&Cell) -> Cost,
    FS: FnMut(&Cell) -> bool,
{
    let mut pool: NodePool<Cost> = NodePool::new();
    let mut open: MinHeap<(Cost, u64), usize> = MinHeap::new();
    let mut best_cost: FxHashMap<Cell, Cost> = FxHashMap::default();
    let mut explored: FxIndexSet<Cell> = FxIndexSet::default();
    let mut sequence: u64 = 0;
    let mut nodes_expanded = 0usize;

    let root = pool.push(SearchNode::root(start));
    best_cost.insert(start, Cost::zero());
    open.insert((Cost::zero(), sequence), root);

    while !open.is_empty() {
        let ix = open.extract_min()?;
        let node = *pool.get(ix);
        // A cell can sit in the heap several times when better routes to it
        // were found after insertion; only the cheapest entry is expanded.
        if best_cost.get(&node.cell).is_some_and(|&best| node.g > best) {
            continue;
        }
        explored.insert(node.cell);
        if success(&node.cell) {
            return Ok(InformedOutcome {
                waypoints: Some(pool.unwind(ix)),
                explored,
                nodes_expanded,
            });
        }
        nodes_expanded += 1;
        if let Some(budget) = max_expansions {
            if nodes_expanded > budget {
                return Err(SolveError::BudgetExhausted {
                    expanded: nodes_expanded,
                });
            }
        }
        let parent_cell = pool.parent_cell(ix);
        for (successor, move_cost) in successors(parent_cell.as_ref(), &node.cell) {
            let tentative = node.g + move_cost;
            match best_cost.entry(successor) {
                Entry::Occupied(mut e) => {
                    if *e.get() <= tentative {
                        continue;
                    }
                    e.insert(tentative);
                }
                Entry::Vacant(e) => {
                    e.insert(tentative);
                }
            }
            let h = heuristic(&successor);
            let child = pool.push(SearchNode {
                cell: successor,
                parent: ix,
                g: tentative,
                h,
            });
            sequence += 1;
            open.insert((tentative + h, sequence), child);
        }
    }
    Ok(InformedOutcome {
        waypoints: None,
        explored,
        nodes_expanded,
    })
}

pub(crate) struct InformedOutcome {
    /// Expanded-node cells from start to goal, [None] when the open list was
    /// exhausted. For A* these are unit steps; for JPS they are jump points.
    pub waypoints: Option<Vec<Cell>>,
    pub explored: FxIndexSet<Cell>,
    pub nodes_expanded: usize,
}

/// A*: expands one-step neighbors in the grid's fixed order, keyed by
/// `g + h`.
pub(crate) fn astar(
    grid: &MazeGrid,
    start: Cell,
    goal: Cell,
    options: &SolveOptions,
) -> Result<SearchOutcome, SolveError> {
    let outcome = informed_search(
        start,
        |_parent, cell| grid.neighbors_with_cost(cell, options.allow_diagonal),
        |cell| heuristic_value(options.heuristic, cell, &goal),
        |cell| *cell == goal,
        options.max_expansions,
    )?;
    Ok(SearchOutcome {
        found: outcome.waypoints.is_some(),
        path: outcome.waypoints.unwrap_or_default(),
        explored: outcome.explored,
        nodes_expanded: outcome.nodes_expanded,
    })
}

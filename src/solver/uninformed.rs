use fxhash::FxHashSet;

use crate::cell::Cell;
use crate::dlist::DoubleEndedList;
use crate::grid::MazeGrid;
use crate::node::{NodePool, SearchNode};
use crate::solver::{SearchOutcome, SolveError, SolveOptions};
use crate::{C, D, FxIndexSet};

/// Which end of the frontier the next node is taken from. Both disciplines
/// push to the back; popping the back gives a stack (DFS), popping the front
/// gives a queue (BFS).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Discipline {
    Lifo,
    Fifo,
}

/// Depth-first search. Expands the most recently discovered neighbor first,
/// which makes the expansion order the reverse of the grid's fixed neighbor
/// enumeration order. Finds some path, not necessarily a short one.
pub(crate) fn dfs(
    grid: &MazeGrid,
    start: Cell,
    goal: Cell,
    options: &SolveOptions,
) -> Result<SearchOutcome, SolveError> {
    traverse(grid, start, goal, options, Discipline::Lifo)
}

/// Breadth-first search. Level-order expansion yields shortest-hop paths as
/// long as every step costs the same, which holds on this unit-cost grid.
pub(crate) fn bfs(
    grid: &MazeGrid,
    start: Cell,
    goal: Cell,
    options: &SolveOptions,
) -> Result<SearchOutcome, SolveError> {
    traverse(grid, start, goal, options, Discipline::Fifo)
}

fn traverse(
    grid: &MazeGrid,
    start: Cell,
    goal: Cell,
    options: &SolveOptions,
    discipline: Discipline,
) -> Result<SearchOutcome, SolveError> {
    let mut pool: NodePool<i32> = NodePool::new();
    let mut frontier: DoubleEndedList<usize> = DoubleEndedList::new();
    let mut visited: FxHashSet<Cell> = FxHashSet::default();
    let mut explored: FxIndexSet<Cell> = FxIndexSet::default();
    let mut nodes_expanded = 0usize;

    frontier.push_back(pool.push(SearchNode::root(start)));
    visited.insert(start);

    while !frontier.is_empty() {
        let ix = match discipline {
            Discipline::Lifo => frontier.pop_back()?,
            Discipline::Fifo => frontier.pop_front()?,
        };
        let node = *pool.get(ix);
        explored.insert(node.cell);
        if node.cell == goal {
            return Ok(SearchOutcome {
                found: true,
                path: pool.unwind(ix),
                explored,
                nodes_expanded,
            });
        }
        nodes_expanded += 1;
        if let Some(budget) = options.max_expansions {
            if nodes_expanded > budget {
                return Err(SolveError::BudgetExhausted {
                    expanded: nodes_expanded,
                });
            }
        }
        for neighbor in grid.neighbors(&node.cell, options.allow_diagonal) {
            // Each cell enters the frontier at most once.
            if visited.insert(neighbor) {
                let step = if neighbor.row != node.cell.row && neighbor.col != node.cell.col {
                    D
                } else {
                    C
                };
                frontier.push_back(pool.push(SearchNode {
                    cell: neighbor,
                    parent: ix,
                    g: node.g + step,
                    h: 0,
                }));
            }
        }
    }
    Ok(SearchOutcome::not_found(explored, nodes_expanded))
}

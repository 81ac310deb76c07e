use num_traits::Zero;

use crate::cell::Cell;

/// Parent index of a root node.
pub const NO_PARENT: usize = usize::MAX;

/// A discovered cell together with its search bookkeeping: the index of the
/// node it was generated from, the accumulated path cost `g` and the
/// heuristic estimate `h` (zero for the uninformed solvers).
///
/// Nodes are never mutated once pushed; finding a cheaper route to a cell
/// creates a fresh node, and stale ones are skipped on extraction.
#[derive(Clone, Copy, Debug)]
pub struct SearchNode<C> {
    pub cell: Cell,
    pub parent: usize,
    pub g: C,
    pub h: C,
}

impl<C: Zero + Copy> SearchNode<C> {
    pub fn root(cell: Cell) -> SearchNode<C> {
        SearchNode {
            cell,
            parent: NO_PARENT,
            g: C::zero(),
            h: C::zero(),
        }
    }

    pub fn f(&self) -> C {
        self.g + self.h
    }
}

/// Arena of [SearchNode]s for one solver run. Parents are stored as indices
/// into the arena, so unwinding a path is a simple index walk that cannot
/// form ownership cycles. The pool is dropped with the run.
pub struct NodePool<C> {
    nodes: Vec<SearchNode<C>>,
}

impl<C: Zero + Copy> Default for NodePool<C> {
    fn default() -> Self {
        NodePool::new()
    }
}

impl<C: Zero + Copy> NodePool<C> {
    pub fn new() -> NodePool<C> {
        NodePool { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: SearchNode<C>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, ix: usize) -> &SearchNode<C> {
        &self.nodes[ix]
    }

    /// The cell of the node's parent, or [None] for a root node.
    pub fn parent_cell(&self, ix: usize) -> Option<Cell> {
        self.nodes
            .get(self.nodes[ix].parent)
            .map(|parent| parent.cell)
    }

    /// Follows parent indices from `ix` back to the root and returns the
    /// cells in start-to-target order.
    pub fn unwind(&self, ix: usize) -> Vec<Cell> {
        let mut path: Vec<Cell> = itertools::unfold(ix, |current| {
            self.nodes.get(*current).map(|node| {
                *current = node.parent;
                node.cell
            })
        })
        .collect();
        path.reverse();
        path
    }
}

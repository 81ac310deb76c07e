use core::fmt;

use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, Direction};
use crate::{C, D};

/// Fixed enumeration order for orthogonal neighbors: up, down, left, right.
/// All solvers rely on this order for reproducible tie-breaking.
const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// Diagonal neighbors follow the orthogonal ones: up-left, up-right,
/// down-left, down-right.
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A rectangular maze of walkable and blocked cells. [MazeGrid] owns the
/// dimensions and bounds checks and additionally records, for every cell, a
/// [u8] bitmask of its walkable neighbors (bit `d` set iff the neighbor in
/// [Direction] `d` is in bounds and walkable) for fast lookups during jump
/// point search.
///
/// The grid may be edited through [set_walkable](Self::set_walkable) between
/// searches but is read-only for the duration of one.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    walkable: Vec<bool>,
    neighbour_masks: Vec<u8>,
}

impl MazeGrid {
    /// Creates a `rows` x `cols` grid with every cell set to `walkable`.
    /// Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize, walkable: bool) -> MazeGrid {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        let mut grid = MazeGrid {
            rows,
            cols,
            walkable: vec![walkable; rows * cols],
            neighbour_masks: vec![0; rows * cols],
        };
        grid.recompute_all_masks();
        grid
    }

    /// Parses an ASCII maze: `'#'` is a wall, `' '` and `'.'` are open,
    /// `'A'` marks the start and `'B'` the goal (both open).
    pub fn from_ascii(text: &str) -> Result<AsciiMaze, MazeParseError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(MazeParseError::Empty);
        }
        let cols = lines[0].chars().count();
        let mut grid = MazeGrid::new(lines.len(), cols, true);
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(MazeParseError::RaggedRow { row });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                match ch {
                    '#' => grid.set_walkable(cell, false),
                    ' ' | '.' => {}
                    'A' => start = Some(cell),
                    'B' => goal = Some(cell),
                    _ => return Err(MazeParseError::InvalidSymbol { ch, cell }),
                }
            }
        }
        Ok(AsciiMaze { grid, start, goal })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Whether `cell` can be stepped on. Out-of-bounds cells are not walkable.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.walkable[self.index(cell)]
    }

    /// Marks a cell walkable or blocked and refreshes the neighbor masks of
    /// the surrounding cells. Panics if `cell` is out of bounds.
    pub fn set_walkable(&mut self, cell: Cell, walkable: bool) {
        assert!(self.in_bounds(cell), "cell {} is out of bounds", cell);
        let ix = self.index(cell);
        self.walkable[ix] = walkable;
        for d in 0..8 {
            let neighbor = cell.neighbor(d);
            if self.in_bounds(neighbor) {
                self.recompute_mask(neighbor);
            }
        }
    }

    /// The walkable-neighbor bitmask of `cell`. Panics if `cell` is out of
    /// bounds.
    pub fn neighbour_mask(&self, cell: Cell) -> u8 {
        assert!(self.in_bounds(cell), "cell {} is out of bounds", cell);
        self.neighbour_masks[self.index(cell)]
    }

    /// Walkable neighbors of `cell` in the fixed enumeration order: up, down,
    /// left, right, then (if `allow_diagonal`) up-left, up-right, down-left,
    /// down-right.
    pub fn neighbors(&self, cell: &Cell, allow_diagonal: bool) -> SmallVec<[Cell; 8]> {
        let mut out = SmallVec::new();
        for (dr, dc) in ORTHOGONAL_OFFSETS {
            let n = Cell::new(cell.row + dr, cell.col + dc);
            if self.is_walkable(n) {
                out.push(n);
            }
        }
        if allow_diagonal {
            for (dr, dc) in DIAGONAL_OFFSETS {
                let n = Cell::new(cell.row + dr, cell.col + dc);
                if self.is_walkable(n) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Like [neighbors](Self::neighbors) but paired with the step cost:
    /// [C] for orthogonal moves, [D] for diagonal ones.
    pub fn neighbors_with_cost(
        &self,
        cell: &Cell,
        allow_diagonal: bool,
    ) -> SmallVec<[(Cell, i32); 8]> {
        self.neighbors(cell, allow_diagonal)
            .into_iter()
            .map(|n| {
                let cost = if n.row != cell.row && n.col != cell.col {
                    D
                } else {
                    C
                };
                (n, cost)
            })
            .collect()
    }

    /// Builds a [UnionFind] over all cells where two walkable neighbors
    /// belong to the same set. Used as a flood-fill reachability oracle for
    /// diagnostics and tests; the solvers themselves always explore.
    pub fn connected_components(&self, allow_diagonal: bool) -> UnionFind<usize> {
        info!(
            "generating connected components for {}x{} grid (diagonal: {})",
            self.rows, self.cols, allow_diagonal
        );
        let mut components = UnionFind::new(self.rows * self.cols);
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = Cell::new(row, col);
                if !self.is_walkable(cell) {
                    continue;
                }
                // Linking right, down and the two downward diagonals covers
                // every edge exactly once.
                let links: &[(i32, i32)] = if allow_diagonal {
                    &[(0, 1), (1, 0), (1, 1), (1, -1)]
                } else {
                    &[(0, 1), (1, 0)]
                };
                for (dr, dc) in links {
                    let n = Cell::new(row + dr, col + dc);
                    if self.is_walkable(n) {
                        components.union(self.index(cell), self.index(n));
                    }
                }
            }
        }
        components
    }

    /// Whether `goal` can be reached from `start` at all, via flood fill.
    pub fn reachable(&self, start: &Cell, goal: &Cell, allow_diagonal: bool) -> bool {
        if !self.in_bounds(*start) || !self.in_bounds(*goal) {
            return false;
        }
        self.connected_components(allow_diagonal)
            .equiv(self.index(*start), self.index(*goal))
    }

    pub(crate) fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.row as usize * self.cols + cell.col as usize
    }

    fn recompute_mask(&mut self, cell: Cell) {
        let mut mask = 0u8;
        for d in 0..8 {
            if self.is_walkable(cell.neighbor(d)) {
                mask |= 1 << d;
            }
        }
        let ix = self.index(cell);
        self.neighbour_masks[ix] = mask;
    }

    fn recompute_all_masks(&mut self) {
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                self.recompute_mask(Cell::new(row, col));
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let ch = if self.is_walkable(Cell::new(row, col)) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The result of parsing an ASCII maze: the grid plus the endpoint markers
/// found in the text, if any.
#[derive(Clone, Debug)]
pub struct AsciiMaze {
    pub grid: MazeGrid,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
}

/// Errors raised while parsing an ASCII maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeParseError {
    /// The input contained no rows.
    Empty,
    /// A row is shorter or longer than the first one.
    RaggedRow { row: usize },
    /// A character outside the maze alphabet was found.
    InvalidSymbol { ch: char, cell: Cell },
}

impl fmt::Display for MazeParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeParseError::Empty => write!(f, "maze text contains no rows"),
            MazeParseError::RaggedRow { row } => {
                write!(f, "maze row {} differs in width from the first row", row)
            }
            MazeParseError::InvalidSymbol { ch, cell } => {
                write!(f, "invalid maze symbol {:?} at {}", ch, cell)
            }
        }
    }
}

impl std::error::Error for MazeParseError {}

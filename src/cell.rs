use core::fmt;
use std::ops::Add;

/// A grid coordinate in (row, column) form. Rows grow downwards, columns grow
/// to the right. Used as the identity of a maze position everywhere: visited
/// sets, explored sets and paths all speak in terms of [Cell].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Number of single-axis steps needed without diagonals.
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Number of king moves needed with diagonals.
    pub fn chebyshev_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// The unit direction pointing from `self` towards `other`, or [None] when
    /// the cells coincide. Exact only when both cells share a row, column or
    /// diagonal; otherwise this is the signum approximation used when
    /// expanding waypoint segments step by step.
    pub fn direction_to(&self, other: &Cell) -> Option<Direction> {
        Direction::from_offset(
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }

    /// The neighbor in the direction with cyclic index `d` (taken modulo 8).
    pub fn neighbor(&self, d: i32) -> Cell {
        *self + Direction::from_num(d)
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        let (dr, dc) = dir.offset();
        Cell::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions, indexed counterclockwise starting at
/// east. Even indices are cardinal, odd indices are diagonal; rotating a
/// direction by `k` steps corresponds to `rotate_left(k)` on the per-cell
/// neighbor bitmasks, which is what the jump point pruning rules exploit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East = 0,
    NorthEast = 1,
    North = 2,
    NorthWest = 3,
    West = 4,
    SouthWest = 5,
    South = 6,
    SouthEast = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Cyclic index of the direction.
    pub fn num(self) -> i32 {
        self as i32
    }

    pub fn from_num(d: i32) -> Direction {
        Direction::ALL[d.rem_euclid(8) as usize]
    }

    pub fn from_offset(dr: i32, dc: i32) -> Option<Direction> {
        match (dr, dc) {
            (0, 1) => Some(Direction::East),
            (-1, 1) => Some(Direction::NorthEast),
            (-1, 0) => Some(Direction::North),
            (-1, -1) => Some(Direction::NorthWest),
            (0, -1) => Some(Direction::West),
            (1, -1) => Some(Direction::SouthWest),
            (1, 0) => Some(Direction::South),
            (1, 1) => Some(Direction::SouthEast),
            _ => None,
        }
    }

    /// The (row, column) offset of a single step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::NorthEast => (-1, 1),
            Direction::North => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    pub fn diagonal(self) -> bool {
        self.num() % 2 == 1
    }

    pub fn rotate_ccw(self, steps: i32) -> Direction {
        Direction::from_num(self.num() + steps)
    }

    pub fn rotate_cw(self, steps: i32) -> Direction {
        Direction::from_num(self.num() - steps)
    }

    /// The two cardinal components of a diagonal direction, used by the jump
    /// scan to probe straight lines from a diagonal run.
    pub fn components(self) -> (Direction, Direction) {
        debug_assert!(self.diagonal());
        (
            Direction::from_num(self.num() - 1),
            Direction::from_num(self.num() + 1),
        )
    }
}

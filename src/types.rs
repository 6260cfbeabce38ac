use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    Red,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::Red => 1,
        }
    }
}

/// A board coordinate: 0-indexed, row increasing downward, col increasing
/// rightward. The derived ordering is row-major, which is the canonical sort
/// order for line splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// King-move distance: the number of steps between two cells on a
    /// shared line.
    #[inline]
    pub fn chebyshev(self, other: Pos) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
}

/// Board dimensions, carried separately from cell content so the geometry
/// functions stay independent of occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: i32,
    pub cols: i32,
}

impl Shape {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub fn contains(self, pos: Pos) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }

    /// Resolves a possibly-negative coordinate against these dimensions:
    /// -1 means the last row/col. Coordinates at or past the positive bound
    /// are rejected rather than wrapped.
    pub fn normalize(self, pos: Pos) -> Result<Pos, EngineError> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(EngineError::InvalidInput(format!(
                "position {pos:?} is out of bounds for a {}x{} board",
                self.rows, self.cols
            )));
        }
        Ok(Pos {
            row: pos.row.rem_euclid(self.rows),
            col: pos.col.rem_euclid(self.cols),
        })
    }
}

/// One of the 8 directed unit vectors on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    #[inline]
    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }

    /// (Δrow, Δcol) in geographic coordinates: north is up (row decreasing).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// Normalizes an arbitrary (Δrow, Δcol) to its unit direction, so
    /// (4, 4) resolves to south-east. (0, 0) has no direction.
    #[inline]
    pub fn from_delta(d_row: i32, d_col: i32) -> Option<Direction> {
        match (d_row.signum(), d_col.signum()) {
            (-1, 0) => Some(Direction::North),
            (1, 0) => Some(Direction::South),
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            (-1, 1) => Some(Direction::NorthEast),
            (-1, -1) => Some(Direction::NorthWest),
            (1, 1) => Some(Direction::SouthEast),
            (1, -1) => Some(Direction::SouthWest),
            _ => None,
        }
    }

    /// Vector sum of two directions, re-normalized to a unit direction.
    /// Opposite directions cancel to nothing.
    #[inline]
    pub fn compose(self, other: Direction) -> Option<Direction> {
        let (ar, ac) = self.delta();
        let (br, bc) = other.delta();
        Direction::from_delta(ar + br, ac + bc)
    }

    /// The undirected axis this direction lies on.
    #[inline]
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::North | Direction::South => Orientation::Vertical,
            Direction::East | Direction::West => Orientation::Horizontal,
            Direction::NorthWest | Direction::SouthEast => Orientation::Diagonal,
            Direction::NorthEast | Direction::SouthWest => Orientation::Antidiagonal,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
            Direction::NorthEast => 4,
            Direction::NorthWest => 5,
            Direction::SouthEast => 6,
            Direction::SouthWest => 7,
        }
    }
}

/// One of the 4 undirected board axes. "Diagonal" is the axis where row
/// increases with column; "antidiagonal" where row increases as column
/// decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
    Antidiagonal,
}

impl Orientation {
    #[inline]
    pub fn all() -> [Orientation; 4] {
        [
            Orientation::Horizontal,
            Orientation::Vertical,
            Orientation::Diagonal,
            Orientation::Antidiagonal,
        ]
    }

    /// The unit step that walks the axis in ascending row-major order.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::Antidiagonal => (1, -1),
        }
    }

    /// The two directions composing this axis, ordered [before, after]
    /// relative to the pivot in row-major sort order.
    #[inline]
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::West, Direction::East],
            Orientation::Vertical => [Direction::North, Direction::South],
            Orientation::Diagonal => [Direction::NorthWest, Direction::SouthEast],
            Orientation::Antidiagonal => [Direction::NorthEast, Direction::SouthWest],
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
            Orientation::Diagonal => 2,
            Orientation::Antidiagonal => 3,
        }
    }
}

/// Result of the connectivity check after a move. Computed fresh from the
/// board; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    BlackWins,
    RedWins,
    Tie,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Continue
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWins => Some(Player::Black),
            Outcome::RedWins => Some(Player::Red),
            Outcome::Continue | Outcome::Tie => None,
        }
    }
}

use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::types::{Player, Pos, Shape};

/// The playing grid: a rows x cols field of cells, each empty or holding one
/// player's piece, with per-player piece counts kept current across every
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    shape: Shape,
    // Row-major: cell (r, c) lives at r * cols + c.
    cells: Vec<Option<Player>>,
    counts: [usize; 2],
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self::blank(Shape::new(8, 8));
        board.init_pieces();
        board
    }
}

impl Board {
    /// A board in the canonical starting layout: Black along the first and
    /// last rows, Red along the first and last columns, corners empty.
    pub fn new(rows: i32, cols: i32) -> Result<Self, EngineError> {
        let mut board = Self::empty(rows, cols)?;
        board.init_pieces();
        Ok(board)
    }

    /// An all-empty board of the given dimensions.
    pub fn empty(rows: i32, cols: i32) -> Result<Self, EngineError> {
        if rows < 4 || cols < 4 {
            return Err(EngineError::InvalidInput(format!(
                "board must have at least 4 rows and 4 columns, got {rows}x{cols}"
            )));
        }
        Ok(Self::blank(Shape::new(rows, cols)))
    }

    fn blank(shape: Shape) -> Self {
        Self {
            shape,
            cells: vec![None; (shape.rows * shape.cols) as usize],
            counts: [0, 0],
        }
    }

    fn init_pieces(&mut self) {
        for col in 1..self.shape.cols - 1 {
            self.set(Pos::new(0, col), Some(Player::Black));
            self.set(Pos::new(self.shape.rows - 1, col), Some(Player::Black));
        }
        for row in 1..self.shape.rows - 1 {
            self.set(Pos::new(row, 0), Some(Player::Red));
            self.set(Pos::new(row, self.shape.cols - 1), Some(Player::Red));
        }
    }

    /// Clears every cell and restores the canonical starting layout.
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.counts = [0, 0];
        self.init_pieces();
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.shape.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.shape.cols
    }

    #[inline]
    fn idx(&self, pos: Pos) -> usize {
        debug_assert!(self.shape.contains(pos));
        (pos.row * self.shape.cols + pos.col) as usize
    }

    fn set(&mut self, pos: Pos, value: Option<Player>) {
        let idx = self.idx(pos);
        if let Some(prev) = self.cells[idx] {
            self.counts[prev.index()] -= 1;
        }
        if let Some(next) = value {
            self.counts[next.index()] += 1;
        }
        self.cells[idx] = value;
    }

    /// Occupant of an already-normalized position.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.cells[self.idx(pos)]
    }

    /// Occupant lookup that accepts negative indices (-1 is the last
    /// row/col), like the rest of the position-taking surface.
    pub fn peek(&self, pos: Pos) -> Result<Option<Player>, EngineError> {
        let pos = self.shape.normalize(pos)?;
        Ok(self.get(pos))
    }

    pub fn is_empty(&self, pos: Pos) -> Result<bool, EngineError> {
        Ok(self.peek(pos)?.is_none())
    }

    pub fn is_player(&self, pos: Pos, player: Player) -> Result<bool, EngineError> {
        Ok(self.peek(pos)? == Some(player))
    }

    /// Puts a piece on an empty cell. Occupied cells must be popped first.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), EngineError> {
        let pos = self.shape.normalize(pos)?;
        if self.get(pos).is_some() {
            return Err(EngineError::InvalidInput(format!(
                "position {pos:?} is already occupied"
            )));
        }
        self.set(pos, Some(player));
        Ok(())
    }

    /// Removes and returns whatever the cell holds.
    pub fn pop(&mut self, pos: Pos) -> Result<Option<Player>, EngineError> {
        let pos = self.shape.normalize(pos)?;
        let prev = self.get(pos);
        self.set(pos, None);
        Ok(prev)
    }

    /// Pop-then-place: overwrites the cell and returns the previous
    /// occupant.
    pub fn replace(&mut self, pos: Pos, player: Player) -> Result<Option<Player>, EngineError> {
        let pos = self.shape.normalize(pos)?;
        let prev = self.get(pos);
        self.set(pos, Some(player));
        Ok(prev)
    }

    #[inline]
    pub fn count(&self, player: Player) -> usize {
        self.counts[player.index()]
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.counts[0] + self.counts[1]
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }

    /// Every position holding the player's pieces, in row-major order.
    pub fn positions(&self, player: Player) -> BTreeSet<Pos> {
        let mut out = BTreeSet::new();
        for row in 0..self.shape.rows {
            for col in 0..self.shape.cols {
                let pos = Pos::new(row, col);
                if self.get(pos) == Some(player) {
                    out.insert(pos);
                }
            }
        }
        out
    }

    /// Read-only copy of the grid for display or persistence layers.
    pub fn snapshot(&self) -> Vec<Vec<Option<Player>>> {
        (0..self.shape.rows)
            .map(|row| {
                (0..self.shape.cols)
                    .map(|col| self.get(Pos::new(row, col)))
                    .collect()
            })
            .collect()
    }
}

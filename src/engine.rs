use std::collections::BTreeSet;

use crate::board::Board;
use crate::error::EngineError;
use crate::rules::{game_outcome, valid_destinations};
use crate::types::{Outcome, Player, Pos};

/// The currently selected cell plus whatever the board holds there. An
/// unrestricted selection may sit on an empty cell, so the piece is itself
/// optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub position: Pos,
    pub piece: Option<Player>,
}

/// Turn-order, selection, and move-execution state machine. Owns the board
/// for the duration of the game; all mutation goes through it.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Player,
    selected: Option<Pos>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

impl GameEngine {
    /// A fresh game on the standard 8x8 board, Black to move.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A game over an injected board. A board that already satisfies a win
    /// condition makes the engine terminal immediately.
    #[inline]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            current: Player::Black,
            selected: None,
        }
    }

    /// Restores the canonical starting layout at the same dimensions and
    /// clears all transient state.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Player::Black;
        self.selected = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only grid copy for rendering collaborators.
    #[inline]
    pub fn snapshot(&self) -> Vec<Vec<Option<Player>>> {
        self.board.snapshot()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Connectivity verdict, computed fresh from the board on every call.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        game_outcome(&self.board)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selected.map(|position| Selection {
            position,
            piece: self.board.get(position),
        })
    }

    /// Positions of the current player's pieces.
    pub fn positions(&self) -> BTreeSet<Pos> {
        self.board.positions(self.current)
    }

    /// Marks a cell for a subsequent move.
    ///
    /// `None` always clears the selection and always succeeds, whatever the
    /// flags or game state. For `Some(position)` the two flags form a 2x2
    /// behavior matrix:
    ///
    /// | restrict | auto_deselect | effect                                            |
    /// |----------|---------------|---------------------------------------------------|
    /// | false    | false         | select any cell unconditionally                   |
    /// | false    | true          | select any player's piece, else clear selection   |
    /// | true     | false         | select own piece, else fail (selection unchanged) |
    /// | true     | true          | select own piece, else clear selection            |
    pub fn select(
        &mut self,
        position: Option<Pos>,
        restrict: bool,
        auto_deselect: bool,
    ) -> Result<(), EngineError> {
        let Some(position) = position else {
            self.selected = None;
            return Ok(());
        };
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let position = self.board.shape().normalize(position)?;
        let piece = self.board.get(position);
        match (restrict, auto_deselect) {
            (false, false) => self.selected = Some(position),
            (false, true) => {
                self.selected = if piece.is_some() { Some(position) } else { None };
            }
            (true, false) => {
                if piece != Some(self.current) {
                    return Err(EngineError::InvalidSelection(position));
                }
                self.selected = Some(position);
            }
            (true, true) => {
                self.selected = if piece == Some(self.current) {
                    Some(position)
                } else {
                    None
                };
            }
        }
        Ok(())
    }

    /// Legal destinations for the current selection, with the current
    /// player as mover.
    pub fn valid_destinations(&self) -> Result<BTreeSet<Pos>, EngineError> {
        let selected = self.selected.ok_or(EngineError::NoSelection)?;
        valid_destinations(&self.board, selected, self.current)
    }

    /// Moves the selected piece to `destination`.
    ///
    /// Unless `force` is set, the selected piece must belong to the current
    /// player and the destination must be in its legal set. Execution pops
    /// any destination occupant (a capture when it is the opponent's),
    /// relocates the piece, clears the selection, and evaluates
    /// connectivity for both players; the turn passes only if the game
    /// continues. All checks precede mutation, so a failed move leaves the
    /// game untouched.
    pub fn apply_move(&mut self, destination: Pos, force: bool) -> Result<Outcome, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let origin = self.selected.ok_or(EngineError::NoSelection)?;
        let destination = self.board.shape().normalize(destination)?;
        let Some(piece) = self.board.get(origin) else {
            return Err(EngineError::InvalidSelection(origin));
        };
        if !force {
            if piece != self.current {
                return Err(EngineError::WrongOwner {
                    position: origin,
                    player: self.current,
                });
            }
            let legal = valid_destinations(&self.board, origin, self.current)?;
            if !legal.contains(&destination) {
                return Err(EngineError::IllegalMove(destination));
            }
        }

        self.board.pop(origin)?;
        self.board.replace(destination, piece)?;
        self.selected = None;

        let outcome = game_outcome(&self.board);
        if !outcome.is_terminal() {
            self.current = self.current.other();
        }
        Ok(outcome)
    }
}

use crate::types::{Player, Pos};

/// Errors surfaced by the engine. All are recoverable: the board and game
/// state are unchanged after any failed operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cannot select {0:?}: not a selectable piece")]
    InvalidSelection(Pos),

    #[error("no piece is selected")]
    NoSelection,

    #[error("the piece at {position:?} does not belong to {player:?}")]
    WrongOwner { position: Pos, player: Player },

    #[error("{0:?} is not a legal destination for the selected piece")]
    IllegalMove(Pos),

    #[error("the game is already over")]
    GameOver,
}

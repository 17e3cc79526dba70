//! Moves and the errors raised when applying them.

use crate::{Outcome, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A successful placement: a player marking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// Linear index of the marked cell.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// What happened to a move that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was recorded; carries the outcome after the move.
    Placed(Outcome),
    /// The cell was already owned. Nothing changed and the turn did not advance.
    Occupied,
}

impl Placement {
    /// True if the mark was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed(_))
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell on this board.
    #[display("Index {index} is out of range (board has {cells} cells)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// It's not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

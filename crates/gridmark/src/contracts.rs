//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions gate every move; postconditions run in
//! debug builds after a mark is recorded.

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not reached a terminal outcome.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the game is won or drawn.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move names a cell on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with [`MoveError::IndexOutOfRange`] for an index past the last cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        let cells = game.board().cell_count();
        if mov.index >= cells {
            Err(MoveError::IndexOutOfRange {
                index: mov.index,
                cells,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] when the mover is not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player != game.current_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a move.
///
/// Occupancy is not part of it: a move onto an owned cell is a silent no-op,
/// not an error.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        InBounds::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is still in progress
/// - Index is on the board
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one more square is occupied and the turn advanced by one
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let placed = after.board().occupied_count() == before.board().occupied_count() + 1;
        let advanced = after.turn() == before.turn() + 1;
        if !placed || !advanced {
            warn!(placed, advanced, "Move did not advance the game by one step");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must occupy one square and advance the turn".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::Game;

/// Invariant: board squares are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty board of the same
/// size: no move may land on an occupied square, and the result must match
/// the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = game.board().cleared();
        for mov in game.history() {
            if !reconstructed.claim(mov.index, mov.player) {
                return false;
            }
        }
        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

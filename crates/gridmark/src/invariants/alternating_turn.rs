//! Alternating turn invariant: players alternate 1, 2, 1, 2, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: players alternate turns and the turn counter tracks history.
///
/// The first move belongs to player 1, no player moves twice in a row, and
/// the turn counter is always one more than the number of moves played.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::One {
                return false;
            }
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        game.turn() == history.len() + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (1, 2, 1, 2, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_game_holds() {
        let game = Game::new(3, 3).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay(3, 3, &[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::replay(3, 3, &[0]).unwrap();
        game.history.push(Move::new(Player::One, 1));
        game.turn += 1;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_stale_turn_counter_violates() {
        let mut game = Game::replay(3, 3, &[0, 1]).unwrap();
        game.turn = 1;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}

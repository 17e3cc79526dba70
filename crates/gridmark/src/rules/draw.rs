//! Draw detection.

use crate::{Board, Player};
use super::win::is_winning_move;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the last move filled the board without winning.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, index: usize, player: Player) -> bool {
    is_full(board) && !is_winning_move(board, index, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, marks: &[(usize, Player)]) {
        for &(index, player) in marks {
            assert!(board.claim(index, player));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3, 3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3, 3).unwrap();
        fill(&mut board, &[(4, Player::One)]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{One, Two};
        let mut board = Board::new(3, 3).unwrap();
        // x o x / o x x / o x o, last move at 8
        fill(
            &mut board,
            &[
                (0, One),
                (1, Two),
                (2, One),
                (3, Two),
                (4, One),
                (5, One),
                (6, Two),
                (7, One),
                (8, Two),
            ],
        );
        assert!(is_full(&board));
        assert!(is_draw(&board, 8, Two));
    }

    #[test]
    fn test_not_draw_if_last_move_wins() {
        use Player::{One, Two};
        let mut board = Board::new(3, 3).unwrap();
        // x o x / o x o / o x x, last move 8 completes the main diagonal
        fill(
            &mut board,
            &[
                (0, One),
                (1, Two),
                (2, One),
                (3, Two),
                (4, One),
                (5, Two),
                (6, Two),
                (7, One),
                (8, One),
            ],
        );
        assert!(is_full(&board));
        assert!(!is_draw(&board, 8, One));
    }
}

//! Serializable read-back view of a game.

use crate::{Game, Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board width.
    columns: usize,
    /// Board height.
    rows: usize,
    /// Owner of each cell in row-major order.
    cells: Vec<Option<Player>>,
    /// Cursor position as a linear index.
    cursor: usize,
    /// Turn counter, starting at 1.
    turn: usize,
    /// Player to move.
    current_player: Player,
    /// Current outcome.
    outcome: Outcome,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let board = game.board();
        Self {
            columns: board.columns(),
            rows: board.rows(),
            cells: board.squares().iter().map(|s| s.owner()).collect(),
            cursor: game.cursor(),
            turn: game.turn(),
            current_player: game.current_player(),
            outcome: game.outcome(),
        }
    }
}

impl GameSnapshot {
    /// Cells of row `row`, or an empty slice past the last row.
    pub fn row(&self, row: usize) -> &[Option<Player>] {
        if self.columns == 0 {
            return &[];
        }
        self.cells.chunks(self.columns).nth(row).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_game() {
        let game = Game::replay(4, 3, &[0, 5]).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(*snapshot.columns(), 4);
        assert_eq!(*snapshot.rows(), 3);
        assert_eq!(snapshot.cells()[0], Some(Player::One));
        assert_eq!(snapshot.cells()[5], Some(Player::Two));
        assert_eq!(snapshot.cells().iter().flatten().count(), 2);
        assert_eq!(*snapshot.current_player(), Player::One);
        assert_eq!(*snapshot.turn(), 3);
        assert_eq!(snapshot.row(1), &[None, Some(Player::Two), None, None]);
        assert!(snapshot.row(3).is_empty());
    }

    #[test]
    fn test_zero_width_snapshot_has_empty_rows() {
        let json = r#"{"columns":0,"rows":3,"cells":[],"cursor":0,"turn":1,
            "current_player":"One","outcome":"InProgress"}"#;
        let snapshot: GameSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.row(0).is_empty());
        assert!(snapshot.row(2).is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = Game::replay(3, 3, &[0, 1, 3, 4, 6]).unwrap();
        let json = serde_json::to_string(&game.snapshot()).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.snapshot());
        assert_eq!(*back.outcome(), Outcome::Win(Player::One));
    }
}

//! Core domain types: players, squares, and the rectangular board.

use crate::cell::Cell;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Smallest allowed extent for either board dimension.
pub const MIN_DIMENSION: usize = 3;

/// Largest number of squares a board may hold.
pub const MAX_CELLS: usize = 1 << 20;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1 (moves first, marks `x`).
    One,
    /// Player 2 (marks `o`).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric player id, `1` or `2`.
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Looks up a player by numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The mark drawn for this player.
    pub fn glyph(self) -> char {
        match self {
            Player::One => 'x',
            Player::Two => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square owned by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Error raised when a board cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// One of the dimensions is below [`MIN_DIMENSION`].
    #[display(
        "Invalid board dimensions {columns}x{rows}: both must be at least {}",
        MIN_DIMENSION
    )]
    InvalidDimensions {
        /// Requested width.
        columns: usize,
        /// Requested height.
        rows: usize,
    },

    /// `columns * rows` exceeds [`MAX_CELLS`].
    #[display("Board {columns}x{rows} is too large: at most {} cells allowed", MAX_CELLS)]
    TooLarge {
        /// Requested width.
        columns: usize,
        /// Requested height.
        rows: usize,
    },
}

/// Rectangular board of `columns x rows` squares.
///
/// Squares are stored in row-major order, so index `i` sits at
/// `row = i / columns`, `col = i % columns`. Once a square is occupied it
/// never changes for the life of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: usize,
    rows: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is
    /// smaller than [`MIN_DIMENSION`], and [`BoardError::TooLarge`] if the
    /// board would hold more than [`MAX_CELLS`] squares.
    #[instrument]
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        if columns < MIN_DIMENSION || rows < MIN_DIMENSION {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        let cells = columns
            .checked_mul(rows)
            .filter(|cells| *cells <= MAX_CELLS)
            .ok_or(BoardError::TooLarge { columns, rows })?;
        Ok(Self {
            columns,
            rows,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Board width.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Board height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `min(columns, rows)`: the run length a diagonal needs to win.
    pub fn shortest_dimension(&self) -> usize {
        self.columns.min(self.rows)
    }

    /// Total number of squares.
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Owner of the square at `index`.
    pub fn owner(&self, index: usize) -> Option<Player> {
        self.get(index).and_then(Square::owner)
    }

    /// Checks if a square is in range and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indices of the empty squares, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Converts a linear index to a coordinate.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        (index < self.cell_count()).then(|| Cell::new(index / self.columns, index % self.columns))
    }

    /// Converts a coordinate to a linear index.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.columns).then(|| cell.row * self.columns + cell.col)
    }

    /// Steps from `index` by `(d_row, d_col)` in coordinate space.
    ///
    /// Returns `None` when the step leaves the board; a step never wraps
    /// from one row's edge onto the next row.
    pub fn offset(&self, index: usize, d_row: isize, d_col: isize) -> Option<usize> {
        let cell = self.cell(index)?;
        let row = cell.row.checked_add_signed(d_row)?;
        let col = cell.col.checked_add_signed(d_col)?;
        self.index(Cell::new(row, col))
    }

    /// Marks an empty square for `player`.
    ///
    /// Returns `false` and leaves the board untouched when the index is out
    /// of range or the square is already owned.
    pub(crate) fn claim(&mut self, index: usize, player: Player) -> bool {
        match self.squares.get_mut(index) {
            Some(square) if *square == Square::Empty => {
                *square = Square::Occupied(player);
                true
            }
            _ => false,
        }
    }

    /// An empty board with the same dimensions.
    pub(crate) fn cleared(&self) -> Board {
        Self {
            columns: self.columns,
            rows: self.rows,
            squares: vec![Square::Empty; self.squares.len()],
        }
    }

    /// Writes a square unconditionally. Test-only, for building corrupted states.
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.chunks(self.columns).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line = squares
                .iter()
                .map(|s| match s {
                    Square::Empty => "[ ]".to_string(),
                    Square::Occupied(p) => format!("[{}]", p.glyph()),
                })
                .collect::<Vec<_>>()
                .join(" ");
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(2, 5),
            Err(BoardError::InvalidDimensions { columns: 2, rows: 5 })
        );
        assert_eq!(
            Board::new(5, 2),
            Err(BoardError::InvalidDimensions { columns: 5, rows: 2 })
        );
        assert!(Board::new(3, 3).is_ok());
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        assert_eq!(
            Board::new(1 << 32, 1 << 32),
            Err(BoardError::TooLarge { columns: 1 << 32, rows: 1 << 32 })
        );
        assert_eq!(
            Board::new(usize::MAX, 3),
            Err(BoardError::TooLarge { columns: usize::MAX, rows: 3 })
        );
        assert_eq!(
            Board::new(MAX_CELLS, 3),
            Err(BoardError::TooLarge { columns: MAX_CELLS, rows: 3 })
        );
        let largest = Board::new(MAX_CELLS / 4, 4).unwrap();
        assert_eq!(largest.cell_count(), MAX_CELLS);
    }

    #[test]
    fn test_shortest_dimension() {
        for (columns, rows) in [(3, 3), (4, 3), (3, 7), (20, 3), (6, 9)] {
            let board = Board::new(columns, rows).unwrap();
            assert_eq!(board.shortest_dimension(), columns.min(rows));
        }
    }

    #[test]
    fn test_index_cell_bijection() {
        let board = Board::new(5, 3).unwrap();
        for index in 0..board.cell_count() {
            let cell = board.cell(index).unwrap();
            assert_eq!(cell, Cell::new(index / 5, index % 5));
            assert_eq!(board.index(cell), Some(index));
        }
        assert_eq!(board.cell(15), None);
        assert_eq!(board.index(Cell::new(0, 5)), None);
        assert_eq!(board.index(Cell::new(3, 0)), None);
    }

    #[test]
    fn test_offset_does_not_wrap_rows() {
        let board = Board::new(4, 3).unwrap();
        // Index 3 is the end of row 0; one step right is off the board.
        assert_eq!(board.offset(3, 0, 1), None);
        // Index 4 starts row 1; one step left is off the board.
        assert_eq!(board.offset(4, 0, -1), None);
        assert_eq!(board.offset(0, -1, 0), None);
        assert_eq!(board.offset(8, 1, 0), None);
        assert_eq!(board.offset(5, 1, 1), Some(10));
        assert_eq!(board.offset(6, 1, -1), Some(9));
    }

    #[test]
    fn test_claim_never_overwrites() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(board.claim(4, Player::One));
        assert!(!board.claim(4, Player::Two));
        assert!(!board.claim(4, Player::One));
        assert!(!board.claim(9, Player::One));
        assert_eq!(board.owner(4), Some(Player::One));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_empty_cells() {
        let mut board = Board::new(3, 3).unwrap();
        board.claim(0, Player::One);
        board.claim(8, Player::Two);
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3, 3).unwrap();
        board.claim(0, Player::One);
        board.claim(4, Player::Two);
        assert_eq!(board.to_string(), "[x] [ ] [ ]\n[ ] [o] [ ]\n[ ] [ ] [ ]");
    }

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::One.id(), 1);
        assert_eq!(Player::Two.id(), 2);
        assert_eq!(Player::from_id(2), Some(Player::Two));
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::One.opponent(), Player::Two);
    }
}

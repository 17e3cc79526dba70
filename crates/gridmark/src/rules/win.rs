//! Win detection from the most recently played cell.
//!
//! A win is a run of one player's marks through the played cell that is at
//! least as long as the axis requires. Rows need the full board width,
//! columns the full height, and either diagonal `min(columns, rows)`, so a
//! 20x3 board is won diagonally with 3 marks.

use crate::{Board, Player};
use tracing::{debug, instrument};

/// One of the four lines a winning run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDownRight,
    /// Top-right to bottom-left.
    DiagonalDownLeft,
}

impl Axis {
    /// `(d_row, d_col)` for one step in the forward sense of the axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalDownLeft => (1, -1),
        }
    }

    /// Run length a move needs along this axis to win on `board`.
    pub fn required_length(self, board: &Board) -> usize {
        match self {
            Axis::Horizontal => board.columns(),
            Axis::Vertical => board.rows(),
            Axis::DiagonalDownRight | Axis::DiagonalDownLeft => board.shortest_dimension(),
        }
    }
}

/// Counts `player`'s contiguous marks through `index` along `axis`.
///
/// Walks outward in both senses of the axis and stops at the board edge or
/// at the first square not owned by `player`. Returns 0 when the cell at
/// `index` is out of range or not owned by `player`.
pub fn run_length(board: &Board, index: usize, player: Player, axis: Axis) -> usize {
    if board.owner(index) != Some(player) {
        return 0;
    }
    let (d_row, d_col) = axis.step();
    1 + count_from(board, index, player, d_row, d_col) + count_from(board, index, player, -d_row, -d_col)
}

fn count_from(board: &Board, start: usize, player: Player, d_row: isize, d_col: isize) -> usize {
    let mut count = 0;
    let mut current = start;
    while let Some(next) = board.offset(current, d_row, d_col) {
        if board.owner(next) != Some(player) {
            break;
        }
        count += 1;
        current = next;
    }
    count
}

/// Every axis on which the move at `index` by `player` meets its required length.
#[instrument(skip(board), fields(columns = board.columns(), rows = board.rows()))]
pub fn winning_axes(board: &Board, index: usize, player: Player) -> Vec<Axis> {
    let axes: Vec<Axis> = <Axis as strum::IntoEnumIterator>::iter()
        .filter(|axis| run_length(board, index, player, *axis) >= axis.required_length(board))
        .collect();
    if !axes.is_empty() {
        debug!(?axes, "Winning run found");
    }
    axes
}

/// Checks if the move at `index` by `player` wins on any axis.
pub fn is_winning_move(board: &Board, index: usize, player: Player) -> bool {
    !winning_axes(board, index, player).is_empty()
}

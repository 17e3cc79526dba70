//! Game engine: board ownership, turn sequencing, cursor, and outcome.

use crate::action::{Move, MoveError, Placement};
use crate::cell::Direction;
use crate::contracts::{Contract, MoveContract};
use crate::outcome::Outcome;
use crate::rules::{is_full, winning_axes};
use crate::snapshot::GameSnapshot;
use crate::types::{Board, BoardError, Player};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Error raised while rebuilding a game from a list of moves.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// The board could not be built.
    #[display("{_0}")]
    Board(BoardError),
    /// A move failed validation.
    #[display("{_0}")]
    Move(MoveError),
    /// A move targeted a cell that was already owned.
    #[display("Cell {_0} is already occupied")]
    #[from(skip)]
    Occupied(#[error(not(source))] usize),
}

/// A single game on a fixed-size board.
///
/// The turn counter starts at 1 and advances by exactly one per recorded
/// mark: odd turns belong to player 1, even turns to player 2. Once the
/// outcome is terminal every further move is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: usize,
    pub(crate) cursor: usize,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty `columns x rows` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is below 3.
    #[instrument]
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        let board = Board::new(columns, rows)?;
        debug!("Game created");
        Ok(Self::with_board(board))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: 1,
            cursor: 0,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts over on an empty board of the same size.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Self {
        debug!("Restarting game");
        Self::with_board(self.board.cleared())
    }

    /// Rebuilds a game by playing `indices` in order for alternating players.
    ///
    /// Stops early if a move ends the game.
    ///
    /// # Errors
    ///
    /// Fails on invalid dimensions, on a move that fails validation, or on a
    /// move that targets an owned cell.
    #[instrument]
    pub fn replay(columns: usize, rows: usize, indices: &[usize]) -> Result<Self, ReplayError> {
        let mut game = Self::new(columns, rows)?;
        for &index in indices {
            if game.outcome.is_terminal() {
                break;
            }
            match game.play_move(index, game.current_player())? {
                Placement::Placed(_) => {}
                Placement::Occupied => return Err(ReplayError::Occupied(index)),
            }
        }
        Ok(game)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The turn counter, starting at 1.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Player to move: player 1 on odd turns, player 2 on even turns.
    pub fn current_player(&self) -> Player {
        if self.turn % 2 == 1 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Cursor position as a linear index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `player`'s mark at `index`.
    ///
    /// A move onto an owned cell returns [`Placement::Occupied`] and changes
    /// nothing. Otherwise the mark is recorded, the turn advances, and the
    /// outcome is re-evaluated from the played cell.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::IndexOutOfRange`] for an index past the last cell
    /// - [`MoveError::WrongPlayer`] when `player` is not on turn
    /// - [`MoveError::InvariantViolation`] if a debug postcondition fails
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play_move(&mut self, index: usize, player: Player) -> Result<Placement, MoveError> {
        let action = Move::new(player, index);
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        if !self.board.claim(index, player) {
            warn!(index, owner = ?self.board.owner(index), "Cell already owned, move ignored");
            return Ok(Placement::Occupied);
        }
        self.history.push(action);
        self.turn += 1;
        self.outcome = self.evaluate(index, player);

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        debug!(outcome = ?self.outcome, "Move applied");
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over\n{}", self.board);
        }
        Ok(Placement::Placed(self.outcome))
    }

    fn evaluate(&self, index: usize, player: Player) -> Outcome {
        if !winning_axes(&self.board, index, player).is_empty() {
            Outcome::Win(player)
        } else if is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Plays the current player at the cursor.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_move`].
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn select(&mut self) -> Result<Placement, MoveError> {
        self.play_move(self.cursor, self.current_player())
    }

    /// Moves the cursor one cell; stays put at the board edge.
    ///
    /// Returns whether the cursor moved.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let (d_row, d_col) = direction.step();
        match self.board.offset(self.cursor, d_row, d_col) {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    /// Read-only view for a front end to render.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

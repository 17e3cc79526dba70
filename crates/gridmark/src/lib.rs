//! Gridmark - generalized tic-tac-toe on rectangular boards.
//!
//! Two players take turns marking cells of a `columns x rows` grid. A move
//! wins when it completes a run through the played cell that spans the full
//! width (rows), the full height (columns), or `min(columns, rows)` cells
//! along either diagonal.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`], [`Player`], [`Square`], [`Cell`]
//! - **Rules**: run counting and win/draw detection in [`rules`]
//! - **Engine**: [`Game`] sequences turns and tracks the [`Outcome`]
//! - **Contracts**: pre/postconditions and [`invariants`] checked per move
//!
//! # Example
//!
//! ```
//! use gridmark::{Game, Outcome, Player};
//!
//! let mut game = Game::new(4, 3)?;
//! for (index, player) in [(0, Player::One), (1, Player::Two), (5, Player::One),
//!                         (2, Player::Two), (10, Player::One)] {
//!     game.play_move(index, player)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Player::One));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod contracts;
mod game;
pub mod invariants;
mod outcome;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError, Placement};
pub use cell::{Cell, Direction};
pub use contracts::{Contract, GameNotOver, InBounds, LegalMove, MoveContract, PlayersTurn};
pub use game::{Game, ReplayError};
pub use outcome::Outcome;
pub use rules::{Axis, is_winning_move, run_length, winning_axes};
pub use snapshot::GameSnapshot;
pub use types::{Board, BoardError, MAX_CELLS, MIN_DIMENSION, Player, Square};

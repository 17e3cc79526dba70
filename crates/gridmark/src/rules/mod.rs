//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board) for evaluating a move
//! according to the win and draw conditions. Rules are separated from
//! board storage so the game engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Axis, is_winning_move, run_length, winning_axes};

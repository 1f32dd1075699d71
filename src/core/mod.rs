//! Core board types: marks, actions, the board, and its query operations.
//!
//! Everything here is a small `Copy` value type. Queries never mutate the
//! board they are given; `Board::apply` returns a fresh board.

pub mod action;
pub mod board;
pub mod error;
pub mod mark;

pub use action::Action;
pub use board::Board;
pub use error::InvalidAction;
pub use mark::Mark;

//! Error types for move application.
//!
//! `Board::apply` is the only fallible operation in the crate. Every
//! other function is total on well-formed boards; malformed boards
//! (mark counts that could not arise from alternating play) are a
//! caller precondition violation, not a runtime error.

/// Rejection of a move that targets an illegal cell.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidAction {
    /// A coordinate lies outside the 3×3 grid.
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: u8, col: u8 },

    /// The target cell already holds a mark.
    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
}

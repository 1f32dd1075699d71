//! Action representation: a (row, column) coordinate.
//!
//! An action names an empty cell to mark. Coordinates are 0-based;
//! anything above 2 is out of bounds and rejected by `Board::apply`.
//! Actions are plain coordinates with no mark attached - the acting
//! player is always inferred from the board the action is applied to.

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the 3×3 board.
///
/// ## Example
///
/// ```
/// use tictactoe_solver::Action;
///
/// let center = Action::new(1, 1);
/// assert_eq!(center.row(), 1);
/// assert_eq!(center.col(), 1);
/// assert!(center.in_bounds());
/// assert!(!Action::new(3, 0).in_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    row: u8,
    col: u8,
}

impl Action {
    /// Create an action targeting `(row, col)`.
    ///
    /// Out-of-bounds coordinates are representable; they are rejected
    /// when the action is applied, not here.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Check that both coordinates fall inside the 3×3 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row <= 2 && self.col <= 2
    }

    /// Iterate over all nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..3u8).flat_map(|row| (0..3u8).map(move |col| Action::new(row, col)))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Action {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

//! Player marks.
//!
//! `Mark` is both the player identifier and the value written into a
//! cell: a cell is `Option<Mark>`, so no third mark can exist.
//!
//! `Mark::X` always moves first.

use serde::{Deserialize, Serialize};

/// One of the two players, and the symbol they place on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the other mark.
    ///
    /// ```
    /// use tictactoe_solver::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

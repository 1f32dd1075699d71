//! The board and its query operations.
//!
//! ## Board
//!
//! A 3×3 row-major grid of `Option<Mark>`, `Copy`, treated as a value:
//! `apply` returns a new board and leaves its input untouched, so
//! successive search states never alias.
//!
//! ## Preconditions
//!
//! Queries assume a board reachable by alternating play starting with X:
//! `count(X) == count(O)` or `count(X) == count(O) + 1`, and at most one
//! winning line. None of this is validated at runtime; callers that
//! construct boards by hand (e.g. via `from_rows`) own the invariant.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Action;
use super::error::InvalidAction;
use super::mark::Mark;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A tic-tac-toe position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Mark>; 3]; 3],
}

impl Board {
    /// Create the starting position: all nine cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 3]; 3],
        }
    }

    /// Build a board from row-major cell literals.
    ///
    /// ```
    /// use tictactoe_solver::{Board, Mark};
    ///
    /// let board = Board::from_rows([
    ///     [Some(Mark::X), None, None],
    ///     [None, Some(Mark::O), None],
    ///     [None, None, None],
    /// ]);
    /// assert_eq!(board.to_move(), Mark::X);
    /// ```
    #[must_use]
    pub const fn from_rows(cells: [[Option<Mark>; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Get the mark at `(row, col)`, or `None` for an empty cell.
    ///
    /// ## Panics
    ///
    /// Panics if either index exceeds 2.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row][col]
    }

    /// Count the cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(mark))
            .count()
    }

    /// The player whose turn it is.
    ///
    /// X moves on the empty board. After that it is X's turn whenever
    /// both players have placed the same number of marks, and O's turn
    /// when X is one mark ahead.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        if self.cells.iter().flatten().all(Option::is_none) {
            return Mark::X;
        }

        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Iterate the empty cells in row-major order.
    ///
    /// This is the deterministic exploration order the solver uses for
    /// tie-breaking among equally good moves.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Action; 9]> {
        let mut cells = SmallVec::new();
        for action in Action::all() {
            if self.get(action.row() as usize, action.col() as usize).is_none() {
                cells.push(action);
            }
        }
        cells
    }

    /// The set of legal actions: every empty cell.
    ///
    /// Empty on a full board.
    #[must_use]
    pub fn actions(&self) -> FxHashSet<Action> {
        self.empty_cells().into_iter().collect()
    }

    /// Apply a move for the player to act, returning the new board.
    ///
    /// The acting mark is inferred from this board via `to_move` before
    /// the move is placed. The input board is never modified.
    ///
    /// ## Errors
    ///
    /// - `InvalidAction::OutOfBounds` if a coordinate exceeds 2
    /// - `InvalidAction::Occupied` if the target cell is already marked
    pub fn apply(&self, action: Action) -> Result<Board, InvalidAction> {
        if !action.in_bounds() {
            return Err(InvalidAction::OutOfBounds {
                row: action.row(),
                col: action.col(),
            });
        }

        let (row, col) = (action.row() as usize, action.col() as usize);
        if self.cells[row][col].is_some() {
            return Err(InvalidAction::Occupied {
                row: action.row(),
                col: action.col(),
            });
        }

        let mut next = *self;
        next.cells[row][col] = Some(self.to_move());
        Ok(next)
    }

    /// Place the current player's mark at a known-empty cell.
    ///
    /// Internal fast path for the solver: skips validation, so `action`
    /// must come from `empty_cells`.
    pub(crate) fn apply_legal(&self, action: Action) -> Board {
        let mut next = *self;
        next.cells[action.row() as usize][action.col() as usize] = Some(self.to_move());
        next
    }

    /// The mark holding a completed line, if any.
    ///
    /// Checks all 8 lines and returns the first match. On a reachable
    /// board at most one line can be complete, so order is irrelevant.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for line in &LINES {
            let [(r0, c0), (r1, c1), (r2, c2)] = *line;
            if let Some(first) = self.cells[r0][c0] {
                if self.cells[r1][c1] == Some(first) && self.cells[r2][c2] == Some(first) {
                    return Some(first);
                }
            }
        }
        None
    }

    /// Check whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Check whether the game is over: a line is complete or the board
    /// is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Outcome value from X's perspective: `1` if X has won, `-1` if O
    /// has won, `0` otherwise.
    ///
    /// `0` covers both ties and non-terminal boards; only call this on a
    /// terminal board for a meaningful result.
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

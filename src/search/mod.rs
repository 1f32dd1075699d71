//! Exhaustive minimax search.
//!
//! ## Overview
//!
//! The solver walks the complete game tree from a given position,
//! backing up utility values under optimal play by both sides:
//!
//! - X maximizes utility, O minimizes it
//! - Terminal boards score via `Board::utility`
//! - Ties break toward the first best action in row-major order, so the
//!   result is deterministic
//!
//! The tree from any position has at most 9! nodes and recursion depth
//! at most 9, so no pruning or memoization is needed.
//!
//! ## Usage
//!
//! ```
//! use tictactoe_solver::{minimax, Action, Board};
//!
//! let board = Board::new();
//! let best = minimax(&board);
//! assert!(best.is_some());
//!
//! // Terminal boards have no move to make
//! let mut board = Board::new();
//! for action in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     board = board.apply(Action::from(action)).unwrap();
//! }
//! assert_eq!(minimax(&board), None);
//! ```
//!
//! For diagnostics, use `Solver` directly and read its `SearchStats`
//! after solving.

pub mod minimax;
pub mod stats;

// Re-export main types
pub use minimax::{minimax, Solver};
pub use stats::SearchStats;

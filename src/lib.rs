//! # tictactoe-solver
//!
//! A perfect-play tic-tac-toe engine: board-state queries plus an
//! exhaustive minimax search over the full game tree.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: Every operation takes a complete board snapshot.
//!    Nothing is retained between calls; two top-level searches on
//!    different boards can run concurrently without coordination.
//!
//! 2. **Value Semantics**: `Board` is a `Copy` 3×3 grid. Applying a move
//!    produces a new board; no query or search mutates its input.
//!
//! 3. **Illegal States Unrepresentable**: Cells are `Option<Mark>` and
//!    `Mark` is a closed two-variant enum, so a cell is empty, X, or O
//!    and nothing else.
//!
//! 4. **Brute Force Is Enough**: The game tree from any position has at
//!    most 9! nodes and recursion depth at most 9. The search is
//!    exhaustive with no pruning or memoization.
//!
//! ## Modules
//!
//! - `core`: Marks, actions, the board and its query operations
//! - `search`: Minimax solver and search statistics

pub mod core;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, Board, InvalidAction, Mark};

pub use crate::search::{minimax, SearchStats, Solver};

//! Minimax over the full game tree.
//!
//! Two mutually recursive evaluators: `max_value` scores positions for
//! X, `min_value` for O. Each returns the best achievable utility under
//! optimal play together with an action achieving it. `Solver::solve`
//! dispatches on whose turn it is.

use std::time::Instant;

use crate::core::{Action, Board, Mark};

use super::stats::SearchStats;

/// Minimax search context.
///
/// Owns the statistics for the most recent `solve` call. The solver
/// keeps no game state between calls; each `solve` is a pure function
/// of its board.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    stats: SearchStats,
}

impl Solver {
    /// Create a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: SearchStats::new(),
        }
    }

    /// Find the optimal action for the player to move.
    ///
    /// Returns `None` if the board is already terminal. When several
    /// actions share the optimal utility, the first one in row-major
    /// order is returned.
    pub fn solve(&mut self, board: &Board) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();

        if board.is_terminal() {
            return None;
        }

        let (_, action) = match board.to_move() {
            Mark::X => self.max_value(board, 0),
            Mark::O => self.min_value(board, 0),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        action
    }

    /// Get statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best utility X can force from `board`, with an action achieving it.
    fn max_value(&mut self, board: &Board, depth: u8) -> (i8, Option<Action>) {
        self.enter(depth);

        if board.is_terminal() {
            self.stats.terminal_states += 1;
            return (board.utility(), None);
        }

        let mut best = i8::MIN;
        let mut best_action = None;

        for action in board.empty_cells() {
            let child = board.apply_legal(action);
            let value = if child.is_terminal() {
                // A finished child scores directly; recursing would
                // return the same utility.
                self.stats.terminal_states += 1;
                child.utility()
            } else {
                self.min_value(&child, depth + 1).0
            };

            if value > best {
                best = value;
                best_action = Some(action);
            }
        }

        (best, best_action)
    }

    /// Best utility O can force from `board`, with an action achieving it.
    fn min_value(&mut self, board: &Board, depth: u8) -> (i8, Option<Action>) {
        self.enter(depth);

        if board.is_terminal() {
            self.stats.terminal_states += 1;
            return (board.utility(), None);
        }

        let mut best = i8::MAX;
        let mut best_action = None;

        for action in board.empty_cells() {
            let child = board.apply_legal(action);
            let value = if child.is_terminal() {
                self.stats.terminal_states += 1;
                child.utility()
            } else {
                self.max_value(&child, depth + 1).0
            };

            if value < best {
                best = value;
                best_action = Some(action);
            }
        }

        (best, best_action)
    }

    fn enter(&mut self, depth: u8) {
        self.stats.nodes_visited += 1;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }
    }
}

/// Find the optimal action for the player to move on `board`.
///
/// Convenience wrapper that runs a fresh [`Solver`] and discards its
/// statistics. Returns `None` on a terminal board.
///
/// ```
/// use tictactoe_solver::{minimax, Board};
///
/// // Perfect play from the empty board starts anywhere; the solver
/// // pins the tie-break to the first cell in row-major order.
/// let best = minimax(&Board::new());
/// assert!(best.is_some());
/// ```
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    let mut solver = Solver::new();
    solver.solve(board)
}

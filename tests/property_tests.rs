//! Property tests over boards reachable by alternating legal play.

use proptest::prelude::*;

use tictactoe_solver::{minimax, Action, Board, Mark};

/// Generate a board reachable from the start by alternating legal moves.
///
/// Plays a random prefix of a random move order, stopping early if the
/// game ends.
fn reachable_board() -> impl Strategy<Value = Board> {
    let order = Just((0u8..9).collect::<Vec<u8>>()).prop_shuffle();

    (order, 0usize..=9).prop_map(|(order, count)| {
        let mut board = Board::new();
        for &cell in order.iter().take(count) {
            if board.is_terminal() {
                break;
            }
            board = board
                .apply(Action::new(cell / 3, cell % 3))
                .expect("cells in the order are distinct");
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_x_to_move_iff_counts_equal(board in reachable_board()) {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        prop_assert_eq!(board.to_move() == Mark::X, x_count == o_count);
    }

    #[test]
    fn prop_counts_satisfy_alternation_invariant(board in reachable_board()) {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        prop_assert!(x_count == o_count || x_count == o_count + 1);
    }

    #[test]
    fn prop_apply_changes_exactly_one_cell(board in reachable_board()) {
        prop_assume!(!board.is_terminal());

        let mover = board.to_move();
        for action in board.actions() {
            let next = board.apply(action).unwrap();

            let mut diffs = 0;
            for probe in Action::all() {
                let (r, c) = (probe.row() as usize, probe.col() as usize);
                if board.get(r, c) != next.get(r, c) {
                    diffs += 1;
                    prop_assert_eq!(probe, action);
                    prop_assert_eq!(next.get(r, c), Some(mover));
                }
            }
            prop_assert_eq!(diffs, 1);
        }
    }

    #[test]
    fn prop_terminal_iff_winner_or_no_actions(board in reachable_board()) {
        let expected = board.winner().is_some() || board.actions().is_empty();
        prop_assert_eq!(board.is_terminal(), expected);
    }

    #[test]
    fn prop_utility_matches_winner(board in reachable_board()) {
        let expected = match board.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        };
        prop_assert_eq!(board.utility(), expected);
    }

}

// Full searches are heavier than board queries; fewer cases suffice.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_minimax_returns_legal_action_or_none(board in reachable_board()) {
        match minimax(&board) {
            Some(action) => {
                prop_assert!(!board.is_terminal());
                prop_assert!(board.actions().contains(&action));
            }
            None => prop_assert!(board.is_terminal()),
        }
    }

    #[test]
    fn prop_queries_never_mutate(board in reachable_board()) {
        let snapshot = board;

        let _ = board.to_move();
        let _ = board.actions();
        let _ = board.winner();
        let _ = board.is_terminal();
        let _ = board.utility();
        let _ = minimax(&board);

        prop_assert_eq!(board, snapshot);
    }
}

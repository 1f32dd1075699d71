use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, SamplingMode};

use tictactoe_solver::{minimax, Action, Board, Mark};

fn bench_empty_board() {
    black_box(minimax(&Board::new()));
}

fn bench_mid_game() {
    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
    black_box(minimax(&board));
}

fn bench_self_play_game() {
    let mut board = Board::new();
    while let Some(action) = minimax(&board) {
        board = board.apply(action).unwrap();
    }
    black_box(board);
}

fn bench_legal_actions() {
    let mut board = Board::new();
    for action in [(0u8, 0u8), (1, 1), (0, 1), (2, 2)] {
        board = board.apply(Action::from(action)).unwrap();
    }
    black_box(board.actions());
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("empty_board", |b| b.iter(bench_empty_board));
    group.bench_function("mid_game", |b| b.iter(bench_mid_game));
    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));
    group.finish();

    c.bench_function("board/legal_actions", |b| b.iter(bench_legal_actions));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

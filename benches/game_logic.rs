use criterion::{black_box, criterion_group, criterion_main, Criterion};
use connect_four::core::{find_win, find_win_through, Board, GameState, GridConfig, WinScan};
use connect_four::types::Player;

/// Fills a 7x6 board with no four-in-a-row at any point.
const TIE_SEQUENCE: [usize; 42] = [
    3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 4, 4, 4, 4, 4, 4, 0, 1, 1, 1, 1, 1, 1, 5, 5, 5, 5, 5, 5,
    0, 0, 0, 0, 0, 6, 6, 6, 6, 6, 6,
];

fn tied_board() -> Board {
    let mut game = GameState::default();
    for col in TIE_SEQUENCE {
        game.attempt_drop(col);
    }
    game.board().clone()
}

fn bench_full_board_scan(c: &mut Criterion) {
    let board = tied_board();

    c.bench_function("find_win_full_board_7x6", |b| {
        b.iter(|| find_win(black_box(&board), Player::Player1, 4))
    });
}

fn bench_last_move_scan(c: &mut Criterion) {
    let board = tied_board();

    c.bench_function("find_win_through_7x6", |b| {
        b.iter(|| find_win_through(black_box(&board), 0, 6, 4))
    });
}

fn bench_full_game(c: &mut Criterion) {
    for (name, scan) in [
        ("play_tie_game_full_board", WinScan::FullBoard),
        ("play_tie_game_last_move", WinScan::LastMove),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut game = GameState::new(GridConfig::default()).with_scan(scan);
                for col in TIE_SEQUENCE {
                    game.attempt_drop(black_box(col));
                }
                game.outcome()
            })
        });
    }
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameState::default();
    for col in &TIE_SEQUENCE[..20] {
        game.attempt_drop(*col);
    }
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| game.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_full_board_scan,
    bench_last_move_scan,
    bench_full_game,
    bench_snapshot
);
criterion_main!(benches);

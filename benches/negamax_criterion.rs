use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quince_chess::board::chessboard::Chessboard;
use quince_chess::board::piece_team::PieceTeam;
use quince_chess::search::negamax::pick_best_move;

fn bench_pick_best_move(c: &mut Criterion) {
    let board = Chessboard::new_starting();

    // Correctness guard before benchmarking: depth 1 from the start
    // position expands exactly the twenty opening moves.
    let guard = pick_best_move(&board, PieceTeam::White, 1);
    assert_eq!(guard.counters.moves_expanded, 20);
    assert_eq!(guard.value, 0);

    let mut group = c.benchmark_group("pick_best_move_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for depth in [1u32, 2, 3] {
        let bench_board = board.clone();

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let outcome = pick_best_move(black_box(&bench_board), PieceTeam::White, depth);
                black_box(outcome.packed())
            });
        });
    }

    group.finish();
}

criterion_group!(negamax_benches, bench_pick_best_move);
criterion_main!(negamax_benches);

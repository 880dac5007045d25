use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ai::SearchEngine;
use engine::perft::perft;
use engine::Board;

// Midgame placement with open lines and capture chances for both sides.
const MIDGAME_FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for depth in 1..=3u32 {
        group.bench_with_input(
            BenchmarkId::new("start_position", depth),
            &depth,
            |b, &depth| {
                let board = Board::new();
                b.iter(|| {
                    let mut search_engine = SearchEngine::new();
                    black_box(search_engine.search(black_box(&board), depth, true))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("midgame", depth),
            &depth,
            |b, &depth| {
                let board = Board::from_fen(MIDGAME_FEN);
                b.iter(|| {
                    let mut search_engine = SearchEngine::new();
                    black_box(search_engine.search(black_box(&board), depth, true))
                });
            },
        );
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    for depth in 1..=3u32 {
        group.bench_with_input(
            BenchmarkId::new("start_position", depth),
            &depth,
            |b, &depth| {
                let board = Board::new();
                b.iter(|| black_box(perft(black_box(&board), depth)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_perft);
criterion_main!(benches);

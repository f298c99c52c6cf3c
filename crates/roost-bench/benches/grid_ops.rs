//! Criterion micro-benchmarks for grid neighbour queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roost_bench::reference_layout;
use roost_seating::{parse_layout, Seat};

/// Benchmark: adjacent() on all 10K cells of a 100x100 grid.
fn bench_adjacent_10k(c: &mut Criterion) {
    let grid = parse_layout(&reference_layout(42)).unwrap();

    c.bench_function("adjacent_10k", |b| {
        b.iter(|| {
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let n = grid.adjacent(row, col).unwrap();
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: visible() with floor transparent on all 10K cells.
fn bench_visible_10k(c: &mut Criterion) {
    let grid = parse_layout(&reference_layout(42)).unwrap();

    c.bench_function("visible_10k", |b| {
        b.iter(|| {
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let n = grid
                        .visible(row, col, |seat| *seat == Seat::Floor)
                        .unwrap();
                    black_box(&n);
                }
            }
        });
    });
}

criterion_group!(benches, bench_adjacent_10k, bench_visible_10k);
criterion_main!(benches);

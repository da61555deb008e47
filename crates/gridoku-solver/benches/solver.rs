//! Benchmarks for end-to-end puzzle solving.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridoku_core::Grid;
use gridoku_solver::Solver;

fn puzzle_four() -> Grid {
    Grid::from_rows(&[
        vec![0, 2, 3, 4],
        vec![4, 3, 0, 1],
        vec![3, 0, 4, 2],
        vec![2, 4, 1, 0],
    ])
    .unwrap()
}

fn puzzle_nine() -> Grid {
    Grid::from_rows(&[
        vec![1, 0, 3, 0, 0, 0, 0, 6, 0],
        vec![9, 5, 0, 0, 0, 6, 2, 0, 0],
        vec![0, 0, 0, 5, 0, 0, 4, 0, 9],
        vec![0, 0, 5, 0, 6, 8, 0, 0, 0],
        vec![2, 0, 0, 3, 5, 0, 1, 0, 0],
        vec![8, 0, 0, 0, 9, 0, 0, 0, 7],
        vec![5, 0, 0, 1, 3, 0, 0, 0, 0],
        vec![0, 0, 0, 8, 7, 5, 0, 2, 0],
        vec![4, 0, 0, 0, 2, 9, 3, 5, 0],
    ])
    .unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [("size_4", puzzle_four()), ("size_9", puzzle_nine())];
    let solver = Solver::new();

    for (param, puzzle) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &puzzle, |b, puzzle| {
            b.iter(|| {
                let solution = solver.solve(hint::black_box(puzzle)).unwrap();
                hint::black_box(solution)
            });
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

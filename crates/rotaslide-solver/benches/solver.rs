//! Benchmarks for the optimal move search.
//!
//! # Benchmarks
//!
//! - **`solve_scrambled`**: Solves 3 × 3 boards scrambled from fixed seeds.
//! - **`solve_unreachable`**: Runs a search that exhausts its budget on a
//!   board that cannot be solved, measuring the worst case per call.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rotaslide_core::PuzzleState;
use rotaslide_generator::{PuzzleGenerator, PuzzleSeed};
use rotaslide_solver::{OptimalMoveSolver, SearchLimits};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_solve_scrambled(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(3, 12).unwrap();
    let solver = OptimalMoveSolver::default();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        let state = generator.generate_with_seed(seed).state;
        c.bench_with_input(
            BenchmarkId::new("solve_scrambled", format!("seed_{i}")),
            &state,
            |b, state| {
                b.iter_batched_ref(
                    || hint::black_box(state.clone()),
                    |state| hint::black_box(solver.solve(state)),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_solve_unreachable(c: &mut Criterion) {
    let solver = OptimalMoveSolver::new(SearchLimits {
        max_expansions: 5_000,
        ..SearchLimits::default()
    });
    let state = PuzzleState::from_str("1 0 2 / 3 4 5 / 6 7 _").unwrap();

    c.bench_function("solve_unreachable", |b| {
        b.iter(|| hint::black_box(solver.solve(hint::black_box(&state))));
    });
}

criterion_group!(benches, bench_solve_scrambled, bench_solve_unreachable);
criterion_main!(benches);

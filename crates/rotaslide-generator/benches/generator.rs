//! Benchmarks for puzzle generation.
//!
//! # Benchmarks
//!
//! - **`generator_3x3`**: Scrambles a 3 × 3 board with the default 20 steps.
//! - **`generator_5x5`**: Scrambles a 5 × 5 board with 200 steps.
//!
//! # Test Data
//!
//! Uses three fixed seeds so runs are reproducible:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rotaslide_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator(c: &mut Criterion, name: &str, size: u8, steps: usize) {
    let generator = PuzzleGenerator::new(size, steps).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_3x3(c: &mut Criterion) {
    bench_generator(c, "generator_3x3", 3, 20);
}

fn bench_generator_5x5(c: &mut Criterion) {
    bench_generator(c, "generator_5x5", 5, 200);
}

criterion_group!(benches, bench_generator_3x3, bench_generator_5x5);
criterion_main!(benches);

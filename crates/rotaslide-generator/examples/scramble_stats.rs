//! Samples scrambles and reports how hard they are to solve.
//!
//! Generates many puzzles in parallel, runs the optimal move solver on each,
//! and prints a histogram of the resulting move counts.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example scramble_stats
//! ```
//!
//! Change the board and the number of scramble steps:
//!
//! ```sh
//! cargo run --release --example scramble_stats -- --size 4 --steps 30
//! ```
//!
//! Show the hardest scramble found:
//!
//! ```sh
//! cargo run --release --example scramble_stats -- --samples 2000 --show-hardest
//! ```

use std::{collections::BTreeMap, process};

use clap::Parser;
use rotaslide_generator::{PuzzleGenerator, ScrambledPuzzle};
use rotaslide_solver::{OptimalMoveSolver, SearchLimits, SolveOutcome};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: u8,

    /// Scramble steps per puzzle.
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    steps: usize,

    /// Number of puzzles to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 500)]
    samples: usize,

    /// Expansion budget per solve.
    #[arg(long, value_name = "COUNT", default_value_t = SearchLimits::DEFAULT_MAX_EXPANSIONS)]
    max_expansions: usize,

    /// Print the seed and board of the hardest scramble.
    #[arg(long)]
    show_hardest: bool,
}

fn main() {
    let args = Args::parse();
    let generator = match PuzzleGenerator::new(args.size, args.steps) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }
    let solver = OptimalMoveSolver::new(SearchLimits {
        max_expansions: args.max_expansions,
        ..SearchLimits::default()
    });

    let results = (0..args.samples)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate();
            let outcome = solver.solve(&puzzle.state);
            (puzzle, outcome)
        })
        .collect::<Vec<_>>();

    print_histogram(&results);

    if args.show_hardest
        && let Some((puzzle, outcome)) = results
            .iter()
            .filter(|(_, outcome)| outcome.is_exact())
            .max_by_key(|(_, outcome)| outcome.moves())
    {
        print_hardest(puzzle, outcome);
    }
}

fn print_histogram(results: &[(ScrambledPuzzle, SolveOutcome)]) {
    let mut histogram = BTreeMap::<u32, usize>::new();
    let mut approximate = 0;
    for (_, outcome) in results {
        if outcome.is_exact() {
            *histogram.entry(outcome.moves()).or_default() += 1;
        } else {
            approximate += 1;
        }
    }

    let widest = histogram.values().copied().max().unwrap_or(0);
    println!("Optimal moves:");
    for (moves, count) in &histogram {
        let bar = "#".repeat(count * 40 / widest.max(1));
        println!("  {moves:>3}: {count:>6} {bar}");
    }
    println!("  budget exhausted: {approximate}");
}

fn print_hardest(puzzle: &ScrambledPuzzle, outcome: &SolveOutcome) {
    println!();
    println!("Hardest:");
    println!("  seed: {}", puzzle.seed);
    println!("  moves: {}", outcome.moves());
    println!("  expansions: {}", outcome.expansions());
    for line in puzzle.state.to_string().lines() {
        println!("  {line}");
    }
}

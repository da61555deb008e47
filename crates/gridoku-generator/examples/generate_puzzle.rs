//! Example demonstrating basic puzzle generation.
//!
//! Generates a puzzle and prints the seed, the puzzle, and its solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Other grid sizes work too (perfect-square sizes get regions):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 16
//! ```
//!
//! Set `RUST_LOG=debug` to watch masking attempts being rejected.

use std::process;

use clap::Parser;
use gridoku_generator::PuzzleGenerator;
use gridoku_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid size, at most 32.
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: u8,

    /// Seed for reproducible generation; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Maximum maskings to try before giving up.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    max_mask_attempts: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let solver = Solver::new();
    let generator = PuzzleGenerator::new(&solver).with_max_mask_attempts(args.max_mask_attempts);

    let seed = args.seed.unwrap_or_else(rand::random);
    match generator.generate_from_seed(args.size, seed) {
        Ok(generated) => {
            println!("Seed:");
            println!("  {seed}");
            println!();
            println!("Puzzle:");
            println!("{}", generated.puzzle);
            println!();
            println!("Solution:");
            println!("{}", generated.solution);
        }
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    }
}

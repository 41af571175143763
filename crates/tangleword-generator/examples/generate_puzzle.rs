//! Example demonstrating puzzle generation and the sharing codec.
//!
//! Generate today's daily puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Generate a specific seed (reproducible across machines):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Inspect a serialized puzzle string instead of generating one:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --parse "animal,0,1,2;tool,0,1,3;001122334455aabb"
//! ```

use std::process;

use clap::Parser;
use tangleword_codec::{puzzle_from_string, serialise};
use tangleword_core::{Dictionary, PuzzleData};
use tangleword_generator::{daily_seed, generate_full_puzzle_from_seed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to generate from; defaults to today's daily seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u32>,

    /// Parse and display a serialized puzzle instead of generating one.
    #[arg(long, value_name = "PUZZLE", conflicts_with = "seed")]
    parse: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzle = if let Some(input) = args.parse {
        match puzzle_from_string(&input) {
            Ok(puzzle) => puzzle,
            Err(error) => {
                eprintln!("Invalid puzzle string: {error}");
                process::exit(2);
            }
        }
    } else {
        let (seed, is_daily) = match args.seed {
            Some(seed) => (seed, false),
            None => (daily_seed(), true),
        };
        match generate_full_puzzle_from_seed(seed, is_daily, Dictionary::builtin()) {
            Ok(puzzle) => puzzle,
            Err(error) => {
                eprintln!("Generation failed: {error}");
                process::exit(1);
            }
        }
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &PuzzleData) {
    match puzzle.seed() {
        Some(seed) if puzzle.is_daily() => println!("Seed: {seed} (daily)"),
        Some(seed) => println!("Seed: {seed}"),
        None => println!("Seed: none (parsed puzzle)"),
    }
    println!();

    println!("Clues ({} output slots):", puzzle.output_count());
    for (label, targets) in puzzle.clues().iter().zip(puzzle.arrows().iter()) {
        let targets: Vec<String> = targets.iter().map(ToString::to_string).collect();
        println!("  {label}: slots {}", targets.join(", "));
    }
    println!();

    println!("Answer hash:");
    println!("  {}", puzzle.answer_hash());
    println!();

    println!("Share string:");
    println!("  {}", serialise(puzzle));
}

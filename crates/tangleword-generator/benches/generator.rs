//! Benchmarks for Tangleword puzzle generation.
//!
//! Measures the two interesting costs separately:
//!
//! - **`arrow_sets`**: topology generation alone (balanced link
//!   distribution plus the presentation reordering pass).
//! - **`generate_full`**: the complete seed-to-puzzle pipeline, including
//!   any retries the seed needs.
//!
//! Uses fixed seeds so runs are comparable; seed `20026` is included
//! because its first topology is unsatisfiable and exercises the retry
//! path.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use tangleword_core::{ArrowSets, Dictionary, SeededRng};
use tangleword_generator::generate_full_puzzle_from_seed;

const SEEDS: [u32; 3] = [1, 42, 20_026];

fn bench_arrow_sets(c: &mut Criterion) {
    c.bench_function("arrow_sets", |b| {
        b.iter(|| ArrowSets::generate(&mut SeededRng::new(hint::black_box(1))));
    });
}

fn bench_generate_full(c: &mut Criterion) {
    let dict = Dictionary::builtin();
    for seed in SEEDS {
        c.bench_function(&format!("generate_full_seed_{seed}"), |b| {
            b.iter(|| generate_full_puzzle_from_seed(hint::black_box(seed), false, dict));
        });
    }
}

criterion_group!(benches, bench_arrow_sets, bench_generate_full);
criterion_main!(benches);

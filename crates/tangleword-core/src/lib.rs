//! Core data structures and pure algorithms for the Tangleword puzzle engine.
//!
//! A Tangleword puzzle maps a handful of three-letter clue words onto a
//! shared pool of output letter slots; solving it means deducing the letter
//! behind every slot so each clue spells a dictionary word of its category.
//! This crate holds the pieces everything else is built from:
//!
//! - [`rng`]: the deterministic seeded random stream that makes daily
//!   puzzles reproducible, with stable shuffle/choose operations.
//! - [`arrows`]: the clue→slot topology, its balanced generator, and the
//!   presentation ordering pass.
//! - [`dictionary`]: the injected word table with its category inverse
//!   index.
//! - [`hash`]: the solution commitment hash checked during play.
//! - [`puzzle`]: the immutable [`PuzzleData`] unit handed to rendering,
//!   codec, and validation collaborators.
//!
//! The crate is synchronous and side-effect-free: no I/O, no globals beyond
//! the built-in word table, no internal concurrency. Callers that want
//! background generation wrap it in their own worker.
//!
//! # Examples
//!
//! ```
//! use tangleword_core::{ArrowSets, Dictionary, SeededRng};
//!
//! let mut rng = SeededRng::new(20_000);
//! let arrows = ArrowSets::generate(&mut rng);
//! assert_eq!(arrows.clue_count(), tangleword_core::NUM_CLUES);
//!
//! let dict = Dictionary::builtin();
//! assert!(dict.category_count() >= tangleword_core::NUM_CLUES);
//! ```

pub mod arrows;
pub mod dictionary;
pub mod hash;
pub mod puzzle;
pub mod rng;
mod words;

pub use self::{
    arrows::{ArrowSets, NUM_CLUES, NUM_SLOTS, TargetList, WORD_LEN},
    dictionary::{CategoryId, Dictionary, DictionaryError, Word},
    hash::{hash, validate_puzzle_solution},
    puzzle::{Provenance, PuzzleData},
    rng::SeededRng,
};

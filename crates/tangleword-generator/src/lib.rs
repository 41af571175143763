//! Seed-driven puzzle generation for Tangleword.
//!
//! This crate turns a numeric seed into a complete, solvable puzzle:
//!
//! 1. seed the deterministic random stream,
//! 2. generate a balanced clue→slot topology,
//! 3. assign dictionary words to every clue by backtracking search,
//! 4. hash the resulting answer and discard the plaintext.
//!
//! A topology occasionally admits no word assignment; that is cheap to
//! detect, so [`generate_full_puzzle_from_seed`] simply draws the next
//! topology from the same stream and tries again. Failures are rare enough
//! that the loop almost always succeeds on the first or second attempt, but
//! it is still capped at [`MAX_GENERATION_ATTEMPTS`] rather than trusted to
//! terminate.
//!
//! Everything is synchronous and deterministic; callers that do not want to
//! block an interactive surface run the generation on their own worker
//! thread and discard stale results themselves.
//!
//! # Examples
//!
//! ```
//! use tangleword_core::Dictionary;
//! use tangleword_generator::generate_full_puzzle_from_seed;
//!
//! let dict = Dictionary::builtin();
//! let puzzle = generate_full_puzzle_from_seed(1, false, dict)?;
//! assert_eq!(puzzle.output_count(), 8);
//! assert_eq!(puzzle.seed(), Some(1));
//!
//! // Same seed, same puzzle: this is what makes daily puzzles shared.
//! assert_eq!(puzzle, generate_full_puzzle_from_seed(1, false, dict)?);
//! # Ok::<(), tangleword_generator::GenerateError>(())
//! ```

mod backtrack;

use std::time::{SystemTime, UNIX_EPOCH};

use tangleword_core::{ArrowSets, Dictionary, Provenance, PuzzleData, SeededRng};

pub use self::backtrack::{GenerateError, GeneratedPuzzle, generate_puzzle};

/// Upper bound on topology+assignment attempts per seed.
///
/// Empirically one or two attempts suffice with the built-in dictionary; the
/// cap exists so a degenerate dictionary cannot turn generation into an
/// infinite loop.
pub const MAX_GENERATION_ATTEMPTS: usize = 512;

/// Generates a complete puzzle from `seed`, retrying until success.
///
/// One random stream drives the whole run, so failed attempts advance the
/// stream and the next attempt sees fresh randomness while the overall
/// result stays a pure function of the seed.
///
/// # Errors
///
/// Returns [`GenerateError::RetriesExhausted`] if no attempt out of
/// [`MAX_GENERATION_ATTEMPTS`] produced a solvable puzzle. With a dictionary
/// rich enough to cover the clue count this does not happen in practice.
pub fn generate_full_puzzle_from_seed(
    seed: u32,
    is_daily: bool,
    dictionary: &Dictionary,
) -> Result<PuzzleData, GenerateError> {
    let mut rng = SeededRng::new(seed);
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let arrows = ArrowSets::generate(&mut rng);
        match generate_puzzle(&arrows, dictionary, &mut rng) {
            Ok(generated) => {
                return Ok(PuzzleData::new(
                    arrows,
                    generated.clues,
                    generated.output_count,
                    generated.answer_hash,
                    Provenance::Seeded {
                        seed,
                        daily: is_daily,
                    },
                ));
            }
            Err(error) => {
                log::debug!("generation attempt {attempt} for seed {seed} failed: {error}");
            }
        }
    }
    Err(GenerateError::RetriesExhausted {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// The seed shared by everyone playing today's puzzle: the number of whole
/// days since the Unix epoch.
#[must_use]
pub fn daily_seed() -> u32 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    u32::try_from(since_epoch.as_secs() / 86_400).unwrap_or(u32::MAX)
}

//! Backtracking word assignment.
//!
//! Given a clue→slot topology, the search assigns every clue a dictionary
//! word (and therefore a category and three letters) such that clues sharing
//! a slot agree on its letter and no category is used twice. The answer
//! letters exist only inside the search; callers receive the commitment hash
//! and the plaintext is dropped.

use tangleword_core::{ArrowSets, CategoryId, Dictionary, SeededRng, TargetList, Word, hash};

/// Errors raised by puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// No word assignment satisfies the topology against the dictionary.
    ///
    /// Recoverable: the caller regenerates the topology and retries.
    #[display("no word assignment satisfies the topology")]
    Unsatisfiable,
    /// Every clue was assigned, but an output slot never received a letter.
    ///
    /// Indicates a topology whose target indices do not form a contiguous
    /// range; checked rather than trusted, and retried like
    /// [`Unsatisfiable`](Self::Unsatisfiable).
    #[display("output slot {slot} was never assigned a letter")]
    IncompleteFill {
        /// The slot left without a letter.
        slot: usize,
    },
    /// The retry loop gave up; see
    /// [`MAX_GENERATION_ATTEMPTS`](crate::MAX_GENERATION_ATTEMPTS).
    #[display("no satisfiable puzzle after {attempts} attempts")]
    RetriesExhausted {
        /// How many topology+assignment attempts were made.
        attempts: usize,
    },
}

/// The outcome of a successful word assignment.
///
/// Carries everything [`PuzzleData`](tangleword_core::PuzzleData) needs
/// beyond the topology itself. The plaintext answer is already hashed away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Category label per clue, in clue order.
    pub clues: Vec<String>,
    /// Number of output letter slots.
    pub output_count: usize,
    /// Commitment hash of the answer string.
    pub answer_hash: String,
}

/// Assigns words to every clue of `arrows`.
///
/// Clues are processed in order; for each, the candidate words are those
/// whose category is still unused and whose letters match the slots already
/// fixed by earlier clues. Candidates are shuffled with the seeded stream so
/// different seeds reach different valid solutions, then tried with standard
/// commit-recurse-undo backtracking.
///
/// # Errors
///
/// Returns [`GenerateError::Unsatisfiable`] when the search exhausts every
/// candidate, and [`GenerateError::IncompleteFill`] when assignment succeeds
/// but leaves an output slot without a letter. Both are cheap to detect and
/// the caller retries with a fresh topology.
pub fn generate_puzzle(
    arrows: &ArrowSets,
    dictionary: &Dictionary,
    rng: &mut SeededRng,
) -> Result<GeneratedPuzzle, GenerateError> {
    let buffer_size = arrows.max_target().map_or(0, |max| max + 1);
    let output_count = arrows.distinct_target_count();
    let mut search = Search {
        arrows,
        dictionary,
        answer: vec![None; buffer_size],
        used: Vec::with_capacity(arrows.clue_count()),
        used_categories: vec![false; dictionary.category_count()],
    };
    if !search.backtrack(rng) {
        return Err(GenerateError::Unsatisfiable);
    }

    // The only place the plaintext answer exists; it is hashed and dropped.
    let mut answer = String::with_capacity(output_count);
    for slot in 0..output_count {
        match search.answer.get(slot).copied().flatten() {
            Some(letter) => answer.push(char::from(letter)),
            None => return Err(GenerateError::IncompleteFill { slot }),
        }
    }

    let clues = search
        .used
        .iter()
        .map(|&id| dictionary.category_label(id).to_owned())
        .collect();
    Ok(GeneratedPuzzle {
        clues,
        output_count,
        answer_hash: hash(&answer),
    })
}

struct Search<'a> {
    arrows: &'a ArrowSets,
    dictionary: &'a Dictionary,
    answer: Vec<Option<u8>>,
    used: Vec<CategoryId>,
    used_categories: Vec<bool>,
}

impl Search<'_> {
    fn backtrack(&mut self, rng: &mut SeededRng) -> bool {
        let clue = self.used.len();
        if clue == self.arrows.clue_count() {
            return true;
        }
        let targets: TargetList = self.arrows.targets(clue).iter().copied().collect();
        // Doubles as the undo snapshot for this clue's slots.
        let pattern: Vec<Option<u8>> = targets.iter().map(|&slot| self.answer[slot]).collect();

        let mut options: Vec<(Word, CategoryId)> = self
            .dictionary
            .entries()
            .filter(|&(word, category)| {
                !self.used_categories[category.index()] && matches_pattern(word, &pattern)
            })
            .collect();
        rng.shuffle(&mut options);

        for (word, category) in options {
            self.used.push(category);
            self.used_categories[category.index()] = true;
            for (&slot, letter) in targets.iter().zip(word.letters()) {
                self.answer[slot] = Some(letter);
            }
            if self.backtrack(rng) {
                return true;
            }
            self.used.pop();
            self.used_categories[category.index()] = false;
        }

        for (&slot, &letter) in targets.iter().zip(&pattern) {
            self.answer[slot] = letter;
        }
        false
    }
}

/// Positional match of a word against the current slot letters: a fixed slot
/// must match exactly, an unknown slot matches any letter.
fn matches_pattern(word: Word, pattern: &[Option<u8>]) -> bool {
    word.letters()
        .iter()
        .zip(pattern)
        .all(|(&letter, &slot)| slot.is_none_or(|fixed| fixed == letter))
}

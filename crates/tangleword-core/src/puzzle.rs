//! The externally visible puzzle unit.

use crate::ArrowSets;

/// How a puzzle came to exist.
///
/// Provenance is only ever assigned at construction: generation stamps the
/// seed, parsing stamps [`Parsed`](Self::Parsed). It is never inferred from
/// the puzzle's content, so a parsed copy of a daily puzzle is not "daily".
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Provenance {
    /// Generated from a numeric seed.
    Seeded {
        /// The seed the puzzle was generated from.
        seed: u32,
        /// Whether the seed is the shared daily seed.
        daily: bool,
    },
    /// Reconstructed from a serialized string.
    Parsed,
}

/// A complete, immutable puzzle: topology, clue labels, slot count, and the
/// solution commitment hash.
///
/// The plaintext answer is never part of a `PuzzleData`; only its hash
/// survives generation. Created once by generation or parsing and consumed
/// read-only by rendering and validation collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleData {
    arrows: ArrowSets,
    clues: Vec<String>,
    output_count: usize,
    answer_hash: String,
    provenance: Provenance,
}

impl PuzzleData {
    /// Assembles a puzzle from its parts.
    ///
    /// `clues` must carry one label per clue in `arrows`.
    #[must_use]
    pub fn new(
        arrows: ArrowSets,
        clues: Vec<String>,
        output_count: usize,
        answer_hash: String,
        provenance: Provenance,
    ) -> Self {
        debug_assert_eq!(arrows.clue_count(), clues.len());
        Self {
            arrows,
            clues,
            output_count,
            answer_hash,
            provenance,
        }
    }

    /// The clue→slot topology.
    #[must_use]
    pub fn arrows(&self) -> &ArrowSets {
        &self.arrows
    }

    /// The clue labels, in clue order.
    #[must_use]
    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    /// Number of output letter slots.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    /// The commitment hash of the solution.
    #[must_use]
    pub fn answer_hash(&self) -> &str {
        &self.answer_hash
    }

    /// How this puzzle was created.
    #[must_use]
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// The generation seed, or `None` for parsed puzzles.
    #[must_use]
    pub fn seed(&self) -> Option<u32> {
        match self.provenance {
            Provenance::Seeded { seed, .. } => Some(seed),
            Provenance::Parsed => None,
        }
    }

    /// Whether this is the shared daily puzzle. Always `false` for parsed
    /// puzzles.
    #[must_use]
    pub fn is_daily(&self) -> bool {
        matches!(self.provenance, Provenance::Seeded { daily: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetList;

    fn sample(provenance: Provenance) -> PuzzleData {
        let arrows = ArrowSets::from_target_lists([
            TargetList::from([0, 1, 2]),
            TargetList::from([0, 1, 3]),
        ]);
        PuzzleData::new(
            arrows,
            vec!["animal".into(), "tool".into()],
            4,
            "000bdcb81aee8d83".into(),
            provenance,
        )
    }

    #[test]
    fn test_seeded_provenance_accessors() {
        let puzzle = sample(Provenance::Seeded {
            seed: 99,
            daily: true,
        });
        assert_eq!(puzzle.seed(), Some(99));
        assert!(puzzle.is_daily());
        assert!(puzzle.provenance().is_seeded());
    }

    #[test]
    fn test_parsed_provenance_is_never_daily() {
        let puzzle = sample(Provenance::Parsed);
        assert_eq!(puzzle.seed(), None);
        assert!(!puzzle.is_daily());
        assert!(puzzle.provenance().is_parsed());
    }
}

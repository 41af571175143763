//! Compact text codec for sharing puzzles.
//!
//! Puzzles travel in URL query parameters, so the format is deliberately
//! small: one `,`-separated record per clue (label first, then the clue's
//! target slots in ascending order), records joined by `;`, and the solution
//! commitment hash as the final `;`-separated field.
//!
//! ```text
//! animal,0,1,2;tool,0,3,4;verb,1,3,5;001122334455aabb
//! ```
//!
//! Parsing validates strictly and never coerces: a malformed input raises a
//! descriptive [`ParseError`] rather than producing a partial puzzle. A
//! parsed puzzle is always tagged [`Provenance::Parsed`], never daily,
//! regardless of what it contains: provenance is assigned, not inferred.
//!
//! # Examples
//!
//! ```
//! use tangleword_codec::{puzzle_from_string, serialise};
//!
//! let puzzle = puzzle_from_string("animal,0,1,2;tool,0,3,4;verb,1,3,5;001122334455aabb")?;
//! assert_eq!(puzzle.output_count(), 6);
//! assert_eq!(serialise(&puzzle), "animal,0,1,2;tool,0,3,4;verb,1,3,5;001122334455aabb");
//! # Ok::<(), tangleword_codec::ParseError>(())
//! ```

use std::{collections::BTreeSet, fmt::Write as _};

use tangleword_core::{ArrowSets, Provenance, PuzzleData, TargetList, WORD_LEN};

/// Errors raised while parsing a serialized puzzle.
///
/// Parse errors always propagate to the caller; the codec never retries or
/// repairs. Callers typically fall back to generating a fresh puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input has no trailing commitment-hash field.
    #[display("missing answer hash field")]
    MissingHash,
    /// The hash field contains a non-hexadecimal character.
    #[display("corrupted answer hash {hash:?}")]
    CorruptedHash {
        /// The rejected hash field.
        hash: String,
    },
    /// A clue record has an empty label.
    #[display("clue {record} has an empty label")]
    EmptyLabel {
        /// Zero-based index of the offending record.
        record: usize,
    },
    /// A target field is not a number.
    #[display("target {token:?} is not a number")]
    InvalidTarget {
        /// The rejected field.
        token: String,
    },
    /// A target index is negative.
    #[display("target {token:?} is negative")]
    NegativeTarget {
        /// The rejected field.
        token: String,
    },
    /// Targets within a clue are not strictly ascending.
    #[display("targets of clue {record} are not in ascending order")]
    OutOfOrderTargets {
        /// Zero-based index of the offending record.
        record: usize,
    },
    /// A clue record has more targets than a clue word has letters.
    #[display("clue {record} has more than three targets")]
    TooManyTargets {
        /// Zero-based index of the offending record.
        record: usize,
    },
}

/// Serializes a puzzle into the shareable text format.
///
/// Deterministic: the same puzzle always yields the identical string, and
/// every string produced here parses back to the same arrows, clues, and
/// hash via [`puzzle_from_string`]. Clue labels must not contain `,` or `;`
/// (generated category labels never do).
#[must_use]
pub fn serialise(puzzle: &PuzzleData) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(puzzle.arrows().clue_count() + 1);
    for (label, targets) in puzzle.clues().iter().zip(puzzle.arrows().iter()) {
        debug_assert!(
            !label.contains([',', ';']),
            "clue label {label:?} contains a delimiter"
        );
        let mut record = label.clone();
        for &target in targets {
            let _ = write!(record, ",{target}");
        }
        parts.push(record);
    }
    parts.push(puzzle.answer_hash().to_owned());
    parts.join(";")
}

/// Parses a puzzle from the shareable text format.
///
/// The output slot count is the number of distinct target indices seen
/// across all clues; hand-authored puzzles are free to use a different slot
/// count than generated ones. The result is always tagged
/// [`Provenance::Parsed`].
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first violation found: a missing
/// or non-hexadecimal hash field, an empty clue label, or a target that is
/// non-numeric, negative, out of ascending order, or in excess of the
/// per-clue maximum.
pub fn puzzle_from_string(input: &str) -> Result<PuzzleData, ParseError> {
    let Some((records, answer_hash)) = input.rsplit_once(';') else {
        return Err(ParseError::MissingHash);
    };
    if answer_hash.is_empty() {
        return Err(ParseError::MissingHash);
    }
    if !answer_hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::CorruptedHash {
            hash: answer_hash.to_owned(),
        });
    }

    let mut clues = Vec::new();
    let mut lists = Vec::new();
    let mut distinct = BTreeSet::new();
    for (record, text) in records.split(';').enumerate() {
        let mut fields = text.split(',');
        let label = fields.next().unwrap_or_default();
        if label.is_empty() {
            return Err(ParseError::EmptyLabel { record });
        }
        clues.push(label.to_owned());

        let mut targets = TargetList::new();
        for token in fields {
            let value: i64 = token.parse().map_err(|_| ParseError::InvalidTarget {
                token: token.to_owned(),
            })?;
            if value < 0 {
                return Err(ParseError::NegativeTarget {
                    token: token.to_owned(),
                });
            }
            let slot = usize::try_from(value).map_err(|_| ParseError::InvalidTarget {
                token: token.to_owned(),
            })?;
            if targets.last().is_some_and(|&previous| slot <= previous) {
                return Err(ParseError::OutOfOrderTargets { record });
            }
            if targets.len() == WORD_LEN {
                return Err(ParseError::TooManyTargets { record });
            }
            targets.push(slot);
            distinct.insert(slot);
        }
        lists.push(targets);
    }

    let output_count = distinct.len();
    Ok(PuzzleData::new(
        ArrowSets::from_target_lists(lists),
        clues,
        output_count,
        answer_hash.to_owned(),
        Provenance::Parsed,
    ))
}

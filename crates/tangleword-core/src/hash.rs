//! Solution commitment hash.
//!
//! Shared puzzle URLs must not contain the plaintext answer, so generation
//! stores only a digest of it. [`hash`] is a fast 53-bit mixing hash (two
//! 32-bit accumulators with a cross-mixing finalizer); it deters casual
//! peeking at a shared link, which is all it has to do. It is not
//! cryptographic and makes no forgery-resistance promises.
//!
//! The exact bit pattern is part of the shared-URL contract: every client in
//! a deployment must compute identical digests, so the algorithm and its
//! constants are frozen and golden-tested.

/// Hashes `text` into a fixed 16-digit lowercase hex string.
///
/// Deterministic, order- and case-sensitive. The input is consumed as UTF-16
/// code units, matching what web clients hash.
///
/// # Examples
///
/// ```
/// use tangleword_core::hash;
///
/// assert_eq!(hash(""), "000bdcb81aee8d83");
/// assert_eq!(hash("abcdefgh"), "001d0bf8f5edd173");
/// ```
#[must_use]
pub fn hash(text: &str) -> String {
    let mut h1: u32 = 0xdead_beef;
    let mut h2: u32 = 0x41c6_ce57;
    for unit in text.encode_utf16() {
        let unit = u32::from(unit);
        h1 = (h1 ^ unit).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ unit).wrapping_mul(1_597_334_677);
    }
    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507);
    h1 ^= (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507);
    h2 ^= (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);
    let value = u64::from(h2 & 0x001f_ffff) << 32 | u64::from(h1);
    format!("{value:016x}")
}

/// Checks a candidate solution against a stored commitment hash.
///
/// Hashes `candidate` and compares case-insensitively against `stored_hash`.
/// A mismatch is an expected outcome during play, not an error.
///
/// # Examples
///
/// ```
/// use tangleword_core::{hash, validate_puzzle_solution};
///
/// let stored = hash("tanind");
/// assert!(validate_puzzle_solution("tanind", &stored));
/// assert!(validate_puzzle_solution("tanind", &stored.to_uppercase()));
/// assert!(!validate_puzzle_solution("tanine", &stored));
/// ```
#[must_use]
pub fn validate_puzzle_solution(candidate: &str, stored_hash: &str) -> bool {
    hash(candidate).eq_ignore_ascii_case(stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_values() {
        // Frozen by the shared-URL contract; see module docs.
        assert_eq!(hash(""), "000bdcb81aee8d83");
        assert_eq!(hash("abcdefgh"), "001d0bf8f5edd173");
        assert_eq!(hash("tangleword"), "0016ec4ce5fff257");
    }

    #[test]
    fn test_output_shape() {
        for text in ["", "a", "some longer text with spaces"] {
            let digest = hash(text);
            assert_eq!(digest.len(), 16);
            assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
            assert_eq!(digest, digest.to_lowercase());
        }
    }

    #[test]
    fn test_case_sensitive_input() {
        assert_ne!(hash("abc"), hash("ABC"));
    }

    #[test]
    fn test_single_character_mutations_change_digest() {
        let base = "abcdefgh";
        let stored = hash(base);
        for i in 0..base.len() {
            let mut mutated = base.to_owned();
            mutated.replace_range(i..=i, "z");
            assert!(
                !validate_puzzle_solution(&mutated, &stored),
                "mutation at {i} collided"
            );
        }
    }

    #[test]
    fn test_validate_ignores_stored_case() {
        let stored = hash("abcdefgh");
        assert!(validate_puzzle_solution("abcdefgh", &stored.to_uppercase()));
        assert!(validate_puzzle_solution("abcdefgh", &stored));
    }
}

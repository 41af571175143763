//! Deterministic seeded random stream.
//!
//! Daily puzzles are reproducible because generation draws every random
//! decision from [`SeededRng`]: the output is a pure function of the seed and
//! the call index, so the same seed replays the same puzzle on every device.
//!
//! The generator is a 32-bit Weyl sequence (the state advances by a fixed odd
//! constant per call) pushed through two xorshift-multiply avalanche rounds.
//! It is fast and well mixed but not cryptographically secure, which is all
//! puzzle generation needs.

use rand::RngCore;

/// Per-call state increment. An odd constant, so the state walks the full
/// 2^32 cycle before repeating.
const WEYL_INCREMENT: u32 = 0x9e37_79b9;

/// A deterministic random stream seeded from a 32-bit integer.
///
/// Two streams created with the same seed produce identical output for their
/// entire lifetime. The stream is exclusively owned by one generation run;
/// there is no interior mutability and no locking.
///
/// `SeededRng` also implements [`rand::RngCore`], so the reproducible stream
/// can drive any `rand`-based API. The puzzle engine itself only uses
/// [`next_f64`](Self::next_f64) and the derived [`shuffle`](Self::shuffle) /
/// [`choose`](Self::choose) operations, whose exact draw order is part of the
/// daily-puzzle reproducibility contract.
///
/// # Examples
///
/// ```
/// use tangleword_core::SeededRng;
///
/// let mut a = SeededRng::new(7);
/// let mut b = SeededRng::new(7);
/// for _ in 0..100 {
///     assert_eq!(a.next_f64(), b.next_f64());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Creates a stream seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next mixed 32-bit word.
    fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_add(WEYL_INCREMENT);
        let mut t = self.state;
        t ^= t >> 16;
        t = t.wrapping_mul(0x21f0_aaad);
        t ^= t >> 15;
        t = t.wrapping_mul(0x735a_2d97);
        t ^ (t >> 15)
    }

    /// Returns the next value in `[0.0, 1.0)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_word()) / 4_294_967_296.0
    }

    /// Permutes `slice` uniformly at random.
    ///
    /// This is the backward Fisher-Yates pass: for each index `i` from the
    /// last down to 1, a partner `j` is drawn from `0..=i` and the two
    /// elements are swapped. The draw order is stable and part of the
    /// reproducibility contract, unlike `rand`'s own shuffle adapters.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss,
                reason = "next_f64() < 1.0, so the product is within 0..=i"
            )]
            let j = (self.next_f64() * (i as f64 + 1.0)) as usize;
            slice.swap(i, j);
        }
    }

    /// Picks a uniformly random element of `slice`, or `None` if it is empty.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss,
            reason = "next_f64() < 1.0, so the product is within bounds"
        )]
        let i = (self.next_f64() * slice.len() as f64) as usize;
        Some(&slice[i])
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_word());
        let hi = u64::from(self.next_word());
        hi << 32 | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let word = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

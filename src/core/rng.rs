//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deck order
//! - **Unbiased**: Fisher-Yates shuffle with a uniform partner index
//! - **Entropy-seeded**: `from_entropy()` for real play
//!
//! ```
//! use family_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the deck builder.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept so a game can be reproduced from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create from an optional fixed seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in `0..=upper`.
    pub fn gen_index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    ///
    /// Walks from the last index down to 1, swapping each slot with a
    /// uniformly chosen partner in `[0, i]`, so every permutation is
    /// equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index_inclusive(i);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index_inclusive(999), rng2.gen_index_inclusive(999));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index_inclusive(999)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index_inclusive(999)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        let mut seen_upper = false;

        for _ in 0..500 {
            let idx = rng.gen_index_inclusive(3);
            assert!(idx <= 3);
            seen_upper |= idx == 3;
        }

        assert!(seen_upper, "upper bound must be reachable");
        assert_eq!(rng.gen_index_inclusive(0), 0);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(42);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // Three elements have six orderings; each should show up.
        let mut rng = GameRng::new(3);
        let mut counts = std::collections::HashMap::new();

        for _ in 0..6000 {
            let mut data = [0u8, 1, 2];
            rng.shuffle(&mut data);
            *counts.entry(data).or_insert(0u32) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!((800..1200).contains(&count), "{:?} seen {} times", perm, count);
        }
    }

    #[test]
    fn test_seed_option() {
        assert_eq!(GameRng::from_seed_option(Some(9)).seed(), 9);

        let mut a = GameRng::from_seed_option(Some(9));
        let mut b = GameRng::new(9);
        assert_eq!(a.gen_index_inclusive(100), b.gen_index_inclusive(100));
    }
}

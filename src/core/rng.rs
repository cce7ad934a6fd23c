//! Deterministic random number generation for baseline policies.
//!
//! The rule engine itself is RNG-free: given the same action sequence it
//! always produces the same states. Randomness only enters through move
//! selection (baseline policies, playout tests, benches), and those all
//! go through this seeded wrapper so runs stay reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for independent playout branches.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(a.gen_range_usize(0..624), b.gen_range_usize(0..624));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let seq_a: Vec<_> = (0..10).map(|_| a.gen_range_usize(0..1000)).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.gen_range_usize(0..1000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_fork_deterministic() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);

        let mut fork_a = a.fork();
        let mut fork_b = b.fork();

        for _ in 0..10 {
            assert_eq!(
                fork_a.gen_range_usize(0..100),
                fork_b.gen_range_usize(0..100)
            );
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(3);
        let items = [10, 20, 30];

        for _ in 0..10 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
        let empty: [i32; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }
}

//! Deterministic random number generation for draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draw sequence
//! - **Forkable**: Derive independent games from one tournament seed
//!
//! ```
//! use draw_game::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let n = rng.draw(1..=100);
//! assert!((1..=100).contains(&n));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.draw(1..=100), n);
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an RNG from a fresh, non-deterministic seed.
    ///
    /// The chosen seed is available through [`GameRng::seed`] so the run
    /// can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Draw a uniformly distributed integer from an inclusive range.
    pub fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
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
            assert_eq!(rng1.draw(1..=100), rng2.draw(1..=100));
        }
    }

    #[test]
    fn test_draw_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..10_000 {
            let n = rng.draw(1..=100);
            assert!((1..=100).contains(&n), "drew {} outside 1..=100", n);
        }
    }

    #[test]
    fn test_draw_hits_both_bounds() {
        let mut rng = GameRng::new(3);
        let drawn: Vec<_> = (0..10_000).map(|_| rng.draw(1..=100)).collect();
        assert!(drawn.contains(&1));
        assert!(drawn.contains(&100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.draw(1..=100)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.draw(1..=100)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.draw(1..=100)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.draw(1..=100)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        assert_ne!(rng1.fork().seed(), rng1.fork().seed());
    }
}

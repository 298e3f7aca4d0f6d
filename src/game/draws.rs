//! Where drawn numbers come from.
//!
//! The authority pulls every number through [`DrawSource`]. Production runs
//! use [`RandomDraws`]; tests script the exact sequence with
//! [`ScriptedDraws`].

use std::collections::VecDeque;

use crate::core::{draw_range, GameRng};

/// A stream of numbers in `1..=100`.
pub trait DrawSource: Send {
    /// The next number, or `None` if the source has run dry.
    fn next_draw(&mut self) -> Option<u32>;
}

/// Uniform random draws from a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct RandomDraws {
    rng: GameRng,
}

impl RandomDraws {
    /// Draw from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Draw from an existing RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl DrawSource for RandomDraws {
    fn next_draw(&mut self) -> Option<u32> {
        Some(self.rng.draw(draw_range()))
    }
}

/// A fixed sequence of numbers, consumed front to back.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    numbers: VecDeque<u32>,
}

impl ScriptedDraws {
    /// Script the given numbers in order.
    pub fn new(numbers: impl IntoIterator<Item = u32>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }
}

impl DrawSource for ScriptedDraws {
    fn next_draw(&mut self) -> Option<u32> {
        self.numbers.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_draws_in_range() {
        let mut draws = RandomDraws::seeded(42);
        for _ in 0..1000 {
            let n = draws.next_draw().unwrap();
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn test_random_draws_reproducible() {
        let mut a = RandomDraws::seeded(9);
        let mut b = RandomDraws::seeded(9);
        let seq_a: Vec<_> = (0..20).filter_map(|_| a.next_draw()).collect();
        let seq_b: Vec<_> = (0..20).filter_map(|_| b.next_draw()).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 9);
    }

    #[test]
    fn test_scripted_draws_in_order() {
        let mut draws = ScriptedDraws::new([4, 7, 3]);
        assert_eq!(draws.next_draw(), Some(4));
        assert_eq!(draws.next_draw(), Some(7));
        assert_eq!(draws.next_draw(), Some(3));
        assert_eq!(draws.next_draw(), None);
    }
}

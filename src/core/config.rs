//! Game configuration.
//!
//! The roster size and the draw range are fixed by the rules of the game
//! and live here as constants. `GameConfig` only carries what a caller may
//! legitimately vary between runs: the seed and an optional draw limit.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Number of participants that must register before the run starts.
pub const REQUIRED_PLAYERS: usize = 5;

/// Smallest number the authority can draw.
const DRAW_MIN: u32 = 1;

/// Largest number the authority can draw.
const DRAW_MAX: u32 = 100;

/// Inclusive range every draw falls in.
#[must_use]
pub const fn draw_range() -> RangeInclusive<u32> {
    DRAW_MIN..=DRAW_MAX
}

/// Configuration for a single game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the draw RNG.
    /// `None` picks a fresh seed when the game is created.
    pub seed: Option<u64>,

    /// Maximum number of draws before the run gives up.
    /// `None` draws until somebody wins.
    pub max_draws: Option<u64>,
}

impl GameConfig {
    /// Create a config with a random seed and no draw limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed so the run can be reproduced.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Stop the run after `max` draws.
    #[must_use]
    pub fn with_max_draws(mut self, max: u64) -> Self {
        self.max_draws = Some(max);
        self
    }

    /// Whether `draws` has used up the configured limit.
    #[must_use]
    pub fn draws_exhausted(&self, draws: u64) -> bool {
        self.max_draws.is_some_and(|max| draws >= max)
    }
}

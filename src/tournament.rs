//! Repeated games for comparing strategies.
//!
//! A tournament plays many independent games with the default roster, each
//! on its own authority and its own seed forked from the tournament seed,
//! and tallies which strategy won.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError, GameRng};
use crate::game::{Game, RandomDraws};
use crate::observer::{default_roster, Subject};
use crate::strategy::StrategyKind;

/// Configuration for a tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of games to play.
    pub games: u32,

    /// Seed all game seeds are forked from.
    pub seed: u64,

    /// Per-game draw limit (to keep pathological seeds bounded).
    pub max_draws: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: 42,
            max_draws: Some(10_000),
        }
    }
}

impl TournamentConfig {
    /// Create a tournament config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the tournament seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-game draw limit.
    #[must_use]
    pub fn with_max_draws(mut self, max: Option<u64>) -> Self {
        self.max_draws = max;
        self
    }
}

/// Aggregate results of a tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentStats {
    /// Games won, per strategy.
    pub wins: FxHashMap<StrategyKind, u32>,

    /// Games that hit the draw limit.
    pub unfinished: u32,

    /// Draws across all games.
    pub total_draws: u64,
}

impl TournamentStats {
    /// Games played.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins.values().sum::<u32>() + self.unfinished
    }

    /// Wins for one strategy.
    #[must_use]
    pub fn wins_for(&self, kind: StrategyKind) -> u32 {
        self.wins.get(&kind).copied().unwrap_or(0)
    }

    /// Fraction of games a strategy won.
    #[must_use]
    pub fn win_rate(&self, kind: StrategyKind) -> f64 {
        match self.games() {
            0 => 0.0,
            games => f64::from(self.wins_for(kind)) / f64::from(games),
        }
    }

    /// Mean draws per game.
    #[must_use]
    pub fn average_draws(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.total_draws as f64 / f64::from(games),
        }
    }
}

/// Play every game of the tournament.
pub fn run_tournament(config: &TournamentConfig) -> Result<TournamentStats, GameError> {
    let mut rng = GameRng::new(config.seed);
    let mut stats = TournamentStats::default();

    for index in 0..config.games {
        let game_rng = rng.fork();
        let mut game_config = GameConfig::new().with_seed(game_rng.seed());
        game_config.max_draws = config.max_draws;

        let mut game: Game = Game::with_source(game_config, RandomDraws::from_rng(game_rng));
        for participant in default_roster() {
            game.register(participant)?;
        }

        match game.run() {
            Ok(winner) => {
                *stats.wins.entry(winner.strategy).or_insert(0) += 1;
            }
            Err(GameError::DrawLimitReached { .. }) => {
                stats.unfinished += 1;
            }
            Err(err) => return Err(err),
        }
        stats.total_draws += game.draws();

        tracing::trace!(game = index, draws = game.draws(), "tournament game finished");
    }

    tracing::info!(
        games = config.games,
        unfinished = stats.unfinished,
        "tournament finished"
    );
    Ok(stats)
}

//! # draw-game
//!
//! A number-draw elimination game: one authority draws integers in
//! `1..=100`, broadcasts each to a fixed roster of players, and the first
//! player whose strategy has matched enough draws wins.
//!
//! ## Design Principles
//!
//! 1. **Explicit Authority**: The single game instance is reached through a
//!    `GameHandle`, never through hidden global state.
//!
//! 2. **Closed Strategies**: The five win conditions form an enum with
//!    per-variant data; every match over them is exhaustive.
//!
//! 3. **Caller Owns Termination**: Registration reports whether the run
//!    started, and the draw loop returns the `Winner`. Nothing in the
//!    library exits the process.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `strategy`: Win-condition strategies and their evaluators
//! - `observer`: Subject/observer traits and participants
//! - `game`: The authority, draw sources, and the process-wide handle
//! - `tournament`: Many seeded games for comparing strategies

pub mod core;
pub mod strategy;
pub mod observer;
pub mod game;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, REQUIRED_PLAYERS};

pub use crate::strategy::{Evaluator, StrategyKind};

pub use crate::observer::{default_roster, Observer, Participant, ParticipantId, Subject};

pub use crate::game::{
    DrawOutcome, DrawSource, Game, GameHandle, Phase,
    RandomDraws, Registration, ScriptedDraws, Winner,
};

pub use crate::tournament::{run_tournament, TournamentConfig, TournamentStats};

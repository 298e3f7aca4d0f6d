//! Error types for the game engine.

use thiserror::Error;

use crate::game::Winner;

/// Errors from registration, drawing, and strategy parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The roster already filled and the run has started.
    #[error("registration closed: the run has already started")]
    AlreadyStarted,

    /// A draw was requested before the roster filled.
    #[error("run not started: {registered} of {required} players registered")]
    NotStarted {
        /// Participants registered so far.
        registered: usize,
        /// Participants needed to start.
        required: usize,
    },

    /// A draw was requested after the run produced a winner.
    #[error("run already finished: {winner}")]
    AlreadyFinished {
        /// The winner of the finished run.
        winner: Winner,
    },

    /// Every participant left a running game.
    #[error("no participants left to notify")]
    EmptyRoster,

    /// The configured draw limit ran out before anyone won.
    #[error("no winner after {draws} draws")]
    DrawLimitReached {
        /// Draws performed.
        draws: u64,
    },

    /// A scripted draw source had no numbers left.
    #[error("draw source exhausted after {draws} draws")]
    DrawsExhausted {
        /// Draws performed.
        draws: u64,
    },

    /// A strategy name did not match any known strategy.
    #[error("unknown strategy: {name}")]
    UnknownStrategy {
        /// The name that failed to parse.
        name: String,
    },

    /// The process-wide game was initialized twice.
    #[error("process-wide game already initialized")]
    AlreadyInitialized,
}

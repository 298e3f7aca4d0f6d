//! Core engine types: RNG, configuration, errors.
//!
//! Everything here is independent of strategies and of the roster.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{draw_range, GameConfig, REQUIRED_PLAYERS};
pub use error::GameError;
pub use rng::GameRng;

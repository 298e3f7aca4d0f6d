//! Publish/subscribe between the game authority and its players.
//!
//! The authority is a [`Subject`]: it keeps an ordered roster of
//! [`Observer`]s and pushes every drawn number to each of them in
//! registration order. An observer answers a broadcast with `Some(Winner)`
//! when the number completes its win condition.
//!
//! ## Example
//!
//! ```
//! use draw_game::observer::{Observer, Participant};
//! use draw_game::strategy::StrategyKind;
//!
//! let mut p = Participant::new("P4", StrategyKind::ThreeTenMul);
//! assert!(p.on_broadcast(10).is_none());
//! assert!(p.on_broadcast(20).is_none());
//!
//! let winner = p.on_broadcast(30).unwrap();
//! assert_eq!(winner.name, "P4");
//! assert_eq!(winner.strategy, StrategyKind::ThreeTenMul);
//! ```

mod participant;

pub use participant::{default_roster, Participant};

use serde::{Deserialize, Serialize};

use crate::core::GameError;
use crate::game::{Registration, Winner};

/// Handle for one registration, unique within a game.
///
/// Names are not unique, so removal goes through the id handed out by
/// [`Subject::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant({})", self.0)
    }
}

/// Something that reacts to broadcast numbers.
pub trait Observer {
    /// Label used in the win announcement.
    fn name(&self) -> &str;

    /// React to one drawn number.
    ///
    /// Returns `Some` when this observer has won.
    fn on_broadcast(&mut self, number: u32) -> Option<Winner>;
}

/// Something that owns an ordered set of observers and notifies them.
pub trait Subject {
    /// The observers this subject holds.
    type Observer: Observer;

    /// Append an observer to the end of the roster.
    ///
    /// The returned [`Registration`] carries the id to unregister it by.
    fn register(&mut self, observer: Self::Observer) -> Result<Registration, GameError>;

    /// Remove the observer registered under `id`.
    fn unregister(&mut self, id: ParticipantId) -> Option<Self::Observer>;

    /// Deliver the current number to every observer in roster order.
    ///
    /// Stops at the first observer that wins and returns it.
    fn notify_all(&mut self) -> Option<Winner>;
}

//! Outcomes reported by the authority.

use serde::{Deserialize, Serialize};

use crate::observer::ParticipantId;
use crate::strategy::StrategyKind;

/// The participant that completed its win condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    /// Participant name.
    pub name: String,
    /// Strategy the participant won with.
    pub strategy: StrategyKind,
}

impl Winner {
    /// Create a winner record.
    pub fn new(name: impl Into<String>, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player <{}> Wins with Strategy <{}>", self.name, self.strategy)
    }
}

/// What a registration did to the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The roster is still short of the required size.
    RosterFilling {
        /// Id of the new registration.
        id: ParticipantId,
        /// Participants registered so far.
        registered: usize,
        /// Participants needed to start.
        required: usize,
    },
    /// This registration filled the roster and started the run.
    RunStarted {
        /// Id of the new registration.
        id: ParticipantId,
    },
}

impl Registration {
    /// Whether this registration started the run.
    #[must_use]
    pub fn started(self) -> bool {
        matches!(self, Registration::RunStarted { .. })
    }

    /// Id of the participant this registration added.
    #[must_use]
    pub fn id(self) -> ParticipantId {
        match self {
            Registration::RosterFilling { id, .. } | Registration::RunStarted { id } => id,
        }
    }
}

/// Where the authority is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the roster to fill.
    #[default]
    Gathering,
    /// Drawing numbers.
    Running,
    /// A participant has won; no more draws.
    Finished(Winner),
}

/// Result of a single draw and broadcast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The number drawn.
    pub number: u32,
    /// 1-based index of this draw in the run.
    pub draw: u64,
    /// Set when this draw decided the game.
    pub winner: Option<Winner>,
}

impl std::fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generate random number: {}", self.number)
    }
}

//! The game authority: roster, current number, and the draw loop.
//!
//! Registration is cumulative. The registration that brings the roster to
//! [`REQUIRED_PLAYERS`] flips the game from `Gathering` to `Running` and
//! reports [`Registration::RunStarted`]; that decision is made exactly once.
//! The caller then drives the loop with [`Game::run`] or one draw at a time
//! with [`Game::step`].
//!
//! ```
//! use draw_game::game::{Game, Registration, ScriptedDraws};
//! use draw_game::observer::{default_roster, Subject};
//! use draw_game::GameConfig;
//!
//! let mut game: Game = Game::with_source(GameConfig::default(), ScriptedDraws::new([4, 7]));
//! let mut last = None;
//! for participant in default_roster() {
//!     last = Some(game.register(participant).unwrap());
//! }
//! assert!(last.is_some_and(Registration::started));
//!
//! let winner = game.run().unwrap();
//! assert_eq!(winner.name, "P3");
//! ```

use smallvec::SmallVec;

use crate::core::{GameConfig, GameError, GameRng, REQUIRED_PLAYERS};
use crate::observer::{Observer, Participant, ParticipantId, Subject};

use super::draws::{DrawSource, RandomDraws};
use super::result::{DrawOutcome, Phase, Registration, Winner};

/// The single authority of a game.
pub struct Game<O = Participant> {
    config: GameConfig,
    /// Notification order is registration order.
    roster: SmallVec<[O; REQUIRED_PLAYERS]>,
    /// Registration ids, parallel to `roster`.
    ids: SmallVec<[ParticipantId; REQUIRED_PLAYERS]>,
    next_id: u32,
    current_number: Option<u32>,
    draws: u64,
    phase: Phase,
    source: Box<dyn DrawSource>,
    seed: Option<u64>,
}

impl<O: Observer> Game<O> {
    /// Create a game drawing random numbers.
    ///
    /// Uses the configured seed, or a fresh one that is logged so the run
    /// can be replayed.
    pub fn new(config: GameConfig) -> Self {
        let draws = match config.seed {
            Some(seed) => RandomDraws::seeded(seed),
            None => RandomDraws::from_rng(GameRng::from_entropy()),
        };
        let seed = draws.seed();
        tracing::debug!(seed, "game created");

        let mut game = Self::with_source(config, draws);
        game.seed = Some(seed);
        game
    }

    /// Create a game drawing from an explicit source.
    pub fn with_source(config: GameConfig, source: impl DrawSource + 'static) -> Self {
        Self {
            config,
            roster: SmallVec::new(),
            ids: SmallVec::new(),
            next_id: 0,
            current_number: None,
            draws: 0,
            phase: Phase::Gathering,
            source: Box::new(source),
            seed: None,
        }
    }

    /// Seed of the random draw source, if this game uses one.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Registered observers in notification order.
    #[must_use]
    pub fn roster(&self) -> &[O] {
        &self.roster
    }

    /// Registration ids, in the same order as [`Game::roster`].
    #[must_use]
    pub fn ids(&self) -> &[ParticipantId] {
        &self.ids
    }

    /// The observer registered under `id`.
    pub fn observer_mut(&mut self, id: ParticipantId) -> Option<&mut O> {
        let index = self.index_of(id)?;
        self.roster.get_mut(index)
    }

    fn index_of(&self, id: ParticipantId) -> Option<usize> {
        self.ids.iter().position(|&other| other == id)
    }

    /// The most recently drawn number.
    #[must_use]
    pub fn current_number(&self) -> Option<u32> {
        self.current_number
    }

    /// Draws performed so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether the run has started and nobody has won yet.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The winner, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&Winner> {
        match &self.phase {
            Phase::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    /// Draw one number and broadcast it.
    pub fn step(&mut self) -> Result<DrawOutcome, GameError> {
        match &self.phase {
            Phase::Gathering => {
                return Err(GameError::NotStarted {
                    registered: self.roster.len(),
                    required: REQUIRED_PLAYERS,
                })
            }
            Phase::Finished(winner) => {
                return Err(GameError::AlreadyFinished {
                    winner: winner.clone(),
                })
            }
            Phase::Running => {}
        }

        if self.roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        if self.config.draws_exhausted(self.draws) {
            tracing::warn!(draws = self.draws, "draw limit reached without a winner");
            return Err(GameError::DrawLimitReached { draws: self.draws });
        }

        let number = self
            .source
            .next_draw()
            .ok_or(GameError::DrawsExhausted { draws: self.draws })?;
        self.draws += 1;
        self.current_number = Some(number);
        tracing::debug!(draw = self.draws, number, "number drawn");

        let winner = self.notify_all();
        Ok(DrawOutcome {
            number,
            draw: self.draws,
            winner,
        })
    }

    /// Draw until somebody wins.
    pub fn run(&mut self) -> Result<Winner, GameError> {
        self.run_with(|_| {})
    }

    /// Draw until somebody wins, calling `on_draw` after every broadcast.
    pub fn run_with(&mut self, mut on_draw: impl FnMut(&DrawOutcome)) -> Result<Winner, GameError> {
        loop {
            let outcome = self.step()?;
            on_draw(&outcome);
            if let Some(winner) = outcome.winner {
                return Ok(winner);
            }
        }
    }
}

impl<O: Observer> Subject for Game<O> {
    type Observer = O;

    fn register(&mut self, observer: O) -> Result<Registration, GameError> {
        if self.phase != Phase::Gathering {
            return Err(GameError::AlreadyStarted);
        }

        let id = ParticipantId::new(self.next_id);
        self.next_id += 1;

        tracing::debug!(participant = observer.name(), %id, "participant registered");
        self.roster.push(observer);
        self.ids.push(id);

        if self.roster.len() == REQUIRED_PLAYERS {
            self.phase = Phase::Running;
            tracing::info!(players = REQUIRED_PLAYERS, "roster full, run started");
            Ok(Registration::RunStarted { id })
        } else {
            Ok(Registration::RosterFilling {
                id,
                registered: self.roster.len(),
                required: REQUIRED_PLAYERS,
            })
        }
    }

    fn unregister(&mut self, id: ParticipantId) -> Option<O> {
        let index = self.index_of(id)?;
        self.ids.remove(index);
        let observer = self.roster.remove(index);
        tracing::debug!(participant = observer.name(), %id, "participant unregistered");
        Some(observer)
    }

    fn notify_all(&mut self) -> Option<Winner> {
        if self.phase != Phase::Running {
            return None;
        }
        let number = self.current_number?;

        let winner = self.roster.iter_mut().find_map(|o| o.on_broadcast(number))?;
        tracing::info!(
            winner = %winner.name,
            strategy = %winner.strategy,
            draws = self.draws,
            "winner declared"
        );
        self.phase = Phase::Finished(winner.clone());
        Some(winner)
    }
}

impl<O: std::fmt::Debug> std::fmt::Debug for Game<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("roster", &self.roster)
            .field("ids", &self.ids)
            .field("current_number", &self.current_number)
            .field("draws", &self.draws)
            .field("phase", &self.phase)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

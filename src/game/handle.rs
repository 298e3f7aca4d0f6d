//! Process-wide access to the game authority.
//!
//! There is one authority per process. It is reached through an explicit
//! [`GameHandle`] rather than a hidden registry: [`GameHandle::init_global`]
//! installs it once with a chosen config, and [`GameHandle::global`] returns
//! the same handle on every call (creating a default game on first use if
//! nothing was installed). Collaborators that should not depend on the
//! process-wide instance take a `GameHandle` by value instead.
//!
//! The handle serializes every access behind one lock, so registration and
//! the start decision happen atomically even when the handle is shared
//! between threads.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::core::{GameConfig, GameError};
use crate::observer::{Participant, ParticipantId, Subject};

use super::authority::Game;
use super::result::{Registration, Winner};

static GLOBAL: OnceLock<GameHandle> = OnceLock::new();

/// Shared handle onto a single [`Game`].
#[derive(Clone, Debug)]
pub struct GameHandle {
    inner: Arc<Mutex<Game>>,
}

impl GameHandle {
    /// Wrap a game in a new, independent handle.
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Install the process-wide game.
    ///
    /// Fails if the process-wide game already exists.
    pub fn init_global(config: GameConfig) -> Result<&'static GameHandle, GameError> {
        let mut created = false;
        let handle = GLOBAL.get_or_init(|| {
            created = true;
            GameHandle::new(Game::new(config))
        });
        if created {
            tracing::debug!("process-wide game installed");
            Ok(handle)
        } else {
            Err(GameError::AlreadyInitialized)
        }
    }

    /// The process-wide game, created with the default config on first use.
    pub fn global() -> &'static GameHandle {
        GLOBAL.get_or_init(|| GameHandle::new(Game::new(GameConfig::default())))
    }

    /// Whether two handles refer to the same game.
    #[must_use]
    pub fn same_game(&self, other: &GameHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Register a participant.
    pub fn register(&self, participant: Participant) -> Result<Registration, GameError> {
        self.inner.lock().register(participant)
    }

    /// Remove the participant registered under `id`.
    pub fn unregister(&self, id: ParticipantId) -> Option<Participant> {
        self.inner.lock().unregister(id)
    }

    /// Draw until somebody wins.
    pub fn run(&self) -> Result<Winner, GameError> {
        self.inner.lock().run()
    }
}

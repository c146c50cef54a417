//! A registry of independent sessions keyed by id.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::GameError;
use crate::game::Game;
use crate::options::GameOptions;
use crate::round::RoundView;
use crate::sync::Mutex;

/// Identifies a session at a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u32);

impl SessionId {
    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Hosts many single-player sessions, each with its own deck and dealer.
///
/// Sessions never share cards. A service front end maps each client to a
/// [`SessionId`] and routes its requests here.
pub struct Table {
    /// Options given to every new session.
    pub options: GameOptions,
    /// Open sessions.
    sessions: Mutex<HashMap<SessionId, Game>>,
    /// Next session id to assign.
    next_id: AtomicU32,
    /// Source of per-session seeds.
    seeds: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates an empty table. Session seeds are derived from `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            sessions: Mutex::new(HashMap::new()),
            next_id: AtomicU32::new(0),
            seeds: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Opens a new session and returns its id.
    pub fn open(&self) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let seed = self.seeds.lock().next_u64();
        self.sessions
            .lock()
            .insert(id, Game::new(self.options, seed));
        log::debug!("opened {id}");
        id
    }

    /// Closes a session, discarding its round.
    ///
    /// Returns whether the session existed.
    pub fn close(&self, id: SessionId) -> bool {
        let existed = self.sessions.lock().remove(&id).is_some();
        if existed {
            log::debug!("closed {id}");
        }
        existed
    }

    /// Returns the number of open sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }

    fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&Game) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let sessions = self.sessions.lock();
        let game = sessions.get(&id).ok_or(GameError::SessionNotFound)?;
        f(game)
    }

    /// Starts a new round in the session. See [`Game::new_round`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] for an unknown id.
    pub fn new_round(&self, id: SessionId) -> Result<RoundView, GameError> {
        self.with_session(id, Game::new_round)
    }

    /// Player action: Hit. See [`Game::hit`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] for an unknown id, or the
    /// session's error.
    pub fn hit(&self, id: SessionId) -> Result<RoundView, GameError> {
        self.with_session(id, Game::hit)
    }

    /// Player action: Hold. See [`Game::hold`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] for an unknown id, or the
    /// session's error.
    pub fn hold(&self, id: SessionId) -> Result<RoundView, GameError> {
        self.with_session(id, Game::hold)
    }

    /// Returns a snapshot of the session's current round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] for an unknown id, or
    /// [`GameError::NoActiveRound`] if the session has no round.
    pub fn view(&self, id: SessionId) -> Result<RoundView, GameError> {
        self.with_session(id, |game| game.view().ok_or(GameError::NoActiveRound))
    }
}

//! A player's session: the single active round and its random source.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{GameError, RoundError};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::round::{Round, RoundState, RoundView};
use crate::sync::Mutex;

/// A blackjack session for one player against the dealer.
///
/// At most one [`Round`] is active at a time. Every trigger takes `&self`
/// and runs to completion under the session's lock, so concurrent callers
/// observe the round's transitions one at a time.
///
/// # Example
///
/// ```
/// use bjcore::{Game, GameOptions, RoundState};
///
/// let game = Game::new(GameOptions::default(), 7);
/// let view = game.new_round().unwrap();
/// if view.state == RoundState::PlayerTurn {
///     let view = game.hold().unwrap();
///     assert_eq!(view.state, RoundState::Resolved);
/// }
/// ```
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The active round, if any.
    round: Mutex<Option<Round>>,
    /// Random number generator used to shuffle each round's deck.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new session with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            round: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Discards any current round and deals a new one from a freshly
    /// shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error only if dealing fails, which a full deck never does.
    pub fn new_round(&self) -> Result<RoundView, GameError> {
        let deck = Deck::shuffled(&mut *self.rng.lock());
        self.new_round_with_deck(deck)
    }

    /// Discards any current round and deals a new one from `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Round`] if `deck` has fewer than four cards. No
    /// round is active afterwards in that case.
    pub fn new_round_with_deck(&self, deck: Deck) -> Result<RoundView, GameError> {
        let mut current = self.round.lock();
        if current.as_ref().is_some_and(|round| !round.is_resolved()) {
            log::warn!("abandoning unfinished round");
        }
        *current = None;

        let round = Round::deal(deck, self.options)?;
        let view = round.view();
        *current = Some(round);
        Ok(view)
    }

    /// Player action: Hit. See [`Round::hit`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveRound`] without a round, or the round's
    /// error. A deck exhaustion abandons the round.
    pub fn hit(&self) -> Result<RoundView, GameError> {
        self.act(Round::hit)
    }

    /// Player action: Hold. See [`Round::hold`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveRound`] without a round, or the round's
    /// error. A deck exhaustion abandons the round.
    pub fn hold(&self) -> Result<RoundView, GameError> {
        self.act(Round::hold)
    }

    fn act(&self, action: fn(&mut Round) -> Result<(), RoundError>) -> Result<RoundView, GameError> {
        let mut current = self.round.lock();
        let round = current.as_mut().ok_or(GameError::NoActiveRound)?;

        match action(round) {
            Ok(()) => Ok(round.view()),
            Err(err @ RoundError::DeckExhausted(_)) => {
                log::warn!("abandoning round: {err}");
                *current = None;
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Discards the current round, if any.
    pub fn abandon(&self) {
        *self.round.lock() = None;
    }

    /// Returns a snapshot of the current round.
    pub fn view(&self) -> Option<RoundView> {
        self.round.lock().as_ref().map(Round::view)
    }

    /// Returns the state of the current round.
    pub fn state(&self) -> Option<RoundState> {
        self.round.lock().as_ref().map(Round::state)
    }

    /// Returns the result of the current round, once it is resolved.
    pub fn result(&self) -> Option<RoundResult> {
        self.round.lock().as_ref().and_then(Round::result)
    }

    /// Returns a clone of the current round.
    pub fn round(&self) -> Option<Round> {
        self.round.lock().clone()
    }
}

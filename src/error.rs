//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;
use crate::round::{Action, RoundState};

/// Errors that can occur while constructing a card from raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not one of 2-10, jack, queen, king, ace.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit is not one of clubs, diamonds, hearts, spades.
    #[error("invalid card suit")]
    InvalidSuit,
    /// The text is not of the form `<rank>_of_<suit>`.
    #[error("malformed card, expected `<rank>_of_<suit>`")]
    Malformed,
}

/// Errors that can occur while building or dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than remain in the deck.
    #[error("deck exhausted: requested {requested} card(s), {remaining} remaining")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// A stacked deck listed the same card twice.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The action is not legal in the round's current state.
    #[error("illegal state transition: cannot {action} while {state}")]
    IllegalStateTransition {
        /// The rejected action.
        action: Action,
        /// The state the round was in.
        state: RoundState,
    },
    /// The deck ran out of cards. The round cannot continue.
    #[error(transparent)]
    DeckExhausted(#[from] DeckError),
}

/// Errors that can occur when driving a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// No round has been started, or the last one was abandoned.
    #[error("no active round")]
    NoActiveRound,
    /// The session id is not registered at the table.
    #[error("session not found")]
    SessionNotFound,
    /// The round rejected the operation.
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl From<DeckError> for GameError {
    fn from(err: DeckError) -> Self {
        Self::Round(RoundError::DeckExhausted(err))
    }
}

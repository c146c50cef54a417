//! A single-deck blackjack rules engine with optional `no_std` support.
//!
//! The crate deals one player against a dealer from a shuffled 52-card
//! deck, scores hands, plays the dealer's fixed drawing rule, and decides
//! the winner. Presentation is left to the caller: every operation returns a
//! [`RoundView`] snapshot that says which dealer card is still face down.
//!
//! # Example
//!
//! ```
//! use bjcore::{Game, GameOptions, RoundState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let mut view = game.new_round().unwrap();
//! while view.state == RoundState::PlayerTurn && view.player.total < 17 {
//!     view = game.hit().unwrap();
//! }
//! if view.state == RoundState::PlayerTurn {
//!     view = game.hold().unwrap();
//! }
//! assert!(view.status.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{DealerPolicy, DealerState};
pub use deck::Deck;
pub use error::{CardError, DeckError, GameError, RoundError};
pub use game::Game;
pub use hand::{AceRule, BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Outcome, Resolution, RoundResult};
pub use round::{
    Action, CardView, HandView, Participant, Round, RoundEvent, RoundState, RoundStatus, RoundView,
};
pub use table::{SessionId, Table};

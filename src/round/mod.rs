//! Round controller and state management.

use alloc::vec::Vec;

use rand::Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Outcome, Resolution, RoundResult};

mod actions;
mod dealer;
pub mod state;
pub mod view;

pub use state::{Action, Participant, RoundEvent, RoundState};
pub use view::{CardView, HandView, RoundStatus, RoundView};

/// A single round of blackjack between one player and the dealer.
///
/// The round owns its deck and both hands for its whole lifetime. It is
/// created already dealt, then driven with [`Round::hit`] and
/// [`Round::hold`] until it is [`RoundState::Resolved`]. To play again,
/// drop it and deal a new one.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand. The first card is the hole card.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Set once the round is resolved.
    result: Option<RoundResult>,
    /// Everything that happened so far.
    events: Vec<RoundEvent>,
}

impl Round {
    /// Shuffles a fresh deck with `rng` and deals a round from it.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{GameOptions, Round, RoundState};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let round = Round::new(&mut rng, GameOptions::default()).unwrap();
    /// assert_eq!(round.player_hand().len(), 2);
    /// assert_ne!(round.state(), RoundState::Dealing);
    /// ```
    ///
    /// # Errors
    ///
    /// Never fails with a full deck; the error is shared with [`Round::deal`].
    pub fn new<R: Rng + ?Sized>(rng: &mut R, options: GameOptions) -> Result<Self, RoundError> {
        Self::deal(Deck::shuffled(rng), options)
    }

    /// Deals a round from `deck`: two cards to the dealer, then two to the
    /// player.
    ///
    /// If the player's first two cards total 21 the round is resolved
    /// immediately as a player win and neither turn is played.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck holds fewer than
    /// four cards.
    pub fn deal(deck: Deck, options: GameOptions) -> Result<Self, RoundError> {
        let mut round = Self {
            deck,
            player: Hand::new(options.ace_rule),
            dealer: Hand::new(options.ace_rule),
            state: RoundState::Dealing,
            result: None,
            events: Vec::new(),
        };

        round.deal_to(Participant::Dealer, 2)?;
        round.deal_to(Participant::Player, 2)?;
        log::debug!(
            "dealt round: player {}, dealer {}",
            round.player.total(),
            round.dealer.total()
        );

        if round.player.is_natural() {
            round.resolve(RoundResult {
                outcome: Outcome::Player,
                resolution: Resolution::Natural,
                player_total: round.player.total(),
                dealer_total: round.dealer.total(),
            });
        } else {
            round.state = RoundState::PlayerTurn;
        }

        Ok(round)
    }

    /// Moves `n` cards from the deck to a hand.
    fn deal_to(&mut self, to: Participant, n: usize) -> Result<(), RoundError> {
        let cards = self.deck.deal(n)?;
        self.events
            .extend(cards.iter().map(|&card| RoundEvent::Dealt { to, card }));

        match to {
            Participant::Player => self.player.add_cards(cards),
            Participant::Dealer => self.dealer.add_cards(cards),
        }
        Ok(())
    }

    /// Ends the round.
    fn resolve(&mut self, result: RoundResult) {
        log::info!(
            "round resolved: {} ({:?}), player {} vs dealer {}",
            result.outcome,
            result.resolution,
            result.player_total,
            result.dealer_total
        );
        self.state = RoundState::Resolved;
        self.result = Some(result);
        self.events.push(RoundEvent::Resolved(result));
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.state, RoundState::Resolved)
    }

    /// Returns the result, once the round is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the deck the round is dealt from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the events of the round so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Returns whether the dealer's hole card is still hidden from the player.
    #[must_use]
    pub const fn is_hole_concealed(&self) -> bool {
        matches!(self.state, RoundState::Dealing | RoundState::PlayerTurn)
    }
}

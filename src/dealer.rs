//! The dealer's fixed drawing rule.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{BLACKJACK, Hand};

/// Where the dealer is in their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// The total is below the stand threshold; the dealer must draw.
    Drawing,
    /// The dealer stopped with a total between 17 and 21.
    Standing,
    /// The dealer went over 21.
    Busted,
}

impl DealerState {
    /// Returns whether the dealer's turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Drawing)
    }
}

/// House rule: the dealer draws below 17 and stands on 17 or more.
///
/// There is no soft-17 distinction beyond what the hand's ace rule already
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealerPolicy;

impl DealerPolicy {
    /// Total at which the dealer stops drawing.
    pub const STAND_ON: u8 = 17;

    /// Returns the state for a dealer hand with the given total.
    #[must_use]
    pub const fn step(total: u8) -> DealerState {
        if total > BLACKJACK {
            DealerState::Busted
        } else if total >= Self::STAND_ON {
            DealerState::Standing
        } else {
            DealerState::Drawing
        }
    }

    /// Plays out the dealer's hand, drawing one card at a time from `deck`
    /// until the policy reaches a terminal state.
    ///
    /// Returns the terminal state and the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer must draw.
    pub fn play(hand: &mut Hand, deck: &mut Deck) -> Result<(DealerState, Vec<Card>), DeckError> {
        let mut drawn = Vec::new();

        loop {
            let state = Self::step(hand.total());
            if state.is_terminal() {
                log::debug!(
                    "dealer finished on {} after drawing {}: {state:?}",
                    hand.total(),
                    drawn.len()
                );
                return Ok((state, drawn));
            }

            let card = deck.deal_one()?;
            hand.add_card(card);
            log::debug!("dealer draws {card}, total {}", hand.total());
            drawn.push(card);
        }
    }
}

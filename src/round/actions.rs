use crate::error::RoundError;
use crate::result::{Outcome, Resolution, RoundResult};

use super::{Action, Participant, Round, RoundEvent, RoundState};

impl Round {
    fn ensure_player_turn(&self, action: Action) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::IllegalStateTransition {
                action,
                state: self.state,
            });
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new total is over 21 the round is resolved as a dealer win and
    /// the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IllegalStateTransition`] outside the player's
    /// turn, or [`RoundError::DeckExhausted`] if the deck is empty.
    pub fn hit(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn(Action::Hit)?;

        self.deal_to(Participant::Player, 1)?;
        log::debug!("player hits, total {}", self.player.total());

        if self.player.is_bust() {
            self.resolve(RoundResult {
                outcome: Outcome::Dealer,
                resolution: Resolution::PlayerBust,
                player_total: self.player.total(),
                dealer_total: self.dealer.total(),
            });
        }

        Ok(())
    }

    /// Player action: Hold (stop drawing).
    ///
    /// The dealer's turn runs to completion before this returns, so the
    /// round is always resolved afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IllegalStateTransition`] outside the player's
    /// turn, or [`RoundError::DeckExhausted`] if the deck runs out while the
    /// dealer must draw.
    pub fn hold(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn(Action::Hold)?;

        log::debug!("player holds on {}", self.player.total());
        self.events.push(RoundEvent::Held);
        self.state = RoundState::DealerTurn;

        self.dealer_play()
    }
}

//! Snapshots of a round for a presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::{Outcome, Resolution};

use super::{Round, RoundState};

/// High-level status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// The player is still deciding.
    InProgress,
    /// The player was dealt a natural and won.
    PlayerBlackjack,
    /// The player went over 21 and lost.
    PlayerBust,
    /// The dealer went over 21 and lost.
    DealerBust,
    /// Both hands stood and the totals were compared.
    Resolved(Outcome),
}

impl RoundStatus {
    /// Returns the winner, if the round is over.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::InProgress => None,
            Self::PlayerBlackjack | Self::DealerBust => Some(Outcome::Player),
            Self::PlayerBust => Some(Outcome::Dealer),
            Self::Resolved(outcome) => Some(outcome),
        }
    }
}

/// A card as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    /// The card.
    pub card: Card,
    /// Whether the card is face down.
    pub concealed: bool,
}

/// A hand as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in the order received.
    pub cards: Vec<CardView>,
    /// The full total of the hand.
    pub total: u8,
    /// The total of the face-up cards only.
    pub visible_total: u8,
}

impl HandView {
    fn new(hand: &Hand, conceal_first: bool) -> Self {
        let cards: Vec<CardView> = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| CardView {
                card,
                concealed: conceal_first && index == 0,
            })
            .collect();

        let visible_total = if conceal_first {
            let face_up: Vec<Card> = cards
                .iter()
                .filter(|view| !view.concealed)
                .map(|view| view.card)
                .collect();
            crate::hand::score(&face_up, hand.ace_rule())
        } else {
            hand.total()
        };

        Self {
            cards,
            total: hand.total(),
            visible_total,
        }
    }
}

/// A snapshot of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// The dealer's hand. The first card is concealed until the dealer's
    /// turn begins.
    pub dealer: HandView,
    /// The player's hand.
    pub player: HandView,
    /// The round state.
    pub state: RoundState,
    /// The round status.
    pub status: RoundStatus,
}

impl Round {
    /// Returns the status of the round.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.result {
            None => RoundStatus::InProgress,
            Some(result) => match result.resolution {
                Resolution::Natural => RoundStatus::PlayerBlackjack,
                Resolution::PlayerBust => RoundStatus::PlayerBust,
                Resolution::DealerBust => RoundStatus::DealerBust,
                Resolution::Comparison => RoundStatus::Resolved(result.outcome),
            },
        }
    }

    /// Returns a snapshot of the round.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            dealer: HandView::new(&self.dealer, self.is_hole_concealed()),
            player: HandView::new(&self.player, false),
            state: self.state,
            status: self.status(),
        }
    }
}

//! Round state types.

use core::fmt;

use crate::card::Card;
use crate::dealer::DealerState;
use crate::result::RoundResult;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing the initial cards.
    Dealing,
    /// Waiting for the player to hit or hold.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is over; only a new round may follow.
    Resolved,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dealing => "dealing",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::Resolved => "resolved",
        })
    }
}

/// A request made by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Stop drawing and hand over to the dealer.
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Hold => "hold",
        })
    }
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Something that happened during a round, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// A card moved from the deck to a hand.
    Dealt {
        /// Who received the card.
        to: Participant,
        /// The card dealt.
        card: Card,
    },
    /// The player held.
    Held,
    /// The dealer's turn ended.
    DealerFinished(DealerState),
    /// The round was decided.
    Resolved(RoundResult),
}

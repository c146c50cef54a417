//! Round result types.

use core::fmt;

/// Who won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Equal totals.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player wins",
            Self::Dealer => "dealer wins",
            Self::Draw => "draw",
        })
    }
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The player's initial two cards totalled 21.
    Natural,
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// Both hands stood and the totals were compared.
    Comparison,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The winner, or a draw.
    pub outcome: Outcome,
    /// How the round ended.
    pub resolution: Resolution,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}

impl RoundResult {
    /// Compares two standing hands; the higher total wins.
    #[must_use]
    pub const fn compare(player_total: u8, dealer_total: u8) -> Self {
        let outcome = if player_total > dealer_total {
            Outcome::Player
        } else if player_total < dealer_total {
            Outcome::Dealer
        } else {
            Outcome::Draw
        };

        Self {
            outcome,
            resolution: Resolution::Comparison,
            player_total,
            dealer_total,
        }
    }
}

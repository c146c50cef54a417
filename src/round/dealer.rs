use crate::dealer::{DealerPolicy, DealerState};
use crate::error::RoundError;
use crate::result::{Outcome, Resolution, RoundResult};

use super::{Participant, Round, RoundEvent, RoundState};

impl Round {
    /// Dealer plays their hand according to [`DealerPolicy`], then the round
    /// is resolved.
    ///
    /// A busted dealer loses; otherwise the totals are compared and the
    /// higher one wins, with equal totals a draw.
    pub(super) fn dealer_play(&mut self) -> Result<(), RoundError> {
        debug_assert_eq!(self.state, RoundState::DealerTurn);

        let (state, drawn) = DealerPolicy::play(&mut self.dealer, &mut self.deck)?;
        self.events.extend(drawn.into_iter().map(|card| RoundEvent::Dealt {
            to: Participant::Dealer,
            card,
        }));
        self.events.push(RoundEvent::DealerFinished(state));

        let player_total = self.player.total();
        let dealer_total = self.dealer.total();

        let result = if state == DealerState::Busted {
            RoundResult {
                outcome: Outcome::Player,
                resolution: Resolution::DealerBust,
                player_total,
                dealer_total,
            }
        } else {
            RoundResult::compare(player_total, dealer_total)
        };

        self.resolve(result);
        Ok(())
    }
}

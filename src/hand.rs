//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

/// How aces are valued when scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AceRule {
    /// A single ace in the hand is worth 11 if that does not bust, otherwise
    /// 1. Any further aces add nothing, so ace-ace scores 11.
    #[default]
    SingleFlex,
    /// Every ace is worth 1, and one of them is raised to 11 if that does not
    /// bust. Ace-ace scores 12.
    Standard,
}

/// Scores `cards` under the given ace rule.
///
/// # Example
///
/// ```
/// use bjcore::{AceRule, Card, Rank, Suit};
/// use bjcore::hand::score;
///
/// let aces = [Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::Ace, Suit::Hearts)];
/// assert_eq!(score(&aces, AceRule::SingleFlex), 11);
/// assert_eq!(score(&aces, AceRule::Standard), 12);
/// ```
#[must_use]
pub fn score(cards: &[Card], rule: AceRule) -> u8 {
    let mut base: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        } else {
            base = base.saturating_add(card.value());
        }
    }

    if aces == 0 {
        return base;
    }

    match rule {
        AceRule::SingleFlex => {
            if base <= BLACKJACK - 11 {
                base + 11
            } else {
                base.saturating_add(1)
            }
        }
        AceRule::Standard => {
            let low = base.saturating_add(aces);
            if low <= BLACKJACK - 10 { low + 10 } else { low }
        }
    }
}

/// A participant's hand.
///
/// The total is recomputed every time cards are added, so it always agrees
/// with the cards held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order received.
    cards: Vec<Card>,
    /// Scored total of `cards`.
    total: u8,
    /// Rule used to value aces.
    ace_rule: AceRule,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(ace_rule: AceRule) -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            ace_rule,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total = score(&self.cards, self.ace_rule);
    }

    /// Adds cards to the hand in order.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        self.total = score(&self.cards, self.ace_rule);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the scored total of the hand.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the rule used to value aces.
    #[must_use]
    pub const fn ace_rule(&self) -> AceRule {
        self.ace_rule
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether the hand is a natural (two cards totalling 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total == BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let has_ace = self.cards.iter().any(|c| c.rank.is_ace());
        if !has_ace {
            return false;
        }

        let hard: u16 = self
            .cards
            .iter()
            .filter(|c| !c.rank.is_ace())
            .map(|c| u16::from(c.value()))
            .sum();
        let aces_low = match self.ace_rule {
            AceRule::SingleFlex => 1,
            AceRule::Standard => self.cards.iter().filter(|c| c.rank.is_ace()).count() as u16,
        };
        u16::from(self.total) == hard + aces_low + 10
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(AceRule::default())
    }
}

//! A single 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of unique cards.
///
/// The top of the deck is the next card to be dealt. Every card that leaves
/// the deck is recorded in the dealt pile, so the remaining cards and the
/// dealt cards together always make up the set the deck was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
    /// Cards dealt so far, in deal order.
    dealt: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck with one card per (rank, suit) pair.
    ///
    /// Cards are dealt in canonical order: suits clubs, diamonds, hearts,
    /// spades, and within a suit ranks two through ace.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.reverse();
        Self {
            cards,
            dealt: Vec::with_capacity(DECK_SIZE),
        }
    }

    /// Builds a full deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck that deals exactly `draws`, first element first.
    ///
    /// The deck does not need to be complete, which makes it useful for
    /// replaying a known sequence of cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears more than once.
    pub fn stacked<I>(draws: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = Vec::new();
        for card in draws {
            if cards.contains(&card) {
                return Err(DeckError::DuplicateCard(card));
            }
            cards.push(card);
        }

        cards.reverse();
        Ok(Self {
            cards,
            dealt: Vec::new(),
        })
    }

    /// Shuffles the remaining cards with a single Fisher-Yates pass.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes `n` cards from the top of the deck, returned in deal order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if fewer than `n` cards remain. The
    /// deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining,
            });
        }

        let mut hand: Vec<Card> = self.cards.drain(remaining - n..).collect();
        hand.reverse();
        self.dealt.extend_from_slice(&hand);

        log::trace!("dealt {n} card(s), {} remaining", self.cards.len());
        Ok(hand)
    }

    /// Removes the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })?;
        self.dealt.push(card);
        Ok(card)
    }

    /// Returns the remaining cards, top of the deck first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }

    /// Returns the cards dealt so far, in deal order.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}

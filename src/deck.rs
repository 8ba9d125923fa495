use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: requested {requested}, {remaining} remaining")]
    Exhausted { requested: usize, remaining: usize },
    #[error("card {0} is not in the undealt part of the deck")]
    CardNotAvailable(Card),
    #[error("cannot deal zero cards")]
    ZeroCount,
}

/// A standard 52-card deck with a dealing cursor.
///
/// Dealing never removes cards; it advances the cursor. Shuffling permutes
/// all 52 cards and rewinds the cursor.
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut deck = Deck::standard();
/// deck.shuffle_seeded(7);
/// let hole = deck.deal_n(2).unwrap();
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.remaining(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Cards in rank-major order, unshuffled.
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
            .collect();
        Self { cards, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Rewind the cursor without changing the card order.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Shuffle with a generator seeded from the thread-local entropy source.
    pub fn shuffle(&mut self) {
        let mut rng = ChaCha8Rng::from_rng(&mut rand::rng());
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
    }

    /// Deal the card under the cursor.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self
            .cards
            .get(self.cursor)
            .copied()
            .ok_or(DeckError::Exhausted { requested: 1, remaining: 0 })?;
        self.cursor += 1;
        Ok(card)
    }

    /// Deal `n` cards; fails without dealing anything if fewer remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n == 0 {
            return Err(DeckError::ZeroCount);
        }
        let remaining = self.remaining();
        if n > remaining {
            return Err(DeckError::Exhausted { requested: n, remaining });
        }
        let dealt = self.cards[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        Ok(dealt)
    }

    /// Deal a specific card, moving it under the cursor first.
    pub fn deal_specific(&mut self, card: Card) -> Result<Card, DeckError> {
        let pos = self.cards[self.cursor..]
            .iter()
            .position(|&c| c == card)
            .ok_or(DeckError::CardNotAvailable(card))?;
        self.cards.swap(self.cursor, self.cursor + pos);
        self.deal()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), DECK_SIZE);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn shuffle_resets_cursor() {
        let mut d = Deck::standard();
        d.deal_n(10).unwrap();
        assert_eq!(d.remaining(), 42);
        d.shuffle_seeded(1);
        assert_eq!(d.remaining(), DECK_SIZE);
    }

    #[test]
    fn deal_advances_cursor_and_exhausts() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.deal().unwrap();
        let c2 = d.deal().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.remaining(), 50);
        assert_eq!(d.deal_n(50).unwrap().len(), 50);
        assert_eq!(d.deal(), Err(DeckError::Exhausted { requested: 1, remaining: 0 }));
    }

    #[test]
    fn deal_n_rejects_overdraw_without_dealing() {
        let mut d = Deck::standard();
        d.deal_n(50).unwrap();
        assert_eq!(d.deal_n(3), Err(DeckError::Exhausted { requested: 3, remaining: 2 }));
        assert_eq!(d.remaining(), 2);
        assert_eq!(d.deal_n(0), Err(DeckError::ZeroCount));
    }

    #[test]
    fn deal_specific_pulls_named_card() {
        let mut d = Deck::standard();
        d.shuffle_seeded(3);
        let target = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(d.deal_specific(target).unwrap(), target);
        assert_eq!(d.remaining(), 51);
        assert_eq!(d.deal_specific(target), Err(DeckError::CardNotAvailable(target)));
    }

    #[test]
    fn reset_rewinds_without_reshuffle() {
        let mut d = Deck::standard();
        d.shuffle_seeded(9);
        let first = d.deal().unwrap();
        d.reset();
        assert_eq!(d.deal().unwrap(), first);
    }
}

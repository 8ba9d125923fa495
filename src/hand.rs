use crate::cards::{parse_cards, Card, CardParseError};
use std::fmt;
use std::str::FromStr;

/// Most cards a hold'em hand ever holds: two hole cards plus five board cards.
pub const MAX_CARDS: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("too many cards: a hand holds at most {MAX_CARDS}, got {0}")]
    TooManyCards(usize),
    #[error("empty hand description")]
    Empty,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// Up to seven cards, kept sorted from highest to lowest.
///
/// ```
/// use holdem_engine::hand::Hand;
///
/// let hand: Hand = "2c As Td".parse().unwrap();
/// assert_eq!(hand.to_string(), "As Td 2c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(MAX_CARDS) }
    }

    /// Build a hand from any number of cards up to [`MAX_CARDS`].
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let mut hand = Hand::new();
        hand.add_cards(cards.iter().copied())?;
        Ok(hand)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in descending order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.len() >= MAX_CARDS {
            return Err(HandError::TooManyCards(self.cards.len() + 1));
        }
        let pos = self.cards.partition_point(|&c| c > card);
        self.cards.insert(pos, card);
        Ok(())
    }

    /// Add several cards; on overflow nothing is added.
    pub fn add_cards<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let incoming: Vec<Card> = cards.into_iter().collect();
        let total = self.cards.len() + incoming.len();
        if total > MAX_CARDS {
            return Err(HandError::TooManyCards(total));
        }
        for card in incoming {
            self.add_card(card)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(HandError::Empty);
        }
        let cards = parse_cards(s)?;
        Hand::from_cards(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Place value of each tiebreak slot; slot 0 is the most significant.
const TIEBREAK_WEIGHTS: [u32; 5] = [28_561, 2_197, 169, 13, 1];
/// Place value of the category, one step above the first tiebreak slot.
const CATEGORY_WEIGHT: u32 = 371_293;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in showdown messages.
    pub const fn description(self) -> &'static str {
        match self {
            Category::HighCard => "a High Card",
            Category::OnePair => "One Pair",
            Category::TwoPairs => "Two Pairs",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "a Straight",
            Category::Flush => "a Flush",
            Category::FullHouse => "a Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "a Straight Flush",
            Category::RoyalFlush => "a Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Category plus ranked tiebreakers, packed into one comparable integer.
/// Higher `value` is a stronger hand.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// Significant ranks, most significant first; unused slots hold `Rank::Two`.
    pub tiebreak: [Rank; 5],
    value: u32,
}

impl Evaluation {
    pub(crate) fn new(category: Category, tiebreak: [Rank; 5]) -> Self {
        let value = tiebreak
            .iter()
            .zip(TIEBREAK_WEIGHTS)
            .fold(category.ordinal() as u32 * CATEGORY_WEIGHT, |acc, (r, w)| {
                acc + r.index() as u32 * w
            });
        Self { category, tiebreak, value }
    }

    /// The packed value: `category·13⁵ + t0·13⁴ + … + t4`.
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected 5 to 7 cards to evaluate, got {0}")]
    CardCount(usize),
}

/// Evaluate the best five-card hand among 5 to 7 cards.
///
/// Works on rank and suit histograms, so all seven cards are examined at once
/// rather than enumerating five-card subsets.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("As Ah Qc Jd 9h 3s 2c").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, Category::OnePair);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::CardCount(cards.len()));
    }

    let analysis = HandAnalysis::new(cards);
    let eval = DETECTORS
        .iter()
        .find_map(|d| d.evaluate(&analysis))
        .unwrap_or_else(|| analysis.build_evaluation(Category::HighCard, &[]));
    Ok(eval)
}

/// Compare two card sets of 5 to 7 cards each.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::evaluator::compare;
/// use std::cmp::Ordering;
///
/// let flush = parse_cards("Kh Qs Jh Th 9h 4h 2c").unwrap();
/// let straight = parse_cards("Ah Qc Td 5s 4s 3s 2s").unwrap();
/// assert_eq!(compare(&flush, &straight).unwrap(), Ordering::Greater);
/// ```
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    Ok(evaluate(a)?.cmp(&evaluate(b)?))
}

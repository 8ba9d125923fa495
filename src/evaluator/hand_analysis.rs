use super::rank_groups::RankGroups;
use super::straight_info::{RankMask, StraightInfo};
use crate::cards::{Card, Rank, Suit};
use crate::evaluator::{Category, Evaluation};

/// Histogram analysis of 5 to 7 cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub straight_info: StraightInfo,
    /// Suit holding at least five cards. Seven cards allow at most one.
    pub flush_suit: Option<Suit>,
    /// Straight restricted to the flush suit.
    pub straight_flush: StraightInfo,
    suit_masks: [RankMask; Suit::COUNT],
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; Rank::COUNT];
        let mut suit_counts = [0u8; Suit::COUNT];
        let mut suit_masks: [RankMask; Suit::COUNT] = [0; Suit::COUNT];
        let mut rank_mask: RankMask = 0;
        for card in cards {
            let r = card.rank().index();
            let s = card.suit().index() as usize;
            rank_counts[r as usize] += 1;
            suit_counts[s] += 1;
            suit_masks[s] |= 1 << r;
            rank_mask |= 1 << r;
        }

        let flush_suit = Suit::ALL.iter().copied().find(|s| suit_counts[s.index() as usize] >= 5);
        let straight_flush = match flush_suit {
            Some(s) => StraightInfo::detect(suit_masks[s.index() as usize]),
            None => StraightInfo { top_rank: None },
        };

        Self {
            rank_groups: RankGroups::from_counts(&rank_counts),
            straight_info: StraightInfo::detect(rank_mask),
            flush_suit,
            straight_flush,
            suit_masks,
        }
    }

    /// The five highest ranks of the flush suit, if there is a flush.
    pub fn flush_ranks(&self) -> Option<[Rank; 5]> {
        let suit = self.flush_suit?;
        let mask = self.suit_masks[suit.index() as usize];
        let ranks: Vec<Rank> =
            Rank::ALL.iter().rev().copied().filter(|r| mask & (1 << r.index()) != 0).take(5).collect();
        ranks.try_into().ok()
    }

    /// Build an Evaluation from a category and its significant ranks,
    /// padding unused tiebreak slots with the lowest rank.
    pub fn build_evaluation(&self, category: Category, significant: &[Rank]) -> Evaluation {
        let mut tiebreak = [Rank::Two; 5];
        for (slot, rank) in tiebreak.iter_mut().zip(significant) {
            *slot = *rank;
        }
        Evaluation::new(category, tiebreak)
    }
}

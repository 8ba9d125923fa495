use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// One hand category: recognizes it in an analysis and ranks it.
pub trait CategoryDetector {
    /// Returns the evaluation when the analysed cards contain this category.
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        (analysis.straight_flush.top_rank == Some(Rank::Ace))
            .then(|| analysis.build_evaluation(Category::RoyalFlush, &[]))
    }
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_flush.top_rank?;
        Some(analysis.build_evaluation(Category::StraightFlush, &[top]))
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let quad = analysis.rank_groups.quad()?;
        let mut ranks = vec![quad];
        ranks.extend(analysis.rank_groups.kickers(&[quad], 1));
        Some(analysis.build_evaluation(Category::FourOfAKind, &ranks))
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let (trips, pair) = analysis.rank_groups.full_house()?;
        Some(analysis.build_evaluation(Category::FullHouse, &[trips, pair]))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let ranks = analysis.flush_ranks()?;
        Some(analysis.build_evaluation(Category::Flush, &ranks))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_evaluation(Category::Straight, &[top]))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        let mut ranks = vec![trips];
        ranks.extend(analysis.rank_groups.kickers(&[trips], 2));
        Some(analysis.build_evaluation(Category::ThreeOfAKind, &ranks))
    }
}

pub struct TwoPairsDetector;

impl CategoryDetector for TwoPairsDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let (high, low) = match analysis.rank_groups.pairs() {
            [high, low, ..] => (*high, *low),
            _ => return None,
        };
        let mut ranks = vec![high, low];
        // a third pair still plays as a kicker
        ranks.extend(analysis.rank_groups.kickers(&[high, low], 1));
        Some(analysis.build_evaluation(Category::TwoPairs, &ranks))
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let pair = *analysis.rank_groups.pairs().first()?;
        let mut ranks = vec![pair];
        ranks.extend(analysis.rank_groups.kickers(&[pair], 3));
        Some(analysis.build_evaluation(Category::OnePair, &ranks))
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let ranks = analysis.rank_groups.kickers(&[], 5);
        Some(analysis.build_evaluation(Category::HighCard, &ranks))
    }
}

/// Detectors in precedence order; the first match decides the category.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairsDetector,
    &OnePairDetector,
    &HighCardDetector,
];

//! Bill Chen's starting-hand score for two hole cards.

use crate::cards::{Card, Rank};
use crate::hand::HandError;

/// Score of the high card, in half points.
fn base_half_points(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 20,
        Rank::King => 16,
        Rank::Queen => 14,
        Rank::Jack => 12,
        // (index + 2) / 2 points
        other => other.index() as u32 + 2,
    }
}

/// Chen formula score, rounded half up. Ranges from 0 (worst) to 20 (aces).
///
/// Computed in half points so rounding needs no floating point.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::chen::chen_score;
///
/// assert_eq!(chen_score(&parse_cards("As Ad").unwrap()).unwrap(), 20);
/// assert_eq!(chen_score(&parse_cards("7h 2c").unwrap()).unwrap(), 0);
/// ```
pub fn chen_score(hole: &[Card]) -> Result<u32, HandError> {
    let [a, b] = match hole {
        [a, b] => [*a, *b],
        _ => return Err(HandError::HoleCount(hole.len())),
    };
    let (high, low) = if a.rank() >= b.rank() { (a.rank(), b.rank()) } else { (b.rank(), a.rank()) };

    let mut score = base_half_points(high) as i32;
    if high == low {
        score = (score * 2).max(10);
    }
    if a.suit() == b.suit() {
        score += 4;
    }

    let gap = (high.index() as i32 - low.index() as i32 - 1).max(0);
    if high != low {
        score -= match gap {
            0 => 0,
            1 => 2,
            2 => 4,
            3 => 8,
            _ => 10,
        };
        if gap < 2 && high < Rank::Queen {
            score += 2;
        }
    }

    let score = score.max(0) as u32;
    Ok((score + 1) / 2)
}

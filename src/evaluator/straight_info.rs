use crate::cards::Rank;

/// Bit set of rank indices: bit `i` is set when rank index `i` is present.
pub type RankMask = u16;

const WHEEL: RankMask = (1 << Rank::Ace as u8)
    | (1 << Rank::Two as u8)
    | (1 << Rank::Three as u8)
    | (1 << Rank::Four as u8)
    | (1 << Rank::Five as u8);

/// Whether a set of ranks contains five consecutive ranks, and the top one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Scan from Ace down for five consecutive ranks; fall back to the wheel
    /// (A-2-3-4-5), whose top rank is the Five.
    pub fn detect(mask: RankMask) -> Self {
        let top_rank = (4..Rank::COUNT as u8)
            .rev()
            .find(|&high| {
                let window: RankMask = 0b1_1111 << (high - 4);
                mask & window == window
            })
            .and_then(Rank::from_index)
            .or_else(|| (mask & WHEEL == WHEEL).then_some(Rank::Five));
        Self { top_rank }
    }

    #[cfg(test)]
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(ranks: &[Rank]) -> RankMask {
        ranks.iter().fold(0, |m, r| m | (1 << r.index()))
    }

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(mask(&[
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
            Rank::Nine,
        ]));
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn ace_high_straight() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel_is_five_high() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn longest_run_reports_highest_top() {
        // six-card run plus a stray ace; no wheel without the deuce and trey
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Nine));
    }

    #[test]
    fn six_high_beats_wheel_when_both_present() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn gap_is_not_straight() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Nine,
        ]));
        assert!(!info.is_straight());
    }
}

use crate::cards::Rank;

/// Ranks grouped by multiplicity, highest rank first within each group.
///
/// Built from a 13-slot rank histogram, so it works for any hand size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; Rank::COUNT],
    quads: Vec<Rank>,
    trips: Vec<Rank>,
    pairs: Vec<Rank>,
}

impl RankGroups {
    pub fn from_counts(counts: &[u8; Rank::COUNT]) -> Self {
        let mut quads = Vec::new();
        let mut trips = Vec::new();
        let mut pairs = Vec::new();
        for rank in Rank::ALL.iter().rev().copied() {
            match counts[rank.index() as usize] {
                4 => quads.push(rank),
                3 => trips.push(rank),
                2 => pairs.push(rank),
                _ => {}
            }
        }
        Self { counts: *counts, quads, trips, pairs }
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.quads.first().copied()
    }

    /// Returns the highest three-of-a-kind rank, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.trips.first().copied()
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> &[Rank] {
        &self.pairs
    }

    /// Returns (trips, pair) of the best full house. A second set of trips
    /// can supply the pair.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let top = self.trips()?;
        let pair = self.trips.get(1).copied().into_iter().chain(self.pairs.first().copied()).max()?;
        Some((top, pair))
    }

    /// The `n` highest ranks present that are not in `used`.
    pub fn kickers(&self, used: &[Rank], n: usize) -> Vec<Rank> {
        Rank::ALL
            .iter()
            .rev()
            .copied()
            .filter(|r| self.counts[r.index() as usize] > 0 && !used.contains(r))
            .take(n)
            .collect()
    }
}

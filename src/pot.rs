//! Pots and side pots.
//!
//! A [`Pot`] holds a uniform per-contributor stake: every contributor has put
//! exactly `stake` chips into it. Short (all-in) contributions split a pot so
//! that this stays true, producing side pots.

use crate::Chips;
use std::collections::BTreeSet;
use std::fmt;

/// One pot: a per-contributor stake and the seats that paid it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    stake: Chips,
    contributors: BTreeSet<usize>,
}

impl Pot {
    pub fn new(stake: Chips) -> Self {
        Self { stake, contributors: BTreeSet::new() }
    }

    /// Chips each contributor has put in.
    pub fn stake(&self) -> Chips {
        self.stake
    }

    pub fn contributors(&self) -> &BTreeSet<usize> {
        &self.contributors
    }

    pub fn has_contributor(&self, seat: usize) -> bool {
        self.contributors.contains(&seat)
    }

    pub fn add_contributor(&mut self, seat: usize) {
        self.contributors.insert(seat);
    }

    /// Total chips in the pot.
    pub fn value(&self) -> Chips {
        self.stake * self.contributors.len() as Chips
    }

    /// Split off the part of this pot that `seat` cannot cover.
    ///
    /// This pot keeps `partial` per contributor and gains `seat`; the returned
    /// pot holds the remaining `stake - partial` for the previous contributors.
    pub fn split(&mut self, seat: usize, partial: Chips) -> Pot {
        let remainder =
            Pot { stake: self.stake - partial, contributors: self.contributors.clone() };
        self.stake = partial;
        self.contributors.insert(seat);
        remainder
    }

    pub fn clear(&mut self) {
        self.stake = 0;
        self.contributors.clear();
    }
}

impl fmt::Display for Pot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.stake, self.contributors.len())?;
        let seats: Vec<String> = self.contributors.iter().map(|s| s.to_string()).collect();
        write!(f, " [{}]", seats.join(", "))
    }
}

/// The pots of one hand in creation order: main pot first, then side pots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pots {
    pots: Vec<Pot>,
}

impl Pots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` chips from `seat`, joining or splitting pots as needed.
    ///
    /// ```
    /// use holdem_engine::pot::Pots;
    ///
    /// let mut pots = Pots::new();
    /// pots.contribute(0, 100);
    /// pots.contribute(1, 40); // all-in for less
    /// pots.contribute(2, 100);
    /// assert_eq!(pots.len(), 2);
    /// assert_eq!(pots.total(), 240);
    /// assert_eq!(pots.as_slice()[0].value(), 120);
    /// assert_eq!(pots.as_slice()[1].value(), 120);
    /// ```
    pub fn contribute(&mut self, seat: usize, amount: Chips) {
        let mut amount = amount;
        if amount == 0 {
            return;
        }
        let mut split_off = None;
        for (i, pot) in self.pots.iter_mut().enumerate() {
            if pot.has_contributor(seat) {
                continue;
            }
            if amount >= pot.stake {
                pot.add_contributor(seat);
                amount -= pot.stake;
            } else {
                split_off = Some((i, pot.split(seat, amount)));
                amount = 0;
            }
            if amount == 0 {
                break;
            }
        }
        match split_off {
            // keep the remainder right after its parent so pots stay ordered by stake level
            Some((i, remainder)) => self.pots.insert(i + 1, remainder),
            None if amount > 0 => {
                let mut pot = Pot::new(amount);
                pot.add_contributor(seat);
                self.pots.push(pot);
            }
            None => {}
        }
    }

    /// Merge neighbouring pots with identical contributors.
    pub fn consolidate(&mut self) {
        let mut merged: Vec<Pot> = Vec::with_capacity(self.pots.len());
        for pot in self.pots.drain(..) {
            if pot.contributors.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.contributors == pot.contributors => last.stake += pot.stake,
                _ => merged.push(pot),
            }
        }
        self.pots = merged;
    }

    pub fn total(&self) -> Chips {
        self.pots.iter().map(Pot::value).sum()
    }

    pub fn len(&self) -> usize {
        self.pots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pots.is_empty()
    }

    pub fn as_slice(&self) -> &[Pot] {
        &self.pots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pot> {
        self.pots.iter()
    }

    pub fn clear(&mut self) {
        self.pots.clear();
    }
}

impl<'a> IntoIterator for &'a Pots {
    type Item = &'a Pot;
    type IntoIter = std::slice::Iter<'a, Pot>;

    fn into_iter(self) -> Self::IntoIter {
        self.pots.iter()
    }
}

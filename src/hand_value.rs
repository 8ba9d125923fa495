use crate::evaluator::{evaluate, Category, EvalError, Evaluation};
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The strength of a [`Hand`] of 5 to 7 cards.
///
/// Equality, hashing and ordering look only at the packed value, so hands
/// that differ only in suits compare equal. Ordering is ascending (stronger
/// hands are greater); the table ranks players strongest-first by wrapping
/// values in [`std::cmp::Reverse`].
///
/// ```
/// use holdem_engine::hand::Hand;
/// use holdem_engine::hand_value::HandValue;
///
/// let a = HandValue::new("As Qh Tc 8d 5d 4h 2c".parse::<Hand>().unwrap()).unwrap();
/// let b = HandValue::new("Ac Qd Td 8h 5s 4c 2d".parse::<Hand>().unwrap()).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.description(), "a High Card");
/// ```
#[derive(Debug, Clone)]
pub struct HandValue {
    hand: Hand,
    evaluation: Evaluation,
}

impl HandValue {
    pub fn new(hand: Hand) -> Result<Self, EvalError> {
        let evaluation = evaluate(hand.cards())?;
        Ok(Self { hand, evaluation })
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn category(&self) -> Category {
        self.evaluation.category
    }

    pub fn value(&self) -> u32 {
        self.evaluation.value()
    }

    pub fn description(&self) -> &'static str {
        self.evaluation.category.description()
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for HandValue {}

impl Hash for HandValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BTreeMap;

    fn value(s: &str) -> HandValue {
        HandValue::new(s.parse().unwrap()).unwrap()
    }

    #[test]
    fn too_few_cards_is_an_error() {
        let hand: Hand = "As Kd".parse().unwrap();
        assert_eq!(HandValue::new(hand).unwrap_err(), EvalError::CardCount(2));
    }

    #[test]
    fn reverse_keys_rank_strongest_first() {
        let mut ranking: BTreeMap<Reverse<HandValue>, &str> = BTreeMap::new();
        ranking.insert(Reverse(value("2c 3d 4h 5s 7c 9d Jh")), "high");
        ranking.insert(Reverse(value("As Ks Qs Js Ts 2d 3d")), "royal");
        ranking.insert(Reverse(value("9h 9d 4h 5s 7c 2d Jh")), "pair");
        let order: Vec<&str> = ranking.values().copied().collect();
        assert_eq!(order, vec!["royal", "pair", "high"]);
    }

    #[test]
    fn keeps_the_evaluated_hand() {
        let v = value("Kh Kd Ks 2c 2d");
        assert_eq!(v.hand().len(), 5);
        assert_eq!(v.category(), Category::FullHouse);
        assert_eq!(v.to_string(), format!("a Full House ({})", v.value()));
    }
}

use crate::action::Action;
use crate::cards::Card;
use crate::hand::{Hand, HandError};
use crate::Chips;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("{name} cannot pay {amount}: only {cash} available")]
    InsufficientCash { name: String, amount: Chips, cash: Chips },
}

/// A seated player's table state. Only the table mutates it; clients see
/// [`PlayerView`] projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) cash: Chips,
    pub(crate) hand: Hand,
    pub(crate) bet: Chips,
    pub(crate) action: Option<Action>,
}

impl Player {
    pub fn new(name: impl Into<String>, cash: Chips) -> Self {
        Self { name: name.into(), cash, hand: Hand::new(), bet: 0, action: None }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chips behind (not yet in the pot)
    pub fn cash(&self) -> Chips {
        self.cash
    }

    /// Returns the chips put in during the current betting round
    pub fn bet(&self) -> Chips {
        self.bet
    }

    /// Returns the most recent action, if any
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Returns the hole cards (empty when folded or between hands)
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Still holding cards with nothing left to bet.
    pub fn is_all_in(&self) -> bool {
        self.has_cards() && self.cash == 0
    }

    pub(crate) fn reset_hand(&mut self) {
        self.hand.clear();
        self.reset_bet();
    }

    /// Clear the round bet. An all-in player keeps showing as all-in.
    pub(crate) fn reset_bet(&mut self) {
        self.bet = 0;
        self.action = self.is_all_in().then_some(Action::AllIn);
    }

    pub(crate) fn set_hole_cards(&mut self, cards: &[Card]) -> Result<(), HandError> {
        if cards.len() != 2 {
            return Err(HandError::HoleCount(cards.len()));
        }
        self.hand = Hand::from_cards(cards)?;
        Ok(())
    }

    pub(crate) fn clear_cards(&mut self) {
        self.hand.clear();
    }

    pub(crate) fn pay_cash(&mut self, amount: Chips) -> Result<(), PlayerError> {
        if amount > self.cash {
            return Err(PlayerError::InsufficientCash {
                name: self.name.clone(),
                amount,
                cash: self.cash,
            });
        }
        self.cash -= amount;
        Ok(())
    }

    /// Move `amount` from the stack into the current round's bet.
    pub(crate) fn commit(&mut self, amount: Chips) -> Result<(), PlayerError> {
        self.pay_cash(amount)?;
        self.bet += amount;
        Ok(())
    }

    pub(crate) fn post_blind(&mut self, blind: Action, amount: Chips) -> Result<(), PlayerError> {
        self.commit(amount)?;
        self.action = Some(blind);
        Ok(())
    }

    pub(crate) fn win(&mut self, amount: Chips) {
        self.cash += amount;
    }

    /// Project the player for a client; hole cards only when `reveal_cards`.
    pub fn view(&self, reveal_cards: bool) -> PlayerView {
        PlayerView {
            name: self.name.clone(),
            cash: self.cash,
            bet: self.bet,
            has_cards: self.has_cards(),
            action: self.action,
            cards: (reveal_cards && self.has_cards()).then(|| self.hand.cards().to_vec()),
        }
    }
}

/// What a client is told about a player.
///
/// `cards` is `None` unless the receiving client owns the player or the
/// cards were shown at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerView {
    pub name: String,
    pub cash: Chips,
    pub bet: Chips,
    pub has_cards: bool,
    pub action: Option<Action>,
    pub cards: Option<Vec<Card>>,
}

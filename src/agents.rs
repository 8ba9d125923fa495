//! Ready-made clients: a predictable calling station and a seeded bot.
//!
//! Both only ever answer with an action from the allowed set, so they can be
//! seated at any table without tripping protocol checks.

use crate::action::{Action, ActionKind, AllowedActions};
use crate::client::Client;
use crate::Chips;

mod bots;

pub use bots::{BasicBot, BotProfile, Difficulty};

/// Checks whenever it can, otherwise calls. Never bets, raises or folds
/// unless folding is the only option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallingAgent;

impl Client for CallingAgent {
    fn act(&mut self, _min_bet: Chips, _current_bet: Chips, allowed: &AllowedActions) -> Action {
        passive_action(allowed)
    }
}

/// Check if allowed, else call, else fold.
pub(crate) fn passive_action(allowed: &AllowedActions) -> Action {
    if allowed.contains(ActionKind::Check) {
        Action::Check
    } else if allowed.contains(ActionKind::Call) {
        Action::Call
    } else {
        Action::Fold
    }
}

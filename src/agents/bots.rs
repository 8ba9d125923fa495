use crate::action::{Action, ActionKind, AllowedActions};
use crate::cards::Card;
use crate::chen::chen_score;
use crate::client::Client;
use crate::config::TableType;
use crate::evaluator::evaluate;
use crate::player::PlayerView;
use crate::Chips;
use log::trace;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use super::passive_action;

/// Difficulty tiers for bot play style and mistake rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A bot's play style and randomness.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct BotProfile {
    pub difficulty: Difficulty,
    /// 0..1, higher folds more marginal hands.
    pub tightness: f64,
    /// 0..1, higher bets and raises more often and larger.
    pub aggression: f64,
    pub bluff: f64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    /// Tuned defaults for a difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (tightness, aggression, bluff) = match difficulty {
            Difficulty::Easy => (0.3, 0.2, 0.03),
            Difficulty::Medium => (0.5, 0.35, 0.05),
            Difficulty::Hard => (0.62, 0.5, 0.08),
        };
        Self { difficulty, tightness, aggression, bluff, rng_seed: None }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Medium)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
    table_type: TableType,
    hole: Vec<Card>,
    board: Vec<Card>,
    pot: Chips,
    stack: Chips,
    bet: Chips,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self {
            rng,
            table_type: TableType::NoLimit,
            hole: Vec::new(),
            board: Vec::new(),
            pot: 0,
            stack: 0,
            bet: 0,
        }
    }
}

/// What the bot knows when asked to act.
#[derive(Debug, Clone, Copy)]
struct Spot {
    min_bet: Chips,
    current_bet: Chips,
    to_call: Chips,
    pot: Chips,
    stack: Chips,
}

#[derive(Debug, Clone, Copy)]
struct DecisionParams {
    strength: f64,
    fold_threshold: f64,
    raise_threshold: f64,
    aggression: f64,
    bluff: f64,
}

/// A simple seeded bot: Chen score before the flop, made-hand category after.
///
/// It follows its own seat through the table notifications, so it must be
/// created with the name it is seated under.
#[derive(Debug)]
pub struct BasicBot {
    name: String,
    profile: BotProfile,
    state: BotState,
}

impl BasicBot {
    pub fn new(name: impl Into<String>, profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { name: name.into(), profile, state }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn track(&mut self, player: &PlayerView) {
        if player.name != self.name {
            return;
        }
        self.state.stack = player.cash;
        self.state.bet = player.bet;
        match &player.cards {
            Some(cards) => self.state.hole.clone_from(cards),
            None if !player.has_cards => self.state.hole.clear(),
            None => {}
        }
    }

    /// Rough 0..1 strength of the current holding.
    fn strength(&self) -> f64 {
        let hole = &self.state.hole;
        if self.state.board.is_empty() {
            return match chen_score(hole) {
                Ok(score) => f64::from(score) / 20.0,
                Err(_) => 0.0,
            };
        }
        let mut cards = hole.clone();
        cards.extend_from_slice(&self.state.board);
        match evaluate(&cards) {
            Ok(eval) => {
                let category = f64::from(eval.category.ordinal()) / 9.0;
                let high = f64::from(eval.tiebreak[0].index()) / 12.0;
                let mut strength = category * 0.85 + high * 0.15;
                if self.state.board.len() < 5 {
                    strength += flush_draw_bonus(&cards);
                }
                strength.clamp(0.0, 1.0)
            }
            Err(_) => 0.0,
        }
    }

    fn params(&mut self, spot: &Spot) -> DecisionParams {
        let pot_odds = if spot.to_call == 0 {
            0.0
        } else {
            spot.to_call as f64 / (spot.pot + spot.to_call) as f64
        };
        let (mistake_rate, bias) = difficulty_modifiers(self.profile.difficulty);
        let tightness = (self.profile.tightness + bias).clamp(0.05, 0.95);
        let aggression = (self.profile.aggression + bias).clamp(0.05, 0.95);
        let bluff = (self.profile.bluff + bias * 0.5).clamp(0.0, 0.5);

        let noise = self.state.rng.random_range(-1.0..=1.0) * mistake_rate * 0.18;
        let strength = (self.strength() + noise).clamp(0.0, 1.0);
        let fold_threshold = (0.25 + tightness * 0.3 - pot_odds * 0.25).clamp(0.1, 0.9);
        let raise_threshold = (0.68 - aggression * 0.25).clamp(0.15, 0.9);
        DecisionParams { strength, fold_threshold, raise_threshold, aggression, bluff }
    }

    fn decide(&mut self, spot: Spot, allowed: &AllowedActions) -> Action {
        if !allowed.contains(ActionKind::Fold) {
            // all-in: nothing to decide
            return passive_action(allowed);
        }
        let params = self.params(&spot);
        let roll: f64 = self.state.rng.random();

        if allowed.contains(ActionKind::Call) {
            if params.strength < params.fold_threshold {
                return Action::Fold;
            }
            if allowed.contains(ActionKind::Raise)
                && params.strength > params.raise_threshold
                && roll < params.aggression
            {
                if let Some(increment) = self.raise_increment(&spot, &params) {
                    return Action::Raise(increment);
                }
            }
            return Action::Call;
        }

        let value = params.strength > params.raise_threshold && roll < params.aggression;
        let bluff = params.strength < params.fold_threshold && roll < params.bluff;
        if value || bluff {
            if allowed.contains(ActionKind::Bet) {
                return Action::Bet(self.bet_size(&spot, &params));
            }
            if allowed.contains(ActionKind::Raise) {
                if let Some(increment) = self.raise_increment(&spot, &params) {
                    return Action::Raise(increment);
                }
            }
        }
        passive_action(allowed)
    }

    /// An opening bet between the minimum and the whole stack.
    fn bet_size(&self, spot: &Spot, params: &DecisionParams) -> Chips {
        if self.state.table_type == TableType::FixedLimit {
            return spot.min_bet;
        }
        let factor = if params.strength > 0.8 {
            0.9
        } else if params.strength > 0.6 {
            0.6
        } else {
            0.33
        };
        let scale = 0.8 + params.aggression * 0.4;
        let size = (spot.pot as f64 * factor * scale).round() as Chips;
        size.max(spot.min_bet).min(spot.stack)
    }

    /// A raise increment the stack can pay for, or `None` when the call alone
    /// takes everything.
    fn raise_increment(&self, spot: &Spot, params: &DecisionParams) -> Option<Chips> {
        if spot.stack <= spot.to_call {
            return None;
        }
        if self.state.table_type == TableType::FixedLimit {
            return Some(spot.min_bet);
        }
        let headroom = spot.stack - spot.to_call;
        let factor = if params.strength > 0.85 {
            1.0
        } else if params.strength > 0.65 {
            0.7
        } else {
            0.5
        };
        let scale = 0.9 + params.aggression * 0.3;
        let raise = (spot.pot.max(spot.current_bet) as f64 * factor * scale).round() as Chips;
        Some(raise.max(spot.min_bet).min(headroom))
    }
}

impl Client for BasicBot {
    fn joined_table(&mut self, table_type: TableType, _big_blind: Chips, players: &[PlayerView]) {
        self.state.table_type = table_type;
        for player in players {
            self.track(player);
        }
    }

    fn hand_started(&mut self, _dealer: &PlayerView) {
        self.state.hole.clear();
        self.state.board.clear();
    }

    fn player_updated(&mut self, player: &PlayerView) {
        self.track(player);
    }

    fn player_acted(&mut self, player: &PlayerView) {
        self.track(player);
    }

    fn board_updated(&mut self, board: &[Card], _bet: Chips, pot: Chips) {
        self.state.board.clear();
        self.state.board.extend_from_slice(board);
        self.state.pot = pot;
    }

    fn act(&mut self, min_bet: Chips, current_bet: Chips, allowed: &AllowedActions) -> Action {
        let spot = Spot {
            min_bet,
            current_bet,
            to_call: current_bet.saturating_sub(self.state.bet),
            pot: self.state.pot,
            stack: self.state.stack,
        };
        let action = self.decide(spot, allowed);
        trace!("{} chooses {action} from {allowed}", self.name);
        action
    }
}

fn difficulty_modifiers(difficulty: Difficulty) -> (f64, f64) {
    match difficulty {
        Difficulty::Easy => (0.28, -0.1),
        Difficulty::Medium => (0.14, 0.0),
        Difficulty::Hard => (0.08, 0.05),
    }
}

fn flush_draw_bonus(cards: &[Card]) -> f64 {
    let mut suits = [0u8; 4];
    for card in cards {
        suits[card.suit().index() as usize] += 1;
    }
    if suits.contains(&4) {
        0.07
    } else {
        0.0
    }
}

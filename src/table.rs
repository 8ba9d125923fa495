//! The table: seats, dealing, betting rounds, pots and showdown.
//!
//! [`Table::run`] plays hands until fewer than two players can afford the big
//! blind. Each decision is a blocking call to the acting seat's [`Client`];
//! the table validates it against the allowed set before applying it.

use crate::action::{Action, ActionKind, AllowedActions};
use crate::cards::Card;
use crate::client::Client;
use crate::config::{ConfigError, TableConfig, TableType};
use crate::deck::{Deck, DeckError};
use crate::evaluator::EvalError;
use crate::hand::{Hand, HandError};
use crate::hand_value::HandValue;
use crate::player::{Player, PlayerError, PlayerView};
use crate::pot::{Pot, Pots};
use crate::Chips;
use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Street {
    Blinds,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    pub const fn name(self) -> &'static str {
        match self {
            Street::Blinds => "blinds",
            Street::PreFlop => "pre-flop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TableError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("protocol violation by {player}: {reason}")]
    Protocol { player: String, reason: String },
    #[error("pot integrity violated: collected {collected}, awarded {awarded}")]
    Integrity { collected: Chips, awarded: Chips },
    #[error("need at least two players able to post the big blind, have {0}")]
    NotEnoughPlayers(usize),
    #[error("table aborted by an earlier error with {0} chips left in the pots")]
    Aborted(Chips),
}

/// Result of one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandOutcome {
    /// Pots as they stood before being awarded, main pot first.
    pub pots: Vec<Pot>,
    /// Chips won, indexed by seat.
    pub awards: Vec<Chips>,
    /// Whether the hand went to a showdown (rather than everyone folding).
    pub showdown: bool,
}

impl HandOutcome {
    pub fn total_awarded(&self) -> Chips {
        self.awards.iter().sum()
    }
}

struct Seat {
    player: Player,
    client: Box<dyn Client>,
}

/// A hold'em table driving a fixed set of seats through a session.
pub struct Table {
    config: TableConfig,
    seats: Vec<Seat>,
    rng: ChaCha8Rng,
    deck: Deck,
    board: Vec<Card>,
    /// Seats dealt into the current hand and not folded, ascending.
    active: Vec<usize>,
    dealer: Option<usize>,
    actor: usize,
    street: Street,
    min_bet: Chips,
    bet: Chips,
    pots: Pots,
    last_bettor: Option<usize>,
    raises: u32,
    hands_played: usize,
    /// Set once a hand fails mid-way; the pots are left as they stood.
    aborted: bool,
}

impl Table {
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            min_bet: config.big_blind,
            config,
            seats: Vec::new(),
            rng,
            deck: Deck::standard(),
            board: Vec::with_capacity(5),
            active: Vec::new(),
            dealer: None,
            actor: 0,
            street: Street::Blinds,
            bet: 0,
            pots: Pots::new(),
            last_bettor: None,
            raises: 0,
            hands_played: 0,
            aborted: false,
        })
    }

    /// Seat a player; returns the seat index. Seating order is join order.
    pub fn add_player<C>(&mut self, name: impl Into<String>, cash: Chips, client: C) -> usize
    where
        C: Client + 'static,
    {
        self.seats.push(Seat { player: Player::new(name, cash), client: Box::new(client) });
        self.seats.len() - 1
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.seats.get(seat).map(|s| &s.player)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.seats.iter().map(|s| &s.player)
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pots(&self) -> &Pots {
        &self.pots
    }

    pub fn dealer(&self) -> Option<usize> {
        self.dealer
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn hands_played(&self) -> usize {
        self.hands_played
    }

    /// Whether an error stopped a hand part way. An aborted table plays no
    /// further hands, so the chips it holds stay accounted for.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Chips held by all players plus chips in the pots.
    pub fn total_chips(&self) -> Chips {
        self.players().map(Player::cash).sum::<Chips>() + self.pots.total()
    }

    /// Players who can afford the big blind.
    pub fn eligible_count(&self) -> usize {
        self.players().filter(|p| p.cash() >= self.config.big_blind).count()
    }

    /// Play hands until fewer than two players can post the big blind or the
    /// configured hand limit is reached. Returns the number of hands played.
    pub fn run(&mut self) -> Result<usize, TableError> {
        if self.aborted {
            return Err(TableError::Aborted(self.pots.total()));
        }
        let table_type = self.config.table_type;
        let big_blind = self.config.big_blind;
        for seat in 0..self.seats.len() {
            let views = self.views_for(seat, false);
            self.seats[seat].client.joined_table(table_type, big_blind, &views);
        }
        info!("session started: {} seats, {} {}", self.seats.len(), table_type, big_blind);

        let mut played = 0;
        while self.eligible_count() > 1 && self.config.max_hands.map_or(true, |max| played < max) {
            self.play_hand()?;
            played += 1;
        }

        self.board.clear();
        self.pots.clear();
        self.notify_board_updated();
        self.notify_players_updated(false);
        self.notify_message("Game over.");
        info!("session over after {played} hands");
        Ok(played)
    }

    /// Play a single hand from blinds to pot distribution.
    ///
    /// Any error other than [`TableError::NotEnoughPlayers`] aborts the table:
    /// later calls return [`TableError::Aborted`].
    pub fn play_hand(&mut self) -> Result<HandOutcome, TableError> {
        if self.aborted {
            return Err(TableError::Aborted(self.pots.total()));
        }
        let result = self.play_hand_inner();
        if let Err(e) = &result {
            if !matches!(e, TableError::NotEnoughPlayers(_)) {
                error!("hand {} aborted: {e}", self.hands_played + 1);
                self.aborted = true;
            }
        }
        result
    }

    fn play_hand_inner(&mut self) -> Result<HandOutcome, TableError> {
        self.reset_hand()?;

        // heads-up, the dealer posts the small blind
        if self.active.len() > 2 {
            self.rotate_actor();
        }
        self.post_blind(Action::SmallBlind, self.config.small_blind())?;
        self.rotate_actor();
        self.post_blind(Action::BigBlind, self.config.big_blind)?;

        self.deal_hole_cards()?;
        self.street = Street::PreFlop;
        self.betting_round()?;

        for (street, count) in [(Street::Flop, 3), (Street::Turn, 1), (Street::River, 1)] {
            if self.active.len() < 2 {
                break;
            }
            self.street = street;
            self.min_bet = self.street_min_bet(street);
            self.deal_community_cards(count)?;
            self.betting_round()?;
        }

        let collected = self.pots.total();
        let pots = self.pots.as_slice().to_vec();
        let showdown = self.active.len() > 1;
        let awards = if showdown { self.showdown()? } else { self.award_uncontested() };

        let awarded: Chips = awards.iter().sum();
        if awarded != collected {
            error!("pot division mismatch: collected {collected}, awarded {awarded}");
            return Err(TableError::Integrity { collected, awarded });
        }
        self.pots.clear();
        self.hands_played += 1;
        Ok(HandOutcome { pots, awards, showdown })
    }

    /// The actions `seat` may take right now.
    /// Empty for a seat that does not exist.
    pub fn allowed_actions(&self, seat: usize) -> AllowedActions {
        let mut allowed = AllowedActions::empty();
        let Some(player) = self.seats.get(seat).map(|s| &s.player) else {
            return allowed;
        };
        if player.is_all_in() {
            allowed.insert(ActionKind::Check);
            return allowed;
        }
        let may_raise = self.config.table_type == TableType::NoLimit
            || self.raises < self.config.max_raises
            || self.active.len() == 2;
        if self.bet == 0 {
            allowed.insert(ActionKind::Check);
            if may_raise {
                allowed.insert(ActionKind::Bet);
            }
        } else {
            if player.bet() < self.bet {
                allowed.insert(ActionKind::Call);
            } else {
                allowed.insert(ActionKind::Check);
            }
            if may_raise {
                allowed.insert(ActionKind::Raise);
            }
        }
        allowed.insert(ActionKind::Fold);
        allowed
    }

    fn reset_hand(&mut self) -> Result<(), TableError> {
        self.board.clear();
        self.pots.clear();
        self.last_bettor = None;
        self.raises = 0;
        self.street = Street::Blinds;
        self.notify_board_updated();

        let big_blind = self.config.big_blind;
        self.active = (0..self.seats.len())
            .filter(|&s| self.seats[s].player.cash() >= big_blind)
            .collect();
        if self.active.len() < 2 {
            warn!("cannot start a hand with {} eligible players", self.active.len());
            return Err(TableError::NotEnoughPlayers(self.active.len()));
        }
        for seat in &mut self.seats {
            seat.player.reset_hand();
        }

        let dealer = match self.dealer {
            Some(previous) => self.next_active_after(previous),
            None => self.active[0],
        };
        self.dealer = Some(dealer);
        self.deck.shuffle_with(&mut self.rng);
        self.actor = dealer;
        self.min_bet = big_blind;
        self.bet = big_blind;

        let name = self.seats[dealer].player.name().to_string();
        info!("hand {}: {} deals, {} players", self.hands_played + 1, name, self.active.len());
        let dealer_view = self.seats[dealer].player.view(false);
        for seat in &mut self.seats {
            seat.client.hand_started(&dealer_view);
        }
        self.notify_players_updated(false);
        self.notify_message(&format!("New hand, {name} is the dealer."));
        Ok(())
    }

    fn post_blind(&mut self, blind: Action, amount: Chips) -> Result<(), TableError> {
        let seat = self.actor;
        self.seats[seat].player.post_blind(blind, amount)?;
        self.pots.contribute(seat, amount);
        debug!("{} {} ({amount})", self.seats[seat].player.name(), blind.verb());
        self.notify_board_updated();
        self.broadcast_player(seat, false, |client, view| client.player_acted(view));
        Ok(())
    }

    fn deal_hole_cards(&mut self) -> Result<(), TableError> {
        for &seat in &self.active {
            let cards = self.deck.deal_n(2)?;
            self.seats[seat].player.set_hole_cards(&cards)?;
        }
        self.notify_players_updated(false);
        let dealer = self.dealer_name();
        self.notify_message(&format!("{dealer} deals the hole cards."));
        Ok(())
    }

    fn deal_community_cards(&mut self, count: usize) -> Result<(), TableError> {
        let cards = self.deck.deal_n(count)?;
        self.board.extend(cards);
        let board: Vec<String> = self.board.iter().map(Card::to_string).collect();
        info!("{}: {}", self.street.name(), board.join(" "));
        self.notify_board_updated();
        let dealer = self.dealer_name();
        self.notify_message(&format!("{dealer} deals the {}.", self.street.name()));
        Ok(())
    }

    /// Big bets on the turn and river in fixed-limit play.
    fn street_min_bet(&self, street: Street) -> Chips {
        match (self.config.table_type, street) {
            (TableType::FixedLimit, Street::Turn | Street::River) => 2 * self.config.big_blind,
            _ => self.config.big_blind,
        }
    }

    fn betting_round(&mut self) -> Result<(), TableError> {
        let mut players_to_act = self.active.len();
        let dealer = self.dealer_seat();
        if self.board.is_empty() {
            // the big blind is the actor; action starts on their left
            self.bet = self.config.big_blind;
        } else {
            self.actor = dealer;
            self.bet = 0;
        }
        if players_to_act == 2 {
            self.actor = dealer;
        }
        self.last_bettor = None;
        self.raises = 0;
        self.notify_board_updated();

        while players_to_act > 0 {
            self.rotate_actor();
            let seat = self.actor;
            let action = if self.seats[seat].player.is_all_in() {
                Action::Check
            } else {
                let allowed = self.allowed_actions(seat);
                let action = self.seats[seat].client.act(self.min_bet, self.bet, &allowed);
                if !allowed.permits(action) {
                    return Err(
                        self.protocol_violation(seat, format!("{action} is not one of {allowed}"))
                    );
                }
                action
            };
            players_to_act -= 1;

            match action {
                Action::Check => {}
                Action::Call => {
                    let player = &mut self.seats[seat].player;
                    let amount = self.bet.saturating_sub(player.bet()).min(player.cash());
                    player.commit(amount)?;
                    self.pots.contribute(seat, amount);
                }
                Action::Bet(requested) => {
                    let amount = self.bet_amount(seat, requested)?;
                    let player = &mut self.seats[seat].player;
                    player.commit(amount)?;
                    self.pots.contribute(seat, amount);
                    self.bet = self.bet.max(player.bet());
                    self.min_bet = self.min_bet.max(amount);
                    self.last_bettor = Some(seat);
                    players_to_act = self.active.len();
                }
                Action::Raise(requested) => {
                    let payment = self.raise_payment(seat, requested)?;
                    let player = &mut self.seats[seat].player;
                    player.commit(payment)?;
                    self.pots.contribute(seat, payment);
                    // a stack too short to cover the call only calls
                    if player.bet() > self.bet {
                        self.min_bet = self.min_bet.max(player.bet() - self.bet);
                        self.bet = player.bet();
                        self.last_bettor = Some(seat);
                        self.raises += 1;
                        players_to_act = if self.config.table_type == TableType::NoLimit
                            || self.raises < self.config.max_raises
                            || self.active.len() == 2
                        {
                            self.active.len()
                        } else {
                            // cap reached: everyone but the raiser acts once more
                            self.active.len() - 1
                        };
                    }
                }
                Action::Fold => {
                    self.seats[seat].player.clear_cards();
                    self.active.retain(|&s| s != seat);
                    if self.active.len() == 1 {
                        players_to_act = 0;
                    }
                }
                other => {
                    return Err(self.protocol_violation(seat, format!("{other} during betting")));
                }
            }
            self.seats[seat].player.action = Some(action);
            debug!(
                "{} {}: {} (bet {}, pot {})",
                self.street.name(),
                self.seats[seat].player.name(),
                action,
                self.bet,
                self.pots.total()
            );
            self.notify_board_updated();
            self.broadcast_player(seat, false, |client, view| client.player_acted(view));
        }

        for &seat in &self.active {
            self.seats[seat].player.reset_bet();
        }
        self.pots.consolidate();
        for pot in &self.pots {
            debug!("pot after {}: {pot}", self.street.name());
        }
        self.notify_board_updated();
        self.notify_players_updated(false);
        Ok(())
    }

    /// Chips a bet commits. Fixed-limit forces the minimum bet.
    fn bet_amount(&self, seat: usize, requested: Chips) -> Result<Chips, TableError> {
        let cash = self.seats[seat].player.cash();
        match self.config.table_type {
            TableType::FixedLimit => Ok(self.min_bet.min(cash)),
            TableType::NoLimit => {
                if requested > cash {
                    Err(self.protocol_violation(
                        seat,
                        format!("bet of {requested} exceeds stack of {cash}"),
                    ))
                } else if requested < self.min_bet && requested < cash {
                    Err(self.protocol_violation(
                        seat,
                        format!("bet of {requested} is below the minimum of {}", self.min_bet),
                    ))
                } else {
                    Ok(requested)
                }
            }
        }
    }

    /// Chips a raise commits: the call plus the raise increment.
    fn raise_payment(&self, seat: usize, requested: Chips) -> Result<Chips, TableError> {
        let player = &self.seats[seat].player;
        let to_call = self.bet.saturating_sub(player.bet());
        match self.config.table_type {
            TableType::FixedLimit => Ok((to_call + self.min_bet).min(player.cash())),
            TableType::NoLimit => {
                let needed = to_call + requested;
                if needed > player.cash() {
                    Err(self.protocol_violation(
                        seat,
                        format!("raise of {requested} needs {needed}, stack is {}", player.cash()),
                    ))
                } else if requested < self.min_bet && needed < player.cash() {
                    Err(self.protocol_violation(
                        seat,
                        format!("raise of {requested} is below the minimum of {}", self.min_bet),
                    ))
                } else {
                    Ok(needed)
                }
            }
        }
    }

    fn award_uncontested(&mut self) -> Vec<Chips> {
        let mut awards = vec![0; self.seats.len()];
        let Some(&winner) = self.active.first() else {
            return awards;
        };
        let total = self.pots.total();
        awards[winner] = total;
        self.seats[winner].player.win(total);
        let name = self.seats[winner].player.name().to_string();
        info!("{name} wins {total} uncontested");
        self.notify_players_updated(false);
        self.notify_message(&format!("{name} wins $ {total}."));
        awards
    }

    /// Reveal, rank and pay out. Returns chips won per seat.
    fn showdown(&mut self) -> Result<Vec<Chips>, TableError> {
        self.street = Street::Showdown;
        let dealer = self.dealer_seat();

        let mut order: Vec<usize> = Vec::with_capacity(self.active.len());
        for pot in &self.pots {
            for &seat in pot.contributors() {
                if self.seats[seat].player.is_all_in() && !order.contains(&seat) {
                    order.push(seat);
                }
            }
        }
        if let Some(aggressor) = self.last_bettor {
            if self.active.contains(&aggressor) && !order.contains(&aggressor) {
                order.push(aggressor);
            }
        }
        for seat in self.seating_order_after(dealer) {
            if self.active.contains(&seat) && !order.contains(&seat) {
                order.push(seat);
            }
        }

        // all-in hands always show; the best shown non-all-in hand sets the bar
        let mut best_shown: Option<u32> = None;
        let mut ranking: BTreeMap<Reverse<HandValue>, Vec<usize>> = BTreeMap::new();
        for seat in order {
            let value = self.hand_value(seat)?;
            let all_in = self.seats[seat].player.is_all_in();
            let name = self.seats[seat].player.name().to_string();
            if all_in || best_shown.map_or(true, |best| value.value() >= best) {
                if !all_in {
                    best_shown = Some(value.value());
                }
                info!("{name} shows {} ({})", self.seats[seat].player.hand(), value.description());
                self.broadcast_player(seat, true, |client, view| client.player_updated(view));
                self.notify_message(&format!("{name} has {}.", value.description()));
                ranking.entry(Reverse(value)).or_default().push(seat);
            } else {
                debug!("{name} mucks");
                self.seats[seat].player.clear_cards();
                self.active.retain(|&s| s != seat);
                self.broadcast_player(seat, false, |client, view| client.player_updated(view));
                self.notify_message(&format!("{name} folds."));
            }
        }

        let mut awards = vec![0; self.seats.len()];
        for pot in &self.pots {
            let winners = ranking
                .values()
                .map(|group| {
                    group.iter().copied().filter(|&s| pot.has_contributor(s)).collect::<Vec<_>>()
                })
                .find(|winners| !winners.is_empty())
                .unwrap_or_else(|| {
                    // everyone in this pot folded after paying in: refund it
                    warn!("no shown hand is eligible for pot {pot}, returning it");
                    pot.contributors().iter().copied().collect()
                });
            if winners.is_empty() {
                continue;
            }
            let value = pot.value();
            let share = value / winners.len() as Chips;
            let mut odd_chips = value % winners.len() as Chips;
            for &winner in &winners {
                awards[winner] += share;
            }
            for seat in self.seating_order_after(dealer) {
                if odd_chips == 0 {
                    break;
                }
                if winners.contains(&seat) {
                    awards[seat] += 1;
                    odd_chips -= 1;
                }
            }
        }

        let mut winner_text = Vec::new();
        for (seat, &amount) in awards.iter().enumerate() {
            if amount > 0 {
                let player = &mut self.seats[seat].player;
                player.win(amount);
                info!("{} wins {amount}", player.name());
                winner_text.push(format!("{} wins $ {amount}", player.name()));
            }
        }
        self.notify_players_updated(true);
        self.notify_message(&format!("{}.", winner_text.join(", ")));
        Ok(awards)
    }

    fn hand_value(&self, seat: usize) -> Result<HandValue, TableError> {
        let mut hand = Hand::from_cards(&self.board)?;
        hand.add_cards(self.seats[seat].player.hand().cards().iter().copied())?;
        Ok(HandValue::new(hand)?)
    }

    fn protocol_violation(&self, seat: usize, reason: String) -> TableError {
        let player = self.seats[seat].player.name().to_string();
        error!("protocol violation by {player}: {reason}");
        TableError::Protocol { player, reason }
    }

    fn dealer_seat(&self) -> usize {
        self.dealer.unwrap_or(0)
    }

    fn dealer_name(&self) -> String {
        self.seats.get(self.dealer_seat()).map(|s| s.player.name().to_string()).unwrap_or_default()
    }

    /// Next active seat clockwise from `seat`, which need not be active itself.
    fn next_active_after(&self, seat: usize) -> usize {
        self.active
            .iter()
            .copied()
            .find(|&s| s > seat)
            .or_else(|| self.active.first().copied())
            .unwrap_or(seat)
    }

    /// All seats clockwise, starting left of `seat` and ending with it.
    fn seating_order_after(&self, seat: usize) -> impl Iterator<Item = usize> {
        let n = self.seats.len();
        (1..=n).map(move |i| (seat + i) % n)
    }

    fn rotate_actor(&mut self) {
        self.actor = self.next_active_after(self.actor);
        let actor = self.actor;
        self.broadcast_player(actor, false, |client, view| client.actor_rotated(view));
    }

    fn views_for(&self, recipient: usize, showdown: bool) -> Vec<PlayerView> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, s)| s.player.view(showdown || i == recipient))
            .collect()
    }

    /// Deliver `subject` to every client: its own client sees the hole cards,
    /// the others only when `showdown` reveals them.
    fn broadcast_player<F>(&mut self, subject: usize, showdown: bool, mut deliver: F)
    where
        F: FnMut(&mut dyn Client, &PlayerView),
    {
        let own = self.seats[subject].player.view(true);
        let public = self.seats[subject].player.view(showdown);
        for (i, seat) in self.seats.iter_mut().enumerate() {
            let view = if i == subject { &own } else { &public };
            deliver(seat.client.as_mut(), view);
        }
    }

    fn notify_players_updated(&mut self, showdown: bool) {
        for subject in 0..self.seats.len() {
            self.broadcast_player(subject, showdown, |client, view| client.player_updated(view));
        }
    }

    fn notify_board_updated(&mut self) {
        let pot = self.pots.total();
        for seat in &mut self.seats {
            seat.client.board_updated(&self.board, self.bet, pot);
        }
    }

    fn notify_message(&mut self, message: &str) {
        for seat in &mut self.seats {
            seat.client.message_received(message);
        }
    }
}

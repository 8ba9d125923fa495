#![allow(dead_code)]

use holdem_engine::action::{Action, ActionKind, AllowedActions};
use holdem_engine::cards::Card;
use holdem_engine::client::Client;
use holdem_engine::config::{TableConfig, TableType};
use holdem_engine::player::PlayerView;
use holdem_engine::table::Table;
use holdem_engine::Chips;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Prompt {
    pub player: String,
    pub min_bet: Chips,
    pub current_bet: Chips,
    pub allowed: AllowedActions,
}

/// Everything the table told the scripted clients, in arrival order.
#[derive(Debug, Default)]
pub struct Log {
    /// (recipient, message)
    pub messages: Vec<(String, String)>,
    pub prompts: Vec<Prompt>,
    /// (recipient, view) from `player_updated`
    pub views: Vec<(String, PlayerView)>,
    /// (recipient, board) from `board_updated`
    pub boards: Vec<(String, Vec<Card>)>,
}

impl Log {
    pub fn messages_for(&self, recipient: &str) -> Vec<&str> {
        self.messages.iter().filter(|(to, _)| to == recipient).map(|(_, m)| m.as_str()).collect()
    }

    pub fn prompts_for(&self, player: &str) -> Vec<&Prompt> {
        self.prompts.iter().filter(|p| p.player == player).collect()
    }

    pub fn prompt_order(&self) -> Vec<&str> {
        self.prompts.iter().map(|p| p.player.as_str()).collect()
    }

    /// Hole cards of `subject` as seen by `recipient`, latest first.
    pub fn cards_seen(&self, recipient: &str, subject: &str) -> Option<Vec<Card>> {
        self.views
            .iter()
            .rev()
            .filter(|(to, v)| to == recipient && v.name == subject)
            .find_map(|(_, v)| v.cards.clone())
    }
}

pub type SharedLog = Rc<RefCell<Log>>;

/// Plays a fixed list of actions, then checks or calls.
pub struct ScriptedClient {
    name: String,
    script: VecDeque<Action>,
    log: SharedLog,
}

impl ScriptedClient {
    pub fn new(name: &str, script: Vec<Action>, log: &SharedLog) -> Self {
        Self { name: name.to_string(), script: script.into(), log: Rc::clone(log) }
    }
}

impl Client for ScriptedClient {
    fn message_received(&mut self, message: &str) {
        self.log.borrow_mut().messages.push((self.name.clone(), message.to_string()));
    }

    fn player_updated(&mut self, player: &PlayerView) {
        self.log.borrow_mut().views.push((self.name.clone(), player.clone()));
    }

    fn board_updated(&mut self, board: &[Card], _bet: Chips, _pot: Chips) {
        self.log.borrow_mut().boards.push((self.name.clone(), board.to_vec()));
    }

    fn act(&mut self, min_bet: Chips, current_bet: Chips, allowed: &AllowedActions) -> Action {
        self.log.borrow_mut().prompts.push(Prompt {
            player: self.name.clone(),
            min_bet,
            current_bet,
            allowed: *allowed,
        });
        self.script.pop_front().unwrap_or(if allowed.contains(ActionKind::Check) {
            Action::Check
        } else {
            Action::Call
        })
    }
}

pub fn new_log() -> SharedLog {
    Rc::new(RefCell::new(Log::default()))
}

pub fn table(table_type: TableType, big_blind: Chips, seed: u64) -> Table {
    Table::new(TableConfig::new(table_type, big_blind).with_seed(seed)).expect("valid config")
}

/// Seat a scripted player and return its seat index.
pub fn seat(table: &mut Table, log: &SharedLog, name: &str, cash: Chips, script: Vec<Action>) -> usize {
    table.add_player(name, cash, ScriptedClient::new(name, script, log))
}

//! The contract between the table and whoever decides for a player.
//!
//! Every notification has an empty default so simple clients only implement
//! [`Client::act`].

use crate::action::{Action, AllowedActions};
use crate::cards::Card;
use crate::config::TableType;
use crate::player::PlayerView;
use crate::Chips;

/// Receives table events for one seat and chooses that seat's actions.
///
/// The table calls these methods one at a time from its own loop and waits
/// for `act` to return before doing anything else.
pub trait Client {
    /// Seated at a table; `players` lists every seat in seating order.
    fn joined_table(&mut self, _table_type: TableType, _big_blind: Chips, _players: &[PlayerView]) {}

    fn message_received(&mut self, _message: &str) {}

    fn hand_started(&mut self, _dealer: &PlayerView) {}

    /// `actor` is about to act.
    fn actor_rotated(&mut self, _actor: &PlayerView) {}

    fn player_updated(&mut self, _player: &PlayerView) {}

    /// The board, the current bet and the total of all pots.
    fn board_updated(&mut self, _board: &[Card], _bet: Chips, _pot: Chips) {}

    fn player_acted(&mut self, _player: &PlayerView) {}

    /// Choose an action. It must be one of `allowed`; anything else aborts
    /// the hand with a protocol error.
    fn act(&mut self, min_bet: Chips, current_bet: Chips, allowed: &AllowedActions) -> Action;
}

mod common;

use common::{new_log, seat, table};
use holdem_engine::action::{Action, ActionKind};
use holdem_engine::config::{TableConfig, TableType};
use holdem_engine::table::{Table, TableError};

#[test]
fn everyone_folds_to_the_big_blind() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 1);
    seat(&mut t, &log, "Alice", 1000, vec![Action::Fold]);
    seat(&mut t, &log, "Bob", 1000, vec![Action::Fold]);
    seat(&mut t, &log, "Carol", 1000, vec![]);

    let outcome = t.play_hand().unwrap();
    assert!(!outcome.showdown);
    assert_eq!(outcome.awards, vec![0, 0, 15]);
    let stacks: Vec<u64> = t.players().map(|p| p.cash()).collect();
    assert_eq!(stacks, vec![1000, 995, 1005]);
    assert!(t.board().is_empty());

    let log = log.borrow();
    assert_eq!(log.prompt_order(), vec!["Alice", "Bob"]);
    let messages = log.messages_for("Alice");
    assert_eq!(messages[0], "New hand, Alice is the dealer.");
    assert!(messages.contains(&"Alice deals the hole cards."));
    assert_eq!(messages.last(), Some(&"Carol wins $ 15."));
}

#[test]
fn dealer_button_moves_each_hand() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 2);
    for name in ["Alice", "Bob", "Carol"] {
        seat(&mut t, &log, name, 1000, vec![]);
    }
    t.play_hand().unwrap();
    assert_eq!(t.dealer(), Some(0));
    t.play_hand().unwrap();
    assert_eq!(t.dealer(), Some(1));
    t.play_hand().unwrap();
    assert_eq!(t.dealer(), Some(2));
    t.play_hand().unwrap();
    assert_eq!(t.dealer(), Some(0));
    assert_eq!(t.total_chips(), 3000);
}

#[test]
fn illegal_action_aborts_with_protocol_error() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 3);
    seat(&mut t, &log, "Alice", 1000, vec![]);
    // the big blind may check or raise, not bet
    seat(&mut t, &log, "Bob", 1000, vec![Action::Bet(5)]);

    match t.play_hand() {
        Err(TableError::Protocol { player, .. }) => assert_eq!(player, "Bob"),
        other => panic!("expected a protocol error, got {other:?}"),
    }
}

#[test]
fn no_limit_raise_below_minimum_is_rejected() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 4);
    seat(&mut t, &log, "Alice", 1000, vec![Action::Raise(3)]);
    seat(&mut t, &log, "Bob", 1000, vec![]);
    seat(&mut t, &log, "Carol", 1000, vec![]);

    assert!(matches!(t.play_hand(), Err(TableError::Protocol { .. })));
}

#[test]
fn no_limit_bet_beyond_stack_is_rejected() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 5);
    seat(&mut t, &log, "Alice", 1000, vec![Action::Raise(5000)]);
    seat(&mut t, &log, "Bob", 1000, vec![]);
    seat(&mut t, &log, "Carol", 1000, vec![]);

    assert!(matches!(t.play_hand(), Err(TableError::Protocol { .. })));
}

#[test]
fn no_limit_short_stack_may_raise_all_in_below_minimum() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 6);
    // Alice has 15: calling 10 leaves 5, less than a full raise
    seat(&mut t, &log, "Alice", 15, vec![Action::Raise(5)]);
    seat(&mut t, &log, "Bob", 1000, vec![]);
    seat(&mut t, &log, "Carol", 1000, vec![]);

    let outcome = t.play_hand().unwrap();
    assert!(outcome.showdown);
    assert_eq!(outcome.total_awarded(), 45);
    assert_eq!(t.total_chips(), 2015);
}

#[test]
fn fixed_limit_caps_raises_per_round() {
    let log = new_log();
    let mut t = table(TableType::FixedLimit, 10, 7);
    seat(&mut t, &log, "Alice", 1000, vec![Action::Raise(999)]);
    seat(&mut t, &log, "Bob", 1000, vec![Action::Raise(1)]);
    seat(&mut t, &log, "Carol", 1000, vec![Action::Raise(0)]);

    let outcome = t.play_hand().unwrap();
    let log = log.borrow();
    let alice = log.prompts_for("Alice");
    assert!(alice[0].allowed.contains(ActionKind::Raise));
    assert!(!alice[1].allowed.contains(ActionKind::Raise));
    assert!(alice[1].allowed.contains(ActionKind::Call));
    assert_eq!(alice[1].current_bet, 40);
    // the capping raise is final: Carol is not asked again
    assert_eq!(&log.prompt_order()[..5], ["Alice", "Bob", "Carol", "Alice", "Bob"]);
    // fixed raises of one big blind each, whatever was asked for
    assert_eq!(outcome.pots.iter().map(|p| p.value()).sum::<u64>(), 120);
    assert_eq!(t.total_chips(), 3000);
}

#[test]
fn short_raise_that_cannot_cover_the_call_does_not_count() {
    let log = new_log();
    let mut t = table(TableType::FixedLimit, 10, 7);
    seat(&mut t, &log, "Alice", 1000, vec![Action::Raise(0)]);
    // 7 left after the small blind, short of the 15 needed to call
    seat(&mut t, &log, "Bob", 12, vec![Action::Raise(0)]);
    seat(&mut t, &log, "Carol", 1000, vec![Action::Raise(0)]);

    t.play_hand().unwrap();
    assert_eq!(t.total_chips(), 2012);
    let log = log.borrow();
    let alice = log.prompts_for("Alice");
    // two full raises so far, one below the cap
    assert_eq!(alice[1].current_bet, 30);
    assert!(alice[1].allowed.contains(ActionKind::Raise));
    // Carol raised last and is asked again
    assert_eq!(&log.prompt_order()[..5], ["Alice", "Bob", "Carol", "Alice", "Carol"]);
}

#[test]
fn fixed_limit_uses_big_bets_on_turn_and_river() {
    let log = new_log();
    let mut t = table(TableType::FixedLimit, 10, 8);
    // a bettor is asked once more after everyone else has acted
    let alice = vec![
        Action::Call,
        Action::Bet(1),
        Action::Check,
        Action::Bet(1),
        Action::Check,
        Action::Bet(1),
    ];
    seat(&mut t, &log, "Alice", 1000, alice);
    seat(&mut t, &log, "Bob", 1000, vec![]);
    seat(&mut t, &log, "Carol", 1000, vec![]);

    let outcome = t.play_hand().unwrap();
    // 10 pre-flop, 10 flop, 20 turn, 20 river from each of three players
    assert_eq!(outcome.total_awarded(), 180);
    let log = log.borrow();
    let bob_min_bets: Vec<u64> = log.prompts_for("Bob").iter().map(|p| p.min_bet).collect();
    assert_eq!(bob_min_bets, vec![10, 10, 10, 20, 20, 20, 20]);
}

#[test]
fn everyone_folds_to_a_flop_bet() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 13);
    seat(&mut t, &log, "Alice", 1000, vec![Action::Call, Action::Bet(40)]);
    seat(&mut t, &log, "Bob", 1000, vec![Action::Call, Action::Check, Action::Fold]);
    seat(&mut t, &log, "Carol", 1000, vec![Action::Check, Action::Check, Action::Fold]);

    let outcome = t.play_hand().unwrap();
    assert!(!outcome.showdown);
    assert_eq!(outcome.awards, vec![70, 0, 0]);
    let log = log.borrow();
    let flop: Vec<&str> = log.prompt_order()[3..].to_vec();
    assert_eq!(flop, vec!["Bob", "Carol", "Alice", "Bob", "Carol"]);
}

#[test]
fn heads_up_non_dealer_acts_first() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 9);
    seat(&mut t, &log, "Alice", 1000, vec![]);
    seat(&mut t, &log, "Bob", 1000, vec![]);

    let outcome = t.play_hand().unwrap();
    assert!(outcome.showdown);
    assert_eq!(outcome.total_awarded(), 20);
    let log = log.borrow();
    assert_eq!(
        log.prompt_order(),
        vec!["Bob", "Alice", "Bob", "Alice", "Bob", "Alice", "Bob", "Alice"]
    );
    // the dealer posts the small blind heads-up
    let alice_first = &log.prompts_for("Alice")[0];
    assert!(alice_first.allowed.contains(ActionKind::Call));
}

#[test]
fn run_stops_when_one_player_is_left() {
    let log = new_log();
    let config = TableConfig::new(TableType::NoLimit, 10).with_seed(10).with_max_hands(3);
    let mut t = Table::new(config).unwrap();
    seat(&mut t, &log, "Alice", 1000, vec![]);
    seat(&mut t, &log, "Bob", 5, vec![]);

    assert_eq!(t.run().unwrap(), 0);
    assert_eq!(log.borrow().messages_for("Alice").last(), Some(&"Game over."));
}

#[test]
fn run_honours_hand_limit() {
    let log = new_log();
    let config = TableConfig::new(TableType::FixedLimit, 10).with_seed(11).with_max_hands(4);
    let mut t = Table::new(config).unwrap();
    seat(&mut t, &log, "Alice", 1000, vec![]);
    seat(&mut t, &log, "Bob", 1000, vec![]);
    seat(&mut t, &log, "Carol", 1000, vec![]);

    assert_eq!(t.run().unwrap(), 4);
    assert_eq!(t.hands_played(), 4);
    assert_eq!(t.total_chips(), 3000);
}

#[test]
fn play_hand_needs_two_eligible_players() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 12);
    seat(&mut t, &log, "Alice", 1000, vec![]);
    seat(&mut t, &log, "Bob", 9, vec![]);
    assert!(matches!(t.play_hand(), Err(TableError::NotEnoughPlayers(1))));
}

#[test]
fn table_refuses_to_play_on_after_an_aborted_hand() {
    let log = new_log();
    let mut t = table(TableType::NoLimit, 10, 9);
    seat(&mut t, &log, "Alice", 1000, vec![]);
    seat(&mut t, &log, "Bob", 1000, vec![Action::Raise(100)]);
    seat(&mut t, &log, "Carol", 1000, vec![Action::Call, Action::Bet(1)]);

    match t.play_hand() {
        Err(TableError::Protocol { player, .. }) => assert_eq!(player, "Carol"),
        other => panic!("expected a protocol error, got {other:?}"),
    }
    assert!(t.is_aborted());
    assert_eq!(t.pots().total(), 330);
    assert_eq!(t.total_chips(), 3000);

    assert!(matches!(t.play_hand(), Err(TableError::Aborted(330))));
    assert!(matches!(t.run(), Err(TableError::Aborted(330))));
    assert_eq!(t.total_chips(), 3000);
    assert_eq!(t.hands_played(), 0);
}

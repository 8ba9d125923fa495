//! holdem-engine: Limit and No-Limit Texas Hold'em
//!
//! Goals:
//! - Exact hand ranking: every 5 to 7 card hand maps to one comparable value
//! - Correct side pots, split pots and odd chips
//! - Pluggable decision makers behind the [`client::Client`] trait
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: rank a hand
//! ```
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! let eval = evaluate(&cards).unwrap();
//! assert_eq!(eval.category, Category::OnePair);
//! ```
//!
//! ## Quick start: run a table
//! ```
//! use holdem_engine::agents::CallingAgent;
//! use holdem_engine::config::{TableConfig, TableType};
//! use holdem_engine::table::Table;
//!
//! let config = TableConfig::new(TableType::FixedLimit, 10).with_seed(42).with_max_hands(5);
//! let mut table = Table::new(config).unwrap();
//! table.add_player("Alice", 500, CallingAgent);
//! table.add_player("Bob", 500, CallingAgent);
//! let hands = table.run().unwrap();
//! assert_eq!(hands, 5);
//! assert_eq!(table.total_chips(), 1000);
//! ```
//!
//! ## CLI
//! Simulate a session between bots with:
//! ```sh
//! RUST_LOG=info cargo run --features cli --bin holdem -- --players 4 --limit no-limit --seed 7
//! ```

pub mod action;
pub mod agents;
pub mod cards;
pub mod chen;
pub mod client;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod hand_value;
pub mod player;
pub mod pot;
pub mod table;

/// Chip amounts: stacks, bets and pot sizes.
pub type Chips = u64;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

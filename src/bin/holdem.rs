use clap::{Parser, ValueEnum};
use holdem_engine::agents::{BasicBot, BotProfile, Difficulty};
use holdem_engine::config::{TableConfig, TableType};
use holdem_engine::table::Table;
use holdem_engine::Chips;
use log::{error, info};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Limit {
    Fixed,
    NoLimit,
}

impl From<Limit> for TableType {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Fixed => TableType::FixedLimit,
            Limit::NoLimit => TableType::NoLimit,
        }
    }
}

/// Seat a table of bots and play a Texas Hold'em session.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of bots to seat
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Starting stack per bot
    #[arg(long, default_value_t = 1000)]
    stake: Chips,
    #[arg(long, default_value_t = 20)]
    big_blind: Chips,
    #[arg(long, value_enum, default_value_t = Limit::NoLimit)]
    limit: Limit,
    /// Seed for the deck and the bots; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many hands
    #[arg(long)]
    hands: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::builder().format_target(false).init();
    let args = Args::parse();

    let mut config = TableConfig::new(args.limit.into(), args.big_blind);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(hands) = args.hands {
        config = config.with_max_hands(hands);
    }
    let mut table = match Table::new(config) {
        Ok(table) => table,
        Err(e) => {
            error!("invalid table configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tiers = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    for i in 0..usize::from(args.players) {
        let name = format!("Bot {}", i + 1);
        let mut profile = BotProfile::for_difficulty(tiers[i % tiers.len()]);
        if let Some(seed) = args.seed {
            profile = profile.with_seed(seed.wrapping_add(i as u64 + 1));
        }
        table.add_player(name.clone(), args.stake, BasicBot::new(name, profile));
    }

    info!("{} table, big blind {}, {} players", table.config().table_type, args.big_blind, args.players);
    match table.run() {
        Ok(hands) => {
            println!("{hands} hands played");
            for player in table.players() {
                println!("{:>8}  {}", player.name(), player.cash());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("session aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

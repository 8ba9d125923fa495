use crate::Chips;
use std::fmt;

/// Betting structure of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TableType {
    /// Bets and raises are fixed to the current minimum bet; raises are capped.
    FixedLimit,
    /// Any bet or raise of at least the minimum bet, up to the whole stack.
    NoLimit,
}

impl TableType {
    pub const fn name(self) -> &'static str {
        match self {
            TableType::FixedLimit => "Fixed-Limit",
            TableType::NoLimit => "No-Limit",
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("big blind must be at least 2 so the small blind is non-zero, got {0}")]
    BigBlindTooSmall(Chips),
    #[error("fixed-limit raise cap must be at least 1")]
    ZeroRaiseCap,
}

/// Table settings that persist across hands.
///
/// ```
/// use holdem_engine::config::{TableConfig, TableType};
///
/// let config = TableConfig::new(TableType::NoLimit, 20).with_seed(7).with_max_hands(50);
/// assert_eq!(config.small_blind(), 10);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    pub table_type: TableType,
    pub big_blind: Chips,
    /// Raises allowed per betting round in fixed-limit play.
    pub max_raises: u32,
    /// Seed for reproducible shuffles; `None` draws fresh entropy.
    pub seed: Option<u64>,
    /// Stop the session after this many hands.
    pub max_hands: Option<usize>,
}

impl TableConfig {
    pub const DEFAULT_MAX_RAISES: u32 = 3;

    pub fn new(table_type: TableType, big_blind: Chips) -> Self {
        Self {
            table_type,
            big_blind,
            max_raises: Self::DEFAULT_MAX_RAISES,
            seed: None,
            max_hands: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_raises(mut self, max_raises: u32) -> Self {
        self.max_raises = max_raises;
        self
    }

    pub fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = Some(max_hands);
        self
    }

    /// Half the big blind, rounded down.
    pub fn small_blind(&self) -> Chips {
        self.big_blind / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_blind < 2 {
            return Err(ConfigError::BigBlindTooSmall(self.big_blind));
        }
        if self.max_raises == 0 {
            return Err(ConfigError::ZeroRaiseCap);
        }
        Ok(())
    }
}

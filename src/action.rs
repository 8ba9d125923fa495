//! The closed set of player actions and the per-turn legal subset.

use crate::Chips;
use std::fmt;

/// An action taken by (or for) a player.
///
/// `Bet` and `Raise` carry the amount chosen by the client; the table may
/// override it in fixed-limit games. `Raise` amounts are increments over the
/// current bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Action {
    SmallBlind,
    BigBlind,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
    Fold,
    AllIn,
    Continue,
}

impl Action {
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::SmallBlind => ActionKind::SmallBlind,
            Action::BigBlind => ActionKind::BigBlind,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
            Action::Raise(_) => ActionKind::Raise,
            Action::Fold => ActionKind::Fold,
            Action::AllIn => ActionKind::AllIn,
            Action::Continue => ActionKind::Continue,
        }
    }

    /// Amount carried by `Bet`/`Raise`, zero for every other action.
    pub const fn amount(self) -> Chips {
        match self {
            Action::Bet(a) | Action::Raise(a) => a,
            _ => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        self.kind().name()
    }

    /// Past-tense verb for table messages ("Alice raises").
    pub const fn verb(self) -> &'static str {
        match self {
            Action::SmallBlind => "posts the small blind",
            Action::BigBlind => "posts the big blind",
            Action::Check => "checks",
            Action::Call => "calls",
            Action::Bet(_) => "bets",
            Action::Raise(_) => "raises",
            Action::Fold => "folds",
            Action::AllIn => "goes all-in",
            Action::Continue => "continues",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Bet(a) | Action::Raise(a) => write!(f, "{}({a})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Action tag without an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ActionKind {
    SmallBlind,
    BigBlind,
    Check,
    Call,
    Bet,
    Raise,
    Fold,
    AllIn,
    Continue,
}

impl ActionKind {
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::SmallBlind => "Small blind",
            ActionKind::BigBlind => "Big blind",
            ActionKind::Check => "Check",
            ActionKind::Call => "Call",
            ActionKind::Bet => "Bet",
            ActionKind::Raise => "Raise",
            ActionKind::Fold => "Fold",
            ActionKind::AllIn => "All-in",
            ActionKind::Continue => "Continue",
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The actions a player may choose from on their turn.
///
/// ```
/// use holdem_engine::action::{Action, ActionKind, AllowedActions};
///
/// let allowed = AllowedActions::from_kinds([ActionKind::Check, ActionKind::Bet, ActionKind::Fold]);
/// assert!(allowed.permits(Action::Bet(40)));
/// assert!(!allowed.contains(ActionKind::Call));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AllowedActions {
    bits: u16,
}

impl AllowedActions {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = ActionKind>,
    {
        let mut allowed = Self::empty();
        for kind in kinds {
            allowed.insert(kind);
        }
        allowed
    }

    pub fn insert(&mut self, kind: ActionKind) {
        self.bits |= kind.bit();
    }

    pub const fn contains(&self, kind: ActionKind) -> bool {
        self.bits & kind.bit() != 0
    }

    /// Whether `action`'s kind is in the set.
    pub const fn permits(&self, action: Action) -> bool {
        self.contains(action.kind())
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Kinds in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ALL_KINDS.iter().copied().filter(move |k| self.contains(*k))
    }
}

impl fmt::Display for AllowedActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(ActionKind::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

const ALL_KINDS: [ActionKind; 9] = [
    ActionKind::SmallBlind,
    ActionKind::BigBlind,
    ActionKind::Check,
    ActionKind::Call,
    ActionKind::Bet,
    ActionKind::Raise,
    ActionKind::Fold,
    ActionKind::AllIn,
    ActionKind::Continue,
];

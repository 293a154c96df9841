//! Player identity and per-player holdings.
//!
//! ## PlayerName
//!
//! The stable identity key. Game state references the active player by name
//! and every lookup goes through the authoritative `players` list, so two
//! snapshots of the "same" player may differ in attributes (passed status,
//! exhausted cards) without ever being confused for different players.
//!
//! ## Player
//!
//! Immutable holdings: strategy cards, play-area tokens, command sheet,
//! passed flag. Updates are copy-with-modification via the `with_*` builders.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::StrategyCard;
use super::token::{CommandToken, TokenType};

/// A player's unique identity key.
///
/// Names are the only identity players have; everything else about a player
/// may change between state snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerName(pub String);

impl PlayerName {
    /// Create a player name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for PlayerName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The three command-token pools on a player's command sheet.
///
/// Pools are almost always a handful of tokens, so they live inline in a
/// `SmallVec` rather than on the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSheet {
    /// Tokens spendable on tactical actions.
    pub tactic: SmallVec<[CommandToken; 4]>,

    /// Tokens committed to fleet supply.
    pub fleet: SmallVec<[CommandToken; 4]>,

    /// Tokens spendable on strategic actions.
    pub strategy: SmallVec<[CommandToken; 4]>,
}

impl CommandSheet {
    /// Create an empty command sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sheet with the given pool sizes, all tokens owned by `owner`.
    #[must_use]
    pub fn with_counts(owner: &PlayerName, tactic: usize, fleet: usize, strategy: usize) -> Self {
        let fill = |n: usize| {
            std::iter::repeat_with(|| CommandToken::new(owner.clone()))
                .take(n)
                .collect()
        };
        Self {
            tactic: fill(tactic),
            fleet: fill(fleet),
            strategy: fill(strategy),
        }
    }

    /// Take one token from the tactic pool.
    ///
    /// Returns the token and the sheet without it, or `None` if the pool is
    /// empty. The sheet itself is never modified.
    #[must_use]
    pub fn spend_tactic(&self) -> Option<(CommandToken, CommandSheet)> {
        let mut spent = self.clone();
        let token = spent.tactic.pop()?;
        Some((token, spent))
    }
}

/// A player and everything they hold.
///
/// Equality is full structural equality; identity comparisons go through
/// [`PlayerName`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identity key.
    pub name: PlayerName,

    /// Held strategy cards, in the order they were picked.
    pub strategy_cards: SmallVec<[StrategyCard; 2]>,

    /// Play-area tokens. Some kinds are globally unique across all players.
    pub play_area: ImHashSet<TokenType>,

    /// Command-token pools.
    pub command_sheet: CommandSheet,

    /// Whether this player has passed for the round.
    pub has_passed: bool,
}

impl Player {
    /// Create a player with no holdings.
    #[must_use]
    pub fn new(name: impl Into<PlayerName>) -> Self {
        Self {
            name: name.into(),
            strategy_cards: SmallVec::new(),
            play_area: ImHashSet::new(),
            command_sheet: CommandSheet::new(),
            has_passed: false,
        }
    }

    /// Add a strategy card (builder pattern).
    #[must_use]
    pub fn with_strategy_card(mut self, card: StrategyCard) -> Self {
        self.strategy_cards.push(card);
        self
    }

    /// Add a play-area token (builder pattern).
    #[must_use]
    pub fn with_token(mut self, token: TokenType) -> Self {
        self.play_area.insert(token);
        self
    }

    /// Set the command sheet (builder pattern).
    #[must_use]
    pub fn with_command_sheet(mut self, sheet: CommandSheet) -> Self {
        self.command_sheet = sheet;
        self
    }

    /// Set the passed flag (builder pattern).
    #[must_use]
    pub fn with_passed(mut self, passed: bool) -> Self {
        self.has_passed = passed;
        self
    }

    /// Turn-order key derived from holdings.
    ///
    /// `0` when holding the unique zero-initiative token, the minimum
    /// initiative across all held strategy cards otherwise, `-1` with no
    /// cards at all. Ready state does not enter the calculation.
    #[must_use]
    pub fn initiative(&self) -> i32 {
        if self.play_area.contains(&TokenType::NaaluZero) {
            return 0;
        }
        self.strategy_cards
            .iter()
            .map(|card| i32::from(card.initiative))
            .min()
            .unwrap_or(-1)
    }

    /// Whether any held strategy card is still ready.
    #[must_use]
    pub fn has_ready_strategy_card(&self) -> bool {
        self.strategy_cards.iter().any(|card| card.is_ready)
    }
}

//! Global game-state invariants, checked after every command resolves.
//!
//! An invariant failure is a rule-authoring bug: the engine raises
//! [`EngineError::InvariantViolation`](crate::errors::EngineError) naming
//! every failed invariant rather than returning a corrupted state.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::core::{GameState, TokenType, UNIQUE_TOKENS};

/// A global property every resolved state must satisfy.
pub trait GameStateInvariant: fmt::Debug {
    /// Human-readable description, quoted in violation errors.
    fn description(&self) -> &str;

    /// Whether the state satisfies the invariant.
    fn check(&self, state: &GameState) -> bool;
}

/// Globally unique tokens exist at most once across all players.
#[derive(Debug)]
pub struct UniqueTokenInvariant {
    tokens: FxHashSet<TokenType>,
}

impl UniqueTokenInvariant {
    /// Cover the given token kinds.
    #[must_use]
    pub fn new(tokens: impl IntoIterator<Item = TokenType>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Cover the standard unique kinds.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(UNIQUE_TOKENS.iter().copied())
    }
}

impl GameStateInvariant for UniqueTokenInvariant {
    fn description(&self) -> &str {
        "a token which can exist only once in the game must be unique across all players"
    }

    fn check(&self, state: &GameState) -> bool {
        let mut seen: FxHashSet<TokenType> = FxHashSet::default();
        for player in &state.players {
            for token in &player.play_area {
                if !self.tokens.contains(token) {
                    continue;
                }
                if !seen.insert(*token) {
                    return false;
                }
            }
        }
        true
    }
}

/// A passed player holds no ready strategy cards.
///
/// Passing requires every card to be exhausted, and nothing readies cards
/// mid-round, so a ready card on a passed player means some rule skipped the
/// exhaustion step.
#[derive(Debug)]
pub struct PassedPlayersExhaustedInvariant;

impl GameStateInvariant for PassedPlayersExhaustedInvariant {
    fn description(&self) -> &str {
        "a passed player must not hold a ready strategy card"
    }

    fn check(&self, state: &GameState) -> bool {
        state
            .players
            .iter()
            .all(|player| !(player.has_passed && player.has_ready_strategy_card()))
    }
}

/// The invariants every standard engine runs with.
#[must_use]
pub fn standard_invariants() -> Vec<Box<dyn GameStateInvariant>> {
    vec![
        Box::new(UniqueTokenInvariant::standard()),
        Box::new(PassedPlayersExhaustedInvariant),
    ]
}

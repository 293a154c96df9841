//! Token kinds: play-area tokens and command tokens.
//!
//! Play-area tokens (`TokenType`) change how a player is scored or ordered;
//! some kinds are globally unique and may exist only once across the whole
//! table. Command tokens (`CommandToken`) are the spendable markers a player
//! places on systems during tactical actions.

use serde::{Deserialize, Serialize};

use super::player::PlayerName;

/// A kind of token that can sit in a player's play area.
///
/// The set of kinds is closed; rule modules match on it rather than on
/// opaque strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// The zero-initiative token. Whoever holds it acts first regardless of
    /// strategy cards. Globally unique.
    NaaluZero,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::NaaluZero => write!(f, "NaaluZero"),
        }
    }
}

/// Token kinds that may exist at most once across all players.
pub const UNIQUE_TOKENS: &[TokenType] = &[TokenType::NaaluZero];

/// A command token owned by a player.
///
/// Tokens remember their owner so a system can tell whose activations it has
/// already seen this round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandToken {
    /// The player this token belongs to.
    pub owner: PlayerName,
}

impl CommandToken {
    /// Create a token owned by the given player.
    #[must_use]
    pub fn new(owner: impl Into<PlayerName>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_tokens_contains_naalu_zero() {
        assert!(UNIQUE_TOKENS.contains(&TokenType::NaaluZero));
    }

    #[test]
    fn test_command_token_owner() {
        let token = CommandToken::new("Hacan");
        assert_eq!(token.owner, PlayerName::new("Hacan"));
    }

    #[test]
    fn test_token_type_serialization() {
        let json = serde_json::to_string(&TokenType::NaaluZero).unwrap();
        let back: TokenType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TokenType::NaaluZero);
    }
}

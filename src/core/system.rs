//! Galaxy systems.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerName;
use super::token::CommandToken;

/// Unique key of a system within the galaxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemId(pub u32);

impl SystemId {
    /// Create a new system ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "System({})", self.0)
    }
}

/// A system on the galaxy map.
///
/// Holds the command tokens placed by players who have activated it this
/// round, in placement order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    /// Unique key within the galaxy.
    pub id: SystemId,

    /// Command tokens placed this round, oldest first.
    pub command_tokens: Vector<CommandToken>,
}

impl System {
    /// Create a system with no command tokens.
    #[must_use]
    pub fn new(id: SystemId) -> Self {
        Self {
            id,
            command_tokens: Vector::new(),
        }
    }

    /// Return this system with a token appended (builder pattern).
    #[must_use]
    pub fn with_token(mut self, token: CommandToken) -> Self {
        self.command_tokens.push_back(token);
        self
    }

    /// Whether the given player already has a command token here.
    #[must_use]
    pub fn has_token_of(&self, player: &PlayerName) -> bool {
        self.command_tokens.iter().any(|token| &token.owner == player)
    }
}

//! Commands: player-issued requests, validated before anything happens.
//!
//! A command is a tag (`CommandKind`) plus an actor plus optional extra
//! fields (`CommandPayload`). Rules dispatch on the tag — it is deliberately
//! lighter-weight than the payload — so every rule that reads the payload
//! must verify its shape and raise [`RuleError::PayloadMismatch`] when a
//! command's declared kind does not match what it carries.

use serde::{Deserialize, Serialize};

use super::player::PlayerName;
use super::system::SystemId;
use crate::errors::RuleError;

/// The closed set of command tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Hand the turn to the next player in initiative order.
    EndTurn,
    /// Pass for the rest of the round.
    PassAction,
    /// Take a tactical action, optionally activating a system.
    InitiateTacticalAction,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandKind::EndTurn => write!(f, "EndTurn"),
            CommandKind::PassAction => write!(f, "PassAction"),
            CommandKind::InitiateTacticalAction => write!(f, "InitiateTacticalAction"),
        }
    }
}

/// Extra fields a concrete command kind may carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandPayload {
    /// No extra fields.
    #[default]
    None,

    /// Target of a system activation.
    ActivateSystem {
        /// The system to activate.
        system_id: SystemId,
    },
}

impl CommandPayload {
    /// Short shape name for diagnostics.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            CommandPayload::None => "none",
            CommandPayload::ActivateSystem { .. } => "ActivateSystem",
        }
    }
}

/// An immutable request by an actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Who is asking.
    pub actor: PlayerName,

    /// What they are asking for.
    pub kind: CommandKind,

    /// Kind-specific extra fields.
    pub payload: CommandPayload,
}

impl Command {
    /// Create a command with no payload.
    #[must_use]
    pub fn new(actor: impl Into<PlayerName>, kind: CommandKind) -> Self {
        Self {
            actor: actor.into(),
            kind,
            payload: CommandPayload::None,
        }
    }

    /// Create a tactical-action command targeting a system.
    #[must_use]
    pub fn activate_system(actor: impl Into<PlayerName>, system_id: SystemId) -> Self {
        Self {
            actor: actor.into(),
            kind: CommandKind::InitiateTacticalAction,
            payload: CommandPayload::ActivateSystem { system_id },
        }
    }

    /// Verify this command carries no payload.
    ///
    /// Rules whose kind takes no extra fields call this before reading the
    /// command; a stray payload means the caller built the command wrong.
    pub fn expect_no_payload(&self, rule: &'static str) -> Result<(), RuleError> {
        match self.payload {
            CommandPayload::None => Ok(()),
            ref other => Err(RuleError::PayloadMismatch {
                rule,
                kind: self.kind,
                expected: "none",
                got: other.shape().to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.payload {
            CommandPayload::None => write!(f, "{} by {}", self.kind, self.actor),
            CommandPayload::ActivateSystem { system_id } => {
                write!(f, "{} by {} targeting {}", self.kind, self.actor, system_id)
            }
        }
    }
}

//! Error taxonomy.
//!
//! Command rejection is NOT an error: an illegal command comes back as a
//! normal [`CommandResult`](crate::rules::CommandResult) with `success =
//! false`. The types here cover everything else:
//!
//! - [`LookupError`]: a typed "not found" for state queries. Command rules
//!   treat it as "command not legal" rather than letting it escape the
//!   legality boundary.
//! - [`RuleError`]: a rule was handed a command whose payload shape does not
//!   match its declared kind. A contract violation, not recoverable.
//! - [`EventError`]: an event could not produce its successor state.
//! - [`EngineError`]: fatal failures of a whole `apply_command` call. The
//!   input state is guaranteed untouched when one of these is returned.

use thiserror::Error;

use crate::core::{CommandKind, EventPayload, PlayerName, SystemId};

/// A state lookup referenced something that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No player with this name is seated at the table.
    #[error("player {0} is not seated at this table")]
    PlayerNotFound(PlayerName),

    /// No system with this id exists in the galaxy.
    #[error("{0} is not part of the galaxy")]
    SystemNotFound(SystemId),
}

/// A rule received a command it cannot read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The command's declared kind does not match the payload it carries.
    #[error("rule {rule} cannot read {kind} command: expected {expected} payload, got {got}")]
    PayloadMismatch {
        /// The rule that rejected the command.
        rule: &'static str,
        /// The command's declared kind.
        kind: CommandKind,
        /// The payload shape the rule expected.
        expected: &'static str,
        /// The payload shape actually carried.
        got: String,
    },
}

/// An event failed to produce its successor state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EventError {
    /// The event referenced a player or system that does not exist.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The transition is impossible from the given state.
    #[error("illegal transition: {0}")]
    IllegalTransition(String),
}

/// Fatal failure of an `apply_command` call.
///
/// All of these indicate rule-authoring bugs rather than normal game flow;
/// none of them may be silently swallowed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more post-transition invariants failed.
    #[error("game state invariants violated: {}", .descriptions.join(", "))]
    InvariantViolation {
        /// Description of every invariant that failed.
        descriptions: Vec<String>,
    },

    /// A rule or event mutated a value that must stay immutable.
    ///
    /// The model makes mutation impossible through `&GameState`, so this only
    /// fires on the engine's defensive check against opaque rules that smuggle
    /// interior mutability into the state.
    #[error("illegal mutation of game state detected while resolving {context}")]
    IllegalStateMutation {
        /// What the engine was doing when the mutation was detected.
        context: String,
    },

    /// A rule could not read the command it was given.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// An event raised while being applied to the working state.
    #[error("event {payload} failed to apply: {source}")]
    Event {
        /// Payload tag of the failing event.
        payload: EventPayload,
        /// The underlying failure.
        #[source]
        source: EventError,
    },

    /// Undo is declared on the session but not implemented.
    #[error("undo is not implemented")]
    UndoUnsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::SystemNotFound(SystemId::new(4));
        assert_eq!(format!("{}", err), "System(4) is not part of the galaxy");

        let err = LookupError::PlayerNotFound(PlayerName::new("Hacan"));
        assert_eq!(format!("{}", err), "player Hacan is not seated at this table");
    }

    #[test]
    fn test_invariant_violation_lists_every_description() {
        let err = EngineError::InvariantViolation {
            descriptions: vec!["first".to_owned(), "second".to_owned()],
        };
        assert_eq!(
            format!("{}", err),
            "game state invariants violated: first, second"
        );
    }

    #[test]
    fn test_event_error_wraps_lookup() {
        let err: EventError = LookupError::SystemNotFound(SystemId::new(1)).into();
        assert!(matches!(err, EventError::Lookup(_)));
    }

    #[test]
    fn test_mutation_error_is_distinct_from_invariant_violation() {
        let err = EngineError::IllegalStateMutation {
            context: "command EndTurn by A".to_owned(),
        };
        assert_eq!(
            format!("{}", err),
            "illegal mutation of game state detected while resolving command EndTurn by A"
        );
        assert!(!matches!(err, EngineError::InvariantViolation { .. }));
    }
}

//! Rule traits: the seams independently authored rule modules plug into.
//!
//! ## Command rules
//!
//! A command rule answers three questions, in two phases:
//!
//! 1. `is_applicable` — is this command my concern at all? Cheap, static,
//!    no state access.
//! 2. `is_legal_given_applicable` / `derive_events_given_applicable` — only
//!    asked when applicable.
//!
//! The split lets the engine run *every* rule against *every* command: an
//! inapplicable rule passes legality vacuously and derives nothing, so
//! unrelated rules compose without special-casing "not mine". Implement the
//! three `*_given_applicable` methods and leave the provided
//! `validate_legality` / `derive_events` wrappers alone.
//!
//! ## Event rules
//!
//! An event rule reacts to one just-applied event and the state it produced,
//! returning follow-up events. It must not (and cannot) mutate the state it
//! is shown.

use std::fmt;

use crate::core::{Command, EventRef, GameState};
use crate::errors::RuleError;

/// Decides legality for a command and derives the events it produces.
pub trait CommandRule: fmt::Debug {
    /// Rule name, used in rejection diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this command is within the rule's concern.
    ///
    /// Static: may inspect the command only, never the state.
    fn is_applicable(&self, command: &Command) -> bool;

    /// The actual precondition. Only called when applicable.
    ///
    /// Lookup failures are "not legal", not errors; a payload the rule
    /// cannot read is a [`RuleError::PayloadMismatch`].
    fn is_legal_given_applicable(
        &self,
        state: &GameState,
        command: &Command,
    ) -> Result<bool, RuleError>;

    /// Events this command produces, in queue order. Only called when
    /// applicable and legal.
    fn derive_events_given_applicable(
        &self,
        state: &GameState,
        command: &Command,
    ) -> Result<Vec<EventRef>, RuleError>;

    /// Legality as the engine sees it: inapplicable rules always pass.
    fn validate_legality(&self, state: &GameState, command: &Command) -> Result<bool, RuleError> {
        if !self.is_applicable(command) {
            return Ok(true);
        }
        self.is_legal_given_applicable(state, command)
    }

    /// Derivation as the engine sees it: inapplicable rules derive nothing.
    fn derive_events(&self, state: &GameState, command: &Command) -> Result<Vec<EventRef>, RuleError> {
        if !self.is_applicable(command) {
            return Ok(Vec::new());
        }
        self.derive_events_given_applicable(state, command)
    }
}

/// Reacts to a just-applied event with follow-up events.
pub trait EventRule: fmt::Debug {
    /// Follow-up events for `event`, given the state it produced.
    ///
    /// Returned events are prepended to the resolution queue as a block, so
    /// they resolve before anything queued earlier.
    fn on_event(
        &self,
        state: &GameState,
        event: &dyn crate::core::Event,
    ) -> Result<Vec<EventRef>, RuleError>;
}

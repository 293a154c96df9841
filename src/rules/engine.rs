//! The engine: turns one command into a deterministic cascade of state
//! transitions.
//!
//! ## Resolution algorithm
//!
//! 1. **Legality** — every command rule in registration order. The first
//!    rule to answer "illegal" rejects the command: no events, no state
//!    change, `info` names the rule. Rejection is a value, not an error.
//! 2. **Derivation** — every command rule again, against the input state;
//!    derived events concatenate in rule order into a FIFO queue.
//! 3. **Cascade** — pop the front event, apply it to the working state,
//!    append it to the resolved list, then let every event rule react.
//!    Follow-up events are *prepended* to the queue as a block, rule by
//!    rule, so the most recent event's consequences resolve before anything
//!    queued earlier. The engine does not bound the cascade; termination is
//!    the rule authors' obligation.
//! 4. **Invariants** — every registered invariant against the final state.
//!    Any failure aborts the call with all failed descriptions.
//!
//! Whatever happens, the caller's input state is untouched when the call
//! returns.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::core::{Command, EventRef, GameState};
use crate::errors::EngineError;

use super::invariant::GameStateInvariant;
use super::registry::RuleSet;

/// Outcome of one `apply_command` call.
///
/// Cheap to clone: the state shares structure with its predecessors and the
/// events are shared handles.
#[derive(Clone, Debug)]
pub struct CommandResult {
    /// The state after resolution; the input state when rejected.
    pub new_state: GameState,

    /// Whether the command was legal and resolved.
    pub success: bool,

    /// Every applied event, in application order. Empty when rejected.
    pub events: Vec<EventRef>,

    /// Diagnostic detail; names the refusing rule on rejection.
    pub info: String,
}

impl CommandResult {
    fn rejected(state: GameState, info: String) -> Self {
        Self {
            new_state: state,
            success: false,
            events: Vec::new(),
            info,
        }
    }
}

/// Orchestrates legality checking, event derivation, cascade resolution and
/// invariant verification.
#[derive(Debug)]
pub struct GameEngine {
    rules: RuleSet,
    invariants: Vec<Box<dyn GameStateInvariant>>,
}

impl GameEngine {
    /// Create an engine over the given rules, with no invariants.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            invariants: Vec::new(),
        }
    }

    /// Set the invariants (builder pattern).
    #[must_use]
    pub fn with_invariants(mut self, invariants: Vec<Box<dyn GameStateInvariant>>) -> Self {
        self.invariants = invariants;
        self
    }

    /// The standard engine: built-in rule modules plus standard invariants.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RuleSet::standard()).with_invariants(super::invariant::standard_invariants())
    }

    /// The rule set this engine consults.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Mutable access to the rule set, for registering additional modules.
    pub fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    /// Validate `command` against `state`, resolve the event cascade and
    /// verify invariants.
    ///
    /// Illegal commands come back as `Ok` with `success = false`; errors are
    /// reserved for rule-authoring bugs (shape mismatches, failing events,
    /// invariant violations). Either way `state` itself is unchanged.
    pub fn apply_command(
        &self,
        state: &GameState,
        command: &Command,
    ) -> Result<CommandResult, EngineError> {
        // O(1) snapshot backing the defensive immutability check below.
        let snapshot = state.clone();

        for rule in self.rules.command_rules() {
            if !rule.validate_legality(state, command)? {
                debug!(%command, rule = rule.name(), "command rejected");
                return Ok(CommandResult::rejected(
                    state.clone(),
                    format!("command invalid: {command} because of rule {}", rule.name()),
                ));
            }
        }

        let mut queue: VecDeque<EventRef> = VecDeque::new();
        for rule in self.rules.command_rules() {
            queue.extend(rule.derive_events(state, command)?);
        }

        let mut working = state.clone();
        let mut resolved: Vec<EventRef> = Vec::new();
        while let Some(event) = queue.pop_front() {
            trace!(payload = %event.payload(), "applying event");
            working = event
                .apply(&working)
                .map_err(|source| EngineError::Event {
                    payload: event.payload(),
                    source,
                })?;
            resolved.push(event.clone());

            for rule in self.rules.event_rules() {
                let follow_ups = rule.on_event(&working, event.as_ref())?;
                // Prepend the block, preserving its internal order: the
                // newest event's consequences resolve first.
                for follow_up in follow_ups.into_iter().rev() {
                    queue.push_front(follow_up);
                }
            }
        }

        let failed: Vec<String> = self
            .invariants
            .iter()
            .filter(|invariant| !invariant.check(&working))
            .map(|invariant| invariant.description().to_owned())
            .collect();
        if !failed.is_empty() {
            return Err(EngineError::InvariantViolation {
                descriptions: failed,
            });
        }

        // Rules only ever see `&GameState`, so this can fire only if one
        // smuggled interior mutability into the state.
        if *state != snapshot {
            return Err(EngineError::IllegalStateMutation {
                context: format!("command {command}"),
            });
        }

        debug!(%command, events = resolved.len(), "command resolved");
        Ok(CommandResult {
            new_state: working,
            success: true,
            events: resolved,
            info: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommandKind, Event, EventPayload, Player, PlayerName};
    use crate::errors::{EventError, RuleError};
    use crate::rules::rule::{CommandRule, EventRule};
    use std::sync::Arc;

    /// Applies unchanged; only its tag matters.
    #[derive(Debug)]
    struct TrivialEvent(EventPayload);

    impl Event for TrivialEvent {
        fn payload(&self) -> EventPayload {
            self.0
        }

        fn apply(&self, previous_state: &GameState) -> Result<GameState, EventError> {
            Ok(previous_state.clone())
        }
    }

    /// Derives a fixed list of trivial events for every command.
    #[derive(Debug)]
    struct EmitsTags(Vec<EventPayload>);

    impl CommandRule for EmitsTags {
        fn name(&self) -> &'static str {
            "EmitsTags"
        }

        fn is_applicable(&self, _command: &Command) -> bool {
            true
        }

        fn is_legal_given_applicable(
            &self,
            _state: &GameState,
            _command: &Command,
        ) -> Result<bool, RuleError> {
            Ok(true)
        }

        fn derive_events_given_applicable(
            &self,
            _state: &GameState,
            _command: &Command,
        ) -> Result<Vec<EventRef>, RuleError> {
            Ok(self
                .0
                .iter()
                .map(|&tag| Arc::new(TrivialEvent(tag)) as EventRef)
                .collect())
        }
    }

    /// Injects one follow-up the first time it sees a given tag.
    #[derive(Debug)]
    struct InjectsOn {
        trigger: EventPayload,
        inject: EventPayload,
    }

    impl EventRule for InjectsOn {
        fn on_event(
            &self,
            _state: &GameState,
            event: &dyn Event,
        ) -> Result<Vec<EventRef>, RuleError> {
            if event.payload() == self.trigger {
                Ok(vec![Arc::new(TrivialEvent(self.inject)) as EventRef])
            } else {
                Ok(Vec::new())
            }
        }
    }

    #[derive(Debug)]
    struct AlwaysIllegal;

    impl CommandRule for AlwaysIllegal {
        fn name(&self) -> &'static str {
            "AlwaysIllegal"
        }

        fn is_applicable(&self, _command: &Command) -> bool {
            true
        }

        fn is_legal_given_applicable(
            &self,
            _state: &GameState,
            _command: &Command,
        ) -> Result<bool, RuleError> {
            Ok(false)
        }

        fn derive_events_given_applicable(
            &self,
            _state: &GameState,
            _command: &Command,
        ) -> Result<Vec<EventRef>, RuleError> {
            Ok(vec![Arc::new(TrivialEvent(EventPayload::Custom("never"))) as EventRef])
        }
    }

    fn state() -> GameState {
        GameState::new([Player::new("A")], PlayerName::new("A"))
    }

    fn command() -> Command {
        Command::new("A", CommandKind::EndTurn)
    }

    #[test]
    fn test_rejection_short_circuits() {
        let mut rules = RuleSet::new();
        rules.push_command_rule(Box::new(AlwaysIllegal));
        rules.push_command_rule(Box::new(EmitsTags(vec![EventPayload::Custom("e")])));
        let engine = GameEngine::new(rules);

        let input = state();
        let result = engine.apply_command(&input, &command()).unwrap();

        assert!(!result.success);
        assert!(result.events.is_empty());
        assert_eq!(result.new_state, input);
        assert!(result.info.contains("AlwaysIllegal"));
    }

    #[test]
    fn test_events_concatenate_in_rule_order() {
        let mut rules = RuleSet::new();
        rules.push_command_rule(Box::new(EmitsTags(vec![EventPayload::Custom("first")])));
        rules.push_command_rule(Box::new(EmitsTags(vec![EventPayload::Custom("second")])));
        let engine = GameEngine::new(rules);

        let result = engine.apply_command(&state(), &command()).unwrap();
        let tags: Vec<_> = result.events.iter().map(|e| e.payload()).collect();

        assert_eq!(
            tags,
            [EventPayload::Custom("first"), EventPayload::Custom("second")]
        );
    }

    #[test]
    fn test_cascade_prepends_follow_ups() {
        let mut rules = RuleSet::new();
        rules.push_command_rule(Box::new(EmitsTags(vec![
            EventPayload::Custom("e1"),
            EventPayload::Custom("e2"),
        ])));
        rules.push_event_rule(Box::new(InjectsOn {
            trigger: EventPayload::Custom("e1"),
            inject: EventPayload::Custom("e3"),
        }));
        let engine = GameEngine::new(rules);

        let result = engine.apply_command(&state(), &command()).unwrap();
        let tags: Vec<_> = result.events.iter().map(|e| e.payload()).collect();

        // e3 is processed before e2: follow-ups jump the queue.
        assert_eq!(
            tags,
            [
                EventPayload::Custom("e1"),
                EventPayload::Custom("e3"),
                EventPayload::Custom("e2"),
            ]
        );
    }

    #[test]
    fn test_empty_rule_set_succeeds_without_events() {
        let engine = GameEngine::new(RuleSet::new());

        let input = state();
        let result = engine.apply_command(&input, &command()).unwrap();

        assert!(result.success);
        assert!(result.events.is_empty());
        assert_eq!(result.new_state, input);
    }

    #[test]
    fn test_failing_invariant_raises() {
        #[derive(Debug)]
        struct AlwaysFails;

        impl GameStateInvariant for AlwaysFails {
            fn description(&self) -> &str {
                "always fails"
            }

            fn check(&self, _state: &GameState) -> bool {
                false
            }
        }

        let engine = GameEngine::new(RuleSet::new()).with_invariants(vec![Box::new(AlwaysFails)]);

        let err = engine.apply_command(&state(), &command()).unwrap_err();
        match err {
            EngineError::InvariantViolation { descriptions } => {
                assert_eq!(descriptions, ["always fails"]);
            }
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn test_failing_event_aborts_with_payload() {
        #[derive(Debug)]
        struct FailingEvent;

        impl Event for FailingEvent {
            fn payload(&self) -> EventPayload {
                EventPayload::Custom("doomed")
            }

            fn apply(&self, _previous_state: &GameState) -> Result<GameState, EventError> {
                Err(EventError::IllegalTransition("no".to_owned()))
            }
        }

        #[derive(Debug)]
        struct EmitsFailing;

        impl CommandRule for EmitsFailing {
            fn name(&self) -> &'static str {
                "EmitsFailing"
            }

            fn is_applicable(&self, _command: &Command) -> bool {
                true
            }

            fn is_legal_given_applicable(
                &self,
                _state: &GameState,
                _command: &Command,
            ) -> Result<bool, RuleError> {
                Ok(true)
            }

            fn derive_events_given_applicable(
                &self,
                _state: &GameState,
                _command: &Command,
            ) -> Result<Vec<EventRef>, RuleError> {
                Ok(vec![Arc::new(FailingEvent) as EventRef])
            }
        }

        let mut rules = RuleSet::new();
        rules.push_command_rule(Box::new(EmitsFailing));
        let engine = GameEngine::new(rules);

        let input = state();
        let err = engine.apply_command(&input, &command()).unwrap_err();
        match err {
            EngineError::Event { payload, .. } => {
                assert_eq!(payload, EventPayload::Custom("doomed"));
            }
            other => panic!("expected event failure, got {other:?}"),
        }
    }
}

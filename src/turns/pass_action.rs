//! Passing: the active player drops out of the round and play moves on.
//!
//! Passing derives two events: [`PassEvent`] marks the player passed, then
//! [`EndTurnEvent`] hands the turn to the next unpassed player. Event rules
//! reacting to the pass have their follow-ups resolved between the two.

use std::sync::Arc;

use crate::core::{
    Command, CommandKind, Event, EventPayload, EventRef, GameState, TurnContext,
};
use crate::errors::{EventError, RuleError};
use crate::rules::{CommandRule, RulesModule};
use crate::turns::end_turn::EndTurnEvent;

/// Marks the active player as passed for the rest of the round.
#[derive(Clone, Debug)]
pub struct PassEvent;

impl Event for PassEvent {
    fn payload(&self) -> EventPayload {
        EventPayload::PassAction
    }

    fn apply(&self, previous_state: &GameState) -> Result<GameState, EventError> {
        let passed = previous_state.get_active_player()?.clone().with_passed(true);
        let mut state = previous_state.update_player(passed)?;
        state.turn_context = TurnContext::default();
        Ok(state)
    }
}

/// Passing is legal for the active player once every held strategy card is
/// exhausted.
#[derive(Debug)]
pub struct PassRule;

impl CommandRule for PassRule {
    fn name(&self) -> &'static str {
        "PassAction"
    }

    fn is_applicable(&self, command: &Command) -> bool {
        command.kind == CommandKind::PassAction
    }

    fn is_legal_given_applicable(
        &self,
        state: &GameState,
        command: &Command,
    ) -> Result<bool, RuleError> {
        command.expect_no_payload(self.name())?;
        Ok(state.active_player == command.actor
            && state
                .find_player(&command.actor)
                .is_some_and(|player| !player.has_ready_strategy_card()))
    }

    fn derive_events_given_applicable(
        &self,
        _state: &GameState,
        _command: &Command,
    ) -> Result<Vec<EventRef>, RuleError> {
        Ok(vec![
            Arc::new(PassEvent) as EventRef,
            Arc::new(EndTurnEvent) as EventRef,
        ])
    }
}

/// Rule module contributing the pass rule.
pub struct PassActionModule;

impl RulesModule for PassActionModule {
    fn command_rules(&self) -> Vec<Box<dyn CommandRule>> {
        vec![Box::new(PassRule)]
    }
}

//! Ending a turn: the active player hands play to the next unpassed player
//! in initiative order.

use std::sync::Arc;

use crate::core::{
    Command, CommandKind, Event, EventPayload, EventRef, GameState, TurnContext,
};
use crate::errors::{EventError, LookupError, RuleError};
use crate::rules::{CommandRule, RulesModule};

/// Moves the turn to the next player who has not passed.
#[derive(Clone, Debug)]
pub struct EndTurnEvent;

impl Event for EndTurnEvent {
    fn payload(&self) -> EventPayload {
        EventPayload::EndTurn
    }

    fn apply(&self, previous_state: &GameState) -> Result<GameState, EventError> {
        let order = previous_state.initiative_order();
        let current = order
            .iter()
            .position(|player| player.name == previous_state.active_player)
            .ok_or_else(|| {
                LookupError::PlayerNotFound(previous_state.active_player.clone())
            })?;

        // First unpassed player after the current seat, wrapping. When
        // everyone has passed the active player keeps the turn; closing the
        // round is another rule's concern.
        let mut next = previous_state.active_player.clone();
        for step in 1..=order.len() {
            let candidate = order[(current + step) % order.len()];
            if !candidate.has_passed {
                next = candidate.name.clone();
                break;
            }
        }

        let mut state = previous_state.clone();
        state.active_player = next;
        state.turn_context = TurnContext::default();
        Ok(state)
    }
}

/// Ending a turn is legal for the active player once their turn obligation
/// is met.
#[derive(Debug)]
pub struct EndTurnRule;

impl CommandRule for EndTurnRule {
    fn name(&self) -> &'static str {
        "EndTurn"
    }

    fn is_applicable(&self, command: &Command) -> bool {
        command.kind == CommandKind::EndTurn
    }

    fn is_legal_given_applicable(
        &self,
        state: &GameState,
        command: &Command,
    ) -> Result<bool, RuleError> {
        command.expect_no_payload(self.name())?;
        Ok(state.active_player == command.actor && state.has_taken_turn())
    }

    fn derive_events_given_applicable(
        &self,
        _state: &GameState,
        _command: &Command,
    ) -> Result<Vec<EventRef>, RuleError> {
        Ok(vec![Arc::new(EndTurnEvent) as EventRef])
    }
}

/// Rule module contributing the end-turn rule.
pub struct EndTurnModule;

impl RulesModule for EndTurnModule {
    fn command_rules(&self) -> Vec<Box<dyn CommandRule>> {
        vec![Box::new(EndTurnRule)]
    }
}

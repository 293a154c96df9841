//! Tactical actions: the bread-and-butter turn action, optionally activating
//! a system with a command token from the tactic pool.

use std::sync::Arc;

use crate::core::{
    Command, CommandKind, CommandPayload, Event, EventPayload, EventRef, GameState, PlayerName,
    SystemId, TurnContext,
};
use crate::errors::{EventError, RuleError};
use crate::rules::{CommandRule, RulesModule};

/// Records that the active player has taken their action this turn.
#[derive(Clone, Debug)]
pub struct TacticalActionCompletedEvent;

impl Event for TacticalActionCompletedEvent {
    fn payload(&self) -> EventPayload {
        EventPayload::TacticalActionCompleted
    }

    fn apply(&self, previous_state: &GameState) -> Result<GameState, EventError> {
        let mut state = previous_state.clone();
        state.turn_context = TurnContext::action_taken();
        Ok(state)
    }
}

/// Moves a command token from the actor's tactic pool into the target
/// system.
#[derive(Clone, Debug)]
pub struct ActivateSystemEvent {
    /// Who is activating.
    pub actor: PlayerName,
    /// The system being activated.
    pub system_id: SystemId,
}

impl Event for ActivateSystemEvent {
    fn payload(&self) -> EventPayload {
        EventPayload::SystemActivated
    }

    fn apply(&self, previous_state: &GameState) -> Result<GameState, EventError> {
        let player = previous_state.get_player(&self.actor)?.clone();
        let system = previous_state.get_system(self.system_id)?.clone();

        let (token, sheet) = player.command_sheet.spend_tactic().ok_or_else(|| {
            EventError::IllegalTransition(format!(
                "{} has no tactic token left to place",
                self.actor
            ))
        })?;

        let state = previous_state.update_player(player.with_command_sheet(sheet))?;
        Ok(state.update_system(system.with_token(token)))
    }
}

/// A tactical action is legal for the active player while their turn action
/// is still available; activating a system additionally requires the system
/// to exist, to be free of the actor's tokens, and a tactic token to spend.
#[derive(Debug)]
pub struct TacticalActionRule;

impl CommandRule for TacticalActionRule {
    fn name(&self) -> &'static str {
        "InitiateTacticalAction"
    }

    fn is_applicable(&self, command: &Command) -> bool {
        command.kind == CommandKind::InitiateTacticalAction
    }

    fn is_legal_given_applicable(
        &self,
        state: &GameState,
        command: &Command,
    ) -> Result<bool, RuleError> {
        if state.active_player != command.actor || state.has_taken_turn() {
            return Ok(false);
        }
        match command.payload {
            CommandPayload::None => Ok(true),
            CommandPayload::ActivateSystem { system_id } => {
                let Some(actor) = state.find_player(&command.actor) else {
                    return Ok(false);
                };
                // A missing system makes the command illegal, not the call
                // erroneous.
                let Some(system) = state.find_system(system_id) else {
                    return Ok(false);
                };
                Ok(!system.has_token_of(&command.actor)
                    && !actor.command_sheet.tactic.is_empty())
            }
        }
    }

    fn derive_events_given_applicable(
        &self,
        _state: &GameState,
        command: &Command,
    ) -> Result<Vec<EventRef>, RuleError> {
        match command.payload {
            CommandPayload::None => Ok(vec![Arc::new(TacticalActionCompletedEvent) as EventRef]),
            CommandPayload::ActivateSystem { system_id } => Ok(vec![
                Arc::new(ActivateSystemEvent {
                    actor: command.actor.clone(),
                    system_id,
                }) as EventRef,
                Arc::new(TacticalActionCompletedEvent) as EventRef,
            ]),
        }
    }
}

/// Rule module contributing the tactical-action rule.
pub struct TacticalActionModule;

impl RulesModule for TacticalActionModule {
    fn command_rules(&self) -> Vec<Box<dyn CommandRule>> {
        vec![Box::new(TacticalActionRule)]
    }
}

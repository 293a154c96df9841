//! Game session: a thin history of engine results.
//!
//! The session owns nothing clever. It remembers the initial state, hands
//! each command to the engine against the current state, and appends the
//! result to history on success. Concurrent use must be serialized by the
//! caller; the session is single-writer by design.

use crate::core::{Command, GameState};
use crate::errors::EngineError;
use crate::rules::{CommandResult, GameEngine};

/// A running game: an engine plus the history of successful results.
#[derive(Debug)]
pub struct GameSession {
    initial_state: GameState,
    engine: GameEngine,
    history: Vec<CommandResult>,
}

impl GameSession {
    /// Start a session from an initial state.
    #[must_use]
    pub fn new(initial_state: GameState, engine: GameEngine) -> Self {
        Self {
            initial_state,
            engine,
            history: Vec::new(),
        }
    }

    /// The state the session started from.
    #[must_use]
    pub fn initial_state(&self) -> &GameState {
        &self.initial_state
    }

    /// The engine resolving this session's commands.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Mutable engine access, for registering additional rule modules.
    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    /// Every successful result so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CommandResult] {
        &self.history
    }

    /// The last successful result's state, or the initial state if nothing
    /// has succeeded yet.
    #[must_use]
    pub fn current_state(&self) -> &GameState {
        self.history
            .last()
            .map_or(&self.initial_state, |result| &result.new_state)
    }

    /// Resolve a command against the current state.
    ///
    /// Successful results are appended to history and become the new current
    /// state; rejected results are returned but leave the session untouched.
    pub fn apply_command(&mut self, command: &Command) -> Result<CommandResult, EngineError> {
        let state = self.current_state().clone();
        let result = self.engine.apply_command(&state, command)?;
        if result.success {
            self.history.push(result.clone());
        }
        Ok(result)
    }

    /// Roll back the last successful command.
    ///
    /// TODO: pop history once replaying rejected-command diagnostics is
    /// settled; until then this always fails.
    pub fn undo(&mut self) -> Result<&GameState, EngineError> {
        Err(EngineError::UndoUnsupported)
    }
}

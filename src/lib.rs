//! # imperium-engine
//!
//! A deterministic command/event rules engine for turn-based strategy games.
//!
//! ## Design Principles
//!
//! 1. **Immutable state**: a [`GameState`] is a value. Every transition
//!    produces a new snapshot with structural sharing (`im` collections);
//!    the old snapshot stays valid and provably unchanged.
//!
//! 2. **Commands validate, events apply**: a command is a request, checked
//!    by every registered rule before anything happens. Events are the
//!    already-decided transitions the command turns into.
//!
//! 3. **Open rule seams**: rule modules plug into the registry without
//!    knowing about each other. Ordering is deterministic — registration
//!    order for rules, front-insertion for cascading follow-ups.
//!
//! ## Modules
//!
//! - `core`: players, systems, tokens, state, commands, events
//! - `rules`: rule traits, registry, invariants, the engine
//! - `turns`: end-turn and pass rule modules
//! - `actions`: tactical-action rule module
//! - `session`: history of engine results
//! - `errors`: error taxonomy

pub mod actions;
pub mod core;
pub mod errors;
pub mod rules;
pub mod session;
pub mod turns;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandKind, CommandPayload, CommandSheet, CommandToken, Event, EventPayload,
    EventRef, GameState, Phase, Player, PlayerName, StrategyCard, System, SystemId, TokenType,
    TurnContext, UNIQUE_TOKENS,
};

pub use crate::errors::{EngineError, EventError, LookupError, RuleError};

pub use crate::rules::{
    standard_invariants, CommandResult, CommandRule, EventRule, GameEngine, GameStateInvariant,
    PassedPlayersExhaustedInvariant, RuleSet, RulesModule, UniqueTokenInvariant,
};

pub use crate::session::GameSession;

//! The rules layer: rule traits, the registry that composes rule modules,
//! global invariants, and the engine that resolves commands.

pub mod engine;
pub mod invariant;
pub mod registry;
pub mod rule;

pub use engine::{CommandResult, GameEngine};
pub use invariant::{
    standard_invariants, GameStateInvariant, PassedPlayersExhaustedInvariant, UniqueTokenInvariant,
};
pub use registry::{RuleSet, RulesModule};
pub use rule::{CommandRule, EventRule};

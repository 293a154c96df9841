//! Events: named, immutable state transitions.
//!
//! An event is an already-decided transition: `apply` takes the previous
//! state and returns the next one, total and pure. Events never mutate their
//! input — they cannot, through `&GameState` — and must not read anything
//! outside their arguments.
//!
//! ## Equality
//!
//! Events match by [`EventPayload`] tag, never by structural identity. Two
//! `SystemActivated` events over different systems are the same *kind* of
//! thing, and that is what event rules pattern-match on.

use std::fmt;
use std::sync::Arc;

use crate::core::state::GameState;
use crate::errors::EventError;

/// Logical tag of an event, used for equality and event-rule matching.
///
/// Built-in rule modules use the named variants; externally authored rule
/// modules register their own kinds via `Custom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventPayload {
    /// The active player passed for the round.
    PassAction,
    /// The turn moved to the next player.
    EndTurn,
    /// The active player completed a tactical action.
    TacticalActionCompleted,
    /// A command token was placed in a system.
    SystemActivated,
    /// An event kind defined outside this crate.
    Custom(&'static str),
}

impl fmt::Display for EventPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventPayload::PassAction => write!(f, "PassAction"),
            EventPayload::EndTurn => write!(f, "EndTurn"),
            EventPayload::TacticalActionCompleted => write!(f, "TacticalActionCompleted"),
            EventPayload::SystemActivated => write!(f, "SystemActivated"),
            EventPayload::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// An immutable state transition.
pub trait Event: fmt::Debug {
    /// The logical tag this event matches under.
    fn payload(&self) -> EventPayload;

    /// Produce the successor state.
    ///
    /// Pure: no reads or writes outside the arguments, `previous_state`
    /// untouched.
    fn apply(&self, previous_state: &GameState) -> Result<GameState, EventError>;
}

/// Shared handle to an event.
///
/// Events are created by rules mid-resolution and handed to the caller in
/// the resolved list afterwards; `Arc` keeps both sides cheap.
pub type EventRef = Arc<dyn Event>;

//! Action rule modules.

pub mod tactical_action;

pub use tactical_action::{
    ActivateSystemEvent, TacticalActionCompletedEvent, TacticalActionModule, TacticalActionRule,
};

//! Turn-flow rule modules: ending turns and passing.

pub mod end_turn;
pub mod pass_action;

pub use end_turn::{EndTurnEvent, EndTurnModule, EndTurnRule};
pub use pass_action::{PassActionModule, PassEvent, PassRule};

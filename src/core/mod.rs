//! Core model types: tokens, cards, players, systems, state, commands,
//! events.
//!
//! Everything here is plain immutable data with pure derived queries. Game
//! behavior lives in rule modules, not in the model.

pub mod card;
pub mod command;
pub mod event;
pub mod player;
pub mod state;
pub mod system;
pub mod token;

pub use card::StrategyCard;
pub use command::{Command, CommandKind, CommandPayload};
pub use event::{Event, EventPayload, EventRef};
pub use player::{CommandSheet, Player, PlayerName};
pub use state::{GameState, Phase, TurnContext};
pub use system::{System, SystemId};
pub use token::{CommandToken, TokenType, UNIQUE_TOKENS};

//! Strategy cards.
//!
//! A strategy card carries an initiative number and a ready/exhausted flag.
//! Cards start ready and are exhausted when their strategic action is used;
//! a player cannot pass while still holding a ready card.

use serde::{Deserialize, Serialize};

/// A strategy card held by a player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyCard {
    /// Card name (display only; never an identity key).
    pub name: String,

    /// Initiative number printed on the card. Lower acts earlier.
    pub initiative: u8,

    /// Whether the card's strategic action is still available.
    pub is_ready: bool,
}

impl StrategyCard {
    /// Create a ready strategy card.
    #[must_use]
    pub fn new(name: impl Into<String>, initiative: u8) -> Self {
        Self {
            name: name.into(),
            initiative,
            is_ready: true,
        }
    }

    /// Return this card exhausted (builder pattern).
    #[must_use]
    pub fn exhausted(mut self) -> Self {
        self.is_ready = false;
        self
    }

    /// Return this card readied (builder pattern).
    #[must_use]
    pub fn readied(mut self) -> Self {
        self.is_ready = true;
        self
    }
}

//! Game state: the immutable world snapshot.
//!
//! A [`GameState`] is a value. Applying an event never modifies a state in
//! place; it produces a new one that shares structure with its predecessor
//! (`im` collections make that sharing O(1)). The old snapshot stays valid —
//! immutability here is a correctness invariant the whole engine depends on,
//! not an optimization.
//!
//! The active player is stored as a [`PlayerName`] key, never as a player
//! snapshot: attributes like passed status can legitimately differ between a
//! stale snapshot and the authoritative entry mid-cascade, so every lookup
//! goes through the `players` list.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerName};
use super::system::{System, SystemId};
use crate::errors::LookupError;

/// Round phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players pick strategy cards.
    Strategy,
    /// Players take turns acting; the phase this engine's rule modules cover.
    Action,
    /// End-of-round upkeep.
    Status,
    /// Agenda resolution.
    Agenda,
}

/// Transient per-turn flags, reset whenever the turn moves on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    /// Whether the active player has taken their action this turn.
    pub has_taken_action: bool,
}

impl TurnContext {
    /// Create a context with the action already taken.
    #[must_use]
    pub fn action_taken() -> Self {
        Self {
            has_taken_action: true,
        }
    }
}

/// Immutable snapshot of the game world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All players, in seating order. Seating breaks initiative ties.
    pub players: Vector<Player>,

    /// Identity key of the player whose turn it is. Always names an entry
    /// of `players`.
    pub active_player: PlayerName,

    /// Current round phase.
    pub phase: Phase,

    /// The galaxy, keyed by system id. Ordered map so iteration is
    /// deterministic.
    pub galaxy: OrdMap<SystemId, System>,

    /// Transient per-turn flags.
    pub turn_context: TurnContext,
}

impl GameState {
    /// Create a state in the action phase with an empty galaxy.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>, active_player: PlayerName) -> Self {
        Self {
            players: players.into_iter().collect(),
            active_player,
            phase: Phase::Action,
            galaxy: OrdMap::new(),
            turn_context: TurnContext::default(),
        }
    }

    /// Set the phase (builder pattern).
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Add a system to the galaxy (builder pattern).
    #[must_use]
    pub fn with_system(mut self, system: System) -> Self {
        self.galaxy.insert(system.id, system);
        self
    }

    /// Set the turn context (builder pattern).
    #[must_use]
    pub fn with_turn_context(mut self, turn_context: TurnContext) -> Self {
        self.turn_context = turn_context;
        self
    }

    // === Lookups ===

    /// Find a player by name.
    #[must_use]
    pub fn find_player(&self, name: &PlayerName) -> Option<&Player> {
        self.players.iter().find(|player| &player.name == name)
    }

    /// Look up a player by name, as a typed error on absence.
    pub fn get_player(&self, name: &PlayerName) -> Result<&Player, LookupError> {
        self.find_player(name)
            .ok_or_else(|| LookupError::PlayerNotFound(name.clone()))
    }

    /// The authoritative entry for the active player.
    pub fn get_active_player(&self) -> Result<&Player, LookupError> {
        self.get_player(&self.active_player)
    }

    /// Find a system by id.
    #[must_use]
    pub fn find_system(&self, id: SystemId) -> Option<&System> {
        self.galaxy.get(&id)
    }

    /// Look up a system by id, as a typed error on absence.
    pub fn get_system(&self, id: SystemId) -> Result<&System, LookupError> {
        self.find_system(id)
            .ok_or(LookupError::SystemNotFound(id))
    }

    // === Derived queries ===

    /// Whether the active player's turn obligation is met: they have taken
    /// their action, or they have passed.
    #[must_use]
    pub fn has_taken_turn(&self) -> bool {
        self.turn_context.has_taken_action
            || self
                .find_player(&self.active_player)
                .is_some_and(|player| player.has_passed)
    }

    /// All players ordered by initiative, lowest first.
    ///
    /// The sort is stable: equal initiative falls back to seating order.
    #[must_use]
    pub fn initiative_order(&self) -> Vec<&Player> {
        let mut order: Vec<&Player> = self.players.iter().collect();
        order.sort_by_key(|player| player.initiative());
        order
    }

    /// Initiative order restricted to players who have not passed.
    #[must_use]
    pub fn initiative_order_unpassed(&self) -> Vec<&Player> {
        self.initiative_order()
            .into_iter()
            .filter(|player| !player.has_passed)
            .collect()
    }

    // === Copy-with-modification ===

    /// A new state with the given player replacing the entry of the same
    /// name.
    pub fn update_player(&self, player: Player) -> Result<GameState, LookupError> {
        let seat = self
            .players
            .iter()
            .position(|existing| existing.name == player.name)
            .ok_or_else(|| LookupError::PlayerNotFound(player.name.clone()))?;
        let mut state = self.clone();
        state.players = state.players.update(seat, player);
        Ok(state)
    }

    /// A new state with the given system replacing (or joining) the entry of
    /// the same id.
    #[must_use]
    pub fn update_system(&self, system: System) -> GameState {
        let mut state = self.clone();
        state.galaxy.insert(system.id, system);
        state
    }
}

//! Tactical actions: system activation with command tokens.

use imperium_engine::{
    Command, CommandKind, CommandSheet, CommandToken, GameEngine, GameState, Player, PlayerName,
    StrategyCard, System, SystemId,
};

fn player(name: &str, initiative: u8, tactic: usize) -> Player {
    let key = PlayerName::new(name);
    Player::new(name)
        .with_strategy_card(StrategyCard::new("Card", initiative))
        .with_command_sheet(CommandSheet::with_counts(&key, tactic, 0, 0))
}

fn state_with(system: System) -> GameState {
    GameState::new(
        [player("A", 1, 1), player("B", 2, 1)],
        PlayerName::new("A"),
    )
    .with_system(system)
}

/// The active player may only activate a system free of their own tokens.
#[test]
fn test_activation_blocked_by_own_token_only() {
    let engine = GameEngine::standard();
    let activate = Command::activate_system("A", SystemId::new(0));

    let fresh = state_with(System::new(SystemId::new(0)));
    assert!(engine.apply_command(&fresh, &activate).unwrap().success);

    let own_token =
        state_with(System::new(SystemId::new(0)).with_token(CommandToken::new("A")));
    assert!(!engine.apply_command(&own_token, &activate).unwrap().success);

    let their_token =
        state_with(System::new(SystemId::new(0)).with_token(CommandToken::new("B")));
    assert!(engine.apply_command(&their_token, &activate).unwrap().success);
}

/// Activation places a token from the tactic pool into the system.
#[test]
fn test_activation_places_token_from_tactic_pool() {
    let engine = GameEngine::standard();
    let state = state_with(System::new(SystemId::new(0)));

    let result = engine
        .apply_command(&state, &Command::activate_system("A", SystemId::new(0)))
        .unwrap();
    assert!(result.success);

    let system = result.new_state.get_system(SystemId::new(0)).unwrap();
    assert!(system.has_token_of(&PlayerName::new("A")));

    let actor = result.new_state.get_player(&PlayerName::new("A")).unwrap();
    assert!(actor.command_sheet.tactic.is_empty());
}

/// Activating a system that is not in the galaxy is rejected, not an error.
#[test]
fn test_unknown_system_rejects_cleanly() {
    let engine = GameEngine::standard();
    let state = state_with(System::new(SystemId::new(0)));

    let result = engine
        .apply_command(&state, &Command::activate_system("A", SystemId::new(42)))
        .unwrap();
    assert!(!result.success);
    assert!(result.events.is_empty());
}

/// An activation also consumes the turn action.
#[test]
fn test_activation_counts_as_the_turn_action() {
    let engine = GameEngine::standard();
    let state = state_with(System::new(SystemId::new(0)));

    let result = engine
        .apply_command(&state, &Command::activate_system("A", SystemId::new(0)))
        .unwrap();
    assert!(result.new_state.turn_context.has_taken_action);

    // No second action, with or without a target.
    let again = engine
        .apply_command(
            &result.new_state,
            &Command::new("A", CommandKind::InitiateTacticalAction),
        )
        .unwrap();
    assert!(!again.success);
}

/// Without tactic tokens there is nothing to place.
#[test]
fn test_empty_tactic_pool_rejects_activation() {
    let engine = GameEngine::standard();
    let state = GameState::new(
        [player("A", 1, 0), player("B", 2, 1)],
        PlayerName::new("A"),
    )
    .with_system(System::new(SystemId::new(0)));

    let result = engine
        .apply_command(&state, &Command::activate_system("A", SystemId::new(0)))
        .unwrap();
    assert!(!result.success);
}

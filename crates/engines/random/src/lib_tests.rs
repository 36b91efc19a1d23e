use super::*;
use game_core::{Connect4, Connect4State};
use std::collections::HashMap;

#[test]
fn random_agent_returns_legal_action() {
    let game = Connect4::default();
    let mut agent = RandomAgent::new();
    let state = Connect4State::from_rows(&[
        "X.......", "O.......", "X.......", "O.......", "X.......", "O.......",
    ])
    .unwrap();

    for _ in 0..50 {
        let decision = agent
            .decide(&game, &state, Side::Max, Duration::from_secs(1))
            .unwrap();
        assert_ne!(decision.action, 0, "full column must never be chosen");
        assert!(game.actions(&state).contains(&decision.action));
    }
}

#[test]
fn random_agent_covers_every_action() {
    let game = Connect4::default();
    let state = game.initial_state();
    let mut agent = RandomAgent::new();
    let mut counts: HashMap<usize, u32> = HashMap::new();

    for _ in 0..400 {
        let decision = agent
            .decide(&game, &state, Side::Max, Duration::ZERO)
            .unwrap();
        *counts.entry(decision.action).or_default() += 1;
    }

    assert_eq!(counts.len(), 8);
}

#[test]
fn random_agent_handles_terminal_state() {
    let game = Connect4::new(2, 2, 3);
    let state = Connect4State::from_rows(&["OX", "XO"]).unwrap();
    let mut agent = RandomAgent::new();

    let result = agent.decide(&game, &state, Side::Max, Duration::from_secs(1));

    assert!(matches!(result, Err(AgentError::NoLegalActions)));
}

use super::*;
use game_core::{Connect4, Connect4State};
use std::collections::HashSet;

#[test]
fn alphabeta_agent_returns_legal_action() {
    let game = Connect4::default();
    let mut agent = AlphaBetaAgent::new();
    let mut state = game.initial_state();

    for _ in 0..6 {
        let side = game.side_to_move(&state);
        let decision = agent
            .decide(&game, &state, side, Duration::from_millis(20))
            .unwrap();
        assert!(game.actions(&state).contains(&decision.action));
        state = game.apply(&state, &decision.action).unwrap();
    }
}

#[test]
fn alphabeta_agent_falls_back_with_zero_budget() {
    let game = Connect4::default();
    let state = game.initial_state();
    let mut agent = AlphaBetaAgent::new();
    let mut seen = HashSet::new();

    for _ in 0..200 {
        let decision = agent
            .decide(&game, &state, Side::Max, Duration::ZERO)
            .unwrap();
        assert!(decision.is_fallback());
        assert!(game.actions(&state).contains(&decision.action));
        seen.insert(decision.action);
    }

    // Every column shows up over enough draws
    assert_eq!(seen.len(), 8);
}

#[test]
fn alphabeta_agent_rejects_terminal_state() {
    let game = Connect4::new(2, 2, 3);
    let state = Connect4State::from_rows(&["OX", "XO"]).unwrap();
    let mut agent = AlphaBetaAgent::new();

    let result = agent.decide(&game, &state, Side::Max, Duration::from_secs(1));

    assert!(matches!(result, Err(AgentError::NoLegalActions)));
}

#[test]
fn alphabeta_self_play_reaches_minimax_value() {
    // Small enough to solve completely well inside the budget.
    let game = Connect4::new(3, 3, 3);
    let mut agent = AlphaBetaAgent::new();
    let mut state = game.initial_state();

    let root = agent
        .decide(&game, &state, Side::Max, Duration::from_secs(60))
        .unwrap();
    assert!(!root.stopped);
    let expected = root.score.unwrap();

    while game.goal(&state).is_none() {
        let side = game.side_to_move(&state);
        let decision = agent
            .decide(&game, &state, side, Duration::from_secs(60))
            .unwrap();
        assert!(!decision.stopped);
        state = game.apply(&state, &decision.action).unwrap();
    }

    assert_eq!(game.goal(&state), Some(expected));
}

#[test]
fn alphabeta_agent_finds_forced_win() {
    let game = Connect4::default();
    let state = Connect4State::from_rows(&[
        "........", "........", "........", "........", "OOO.....", "XXX.....",
    ])
    .unwrap();
    let mut agent = AlphaBetaAgent::with_depth(2);
    assert_eq!(agent.depth(), 2);

    let decision = agent
        .decide(&game, &state, Side::Max, Duration::from_secs(10))
        .unwrap();

    assert_eq!(decision.action, 3);
    assert!(decision.score.unwrap() > game_core::WIN_SCORE);
}

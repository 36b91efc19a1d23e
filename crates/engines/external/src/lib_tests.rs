use super::*;
use game_core::Connect4;

fn shell(script: &str) -> ExternalAgent {
    ExternalAgent::with_args("sh", ["-c", script])
}

#[test]
fn request_lists_board_and_actions() {
    let game = Connect4::new(2, 3, 3);
    let state = game.initial_state();

    let request = Request::new(&game, &state, Side::Min, Duration::from_millis(2500));
    let json = serde_json::to_string(&request).unwrap();

    assert!(json.contains(r#""side":"O""#));
    assert!(json.contains(r#""time_budget":2.5"#));
    assert!(json.contains(r#""actions":["0","1","2"]"#));
}

#[test]
fn reply_accepts_bare_and_json_forms() {
    assert_eq!(reply_action("3\n").unwrap(), "3");
    assert_eq!(reply_action(r#"{"action": 5}"#).unwrap(), "5");
    assert_eq!(reply_action(r#"{"action": "6"}"#).unwrap(), "6");
    assert!(matches!(
        reply_action(r#"{"move": 1}"#),
        Err(AgentError::Protocol(_))
    ));
}

#[test]
fn external_agent_plays_through_child_process() {
    let game = Connect4::default();
    let mut agent = shell("while read line; do echo 2; done");
    let mut state = game.initial_state();

    // Same process serves several requests.
    for _ in 0..3 {
        let side = game.side_to_move(&state);
        let decision = agent.decide(&game, &state, side, Duration::from_secs(5)).unwrap();
        assert_eq!(decision.action, 2);
        state = game.apply(&state, &decision.action).unwrap();
    }
}

#[test]
fn external_agent_rejects_illegal_reply() {
    let game = Connect4::default();
    let mut agent = shell("while read line; do echo 42; done");

    let result = agent.decide(&game, &game.initial_state(), Side::Max, Duration::from_secs(5));

    assert!(matches!(result, Err(AgentError::IllegalAction(a)) if a == "42"));
}

#[test]
fn external_agent_reports_silent_exit() {
    let game = Connect4::default();
    let mut agent = shell("exit 0");

    let result = agent.decide(&game, &game.initial_state(), Side::Max, Duration::from_secs(5));

    assert!(result.is_err());
}

#[test]
fn external_agent_reports_missing_program() {
    let game = Connect4::default();
    let mut agent = ExternalAgent::new("/nonexistent/agent-binary");

    let result = agent.decide(&game, &game.initial_state(), Side::Max, Duration::from_secs(5));

    assert!(matches!(result, Err(AgentError::Spawn { .. })));
}

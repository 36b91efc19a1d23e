use super::*;

#[test]
fn plain_decision_has_no_message() {
    let decision = Decision::new(3usize);
    assert!(!decision.is_fallback());
    assert_eq!(decision.message(), None);
}

#[test]
fn fallback_decision_is_flagged() {
    let decision = Decision {
        action: 0usize,
        score: None,
        nodes: 12,
        stopped: true,
    };
    assert!(decision.is_fallback());
    assert!(decision.message().unwrap().contains("fallback"));
}

#[test]
fn stopped_search_with_score_is_not_fallback() {
    let decision = Decision {
        action: 0usize,
        score: Some(4),
        nodes: 900,
        stopped: true,
    };
    assert!(!decision.is_fallback());
    assert_eq!(decision.message().as_deref(), Some("search stopped early"));
}

struct FirstColumn;

impl Agent<Connect4> for FirstColumn {
    fn decide(
        &mut self,
        game: &Connect4,
        state: &Connect4State,
        _side: Side,
        _budget: Duration,
    ) -> Result<Decision<usize>, AgentError> {
        game.actions(state)
            .first()
            .copied()
            .map(Decision::new)
            .ok_or(AgentError::NoLegalActions)
    }

    fn name(&self) -> &str {
        "first"
    }
}

#[test]
fn boxed_agents_forward_calls() {
    let game = Connect4::default();
    let mut agent: Box<dyn Agent<Connect4>> = Box::new(FirstColumn);

    let decision = agent
        .decide(&game, &game.initial_state(), Side::Max, Duration::from_secs(1))
        .unwrap();
    assert_eq!(decision.action, 0);
    assert_eq!(agent.name(), "first");
}

//! Maps agent selectors to concrete agents.

use alphabeta_engine::AlphaBetaAgent;
use external_engine::ExternalAgent;
use game_core::{Agent, Game};
use human_engine::HumanAgent;
use random_engine::RandomAgent;

use crate::config::AgentSpec;

/// Build the agent a selector names.
pub fn build_agent<G: Game + 'static>(spec: &AgentSpec) -> Box<dyn Agent<G>> {
    match spec {
        AgentSpec::Human => Box::new(HumanAgent::stdio()),
        AgentSpec::Random => Box::new(RandomAgent::new()),
        AgentSpec::AlphaBeta => Box::new(AlphaBetaAgent::new()),
        AgentSpec::External(path) => Box::new(ExternalAgent::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Connect4;

    #[test]
    fn test_builtin_agents_have_names() {
        let random: Box<dyn Agent<Connect4>> = build_agent(&AgentSpec::Random);
        let search: Box<dyn Agent<Connect4>> = build_agent(&AgentSpec::AlphaBeta);

        assert_eq!(random.name(), "Random v1.0");
        assert_eq!(search.name(), "AlphaBeta v1.0");
    }

    #[test]
    fn test_external_agent_named_after_path() {
        let spec = AgentSpec::External("bots/minimax".into());
        let agent: Box<dyn Agent<Connect4>> = build_agent(&spec);

        assert_eq!(agent.name(), "External-bots/minimax");
    }
}

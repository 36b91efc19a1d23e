//! Uniform Random Agent
//!
//! A simple agent that selects actions uniformly at random from all legal actions.
//! Useful for:
//! - Testing the match controller without waiting on search
//! - Baseline comparisons (any real agent should easily beat this)

use std::time::Duration;

use game_core::{Agent, AgentError, Decision, Game, Side};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An agent that plays random legal actions.
///
/// This agent provides no evaluation - it simply picks a random action
/// from the position's transitions and ignores its time budget, which it
/// never comes close to using.
#[derive(Debug, Clone, Default)]
pub struct RandomAgent {
    nodes: u64,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl<G: Game> Agent<G> for RandomAgent {
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        _side: Side,
        _budget: Duration,
    ) -> Result<Decision<G::Action>, AgentError> {
        let actions = game.actions(state);
        self.nodes = 1;

        let action = *actions
            .choose(&mut thread_rng())
            .ok_or(AgentError::NoLegalActions)?;

        Ok(Decision {
            action,
            score: None,
            nodes: self.nodes,
            stopped: false,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_match(&mut self) {
        self.nodes = 0;
    }
}

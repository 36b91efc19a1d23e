//! Alpha-Beta Agent
//!
//! Time-bounded minimax search with alpha-beta pruning.
//! This is the reference agent the arena plays by default.

mod search;

use std::time::Duration;

use game_core::{Agent, AgentError, Decision, Game, SearchClock, Side};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::debug;

pub use search::{
    pick_best_action, SearchOutcome, ABORT_FRACTION, MAX_DEPTH, ROOT_STOP_FRACTION,
};

/// Agent using depth-limited alpha-beta search against the clock.
///
/// This agent uses:
/// - Minimax search with alpha-beta pruning in natural action order
/// - The game's static heuristic at the depth ceiling
/// - All-or-nothing time budget: a root action that runs out of time is dropped
/// - Uniform random fallback when no root action finished in time
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent {
    depth: u32,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for AlphaBetaAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBetaAgent {
    pub fn new() -> Self {
        Self::with_depth(MAX_DEPTH)
    }

    /// An agent with a custom depth ceiling.
    pub fn with_depth(depth: u32) -> Self {
        Self { depth, nodes: 0 }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<G: Game> Agent<G> for AlphaBetaAgent {
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        side: Side,
        budget: Duration,
    ) -> Result<Decision<G::Action>, AgentError> {
        self.nodes = 0;
        let clock = SearchClock::start(budget);

        let outcome = pick_best_action(game, state, side, self.depth, &mut self.nodes, &clock);

        let decision = match outcome.best {
            Some((action, score)) => Decision {
                action,
                score: Some(score),
                nodes: self.nodes,
                stopped: outcome.stopped,
            },
            None => {
                let action = *outcome
                    .actions
                    .choose(&mut thread_rng())
                    .ok_or(AgentError::NoLegalActions)?;
                Decision {
                    action,
                    score: None,
                    nodes: self.nodes,
                    stopped: true,
                }
            }
        };

        debug!(
            side = %side,
            action = %decision.action,
            score = ?decision.score,
            nodes = decision.nodes,
            stopped = decision.stopped,
            elapsed_ms = clock.elapsed().as_millis() as u64,
            budget_ms = clock.budget().as_millis() as u64,
            "alpha-beta decision"
        );

        Ok(decision)
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_match(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

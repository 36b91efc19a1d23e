pub mod connect4;
pub mod error;
pub mod game;
pub mod time_control;
pub mod types;

// Re-export the game contract and the reference game
pub use connect4::*;
pub use error::AgentError;
pub use game::Game;
pub use time_control::*;
pub use types::*;

use std::time::Duration;

// =============================================================================
// Agent trait: implemented by every decision procedure (search, random, ...)
// =============================================================================

/// Result of one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// The chosen action; always a key of the position's transitions
    pub action: A,
    /// Value the agent assigned to the action, if it computed one
    pub score: Option<Score>,
    /// Number of positions examined (optional, for stats)
    pub nodes: u64,
    /// Whether the agent stopped early because of its time budget
    pub stopped: bool,
}

impl<A> Decision<A> {
    /// A decision with no search statistics attached.
    pub fn new(action: A) -> Self {
        Self {
            action,
            score: None,
            nodes: 0,
            stopped: false,
        }
    }

    /// True when the action was picked at random after the clock ran out.
    pub fn is_fallback(&self) -> bool {
        self.stopped && self.score.is_none()
    }

    /// Short note for the move log, if anything about the decision stands out.
    pub fn message(&self) -> Option<String> {
        if self.is_fallback() {
            Some("out of time, random fallback".to_string())
        } else if self.stopped {
            Some("search stopped early".to_string())
        } else {
            None
        }
    }
}

/// Trait that all agents must implement.
///
/// The match controller treats every agent the same way: it hands over a
/// copy of the position, the rules, the side to play and the time currently
/// in that side's bank, and waits for an action. Agents are not interrupted;
/// an agent that overruns is judged late by the controller.
pub trait Agent<G: Game> {
    /// Choose an action for `side` in `state` within roughly `budget`.
    ///
    /// # Errors
    /// Any error is fatal to the match in progress.
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        side: Side,
        budget: Duration,
    ) -> Result<Decision<G::Action>, AgentError>;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new match.
    fn new_match(&mut self) {}
}

impl<G: Game, T: Agent<G> + ?Sized> Agent<G> for Box<T> {
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        side: Side,
        budget: Duration,
    ) -> Result<Decision<G::Action>, AgentError> {
        (**self).decide(game, state, side, budget)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn new_match(&mut self) {
        (**self).new_match()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

//! The abstract game model shared by the match controller and every agent.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::types::{Placement, Score, Side};

/// Rules of a two-player, zero-sum, perfect-information game.
///
/// The rules object is stateless with respect to play: positions live in
/// [`Game::State`] values, which are cloned rather than mutated, so two
/// states derived from a common ancestor never alias.
pub trait Game {
    /// A complete position. `Clone` must be a deep copy.
    type State: Clone + Debug + Display;
    /// One legal move from a given state.
    ///
    /// `Display`/`FromStr` name the action for human and out-of-process agents.
    type Action: Copy + Eq + Hash + Debug + Display + FromStr;

    /// The position a match starts from.
    fn initial_state(&self) -> Self::State;

    /// All legal moves with their resulting states.
    ///
    /// Keys are unique and always listed in the same natural order. The
    /// result is empty for a terminal state.
    fn transitions(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Decided score of the position, or `None` while the game is undecided.
    ///
    /// Positive means [`Side::Max`] has won, negative [`Side::Min`]; faster
    /// wins have larger magnitude. Zero is a draw.
    fn goal(&self, state: &Self::State) -> Option<Score>;

    /// Whose turn it is. A pure function of the state.
    fn side_to_move(&self, state: &Self::State) -> Side;

    /// Cheap static score used when search hits its depth ceiling.
    fn heuristic(&self, state: &Self::State) -> Score;

    /// Where `action` put its marker in `after`, the state it produced.
    fn placement(&self, after: &Self::State, action: &Self::Action) -> Placement;

    /// Convenience lookup of the state an action leads to.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Option<Self::State> {
        self.transitions(state)
            .into_iter()
            .find(|(candidate, _)| candidate == action)
            .map(|(_, next)| next)
    }

    /// Legal actions in natural order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.transitions(state)
            .into_iter()
            .map(|(action, _)| action)
            .collect()
    }
}

//! Depth-limited minimax with alpha-beta pruning under a wall-clock budget

use game_core::{Game, Score, SearchClock, Side};

/// Recursion backstop. Never binds on boards the arena plays.
pub const MAX_DEPTH: u32 = 1000;

/// A recursive call past this fraction of the budget aborts the decision.
pub const ABORT_FRACTION: f64 = 0.95;

/// No new root action is started past this fraction of the budget.
pub const ROOT_STOP_FRACTION: f64 = 0.9;

/// Result from [`pick_best_action`].
#[derive(Debug, Clone)]
pub struct SearchOutcome<A> {
    /// Best fully scored root action, first-seen on ties
    pub best: Option<(A, Score)>,
    /// Legal root actions in natural order
    pub actions: Vec<A>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Scores the root actions of `state` for `side` until done or out of time.
///
/// # Arguments
/// * `game` - Rules providing transitions, goal and heuristic
/// * `state` - The position to search
/// * `side` - The side to move
/// * `depth` - Depth ceiling in plies
/// * `nodes` - Counter for nodes searched (for statistics)
/// * `clock` - Deadline polled at every recursive call and root boundary
///
/// An aborted root action ends the loop at once; its partial result is
/// never compared against completed ones.
pub fn pick_best_action<G: Game>(
    game: &G,
    state: &G::State,
    side: Side,
    depth: u32,
    nodes: &mut u64,
    clock: &SearchClock,
) -> SearchOutcome<G::Action> {
    let transitions = game.transitions(state);
    let actions: Vec<G::Action> = transitions.iter().map(|(a, _)| *a).collect();

    let mut best: Option<(G::Action, Score)> = None;
    let mut stopped = false;

    // The reply belongs to the opponent.
    let child_maximizing = !side.is_maximizing();

    for (i, (action, child)) in transitions.into_iter().enumerate() {
        // Only between root actions: a fully scored root is never reported as stopped.
        if i > 0 && clock.past(ROOT_STOP_FRACTION) {
            stopped = true;
            break;
        }
        *nodes += 1;

        let Some(score) = alpha_beta(
            game,
            &child,
            depth.saturating_sub(1),
            Score::MIN,
            Score::MAX,
            child_maximizing,
            nodes,
            clock,
        ) else {
            stopped = true;
            break;
        };

        let improves = match best {
            None => true,
            Some((_, best_score)) if side.is_maximizing() => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((action, score));
        }
    }

    SearchOutcome {
        best,
        actions,
        stopped,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Returns `None` when the deadline passed anywhere below this node.
#[allow(clippy::too_many_arguments)]
fn alpha_beta<G: Game>(
    game: &G,
    state: &G::State,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    nodes: &mut u64,
    clock: &SearchClock,
) -> Option<Score> {
    if clock.past(ABORT_FRACTION) {
        return None;
    }

    if let Some(score) = game.goal(state) {
        return Some(score);
    }
    if depth == 0 {
        return Some(game.heuristic(state));
    }

    let transitions = game.transitions(state);
    if transitions.is_empty() {
        return Some(0);
    }

    let mut value = if maximizing { Score::MIN } else { Score::MAX };
    for (_, child) in transitions {
        *nodes += 1;
        let score = alpha_beta(game, &child, depth - 1, alpha, beta, !maximizing, nodes, clock)?;

        if maximizing {
            value = value.max(score);
            alpha = alpha.max(value);
        } else {
            value = value.min(score);
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    Some(value)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

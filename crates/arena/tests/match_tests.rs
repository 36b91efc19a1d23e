//! End-to-end matches with the built-in agents
//!
//! These tests exercise the full loop:
//! - Search against search on the standard 6x8 board
//! - Search against random under a tight clock
//! - A budget-ignoring agent being forfeited

use alphabeta_engine::AlphaBetaAgent;
use arena::{MatchConfig, MatchRunner, MoveLog, Outcome};
use game_core::{Agent, AgentError, Connect4, Connect4State, Decision, Game, Side};
use random_engine::RandomAgent;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

fn temp_log(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("arena-e2e-{}-{}.json", name, std::process::id()))
}

#[test]
fn test_search_self_play_standard_board() {
    let game = Connect4::default();
    let path = temp_log("self-play");
    let runner = MatchRunner::new(
        game,
        MatchConfig {
            time_per_move: 0.2,
            verbose: false,
            move_log: Some(path.clone()),
        },
    );
    let mut x = AlphaBetaAgent::new();
    let mut o = AlphaBetaAgent::new();

    let result = runner.run(game.initial_state(), &mut x, &mut o).unwrap();

    assert!(!result.outcome.is_forfeit(), "search agents stay within budget");
    assert!(result.half_moves() <= game.rows * game.columns);

    // One log entry per applied half-move, on disk as well as in memory.
    let on_disk = MoveLog::load(&path).unwrap();
    assert_eq!(on_disk, result.log);
    let markers = result.state.count(Side::Max) + result.state.count(Side::Min);
    assert_eq!(on_disk.moves.len(), markers);

    // `win` agrees with the final board.
    let score = game.goal(&result.state).unwrap();
    assert_eq!(on_disk.win, Some(score > 0));
    assert_eq!(Outcome::from_score(score), result.outcome);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_search_fallback_is_not_forfeited() {
    let game = Connect4::default();
    let runner = MatchRunner::new(
        game,
        MatchConfig {
            time_per_move: 0.05,
            ..Default::default()
        },
    );
    let mut search = AlphaBetaAgent::new();
    let mut random = RandomAgent::new();

    let result = runner.run(game.initial_state(), &mut search, &mut random).unwrap();

    assert_ne!(result.outcome, Outcome::ForfeitMax);
    assert!(result.log.moves.iter().any(|m| m.message.is_some()));
}

/// Ignores its budget entirely.
struct Stubborn;

impl Agent<Connect4> for Stubborn {
    fn decide(
        &mut self,
        game: &Connect4,
        state: &Connect4State,
        _side: Side,
        budget: Duration,
    ) -> Result<Decision<usize>, AgentError> {
        thread::sleep(Duration::from_millis(100).max(budget * 3));
        Ok(Decision::new(game.actions(state)[0]))
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

#[test]
fn test_budget_ignoring_agent_is_forfeited() {
    let game = Connect4::default();
    let runner = MatchRunner::new(
        game,
        MatchConfig {
            time_per_move: 0.05,
            ..Default::default()
        },
    );
    let mut search = AlphaBetaAgent::new();
    let mut stubborn = Stubborn;

    let result = runner.run(game.initial_state(), &mut search, &mut stubborn).unwrap();

    assert_eq!(result.outcome, Outcome::ForfeitMin);
    assert_eq!(result.log.win, Some(true));
    assert_eq!(result.half_moves(), 1);
}

#[test]
fn test_search_never_does_worse_than_game_value() {
    // 3x4, three in a row: fully searchable in well under the cap.
    let game = Connect4::new(3, 4, 3);
    let budget = Duration::from_secs(30);
    let value = AlphaBetaAgent::new()
        .decide(&game, &game.initial_state(), Side::Max, budget)
        .unwrap()
        .score
        .unwrap();
    let runner = MatchRunner::new(
        game,
        MatchConfig {
            time_per_move: budget.as_secs_f64(),
            ..Default::default()
        },
    );

    for _ in 0..3 {
        let mut search = AlphaBetaAgent::new();
        let mut random = RandomAgent::new();
        let result = runner.run(game.initial_state(), &mut search, &mut random).unwrap();
        assert!(!result.outcome.is_forfeit());
        assert!(result.score.unwrap() >= value);
    }
}

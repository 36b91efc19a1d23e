//! Match runner for playing timed games between agents

use game_core::{Agent, AgentError, Game, Score, Side, TimeBank};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::MatchError;
use crate::move_log::{MoveLog, MoveLogWriter, MoveRecord};

/// Default seconds allotted per move
pub const DEFAULT_TIME_PER_MOVE: f64 = 5.0;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Seconds allotted per move; also the most a bank can hold
    pub time_per_move: f64,
    /// Print the board and timings after every half-move
    pub verbose: bool,
    /// Where to mirror the move log (None = no file activity)
    pub move_log: Option<PathBuf>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_per_move: DEFAULT_TIME_PER_MOVE,
            verbose: false,
            move_log: None,
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MaxWins,
    MinWins,
    Draw,
    /// Max ran out of time; Min wins
    ForfeitMax,
    /// Min ran out of time; Max wins
    ForfeitMin,
}

impl Outcome {
    /// Outcome for a decided goal score.
    pub fn from_score(score: Score) -> Self {
        match score {
            s if s > 0 => Outcome::MaxWins,
            s if s < 0 => Outcome::MinWins,
            _ => Outcome::Draw,
        }
    }

    /// Outcome when `side` forfeits on time.
    pub fn forfeit(side: Side) -> Self {
        match side {
            Side::Max => Outcome::ForfeitMax,
            Side::Min => Outcome::ForfeitMin,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::MaxWins | Outcome::ForfeitMin => Some(Side::Max),
            Outcome::MinWins | Outcome::ForfeitMax => Some(Side::Min),
            Outcome::Draw => None,
        }
    }

    pub fn is_forfeit(self) -> bool {
        matches!(self, Outcome::ForfeitMax | Outcome::ForfeitMin)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::MaxWins => write!(f, "Player {} won", Side::Max),
            Outcome::MinWins => write!(f, "Player {} won", Side::Min),
            Outcome::Draw => f.write_str("Draw"),
            Outcome::ForfeitMax => write!(
                f,
                "Player {} ran out of time, player {} won",
                Side::Max,
                Side::Min
            ),
            Outcome::ForfeitMin => write!(
                f,
                "Player {} ran out of time, player {} won",
                Side::Min,
                Side::Max
            ),
        }
    }
}

/// Everything a finished match produced.
#[derive(Debug, Clone)]
pub struct MatchResult<S> {
    pub outcome: Outcome,
    /// Last position reached; a forfeited move is not applied
    pub state: S,
    /// Goal score of `state`, None when the match ended by forfeit
    pub score: Option<Score>,
    pub log: MoveLog,
}

impl<S> MatchResult<S> {
    /// Number of half-moves applied.
    pub fn half_moves(&self) -> usize {
        self.log.moves.len()
    }

    pub fn summary(&self) -> String {
        format!("{} after {} half-moves", self.outcome, self.half_moves())
    }
}

/// Runs a timed match between two agents
pub struct MatchRunner<G: Game> {
    game: G,
    config: MatchConfig,
}

impl<G: Game> MatchRunner<G> {
    pub fn new(game: G, config: MatchConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    fn announce(&self, text: impl fmt::Display) {
        if self.config.verbose {
            println!("{text}");
        }
    }

    /// Play one match from `initial`, Max moving first.
    ///
    /// Each side's bank starts at the per-move cap and is charged once per
    /// move attempt. A side whose bank drops below half the cap forfeits
    /// and its pending action is discarded.
    ///
    /// # Errors
    /// An agent failure (including an illegal action) or a move log write
    /// failure aborts the match; no outcome is produced.
    pub fn run(
        &self,
        initial: G::State,
        agent_max: &mut dyn Agent<G>,
        agent_min: &mut dyn Agent<G>,
    ) -> Result<MatchResult<G::State>, MatchError> {
        let cap = self.config.time_per_move;
        let mut banks = [TimeBank::new(cap), TimeBank::new(cap)];
        let mut log = MoveLogWriter::create(self.config.move_log.as_deref())?;
        let mut state = initial;
        let mut side = Side::Max;

        agent_max.new_match();
        agent_min.new_match();
        info!(
            max = agent_max.name(),
            min = agent_min.name(),
            time_per_move = cap,
            "match started"
        );
        self.announce(&state);

        let mut agents: [&mut dyn Agent<G>; 2] = [agent_max, agent_min];

        let (outcome, score) = loop {
            // A decided position is never handed to an agent.
            if let Some(score) = self.game.goal(&state) {
                break (Outcome::from_score(score), Some(score));
            }

            let agent = &mut *agents[side.idx()];
            let bank = &mut banks[side.idx()];
            self.announce(format_args!(
                "Player {side} has {:.1} sec. to decide",
                bank.remaining()
            ));

            let start = Instant::now();
            let decision = agent
                .decide(&self.game, &state.clone(), side, bank.allotted())
                .map_err(|source| MatchError::Agent {
                    side,
                    agent: agent.name().to_string(),
                    source,
                })?;
            let used = start.elapsed().as_secs_f64();

            let remaining = bank.charge(used);
            if bank.is_forfeit() {
                warn!(%side, used, remaining, "time bank exhausted, forfeit");
                self.announce(format_args!("Player {side} took too long: {used:.3} sec."));
                break (Outcome::forfeit(side), None);
            }

            let Some(next) = self.game.apply(&state, &decision.action) else {
                return Err(MatchError::Agent {
                    side,
                    agent: agent.name().to_string(),
                    source: AgentError::IllegalAction(decision.action.to_string()),
                });
            };
            state = next;

            self.announce(format_args!("{side}: {used:.3} sec."));
            self.announce(&state);
            log.push(MoveRecord::new(
                self.game.placement(&state, &decision.action),
                used,
                decision.message(),
            ))?;

            side = side.other();
        };

        log.finish(outcome.winner() == Some(Side::Max))?;
        info!(%outcome, half_moves = log.log().moves.len(), "match finished");
        self.announce(outcome);

        Ok(MatchResult {
            outcome,
            state,
            score,
            log: log.into_log(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

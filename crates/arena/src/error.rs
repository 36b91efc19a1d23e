use std::path::PathBuf;

use game_core::{AgentError, Side};
use thiserror::Error;

/// A match that could not be played to an outcome.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("player {side} ({agent}) failed: {source}")]
    Agent {
        side: Side,
        agent: String,
        #[source]
        source: AgentError,
    },

    #[error("failed to write move log {}: {source}", .path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Arena configuration that cannot be used to start a match.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown agent `{0}`: expected human, random, alphabeta or a path to an executable")]
    UnknownAgent(String),

    #[error("agent file {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("time per move must be a positive number of seconds, got {0}")]
    InvalidTime(f64),

    #[error("invalid board {rows}x{columns} with {connect} in a row")]
    InvalidBoard {
        rows: usize,
        columns: usize,
        connect: usize,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Arena configuration: which agents play, on what board, under what clock.
//!
//! A configuration can come from a TOML file, command-line flags, or both
//! (flags win). Example file:
//!
//! ```toml
//! first_agent = "alphabeta"
//! second_agent = "./agents/my_agent"
//! time_per_move = 2.5
//! verbose = true
//! move_log = "match.json"
//!
//! rows = 6
//! columns = 8
//! connect = 4
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use game_core::{Connect4, DEFAULT_COLUMNS, DEFAULT_CONNECT, DEFAULT_ROWS};

use crate::error::ConfigError;
use crate::match_runner::{MatchConfig, DEFAULT_TIME_PER_MOVE};

/// Which decision procedure plays a side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum AgentSpec {
    /// Moves typed at the terminal
    Human,
    /// Uniform random legal moves
    Random,
    /// Built-in time-bounded alpha-beta search
    AlphaBeta,
    /// Executable speaking the external agent line protocol
    External(PathBuf),
}

impl AgentSpec {
    pub fn is_human(&self) -> bool {
        matches!(self, AgentSpec::Human)
    }

    /// Checks that an external agent points at an existing file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            AgentSpec::External(path) if !path.is_file() => {
                Err(ConfigError::MissingFile(path.clone()))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for AgentSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "humain" => Ok(AgentSpec::Human),
            "random" | "aleatoire" => Ok(AgentSpec::Random),
            "alphabeta" | "alpha-beta" | "search" => Ok(AgentSpec::AlphaBeta),
            _ if looks_like_path(s) => Ok(AgentSpec::External(PathBuf::from(s.trim()))),
            _ => Err(ConfigError::UnknownAgent(s.to_string())),
        }
    }
}

impl TryFrom<String> for AgentSpec {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AgentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentSpec::Human => f.write_str("human"),
            AgentSpec::Random => f.write_str("random"),
            AgentSpec::AlphaBeta => f.write_str("alphabeta"),
            AgentSpec::External(path) => write!(f, "{}", path.display()),
        }
    }
}

fn looks_like_path(s: &str) -> bool {
    s.contains('/') || s.contains('\\') || s.contains('.') || Path::new(s.trim()).exists()
}

/// Complete arena configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    pub first_agent: AgentSpec,
    pub second_agent: AgentSpec,
    /// Seconds allotted per move
    pub time_per_move: f64,
    pub verbose: bool,
    /// JSON move log destination
    pub move_log: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
    pub connect: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            first_agent: AgentSpec::AlphaBeta,
            second_agent: AgentSpec::AlphaBeta,
            time_per_move: DEFAULT_TIME_PER_MOVE,
            verbose: false,
            move_log: None,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            connect: DEFAULT_CONNECT,
        }
    }
}

impl ArenaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reject anything that would stop a match from starting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_per_move.is_finite() && self.time_per_move > 0.0) {
            return Err(ConfigError::InvalidTime(self.time_per_move));
        }
        if self.rows == 0
            || self.columns == 0
            || self.connect == 0
            || self.connect > self.rows.max(self.columns)
        {
            return Err(ConfigError::InvalidBoard {
                rows: self.rows,
                columns: self.columns,
                connect: self.connect,
            });
        }
        self.first_agent.validate()?;
        self.second_agent.validate()
    }

    pub fn game(&self) -> Connect4 {
        Connect4::new(self.rows, self.columns, self.connect)
    }

    /// Match settings; a human player always gets the board printed.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            time_per_move: self.time_per_move,
            verbose: self.verbose || self.first_agent.is_human() || self.second_agent.is_human(),
            move_log: self.move_log.clone(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

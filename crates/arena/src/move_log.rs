//! Move log storage

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use game_core::Placement;

use crate::error::MatchError;

/// One applied half-move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub column: usize,
    pub row: usize,
    /// Seconds the mover spent, rounded to one decimal
    pub time: f64,
    pub message: Option<String>,
}

impl MoveRecord {
    pub fn new(placement: Placement, seconds: f64, message: Option<String>) -> Self {
        Self {
            column: placement.column,
            row: placement.row,
            time: (seconds * 10.0).round() / 10.0,
            message,
        }
    }
}

/// Complete record of a match as written to disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveLog {
    pub moves: Vec<MoveRecord>,
    /// Set once the match concludes: true iff the first mover won
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win: Option<bool>,
}

impl MoveLog {
    /// Save the log to a JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Load a log from a JSON file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Append-only log that mirrors itself to disk after every change when a
/// path is configured. Without a path no file is touched.
#[derive(Debug, Default)]
pub struct MoveLogWriter {
    path: Option<PathBuf>,
    log: MoveLog,
}

impl MoveLogWriter {
    /// Start an empty log, truncating the file if there is one.
    pub fn create(path: Option<&Path>) -> Result<Self, MatchError> {
        let writer = Self {
            path: path.map(Path::to_path_buf),
            log: MoveLog::default(),
        };
        writer.flush()?;
        Ok(writer)
    }

    pub fn push(&mut self, record: MoveRecord) -> Result<(), MatchError> {
        self.log.moves.push(record);
        self.flush()
    }

    /// Mark the match as concluded.
    pub fn finish(&mut self, first_mover_won: bool) -> Result<(), MatchError> {
        self.log.win = Some(first_mover_won);
        self.flush()
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn into_log(self) -> MoveLog {
        self.log
    }

    fn flush(&self) -> Result<(), MatchError> {
        match &self.path {
            Some(path) => self.log.save(path).map_err(|source| MatchError::Log {
                path: path.clone(),
                source,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "move_log_tests.rs"]
mod move_log_tests;

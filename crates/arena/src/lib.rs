//! Timed match arena
//!
//! This crate provides infrastructure for:
//! - Running a match between two agents under a per-move time bank
//! - Forfeiting agents that overrun their bank
//! - Recording every applied move to a JSON log
//!
//! # Usage
//!
//! ```bash
//! # Search agent against a random mover, 2 seconds per move
//! cargo run -p arena -- --player1 alphabeta --player2 random --time 2 -v
//!
//! # Play against the search agent yourself and keep a log
//! cargo run -p arena -- --player1 human --json match.json
//! ```

mod config;
mod error;
mod match_runner;
mod move_log;
mod registry;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use move_log::*;
pub use registry::*;

//! Arena CLI
//!
//! Play one timed Connect Four match between two agents.

use anyhow::Context;
use arena::{build_agent, AgentSpec, ArenaConfig, MatchRunner};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use game_core::{Agent, Connect4, Game};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Play a timed Connect Four match between two agents.")]
struct Cli {
    /// TOML file with default settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// First player (X): human, random, alphabeta or a path to an agent executable
    #[arg(long = "player1", value_name = "AGENT")]
    player1: Option<String>,

    /// Second player (O): human, random, alphabeta or a path to an agent executable
    #[arg(long = "player2", value_name = "AGENT")]
    player2: Option<String>,

    /// Seconds available to play a move
    #[arg(long, value_name = "SECONDS")]
    time: Option<f64>,

    /// Print the board after every move
    #[arg(short, long)]
    verbose: bool,

    /// JSON file to record the moves of the match
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

impl Cli {
    fn resolve(&self) -> Result<ArenaConfig, arena::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ArenaConfig::load(path)?,
            None => ArenaConfig::default(),
        };
        if let Some(selector) = &self.player1 {
            config.first_agent = selector.parse::<AgentSpec>()?;
        }
        if let Some(selector) = &self.player2 {
            config.second_agent = selector.parse::<AgentSpec>()?;
        }
        if let Some(time) = self.time {
            config.time_per_move = time;
        }
        if self.json.is_some() {
            config.move_log = self.json.clone();
        }
        config.verbose |= self.verbose;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::InvalidValue, e).exit(),
    };

    let game: Connect4 = config.game();
    let mut first: Box<dyn Agent<Connect4>> = build_agent(&config.first_agent);
    let mut second: Box<dyn Agent<Connect4>> = build_agent(&config.second_agent);

    let runner = MatchRunner::new(game, config.match_config());
    let result = runner
        .run(game.initial_state(), first.as_mut(), second.as_mut())
        .context("match aborted")?;

    println!("{}", result.summary());
    if let Some(path) = &config.move_log {
        println!("Move log written to {}", path.display());
    }
    Ok(())
}

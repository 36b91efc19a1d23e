//! External Agent
//!
//! Runs decision logic that is not known at build time behind a process
//! boundary. The executable is started once per agent and talks a line
//! protocol over its standard streams, one exchange per move:
//!
//! ```text
//! -> {"side":"X","time_budget":5.0,"board":"| | ...","actions":["0","1","2"]}
//! <- 1
//! ```
//!
//! The reply is either a bare action or a JSON object `{"action": ...}`.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;

use game_core::{Agent, AgentError, Decision, Game, Side};
use serde::Serialize;
use tracing::{debug, warn};

#[cfg(test)]
mod lib_tests;

/// One request line sent to the child process.
#[derive(Debug, Serialize)]
pub struct Request {
    pub side: &'static str,
    /// Seconds the side currently has in its bank
    pub time_budget: f64,
    /// Human-readable rendering of the position
    pub board: String,
    /// Legal actions in natural order
    pub actions: Vec<String>,
}

impl Request {
    pub fn new<G: Game>(game: &G, state: &G::State, side: Side, budget: Duration) -> Self {
        Self {
            side: side.label(),
            time_budget: budget.as_secs_f64(),
            board: state.to_string(),
            actions: game.actions(state).iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Extracts the action text from a reply line.
fn reply_action(line: &str) -> Result<String, AgentError> {
    let line = line.trim();
    if !line.starts_with('{') {
        return Ok(line.to_string());
    }
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|e| AgentError::Protocol(e.to_string()))?;
    match value.get("action") {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        _ => Err(AgentError::Protocol(format!("reply has no action: {line}"))),
    }
}

struct Session {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

/// Agent backed by an external executable.
pub struct ExternalAgent {
    program: PathBuf,
    args: Vec<String>,
    name: String,
    session: Option<Session>,
}

impl ExternalAgent {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self::with_args(program, Vec::<String>::new())
    }

    /// An agent launched as `program args...`.
    pub fn with_args<I, S>(program: impl AsRef<Path>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let program = program.as_ref().to_path_buf();
        let name = format!("External-{}", program.display());
        Self {
            program,
            args: args.into_iter().map(Into::into).collect(),
            name,
            session: None,
        }
    }

    fn session(&mut self) -> Result<&mut Session, AgentError> {
        if self.session.is_none() {
            self.session = Some(self.spawn()?);
        }
        self.session
            .as_mut()
            .ok_or_else(|| AgentError::Protocol("agent process unavailable".to_string()))
    }

    fn spawn(&self) -> Result<Session, AgentError> {
        let spawn_error = |source: std::io::Error| AgentError::Spawn {
            program: self.program.display().to_string(),
            source,
        };
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| AgentError::Protocol("child stdin not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AgentError::Protocol("child stdout not captured".to_string()))?;

        debug!(program = %self.program.display(), pid = child.id(), "external agent started");
        Ok(Session {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl<G: Game> Agent<G> for ExternalAgent {
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        side: Side,
        budget: Duration,
    ) -> Result<Decision<G::Action>, AgentError> {
        let request = Request::new(game, state, side, budget);
        if request.actions.is_empty() {
            return Err(AgentError::NoLegalActions);
        }
        let line =
            serde_json::to_string(&request).map_err(|e| AgentError::Protocol(e.to_string()))?;

        let session = self.session()?;
        writeln!(session.stdin, "{line}")?;
        session.stdin.flush()?;

        let mut reply = String::new();
        if session.stdout.read_line(&mut reply)? == 0 {
            return Err(AgentError::Protocol("agent closed its output".to_string()));
        }

        let text = reply_action(&reply)?;
        let action = text
            .parse::<G::Action>()
            .map_err(|_| AgentError::IllegalAction(text.clone()))?;
        if !game.actions(state).contains(&action) {
            return Err(AgentError::IllegalAction(text));
        }
        Ok(Decision::new(action))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ExternalAgent {
    fn drop(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Err(e) = session.child.kill() {
                warn!(error = %e, "failed to stop external agent");
            }
            let _ = session.child.wait();
        }
    }
}

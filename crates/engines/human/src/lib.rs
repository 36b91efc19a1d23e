//! Interactive Agent
//!
//! Reads moves from a human over a text channel. The operator is expected to
//! answer within the allotted time; the arena judges late answers the same
//! way it judges a slow engine.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::time::Duration;

use game_core::{Agent, AgentError, Decision, Game, Side};
use tracing::warn;


/// Agent that prompts on `output` and reads an action per line from `input`.
///
/// Unparsable or illegal entries are answered with a new prompt; only a
/// closed input channel ends the loop with an error.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<BufReader<Stdin>, Stdout> {
    /// An agent wired to the process's terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hands back the output channel, e.g. to inspect prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, AgentError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AgentError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<G, R, W> Agent<G> for HumanAgent<R, W>
where
    G: Game,
    R: BufRead,
    W: Write,
{
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        side: Side,
        budget: Duration,
    ) -> Result<Decision<G::Action>, AgentError> {
        let actions = game.actions(state);
        if actions.is_empty() {
            return Err(AgentError::NoLegalActions);
        }

        let listed: Vec<String> = actions.iter().map(|a| a.to_string()).collect();
        writeln!(
            self.output,
            "Player {side} has {:.1} sec. Enter an action and press Enter.\nChoose from: {{{}}}",
            budget.as_secs_f64(),
            listed.join("; ")
        )?;
        self.output.flush()?;

        loop {
            let entry = self.read_line()?;
            match entry.parse::<G::Action>() {
                Ok(action) if actions.contains(&action) => return Ok(Decision::new(action)),
                Ok(_) => {
                    warn!(%entry, "illegal action entered");
                    writeln!(self.output, "That action is not legal. Try again, then press Enter.")?;
                }
                Err(_) => {
                    warn!(%entry, "unparsable action entered");
                    writeln!(self.output, "That is not a valid action. Enter a number, then press Enter.")?;
                }
            }
            self.output.flush()?;
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

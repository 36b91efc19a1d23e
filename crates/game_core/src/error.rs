use thiserror::Error;

/// Failure of an agent's decision procedure. Fatal to the match in progress.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no legal actions in this position")]
    NoLegalActions,

    #[error("agent chose illegal action `{0}`")]
    IllegalAction(String),

    #[error("input channel closed before a move was entered")]
    InputClosed,

    #[error("failed to launch agent `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("agent protocol error: {0}")]
    Protocol(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

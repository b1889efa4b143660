use thiserror::Error;

use crate::llm::LlmError;

/// Errors raised while advancing a conversation
#[derive(Error, Debug)]
pub enum SessionError {
    /// The remote endpoint failed or answered without a usable message.
    /// `round` is 1-based.
    #[error("Round {round} failed: {source}")]
    RemoteCallFailed {
        round: usize,
        #[source]
        source: LlmError,
    },

    #[error("User text must not be empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, SessionError>;

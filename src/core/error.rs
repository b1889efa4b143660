use thiserror::Error;

/// Application error type that aggregates the domain-specific errors
#[derive(Error, Debug)]
pub enum SeekError {
    /// Configuration layer errors
    #[error(transparent)]
    Config(#[from] crate::config::error::ConfigError),

    /// LLM layer errors
    #[error(transparent)]
    Llm(#[from] crate::llm::error::LlmError),

    /// Conversation errors
    #[error(transparent)]
    Session(#[from] crate::session::error::SessionError),

    /// A demo failed part way through
    #[error("Failed to perform {demo}: {source}")]
    Demo {
        demo: &'static str,
        #[source]
        source: Box<SeekError>,
    },
}

/// Result type alias for seekchat operations
pub type Result<T> = std::result::Result<T, SeekError>;

impl SeekError {
    /// Attach the name of the demo that was running
    pub fn in_demo(demo: &'static str, err: impl Into<SeekError>) -> Self {
        SeekError::Demo {
            demo,
            source: Box::new(err.into()),
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingEnv(String),

    #[error("Failed to read API key file {}: {source}", .path.display())]
    SecretUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "API key is not defined. Please check your environment variables or secrets file: {}",
        .0.display()
    )]
    EmptyApiKey(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read configuration file: {0}")]
    ReadFailed(String),

    #[error("Failed to parse TOML: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

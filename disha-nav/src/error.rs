//! Error types for DishaNav

use thiserror::Error;

/// DishaNav error type
#[derive(Error, Debug)]
pub enum DishaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown point of interest: {0}")]
    UnknownPoi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DishaError {
    fn from(e: toml::de::Error) -> Self {
        DishaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DishaError>;

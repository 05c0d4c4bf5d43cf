//! Error types for DhuliSim

use thiserror::Error;

/// DhuliSim error type
#[derive(Error, Debug)]
pub enum DhuliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid grid: {0}")]
    Grid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DhuliError {
    fn from(e: toml::de::Error) -> Self {
        DhuliError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DhuliError>;

// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The binary-acquisition collaborator could not provide an executable.
    #[error("Failed to acquire executable: {0:#}")]
    Acquisition(anyhow::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The test host exited with a non-zero or unknown exit code.
    ///
    /// Carries no exit code.
    #[error("Failed")]
    TestsFailed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
